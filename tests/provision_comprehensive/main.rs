//! Provision Comprehensive Test Suite
//!
//! Exercises the public `svcat` API across crate boundaries.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Input validation properties
//! - **Tier 2**: Dispatcher and collaborator behavior
//! - **Tier 3**: End-to-end command scenarios
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test provision_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Input Validation
mod tier1_validation_properties;


// Tier 3: End-to-end Scenarios
mod tier3_scenarios;
