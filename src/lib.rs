//! svcat: provision service catalog instances.
//!
//! Resolves `--param`, `--params-json` and `--secret` input into a single
//! [`ProvisionRequest`] and hands it to a [`Provisioner`].
//!
//! ```
//! use std::sync::Arc;
//! use svcat::{InMemoryProvisioner, ProvisionInput, Svcat};
//!
//! let svcat = Svcat::new(Arc::new(InMemoryProvisioner::new()));
//! let instance = svcat
//!     .provision(&ProvisionInput::new("myinst", "mysqldb", "free").param("location=eastus"))
//!     .unwrap();
//! assert_eq!(instance.status_summary(), "Provisioning");
//! ```

pub mod types;

pub use types::*;

pub use svcat_executor::{
    resolve_parameters, resolve_secrets, validate, Catalog, InMemoryProvisioner, ProvisionInput,
    Provisioner, Svcat,
};

/// Low-level parsers for individual flag values.
pub mod parse {
    pub use svcat_core::{parse_key_maps, parse_variable_assignments, parse_variable_json};
}
