//! Command handlers.

pub mod provision;
