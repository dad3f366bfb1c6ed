//! View Module Implementation
//!
//! Renders the cat currently exposed by the model module. The model is
//! consumed through its SDK trait via the client hub; this crate never links
//! against a concrete model implementation.

pub mod module;
pub use module::ViewModule;

/// Canonical registry name of the view module.
pub const MODULE_NAME: &str = "view";
