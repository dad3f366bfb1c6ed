//! Cat Model SDK
//!
//! This crate provides the public API for the model module:
//! - `CatModelApi` trait for inter-module communication
//! - `Cat` model representing the cat surfaced to consumers
//!
//! ## Usage
//!
//! Consumers obtain the client from `ClientHub`:
//! ```ignore
//! use cats_model_sdk::CatModelApi;
//!
//! let model = hub.get::<dyn CatModelApi>()?;
//! let cat = model.get_cat();
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod models;

/// Canonical registry name of the model module.
pub const MODULE_NAME: &str = "model";

// Re-export main types at crate root for convenience
pub use api::CatModelApi;
pub use models::Cat;
