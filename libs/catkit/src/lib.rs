//! Catkit: the module kit the cats runtime is assembled from.
//!
//! What lives here:
//! - `Module` lifecycle contract driven by a host
//! - `ClientHub` for type-safe inter-module APIs
//! - `ModuleCtx` / `ModuleContextBuilder` giving each module scoped access
//!   to configuration and the hub
//! - `ModuleRegistry` holding the frozen module set
//! - config providers and typed section loaders
//! - process-wide tracing setup
//!
//! ## Usage
//!
//! Hosts assemble the pieces and drive the lifecycle:
//! ```ignore
//! let hub = Arc::new(ClientHub::new());
//! let mut builder = RegistryBuilder::default();
//! builder.register_core("model", model);
//!
//! let registry = builder.build()?;
//! let ctx_builder = ModuleContextBuilder::new(config_provider, hub);
//!
//! for entry in registry.modules() {
//!     let ctx = ctx_builder.for_module(entry.name);
//!     entry.core.init(&ctx)?;
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client_hub;
pub mod config;
pub mod context;
pub mod contracts;
pub mod registry;
pub mod telemetry;

// Re-export main types at crate root for convenience
pub use client_hub::{ClientHub, ClientHubError};
pub use config::{ConfigError, ConfigProvider, StaticConfigProvider};
pub use context::{ModuleContextBuilder, ModuleCtx};
pub use contracts::Module;
pub use registry::{ModuleEntry, ModuleRegistry, RegistryBuilder, RegistryError};
pub use telemetry::init_tracing;
