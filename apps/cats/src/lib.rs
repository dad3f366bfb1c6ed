//! Cats application.
//!
//! Composition root for the cats module tree: assembles the client hub, the
//! module registry and the view module, and drives the init lifecycle over an
//! injected model module.
//!
//! The model implementation is external. Hosts inject it through the builder;
//! without one the application still assembles, and initialization reports the
//! missing dependency instead of silently doing nothing:
//!
//! ```
//! use cats::CatsApp;
//!
//! let app = CatsApp::builder().build().expect("no duplicate modules");
//! assert!(app.init_module().is_err());
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod app;

pub use app::{CatsApp, CatsAppBuilder, MODULE_NAME};
