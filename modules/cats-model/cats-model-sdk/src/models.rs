//! Public models for the model module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the model module and its consumers.

use serde::{Deserialize, Serialize};

/// A cat as surfaced to consumers.
///
/// The model implementation owns any richer internal representation; the
/// contract carries the fields consumers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
