//! `CatModelApi` trait definition.

use crate::models::Cat;

/// Public API trait for the model module.
///
/// This trait can be consumed by other modules via `ClientHub`:
/// ```ignore
/// let model = hub.get::<dyn CatModelApi>()?;
/// let cat = model.get_cat();
/// ```
pub trait CatModelApi: Send + Sync {
    /// Return the cat the model currently holds.
    ///
    /// Every call yields a fresh snapshot; callers must not assume two calls
    /// return the same value.
    fn get_cat(&self) -> Cat;
}
