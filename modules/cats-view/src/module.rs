//! Module declaration for the view module.

use std::sync::Arc;

use catkit::{ClientHub, ClientHubError, Module, ModuleCtx};
use cats_model_sdk::{Cat, CatModelApi};
use tracing::debug;

/// View module.
///
/// Holds the client hub handed over at construction and reads the model's
/// `CatModelApi` through it. The model client is resolved on every render,
/// so re-registrations take effect immediately.
pub struct ViewModule {
    hub: Arc<ClientHub>,
}

impl ViewModule {
    pub fn new(hub: Arc<ClientHub>) -> Self {
        Self { hub }
    }

    /// Render the current cat.
    ///
    /// Resolves the model API from the hub and returns the value produced by
    /// `get_cat()`.
    ///
    /// # Errors
    /// Returns `ClientHubError::MissingDependency` when no model module has
    /// registered its API.
    pub fn render(&self) -> Result<Cat, ClientHubError> {
        let model = self.hub.get::<dyn CatModelApi>()?;
        let cat = model.get_cat();
        debug!(cat = %cat.name, "Rendered current cat");
        Ok(cat)
    }
}

impl Module for ViewModule {
    /// Lifecycle hook kept for symmetry with the other modules; the view has
    /// nothing to set up and touches neither the hub nor its config section.
    fn init(&self, _ctx: &ModuleCtx) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use catkit::StaticConfigProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedCatModel {
        name: &'static str,
        get_cat_calls: AtomicUsize,
    }

    impl FixedCatModel {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                get_cat_calls: AtomicUsize::new(0),
            }
        }
    }

    impl CatModelApi for FixedCatModel {
        fn get_cat(&self) -> Cat {
            self.get_cat_calls.fetch_add(1, Ordering::SeqCst);
            Cat::new(self.name)
        }
    }

    fn ctx_for(hub: &Arc<ClientHub>) -> ModuleCtx {
        ModuleCtx::new(
            crate::MODULE_NAME,
            Arc::new(StaticConfigProvider::default()),
            hub.clone(),
        )
    }

    #[test]
    fn render_invokes_the_model_and_returns_its_cat() {
        let hub = Arc::new(ClientHub::new());
        let model = Arc::new(FixedCatModel::new("Whiskers"));
        hub.register::<dyn CatModelApi>(model.clone());

        let view = ViewModule::new(hub);
        let cat = view.render().unwrap();

        assert_eq!(cat, Cat::new("Whiskers"), "Render should return the value");
        assert_eq!(
            model.get_cat_calls.load(Ordering::SeqCst),
            1,
            "Render should call get_cat exactly once"
        );
    }

    #[test]
    fn render_resolves_the_model_on_every_call() {
        let hub = Arc::new(ClientHub::new());
        hub.register::<dyn CatModelApi>(Arc::new(FixedCatModel::new("Whiskers")));

        let view = ViewModule::new(hub.clone());
        assert_eq!(view.render().unwrap().name, "Whiskers");

        // Swapping the model behind the hub is picked up by the next render
        hub.register::<dyn CatModelApi>(Arc::new(FixedCatModel::new("Mittens")));
        assert_eq!(view.render().unwrap().name, "Mittens");
    }

    #[test]
    fn init_has_no_observable_effect() {
        let hub = Arc::new(ClientHub::new());
        let model = Arc::new(FixedCatModel::new("Whiskers"));
        hub.register::<dyn CatModelApi>(model.clone());

        let view = ViewModule::new(hub.clone());
        let ctx = ctx_for(&hub);

        view.init(&ctx).unwrap();
        view.init(&ctx).unwrap();

        assert_eq!(hub.len(), 1, "Init must not register anything");
        assert_eq!(
            model.get_cat_calls.load(Ordering::SeqCst),
            0,
            "Init must not touch the model"
        );
    }

    #[test]
    fn render_without_model_reports_missing_dependency() {
        let hub = Arc::new(ClientHub::new());
        let view = ViewModule::new(hub);

        let err = view.render().unwrap_err();
        assert!(matches!(err, ClientHubError::MissingDependency { .. }));
        assert!(
            err.to_string().contains("CatModelApi"),
            "Error should name the missing interface, got: {err}"
        );
    }
}
