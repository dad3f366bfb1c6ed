//! Composition root for the cats module tree.

use std::sync::Arc;

use catkit::{
    ClientHub, ConfigProvider, Module, ModuleContextBuilder, ModuleCtx, ModuleRegistry,
    RegistryBuilder, RegistryError, StaticConfigProvider,
};
use cats_model_sdk::CatModelApi;
use cats_view::ViewModule;
use tracing::{debug, info};

/// Canonical registry name of the root module.
pub const MODULE_NAME: &str = "cats";

/// The assembled cats application.
///
/// Owns the client hub, the frozen module registry and the view module.
/// The model module is injected through [`CatsAppBuilder::with_model`]; the
/// application never constructs one itself.
///
/// `init_module` is the root lifecycle hook: it initializes the model module
/// (and only that module). Driving the view's lifecycle is left to whoever
/// embeds the application, via [`CatsApp::view`] and [`CatsApp::module_ctx`].
pub struct CatsApp {
    registry: ModuleRegistry,
    ctx_builder: ModuleContextBuilder,
    hub: Arc<ClientHub>,
    view: Arc<ViewModule>,
}

/// Builder assembling a [`CatsApp`].
pub struct CatsAppBuilder {
    config_provider: Arc<dyn ConfigProvider>,
    model: Option<(Arc<dyn Module>, Arc<dyn CatModelApi>)>,
}

impl Default for CatsAppBuilder {
    fn default() -> Self {
        Self {
            config_provider: Arc::new(StaticConfigProvider::default()),
            model: None,
        }
    }
}

impl CatsAppBuilder {
    /// Inject the external model module.
    ///
    /// The same object serves both roles the host needs from it: the `Module`
    /// lifecycle (driven by `init_module`) and the `CatModelApi` capability
    /// (published in the hub for consumers such as the view).
    pub fn with_model<M>(mut self, model: Arc<M>) -> Self
    where
        M: Module + CatModelApi,
    {
        let core: Arc<dyn Module> = model.clone();
        let api: Arc<dyn CatModelApi> = model;
        self.model = Some((core, api));
        self
    }

    /// Replace the default (empty) config provider.
    pub fn with_config_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.config_provider = provider;
        self
    }

    /// Assemble hub, registry and view.
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateModule` if the module set fails
    /// validation while freezing.
    pub fn build(self) -> Result<CatsApp, RegistryError> {
        let hub = Arc::new(ClientHub::new());
        let view = Arc::new(ViewModule::new(hub.clone()));

        let mut registry = RegistryBuilder::default();
        if let Some((core, api)) = self.model {
            hub.register::<dyn CatModelApi>(api);
            registry.register_core(cats_model_sdk::MODULE_NAME, core);
        }
        registry.register_core(cats_view::MODULE_NAME, view.clone());
        let registry = registry.build()?;

        let ctx_builder = ModuleContextBuilder::new(self.config_provider, hub.clone());

        debug!(modules = registry.len(), "Assembled cats application");
        Ok(CatsApp {
            registry,
            ctx_builder,
            hub,
            view,
        })
    }
}

impl CatsApp {
    pub fn builder() -> CatsAppBuilder {
        CatsAppBuilder::default()
    }

    /// Root lifecycle hook: initialize the model module.
    ///
    /// Delegates to the injected model's `init`, exactly once per call, with a
    /// context scoped to the model's name.
    ///
    /// # Errors
    /// Returns `RegistryError::MissingDependency` when no model module was
    /// injected, and `RegistryError::Init` when the model's own
    /// initialization fails.
    pub fn init_module(&self) -> Result<(), RegistryError> {
        info!("Phase: init");

        let Some(entry) = self.registry.get(cats_model_sdk::MODULE_NAME) else {
            return Err(RegistryError::MissingDependency {
                module: MODULE_NAME,
                requires: cats_model_sdk::MODULE_NAME,
            });
        };

        let ctx = self.ctx_builder.for_module(entry.name);
        debug!(module = entry.name, "Initializing module");
        entry.core.init(&ctx).map_err(|source| RegistryError::Init {
            module: entry.name,
            source,
        })?;

        info!(module = entry.name, "Module initialized");
        Ok(())
    }

    /// The view module instance. Every call returns the same object.
    pub fn view(&self) -> Arc<ViewModule> {
        self.view.clone()
    }

    /// The shared client hub.
    pub fn client_hub(&self) -> &Arc<ClientHub> {
        &self.hub
    }

    /// The frozen module registry.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Resolve an execution context for a module, e.g. to drive the view's
    /// lifecycle from the embedding host.
    pub fn module_ctx(&self, module_name: &str) -> ModuleCtx {
        self.ctx_builder.for_module(module_name)
    }
}
