use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::client_hub::ClientHub;
use crate::config::{ConfigError, ConfigProvider, module_config_or_default};

/// Per-module execution context handed to `Module::init`.
///
/// Carries the module's name plus the host's shared config provider and
/// client hub. A module loads its typed config through [`ModuleCtx::config`]
/// and wires capabilities through [`ModuleCtx::client_hub`]:
///
/// ```ignore
/// fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
///     let cfg: ShelterConfig = ctx.config()?;
///     ctx.client_hub().register::<dyn ShelterApi>(Arc::new(Shelter::open(cfg)));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ModuleCtx {
    module_name: Arc<str>,
    config_provider: Arc<dyn ConfigProvider>,
    client_hub: Arc<ClientHub>,
}

/// Factory for creating per-module execution contexts.
///
/// Created by the host during composition with the shared singletons; before
/// each lifecycle call, resolve a context for the module at hand:
/// ```ignore
/// let builder = ModuleContextBuilder::new(config_provider, client_hub);
/// let ctx = builder.for_module("model");
/// module.init(&ctx)?;
/// ```
pub struct ModuleContextBuilder {
    config_provider: Arc<dyn ConfigProvider>,
    client_hub: Arc<ClientHub>,
}

impl ModuleContextBuilder {
    pub fn new(config_provider: Arc<dyn ConfigProvider>, client_hub: Arc<ClientHub>) -> Self {
        Self {
            config_provider,
            client_hub,
        }
    }

    /// Resolve a module-scoped context sharing the host's provider and hub.
    pub fn for_module(&self, module_name: &str) -> ModuleCtx {
        ModuleCtx::new(
            Arc::<str>::from(module_name),
            self.config_provider.clone(),
            self.client_hub.clone(),
        )
    }
}

impl ModuleCtx {
    pub fn new(
        module_name: impl Into<Arc<str>>,
        config_provider: Arc<dyn ConfigProvider>,
        client_hub: Arc<ClientHub>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            config_provider,
            client_hub,
        }
    }

    /// Name of the module this context is scoped to.
    #[inline]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The host's config provider, for callers needing sections other than
    /// their own.
    #[inline]
    pub fn config_provider(&self) -> &dyn ConfigProvider {
        &*self.config_provider
    }

    /// The shared client hub, for publishing this module's API and resolving
    /// the APIs of others.
    #[inline]
    pub fn client_hub(&self) -> &ClientHub {
        &self.client_hub
    }

    /// Load this module's `config` section into `T`, leniently.
    ///
    /// Follows [`module_config_or_default`]: an absent or shapeless entry
    /// yields `T::default()`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` when the section is present but
    /// fails to deserialize.
    pub fn config<T: DeserializeOwned + Default>(&self) -> Result<T, ConfigError> {
        module_config_or_default(self.config_provider.as_ref(), &self.module_name)
    }

    /// This module's `config` section as raw JSON, or an empty object when
    /// the module has none. For dynamic inspection; prefer the typed
    /// [`ModuleCtx::config`].
    pub fn raw_config(&self) -> &serde_json::Value {
        use std::sync::LazyLock;

        static EMPTY: LazyLock<serde_json::Value> =
            LazyLock::new(|| serde_json::Value::Object(serde_json::Map::new()));

        self.config_provider
            .get_module_config(&self.module_name)
            .and_then(serde_json::Value::as_object)
            .and_then(|entry| entry.get("config"))
            .unwrap_or(&EMPTY)
    }
}
