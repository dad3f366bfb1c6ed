//! Per-module configuration access.
//!
//! A [`ConfigProvider`] hands out raw per-module JSON sections shaped as
//! `modules.<name> = { config: ... }`. Two typed loaders sit on top:
//!
//! - [`module_config_or_default`] is lenient. A missing module entry, a
//!   non-object entry or an absent `config` section all fall back to
//!   `T::default()`; only a section that fails to deserialize is an error.
//! - [`module_config_required`] is strict. The entry and its `config`
//!   section must be present, well-shaped and deserializable.
//!
//! [`StaticConfigProvider`] is the in-memory implementation for hosts that
//! assemble their config programmatically, and for tests.

use serde::de::DeserializeOwned;

/// Errors from the typed config loaders.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("no config entry for module '{module}'")]
    ModuleNotFound { module: String },
    #[error("config entry for module '{module}' must be an object")]
    InvalidModuleStructure { module: String },
    #[error("module '{module}' has no 'config' section")]
    MissingConfigSection { module: String },
    #[error("module '{module}' config did not deserialize: {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of raw per-module JSON sections.
pub trait ConfigProvider: Send + Sync {
    /// The raw entry stored under `modules.<module_name>`, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

/// In-memory provider holding the `modules` table of an already-parsed
/// config document.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    modules: serde_json::Map<String, serde_json::Value>,
}

impl StaticConfigProvider {
    pub fn new(modules: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { modules }
    }

    /// Build a provider from a whole parsed config document.
    ///
    /// Reads the top-level `modules` object; a document without one yields an
    /// empty provider.
    pub fn from_document(doc: &serde_json::Value) -> Self {
        let modules = doc
            .get("modules")
            .and_then(serde_json::Value::as_object)
            .cloned()
            .unwrap_or_default();
        Self { modules }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}

/// Load a module's typed config section, defaulting whenever it is absent.
///
/// Intended for modules that run fine without an explicit section. The only
/// failure is a `config` section that exists but does not deserialize into
/// `T`; everything short of that yields `T::default()`.
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` when the present section fails to
/// deserialize.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(module_raw) = provider.get_module_config(module_name) else {
        return Ok(T::default());
    };
    let Some(obj) = module_raw.as_object() else {
        return Ok(T::default());
    };
    let Some(config_section) = obj.get("config") else {
        return Ok(T::default());
    };

    serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}

/// Load a module's typed config section, insisting that it exists.
///
/// Intended for modules that cannot run on defaults. Each layer of the
/// `modules.<name> = { config: ... }` shape is validated and reported
/// separately.
///
/// # Errors
/// Returns `ConfigError::ModuleNotFound`, `InvalidModuleStructure`,
/// `MissingConfigSection` or `InvalidConfig` depending on which layer is
/// broken.
pub fn module_config_required<T: DeserializeOwned>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let module_raw =
        provider
            .get_module_config(module_name)
            .ok_or_else(|| ConfigError::ModuleNotFound {
                module: module_name.to_owned(),
            })?;

    let obj = module_raw
        .as_object()
        .ok_or_else(|| ConfigError::InvalidModuleStructure {
            module: module_name.to_owned(),
        })?;

    let config_section = obj
        .get("config")
        .ok_or_else(|| ConfigError::MissingConfigSection {
            module: module_name.to_owned(),
        })?;

    serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}
