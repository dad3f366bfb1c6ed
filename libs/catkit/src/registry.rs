//! Static registry of host-assembled modules.
//!
//! The host queues modules in a [`RegistryBuilder`], freezes the set with
//! [`RegistryBuilder::build`], and then drives lifecycle phases over the
//! resulting [`ModuleRegistry`]. Iteration order is registration order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::contracts::Module;

/// One registered module: stable name plus its lifecycle object.
pub struct ModuleEntry {
    pub name: &'static str,
    pub core: Arc<dyn Module>,
}

/// Errors raised while assembling the module set or driving its lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("module '{module}' is registered twice")]
    DuplicateModule { module: &'static str },

    #[error("module '{module}' requires module '{requires}', which is not registered")]
    MissingDependency {
        module: &'static str,
        requires: &'static str,
    },

    #[error("init failed for module '{module}'")]
    Init {
        module: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// Collects module registrations before the set is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<ModuleEntry>,
}

impl RegistryBuilder {
    /// Queue a module under its canonical name.
    pub fn register_core(&mut self, name: &'static str, core: Arc<dyn Module>) {
        self.entries.push(ModuleEntry { name, core });
    }

    /// Freeze the set, validating name uniqueness.
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateModule` when two registrations share a name.
    pub fn build(self) -> Result<ModuleRegistry, RegistryError> {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (pos, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.name, pos).is_some() {
                return Err(RegistryError::DuplicateModule { module: entry.name });
            }
        }
        Ok(ModuleRegistry {
            entries: self.entries,
            index,
        })
    }
}

/// Frozen module set.
pub struct ModuleRegistry {
    entries: Vec<ModuleEntry>,
    index: HashMap<&'static str, usize>,
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field(
                "modules",
                &self.entries.iter().map(|entry| entry.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ModuleRegistry {
    /// All modules in registration order.
    pub fn modules(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Look up a module by name.
    pub fn get(&self, name: &str) -> Option<&ModuleEntry> {
        self.index.get(name).and_then(|&pos| self.entries.get(pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
