//! In-memory store implementation for development and tests

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{RegistryError, Result};
use crate::module::{ModuleCoordinate, ModuleVersion};
use crate::pagination::ResultPage;
use crate::query::QueryOptions;
use crate::store::ModuleStore;

/// In-memory module store. Results iterate in publish order, which is the
/// store's stable result order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    modules: RwLock<Vec<ModuleVersion>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            modules: RwLock::new(Vec::new()),
        }
    }

    pub fn with_modules(modules: Vec<ModuleVersion>) -> Self {
        Self {
            modules: RwLock::new(modules),
        }
    }

    /// Append one module version record
    pub fn publish(&self, module: ModuleVersion) -> Result<()> {
        self.modules
            .write()
            .map_err(|_| RegistryError::Storage("lock poisoned".to_string()))?
            .push(module);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modules.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches(module: &ModuleVersion, options: &QueryOptions) -> bool {
    if let Some(namespace) = &options.namespace {
        if module.namespace != *namespace {
            return false;
        }
    }
    if let Some(provider) = &options.provider {
        if module.provider != *provider {
            return false;
        }
    }
    if let Some(verified) = options.verified {
        if module.verified != verified {
            return false;
        }
    }
    if let Some(matcher) = &options.selector.name {
        if !matcher.matches(&module.name) {
            return false;
        }
    }
    true
}

#[async_trait]
impl ModuleStore for MemoryStore {
    async fn find_all(&self, options: &QueryOptions) -> Result<ResultPage> {
        let modules = self
            .modules
            .read()
            .map_err(|_| RegistryError::Storage("lock poisoned".to_string()))?;

        let filtered: Vec<ModuleVersion> = modules
            .iter()
            .filter(|module| matches(module, options))
            .cloned()
            .collect();

        Ok(ResultPage::from_slice(
            filtered,
            options.offset,
            options.limit,
        ))
    }

    async fn get_versions(&self, coordinate: &ModuleCoordinate) -> Result<Vec<ModuleVersion>> {
        let modules = self
            .modules
            .read()
            .map_err(|_| RegistryError::Storage("lock poisoned".to_string()))?;

        let versions: Vec<ModuleVersion> = modules
            .iter()
            .filter(|module| module.coordinate() == *coordinate)
            .cloned()
            .collect();

        if versions.is_empty() {
            return Err(RegistryError::ModuleNotFound(coordinate.to_string()));
        }

        Ok(versions)
    }
}
