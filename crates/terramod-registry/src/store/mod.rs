//! Store seam for module queries

use async_trait::async_trait;

use crate::error::Result;
use crate::module::{ModuleCoordinate, ModuleVersion};
use crate::pagination::ResultPage;
use crate::query::QueryOptions;

pub mod memory;

pub use memory::MemoryStore;

/// Read-side query interface every backing store implements.
///
/// Implementations choose their own stable result order and compute the
/// pagination metadata for `find_all` themselves.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    /// One page of modules matching the filters in `options`.
    async fn find_all(&self, options: &QueryOptions) -> Result<ResultPage>;

    /// Every known version for one exact coordinate, unsorted.
    ///
    /// Fails with [`crate::RegistryError::ModuleNotFound`] when the
    /// coordinate has no published versions at all.
    async fn get_versions(&self, coordinate: &ModuleCoordinate) -> Result<Vec<ModuleVersion>>;
}
