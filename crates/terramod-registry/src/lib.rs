//! # Terramod Registry
//!
//! Read-side query core for a Terraform-registry-protocol module registry:
//! - Module records identified by `(namespace, name, provider, version)`
//! - Normalized store queries built from raw request parameters
//! - Uniform element-offset pagination
//! - Latest-version-per-provider aggregation with semantic version ordering
//!
//! The backing store is consumed through the [`ModuleStore`] trait;
//! [`MemoryStore`] ships as the in-memory implementation for development
//! and tests.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use terramod_registry::{MemoryStore, ModuleStore, ModuleVersion, QueryOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! store.publish(ModuleVersion::new("hashicorp", "consul", "aws", "1.10.0"))?;
//!
//! let options = QueryOptions::builder()
//!     .namespace(Some("hashicorp"))
//!     .build();
//!
//! let page = store.find_all(&options).await?;
//! assert_eq!(page.modules.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod grouping;
pub mod module;
pub mod pagination;
pub mod query;
pub mod store;
pub mod version;

pub use error::{RegistryError, Result};
pub use module::{ModuleCoordinate, ModuleVersion};
pub use pagination::{PageMeta, ResultPage};
pub use query::{FieldMatcher, QueryOptions, QueryOptionsBuilder, Selector};
pub use store::{MemoryStore, ModuleStore};
