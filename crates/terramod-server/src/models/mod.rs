//! API request and response models

pub mod api;
pub mod module;

pub use api::{ListMeta, ListParams, SearchParams};
pub use module::{ModuleListResponse, ModuleSummary, VersionSummary, VersionsResponse};
