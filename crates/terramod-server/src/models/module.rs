//! Module-related API models

use serde::Serialize;
use terramod_registry::ModuleVersion;
use time::OffsetDateTime;

use crate::models::ListMeta;

/// One module entry in a list/search response
#[derive(Debug, Serialize)]
pub struct ModuleSummary {
    /// Protocol identifier `namespace/name/provider/version`
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub provider: String,
    pub version: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub downloads: u64,
    pub verified: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
}

impl From<ModuleVersion> for ModuleSummary {
    fn from(module: ModuleVersion) -> Self {
        Self {
            id: module.id(),
            namespace: module.namespace,
            name: module.name,
            provider: module.provider,
            version: module.version,
            owner: module.owner,
            description: module.description,
            source: module.source,
            downloads: module.downloads,
            verified: module.verified,
            published_at: module.published_at,
        }
    }
}

/// List/search response body
#[derive(Debug, Serialize)]
pub struct ModuleListResponse {
    pub meta: ListMeta,
    pub modules: Vec<ModuleSummary>,
}

/// One version entry on the versions endpoint
#[derive(Debug, Serialize)]
pub struct VersionSummary {
    pub version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
}

impl From<ModuleVersion> for VersionSummary {
    fn from(module: ModuleVersion) -> Self {
        Self {
            version: module.version,
            published_at: module.published_at,
        }
    }
}

/// Versions response body
#[derive(Debug, Serialize)]
pub struct VersionsResponse {
    pub source: String,
    pub versions: Vec<VersionSummary>,
}
