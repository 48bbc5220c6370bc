//! Core data structures for the terramod registry

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Exact address of one module variant: the unit of version enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleCoordinate {
    pub namespace: String,
    pub name: String,
    pub provider: String,
}

impl ModuleCoordinate {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            provider: provider.into(),
        }
    }
}

impl std::fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.namespace, self.name, self.provider)
    }
}

/// One published version of a module.
///
/// Records are immutable once constructed; everything beyond the coordinate
/// and version is pass-through metadata the query core never interprets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleVersion {
    pub namespace: String,

    pub name: String,

    /// Target platform/plugin this module variant is written for
    pub provider: String,

    /// Raw version string as published; not assumed well-formed
    pub version: String,

    /// Publishing account handle
    #[serde(default)]
    pub owner: String,

    pub description: Option<String>,

    /// VCS location the module was packaged from
    pub source: Option<String>,

    #[serde(default)]
    pub downloads: u64,

    /// Opaque verification flag, computed outside this crate
    #[serde(default)]
    pub verified: bool,

    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
}

impl ModuleVersion {
    /// Create a new module version record
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            provider: provider.into(),
            version: version.into(),
            owner: String::new(),
            description: None,
            source: None,
            downloads: 0,
            verified: false,
            published_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = downloads;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// The `(namespace, name, provider)` triple this record belongs to
    pub fn coordinate(&self) -> ModuleCoordinate {
        ModuleCoordinate::new(
            self.namespace.clone(),
            self.name.clone(),
            self.provider.clone(),
        )
    }

    /// Aggregation key `namespace/name/provider`; derived, never persisted
    pub fn group_key(&self) -> String {
        format!("{}/{}/{}", self.namespace, self.name, self.provider)
    }

    /// Protocol identifier `namespace/name/provider/version`
    pub fn id(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.namespace, self.name, self.provider, self.version
        )
    }
}
