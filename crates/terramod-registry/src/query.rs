//! Request-parameter translation into normalized store queries

use crate::error::{RegistryError, Result};

/// Page size when a listing request supplies no usable limit
pub const DEFAULT_LIST_LIMIT: usize = 15;

/// Store fetch cap for latest-version aggregation
pub const DEFAULT_VERSION_FETCH_CAP: usize = 100;

/// Match predicate for one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatcher {
    /// Field equals the value exactly
    Exact(String),

    /// Field contains the value as a case-sensitive literal substring.
    /// Search input is never compiled into a pattern, so arbitrary user
    /// text cannot produce a matcher that fails or backtracks.
    Contains(String),
}

impl FieldMatcher {
    pub fn matches(&self, field: &str) -> bool {
        match self {
            FieldMatcher::Exact(value) => field == value,
            FieldMatcher::Contains(value) => field.contains(value.as_str()),
        }
    }
}

/// Field-level filters applied by the store on top of the equality filters.
/// Only `name` is selectable today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub name: Option<FieldMatcher>,
}

/// Normalized store query. Invariants: `limit > 0`; `offset` is a raw
/// element offset on every endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub offset: usize,
    pub limit: usize,
    pub namespace: Option<String>,
    pub provider: Option<String>,
    pub verified: Option<bool>,
    pub selector: Selector,
}

impl QueryOptions {
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::new()
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions::builder().build()
    }
}

/// Builds [`QueryOptions`] from raw request parameters.
///
/// The `*_param` setters take parameters as they arrive on the wire
/// (optional, unvalidated strings); absent or unparseable values fall back
/// to the configured defaults rather than failing the request.
#[derive(Debug, Clone)]
pub struct QueryOptionsBuilder {
    offset: Option<usize>,
    limit: Option<usize>,
    default_limit: usize,
    namespace: Option<String>,
    provider: Option<String>,
    verified: Option<bool>,
    selector: Selector,
}

impl QueryOptionsBuilder {
    pub fn new() -> Self {
        Self {
            offset: None,
            limit: None,
            default_limit: DEFAULT_LIST_LIMIT,
            namespace: None,
            provider: None,
            verified: None,
            selector: Selector::default(),
        }
    }

    /// Limit applied when no valid `limit` parameter is given
    pub fn default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Raw `offset` parameter; non-numeric input falls back to 0
    pub fn offset_param(mut self, raw: Option<&str>) -> Self {
        self.offset = raw.and_then(|s| s.parse::<usize>().ok());
        self
    }

    /// Raw `limit` parameter; non-numeric or zero input falls back to the
    /// default limit
    pub fn limit_param(mut self, raw: Option<&str>) -> Self {
        self.limit = raw.and_then(|s| s.parse::<usize>().ok()).filter(|l| *l > 0);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Namespace filter. `None` and empty strings leave the current value
    /// untouched, so a path-supplied namespace applied after the
    /// query-string one takes precedence.
    pub fn namespace(mut self, namespace: Option<&str>) -> Self {
        if let Some(namespace) = namespace.filter(|s| !s.is_empty()) {
            self.namespace = Some(namespace.to_string());
        }
        self
    }

    /// Provider filter; empty input means no filter
    pub fn provider(mut self, provider: Option<&str>) -> Self {
        if let Some(provider) = provider.filter(|s| !s.is_empty()) {
            self.provider = Some(provider.to_string());
        }
        self
    }

    /// Raw `verified` parameter; anything but true/false/1/0 means no filter
    pub fn verified_param(mut self, raw: Option<&str>) -> Self {
        self.verified = match raw {
            Some("true") | Some("1") => Some(true),
            Some("false") | Some("0") => Some(false),
            _ => None,
        };
        self
    }

    /// Substring search on the module name
    pub fn name_contains(mut self, pattern: impl Into<String>) -> Self {
        self.selector.name = Some(FieldMatcher::Contains(pattern.into()));
        self
    }

    /// Exact match on the module name
    pub fn name_exact(mut self, value: impl Into<String>) -> Self {
        self.selector.name = Some(FieldMatcher::Exact(value.into()));
        self
    }

    /// Raw `q` parameter for the search endpoint. Missing or empty input is
    /// a validation failure the caller must surface as a client error.
    pub fn search_param(self, q: Option<&str>) -> Result<Self> {
        match q {
            Some(q) if !q.is_empty() => Ok(self.name_contains(q)),
            _ => Err(RegistryError::Validation("q parameter required.".to_string())),
        }
    }

    pub fn build(self) -> QueryOptions {
        QueryOptions {
            offset: self.offset.unwrap_or(0),
            limit: self.limit.unwrap_or(self.default_limit),
            namespace: self.namespace,
            provider: self.provider,
            verified: self.verified,
            selector: self.selector,
        }
    }
}

impl Default for QueryOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
