//! Common API types and utilities

use serde::{Deserialize, Serialize};
use terramod_registry::PageMeta;

/// Raw pagination/filter parameters for the list endpoints.
///
/// Every field arrives as an optional, unvalidated string: the protocol's
/// behavior for an unparseable number is to fall back to the default, not
/// to reject the request, so parsing happens in the query-options builder
/// rather than in serde.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub provider: Option<String>,
    pub namespace: Option<String>,
    pub verified: Option<String>,
}

/// Raw parameters for the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub provider: Option<String>,
    pub namespace: Option<String>,
    pub verified: Option<String>,
}

/// Protocol pagination metadata for list responses
#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub limit: usize,

    pub current_offset: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,

    pub total_count: usize,

    /// Set when the aggregation fetch cap cut the store batch short
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl ListMeta {
    pub fn new(meta: PageMeta, next_url: Option<String>) -> Self {
        Self {
            limit: meta.limit,
            current_offset: meta.current_offset,
            next_offset: meta.next_offset,
            next_url,
            total_count: meta.total_count,
            truncated: false,
        }
    }
}
