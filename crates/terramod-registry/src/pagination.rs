//! Page windowing over ordered module collections

use crate::module::ModuleVersion;

/// Pagination metadata for one result page.
///
/// `next_offset` is `Some` exactly when results exist beyond
/// `current_offset + limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub limit: usize,
    pub current_offset: usize,
    pub next_offset: Option<usize>,
    pub total_count: usize,
}

impl PageMeta {
    pub fn new(offset: usize, limit: usize, total_count: usize) -> Self {
        let end = offset.saturating_add(limit);
        Self {
            limit,
            current_offset: offset,
            next_offset: (total_count > end).then_some(end),
            total_count,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_offset.is_some()
    }
}

/// One page of modules plus its pagination metadata
#[derive(Debug, Clone)]
pub struct ResultPage {
    pub modules: Vec<ModuleVersion>,
    pub meta: PageMeta,
}

impl ResultPage {
    /// Window an already-ordered collection to `[offset, offset + limit)`.
    ///
    /// An offset beyond the end yields an empty page with no next offset,
    /// never an error.
    pub fn from_slice(all: Vec<ModuleVersion>, offset: usize, limit: usize) -> Self {
        let total_count = all.len();
        let modules: Vec<ModuleVersion> = all.into_iter().skip(offset).take(limit).collect();
        Self {
            modules,
            meta: PageMeta::new(offset, limit, total_count),
        }
    }
}
