//! Latest-version selection across providers
//!
//! A module published for several providers shows up in the store as one
//! record per (provider, version). The aggregation endpoint needs exactly
//! one record per `namespace/name/provider` group: the latest version.

use indexmap::IndexMap;

use crate::module::ModuleVersion;
use crate::version;

/// Collapse a batch of module records to one record per distinct
/// `(namespace, name, provider)` coordinate, keeping each group's maximal
/// version under semantic ordering.
///
/// Groups are emitted in first-arrival order of the batch; within a group,
/// records comparing equal resolve to the later arrival.
pub fn latest_per_provider(batch: Vec<ModuleVersion>) -> Vec<ModuleVersion> {
    let mut groups: IndexMap<String, Vec<ModuleVersion>> = IndexMap::new();
    for module in batch {
        groups.entry(module.group_key()).or_default().push(module);
    }

    groups
        .into_values()
        .filter_map(|group| {
            group
                .into_iter()
                .max_by(|a, b| version::compare(&a.version, &b.version))
        })
        .collect()
}
