//! Integration tests for the in-memory module store

use terramod_registry::{
    MemoryStore, ModuleCoordinate, ModuleStore, ModuleVersion, QueryOptions, RegistryError,
    grouping,
};

fn seeded_store() -> MemoryStore {
    MemoryStore::with_modules(vec![
        ModuleVersion::new("hashicorp", "consul", "aws", "1.0.0").verified(true),
        ModuleVersion::new("hashicorp", "consul", "aws", "1.2.0").verified(true),
        ModuleVersion::new("hashicorp", "consul", "aws", "1.10.0").verified(true),
        ModuleVersion::new("hashicorp", "consul", "azurerm", "0.5.0"),
        ModuleVersion::new("hashicorp", "vault", "aws", "2.0.0"),
        ModuleVersion::new("acme", "vpc-baseline", "aws", "0.1.0"),
        ModuleVersion::new("acme", "vpc-baseline", "google", "0.2.0"),
    ])
}

#[tokio::test]
async fn find_all_without_filters_returns_publish_order() {
    let store = seeded_store();

    let page = store.find_all(&QueryOptions::default()).await.unwrap();

    assert_eq!(page.modules.len(), 7);
    assert_eq!(page.meta.total_count, 7);
    assert_eq!(page.meta.next_offset, None);
    assert_eq!(page.modules[0].id(), "hashicorp/consul/aws/1.0.0");
    assert_eq!(page.modules[6].id(), "acme/vpc-baseline/google/0.2.0");
}

#[tokio::test]
async fn find_all_filters_by_namespace() {
    let store = seeded_store();

    let options = QueryOptions::builder().namespace(Some("acme")).build();
    let page = store.find_all(&options).await.unwrap();

    assert_eq!(page.modules.len(), 2);
    assert!(page.modules.iter().all(|m| m.namespace == "acme"));
}

#[tokio::test]
async fn find_all_filters_by_provider_and_verified() {
    let store = seeded_store();

    let options = QueryOptions::builder()
        .provider(Some("aws"))
        .verified_param(Some("true"))
        .build();
    let page = store.find_all(&options).await.unwrap();

    assert_eq!(page.modules.len(), 3);
    assert!(page.modules.iter().all(|m| m.provider == "aws" && m.verified));
}

#[tokio::test]
async fn find_all_applies_name_selector() {
    let store = seeded_store();

    let options = QueryOptions::builder()
        .search_param(Some("vpc"))
        .unwrap()
        .build();
    let page = store.find_all(&options).await.unwrap();

    assert_eq!(page.modules.len(), 2);
    assert!(page.modules.iter().all(|m| m.name.contains("vpc")));
}

#[tokio::test]
async fn find_all_pages_with_element_offsets() {
    let store = seeded_store();

    let options = QueryOptions::builder()
        .offset_param(Some("0"))
        .limit_param(Some("3"))
        .build();
    let first = store.find_all(&options).await.unwrap();
    assert_eq!(first.modules.len(), 3);
    assert_eq!(first.meta.next_offset, Some(3));

    let options = QueryOptions::builder()
        .offset_param(Some("6"))
        .limit_param(Some("3"))
        .build();
    let last = store.find_all(&options).await.unwrap();
    assert_eq!(last.modules.len(), 1);
    assert_eq!(last.meta.next_offset, None);
}

#[tokio::test]
async fn find_all_with_offset_beyond_total_is_empty() {
    let store = seeded_store();

    let options = QueryOptions::builder().offset_param(Some("50")).build();
    let page = store.find_all(&options).await.unwrap();

    assert!(page.modules.is_empty());
    assert_eq!(page.meta.next_offset, None);
    assert_eq!(page.meta.total_count, 7);
}

#[tokio::test]
async fn get_versions_returns_every_version_for_one_coordinate() {
    let store = seeded_store();

    let versions = store
        .get_versions(&ModuleCoordinate::new("hashicorp", "consul", "aws"))
        .await
        .unwrap();

    let raw: Vec<&str> = versions.iter().map(|v| v.version.as_str()).collect();
    assert_eq!(raw, vec!["1.0.0", "1.2.0", "1.10.0"]);
}

#[tokio::test]
async fn get_versions_for_unknown_coordinate_is_not_found() {
    let store = seeded_store();

    let err = store
        .get_versions(&ModuleCoordinate::new("hashicorp", "consul", "oci"))
        .await
        .unwrap_err();

    match err {
        RegistryError::ModuleNotFound(coordinate) => {
            assert_eq!(coordinate, "hashicorp/consul/oci");
        }
        other => panic!("expected ModuleNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn aggregation_over_store_batch_picks_latest_per_provider() {
    let store = seeded_store();

    let options = QueryOptions::builder()
        .limit(100)
        .namespace(Some("hashicorp"))
        .name_exact("consul")
        .build();
    let batch = store.find_all(&options).await.unwrap();
    let latest = grouping::latest_per_provider(batch.modules);

    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].provider, "aws");
    assert_eq!(latest[0].version, "1.10.0");
    assert_eq!(latest[1].provider, "azurerm");
    assert_eq!(latest[1].version, "0.5.0");
}

#[tokio::test]
async fn publish_appends_to_result_order() {
    let store = MemoryStore::new();
    assert!(store.is_empty());

    store
        .publish(ModuleVersion::new("acme", "net", "aws", "0.1.0"))
        .unwrap();
    store
        .publish(ModuleVersion::new("acme", "net", "aws", "0.2.0"))
        .unwrap();

    assert_eq!(store.len(), 2);
    let page = store.find_all(&QueryOptions::default()).await.unwrap();
    assert_eq!(page.modules[0].version, "0.1.0");
    assert_eq!(page.modules[1].version, "0.2.0");
}
