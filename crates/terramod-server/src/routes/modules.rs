//! Module query routes
//!
//! The read side of the Terraform registry protocol: search, paginated
//! listing, version enumeration, and latest-version-per-provider
//! resolution.

use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    http::Uri,
    routing::get,
};
use terramod_registry::{ModuleCoordinate, QueryOptions, ResultPage, grouping};
use tracing::debug;

use crate::{
    AppState,
    error::Result,
    models::{ListMeta, ListParams, ModuleListResponse, ModuleSummary, SearchParams,
        VersionSummary, VersionsResponse},
    pagelink,
};

/// Create module routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_modules))
        .route("/search", get(search_modules))
        .route("/{namespace}", get(list_namespace_modules))
        .route("/{namespace}/{name}", get(latest_versions))
        .route("/{namespace}/{name}/{provider}/versions", get(list_versions))
}

/// Search modules by name substring
async fn search_modules(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<SearchParams>,
) -> Result<Json<ModuleListResponse>> {
    debug!("Searching modules with params: {:?}", params);

    let options = QueryOptions::builder()
        .default_limit(state.config.default_page_limit)
        .offset_param(params.offset.as_deref())
        .limit_param(params.limit.as_deref())
        .provider(params.provider.as_deref())
        .namespace(params.namespace.as_deref())
        .verified_param(params.verified.as_deref())
        .search_param(params.q.as_deref())?
        .build();

    let page = state.store.find_all(&options).await?;

    Ok(Json(list_response(&uri, page)))
}

/// List all modules with pagination
async fn list_modules(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> Result<Json<ModuleListResponse>> {
    debug!("Listing modules with params: {:?}", params);

    let page = run_list(&state, params, None).await?;

    Ok(Json(list_response(&uri, page)))
}

/// List modules of one namespace
async fn list_namespace_modules(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(namespace): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ModuleListResponse>> {
    debug!("Listing modules in namespace {}", namespace);

    let page = run_list(&state, params, Some(namespace)).await?;

    Ok(Json(list_response(&uri, page)))
}

/// List every published version of one module
async fn list_versions(
    State(state): State<AppState>,
    Path((namespace, name, provider)): Path<(String, String, String)>,
) -> Result<Json<VersionsResponse>> {
    let coordinate = ModuleCoordinate::new(namespace, name, provider);
    debug!("Listing versions for {}", coordinate);

    let versions = state.store.get_versions(&coordinate).await?;

    Ok(Json(VersionsResponse {
        source: coordinate.to_string(),
        versions: versions.into_iter().map(VersionSummary::from).collect(),
    }))
}

/// Latest version of one module for every provider it ships for
async fn latest_versions(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path((namespace, name)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<ModuleListResponse>> {
    debug!("Resolving latest versions for {}/{}", namespace, name);

    let fetch = QueryOptions::builder()
        .limit(state.config.version_fetch_cap)
        .namespace(Some(namespace.as_str()))
        .name_exact(name)
        .build();
    let batch = state.store.find_all(&fetch).await?;

    // the fetch cap can cut the batch short; callers see it in the meta
    let truncated = batch.meta.total_count > batch.modules.len();
    let latest = grouping::latest_per_provider(batch.modules);

    let options = QueryOptions::builder()
        .default_limit(state.config.default_page_limit)
        .offset_param(params.offset.as_deref())
        .limit_param(params.limit.as_deref())
        .build();
    let page = ResultPage::from_slice(latest, options.offset, options.limit);

    let mut response = list_response(&uri, page);
    response.meta.truncated = truncated;

    Ok(Json(response))
}

async fn run_list(
    state: &AppState,
    params: ListParams,
    path_namespace: Option<String>,
) -> Result<ResultPage> {
    let options = QueryOptions::builder()
        .default_limit(state.config.default_page_limit)
        .offset_param(params.offset.as_deref())
        .limit_param(params.limit.as_deref())
        .provider(params.provider.as_deref())
        .namespace(params.namespace.as_deref())
        .namespace(path_namespace.as_deref())
        .verified_param(params.verified.as_deref())
        .build();

    Ok(state.store.find_all(&options).await?)
}

fn list_response(uri: &Uri, page: ResultPage) -> ModuleListResponse {
    let next_url = page
        .meta
        .next_offset
        .map(|offset| pagelink::next_page_url(uri, page.meta.limit, offset));

    ModuleListResponse {
        meta: ListMeta::new(page.meta, next_url),
        modules: page.modules.into_iter().map(ModuleSummary::from).collect(),
    }
}
