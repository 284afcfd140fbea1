//! Sync and browsing handlers.

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse, Result};
use ghsync_core::use_cases::{
    collections::CountCollectionsInterface,
    sync::{GetSyncStatusInterface, SyncAllDataInterface},
};
use ghsync_models::Collection;
use serde::Serialize;
use shaku::HasComponent;
use tracing::info;

use super::{
    columns::{columns, Column},
    listing::{list_response, ListParams},
};
use crate::{auth::validator::SessionUser, metrics::SYNC_RUNS, server::AppContext, ServerError};

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub(crate) async fn sync_all_data(
    ctx: web::Data<AppContext>,
    user: web::ReqData<SessionUser>,
) -> Result<HttpResponse> {
    SYNC_RUNS.inc();

    let sync_all_data: &dyn SyncAllDataInterface = ctx.core_module.resolve_ref();
    let report = sync_all_data
        .run(&ctx.as_core_context(), user.user_id)
        .await
        .map_err(ServerError::from)?;

    info!(stats = ?report.stats, message = "Synchronization complete");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Data synced from GitHub",
        "data": report
    })))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub(crate) async fn integration_status(
    ctx: web::Data<AppContext>,
    user: web::ReqData<SessionUser>,
) -> Result<HttpResponse> {
    let get_sync_status: &dyn GetSyncStatusInterface = ctx.core_module.resolve_ref();
    let status = get_sync_status
        .run(&ctx.as_core_context(), user.user_id)
        .await
        .map_err(ServerError::from)?;

    Ok(HttpResponse::Ok().json(status))
}

#[derive(Debug, Serialize)]
struct CollectionSummary {
    count: u64,
    name: &'static str,
    columns: &'static [Column],
}

#[tracing::instrument(skip_all)]
pub(crate) async fn collections(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let count_collections: &dyn CountCollectionsInterface = ctx.core_module.resolve_ref();
    let counts = count_collections
        .run(&ctx.as_core_context())
        .await
        .map_err(ServerError::from)?;

    let data: BTreeMap<&str, CollectionSummary> = counts
        .into_iter()
        .map(|c| {
            (
                c.collection.key(),
                CollectionSummary {
                    count: c.count,
                    name: c.collection.display_name(),
                    columns: columns(c.collection),
                },
            )
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "totalCollections": data.len(),
        "data": data
    })))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn organizations_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Organizations);
    let page = ctx
        .db_service
        .organizations_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn repositories_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Repositories);
    let page = ctx
        .db_service
        .repositories_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn commits_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Commits);
    let page = ctx
        .db_service
        .commits_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn pulls_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Pulls);
    let page = ctx
        .db_service
        .pull_requests_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn issues_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Issues);
    let page = ctx
        .db_service
        .issues_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn changelogs_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Changelogs);
    let page = ctx
        .db_service
        .changelogs_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn users_list(
    ctx: web::Data<AppContext>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse> {
    let query = params.into_inner().into_query(Collection::Users);
    let page = ctx
        .db_service
        .users_list(&query)
        .await
        .map_err(ServerError::from)?;

    Ok(list_response(&query, page))
}
