//! OAuth login handlers.

use actix_web::{http::header, web, HttpResponse, Result};
use ghsync_core::use_cases::auth::{ConnectIntegrationInterface, RemoveIntegrationInterface};
use ghsync_crypto::JwtUtils;
use ghsync_ghapi_interface::ApiError;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::{info, warn};

use super::validator::SessionUser;
use crate::{server::AppContext, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[tracing::instrument(skip_all)]
pub(crate) async fn github_login(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let state = JwtUtils::create_state_token(&ctx.config.auth.session_secret)
        .map_err(ServerError::from)?;
    let url = ctx
        .auth_provider
        .authorize_url(&state)
        .map_err(ServerError::from)?;

    Ok(redirect(&url))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn github_callback(
    ctx: web::Data<AppContext>,
    query: web::Query<CallbackQuery>,
) -> HttpResponse {
    let frontend_url = ctx.config.auth.frontend_url.trim_end_matches('/');

    match complete_login(&ctx, query.into_inner()).await {
        Ok((user_id, token)) => {
            info!(user_id = user_id, message = "GitHub account connected");
            redirect(&format!(
                "{frontend_url}/github-connect?auth=success#token={token}"
            ))
        }
        Err(e) => {
            warn!(error = %e, message = "GitHub login failed");
            redirect(&format!("{frontend_url}/?auth=failed"))
        }
    }
}

async fn complete_login(
    ctx: &AppContext,
    query: CallbackQuery,
) -> core::result::Result<(u64, String), ServerError> {
    let secret = &ctx.config.auth.session_secret;

    if let Some(error) = query.error {
        return Err(ApiError::OAuthError { reason: error }.into());
    }

    let state = query.state.unwrap_or_default();
    JwtUtils::verify_state_token(&state, secret)?;

    let code = query.code.ok_or_else(|| ApiError::OAuthError {
        reason: "missing authorization code".into(),
    })?;
    let credentials = ctx
        .auth_provider
        .exchange_code(ctx.api_service.as_ref(), &code)
        .await?;

    let connect_integration: &dyn ConnectIntegrationInterface = ctx.core_module.resolve_ref();
    let integration = connect_integration
        .run(&ctx.as_core_context(), credentials)
        .await?;

    let token = JwtUtils::create_session_token(
        secret,
        integration.user_id,
        ctx.config.auth.session_lifetime,
    )?;

    Ok((integration.user_id, token))
}

#[tracing::instrument(skip_all, fields(user_id = user.user_id))]
pub(crate) async fn remove_integration(
    ctx: web::Data<AppContext>,
    user: web::ReqData<SessionUser>,
) -> Result<HttpResponse> {
    let remove_integration: &dyn RemoveIntegrationInterface = ctx.core_module.resolve_ref();
    remove_integration
        .run(&ctx.as_core_context(), user.user_id)
        .await
        .map_err(ServerError::from)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "GitHub integration removed"
    })))
}
