use async_trait::async_trait;
use ghsync_models::{Integration, GITHUB_PROVIDER};
use shaku::{Component, Interface};
use time::OffsetDateTime;

use crate::{mapping, CoreContext, Result};

/// Credentials returned by the OAuth code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ConnectIntegrationInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        credentials: OAuthCredentials,
    ) -> Result<Integration>;
}

/// Store the integration of the account owning the credentials.
///
/// Sync bookkeeping of a previous connection is kept.
#[derive(Component)]
#[shaku(interface = ConnectIntegrationInterface)]
pub(crate) struct ConnectIntegration;

#[async_trait]
impl ConnectIntegrationInterface for ConnectIntegration {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        credentials: OAuthCredentials,
    ) -> Result<Integration> {
        let (user, raw) = ctx
            .api_service
            .user_get(&credentials.access_token)
            .await?;
        let user_id = user.id;
        let previous = ctx.db_service.integrations_get(user_id).await?;

        ctx.db_service
            .users_upsert(mapping::user_profile(user, raw.clone()))
            .await?;

        let integration = ctx
            .db_service
            .integrations_upsert(Integration {
                provider: GITHUB_PROVIDER.into(),
                user_id,
                access_token: credentials.access_token,
                refresh_token: credentials.refresh_token,
                profile: raw,
                connected_at: Some(OffsetDateTime::now_utc()),
                last_synced: previous.as_ref().and_then(|p| p.last_synced),
                sync_type: previous.as_ref().and_then(|p| p.sync_type),
            })
            .await?;

        tracing::info!(user_id = user_id, message = "Integration connected");
        Ok(integration)
    }
}
