use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveAccessTokenInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = ResolveAccessTokenInterface)]
pub(crate) struct ResolveAccessToken;

#[async_trait]
impl ResolveAccessTokenInterface for ResolveAccessToken {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<String> {
        ctx.db_service
            .integrations_get(user_id)
            .await?
            .map(|i| i.access_token)
            .filter(|token| !token.is_empty())
            .ok_or(DomainError::NotAuthenticated { user_id })
    }
}
