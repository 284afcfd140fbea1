pub(crate) mod connect_integration;
pub(crate) mod remove_integration;
pub(crate) mod resolve_access_token;

pub use connect_integration::{ConnectIntegrationInterface, OAuthCredentials};
pub use remove_integration::RemoveIntegrationInterface;
pub use resolve_access_token::ResolveAccessTokenInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    connect_integration::MockConnectIntegrationInterface,
    remove_integration::MockRemoveIntegrationInterface,
    resolve_access_token::MockResolveAccessTokenInterface,
};
