//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use ghsync_config::Config;
use ghsync_core::{CoreContext, CoreModule};
use ghsync_database_interface::DbService;
use ghsync_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{
    auth::AuthCommand, collections::CollectionsCommand, debug::DebugCommand,
    integrations::IntegrationsCommand, server::ServerCommand, status::StatusCommand,
    sync::SyncCommand,
};
use crate::Result;

mod auth;
mod collections;
mod debug;
mod integrations;
mod server;
mod status;
mod sync;

pub(crate) struct CommandContext {
    pub config: Config,
    pub db_service: Box<dyn DbService>,
    pub api_service: Box<dyn ApiService>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            db_service: self.db_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Sync(SyncCommand),
    Status(StatusCommand),
    Integrations(IntegrationsCommand),
    Auth(AuthCommand),
    Collections(CollectionsCommand),
    Debug(DebugCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Sync(sub) => sub.execute(ctx).await,
            Self::Status(sub) => sub.execute(ctx).await,
            Self::Integrations(sub) => sub.execute(ctx).await,
            Self::Auth(sub) => sub.execute(ctx).await,
            Self::Collections(sub) => sub.execute(ctx).await,
            Self::Debug(sub) => sub.execute(ctx).await,
        }
    }
}
