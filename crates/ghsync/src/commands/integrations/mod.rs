//! Integration commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{
    add::IntegrationsAddCommand, list::IntegrationsListCommand,
    remove::IntegrationsRemoveCommand,
};
use super::{Command, CommandContext};
use crate::Result;

mod add;
mod list;
mod remove;

/// Manage GitHub integrations
#[derive(Parser)]
pub(crate) struct IntegrationsCommand {
    #[clap(subcommand)]
    inner: IntegrationsSubCommand,
}

#[async_trait]
impl Command for IntegrationsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum IntegrationsSubCommand {
    Add(IntegrationsAddCommand),
    List(IntegrationsListCommand),
    Remove(IntegrationsRemoveCommand),
}

#[async_trait]
impl Command for IntegrationsSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Add(sub) => sub.run(ctx).await,
            Self::List(sub) => sub.run(ctx).await,
            Self::Remove(sub) => sub.run(ctx).await,
        }
    }
}
