//! Auth commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::generate_token::AuthGenerateTokenCommand;
use super::{Command, CommandContext};
use crate::Result;

mod generate_token;

/// Session token related commands
#[derive(Parser)]
pub(crate) struct AuthCommand {
    #[clap(subcommand)]
    inner: AuthSubCommand,
}

#[async_trait]
impl Command for AuthCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum AuthSubCommand {
    GenerateToken(AuthGenerateTokenCommand),
}

#[async_trait]
impl Command for AuthSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::GenerateToken(sub) => sub.run(ctx).await,
        }
    }
}
