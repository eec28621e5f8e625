use clap::{Args, Subcommand};

mod token;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Issue an administrator API token
    Token(token::AdminTokenArgs),
}

pub(crate) async fn run(command: AdminCommand) -> Result<(), String> {
    match command.command {
        AdminSubcommand::Token(args) => token::run(args).await,
    }
}
