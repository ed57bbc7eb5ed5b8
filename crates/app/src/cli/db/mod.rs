use clap::{Args, Subcommand};

mod ensure_indexes;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create the unique (productName, userEmail) indexes on cart and wishlist.
    ///
    /// The server tries this on startup and only logs a failure. Remove
    /// duplicate saved items first if this command reports a duplicate key.
    EnsureIndexes(ensure_indexes::EnsureIndexesArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::EnsureIndexes(args) => ensure_indexes::run(args).await,
    }
}
