use boutique_app::database::Db;
use clap::{Args, Parser, Subcommand};

mod db;
mod user;

#[derive(Debug, Parser)]
#[command(name = "boutique-app", about = "Trendy Boutique CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// MongoDB database name
    #[arg(long, env = "DATABASE_NAME", default_value = "trendyBoutique")]
    database_name: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        Db::connect(&self.database_url, &self.database_name)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn grant_admin_parses_email_and_database() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "boutique-app",
            "user",
            "grant-admin",
            "--email",
            "ana@example.com",
            "--database-url",
            "mongodb://localhost:27017",
        ])?;

        assert!(matches!(cli.command, Commands::User(_)));

        Ok(())
    }
}
