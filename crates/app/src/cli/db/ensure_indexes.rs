use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct EnsureIndexesArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: EnsureIndexesArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    let result = db
        .ensure_indexes()
        .await
        .map_err(|error| format!("failed to create indexes: {error}"));

    let name = db.name().to_string();

    db.shutdown().await;

    result?;

    println!("ensured unique indexes on cart and wishlist in {name}");

    Ok(())
}
