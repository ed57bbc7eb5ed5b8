use boutique_app::auth::{AuthServiceError, MongoAuthService};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct GrantAdminArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Email of the registered user to promote
    #[arg(long)]
    email: String,
}

pub(crate) async fn run(args: GrantAdminArgs) -> Result<(), String> {
    if args.email.trim().is_empty() {
        return Err("email cannot be empty".to_string());
    }

    let db = args.database.connect().await?;
    let service = MongoAuthService::new(&db);

    let issued = service
        .issue_admin_token(&args.email)
        .await
        .map_err(|error| match error {
            AuthServiceError::UnknownUser => format!("no user registered with {}", args.email),
            error => format!("failed to grant admin: {error}"),
        });

    db.shutdown().await;

    let issued = issued?;

    println!("email: {}", issued.principal.email);
    println!("role: {}", issued.principal.role);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
