use clap::Args;
use storefront_app::auth::PgAuthService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct AdminTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: AdminTokenArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let issued = PgAuthService::new(pool)
        .issue_admin_token()
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("token_version: {}", issued.metadata.version.as_i16());
    println!("token_created_at: {}", issued.metadata.created_at);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
