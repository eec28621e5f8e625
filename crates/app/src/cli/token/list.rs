use clap::Args;
use storefront_app::{auth::PgAuthService, domain::customers::records::CustomerUuid};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Customer UUID whose tokens should be listed; administrator tokens when omitted
    #[arg(long)]
    customer_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let customer = args.customer_uuid.map(CustomerUuid::from_uuid);

    let tokens = PgAuthService::new(pool)
        .list_api_tokens(customer)
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        match customer {
            Some(customer) => println!("no tokens found for customer {customer}"),
            None => println!("no administrator tokens found"),
        }

        return Ok(());
    }

    for token in tokens {
        println!("token_uuid: {}", token.uuid);
        println!(
            "principal: {}",
            token
                .customer_uuid
                .map_or_else(|| "admin".to_string(), |value| format!("customer {value}"))
        );
        println!("token_version: {}", token.version.as_i16());
        println!("created_at: {}", token.created_at);
        println!(
            "last_used_at: {}",
            token
                .last_used_at
                .map_or_else(|| "never".to_string(), |value| value.to_string())
        );
        println!(
            "revoked_at: {}",
            token
                .revoked_at
                .map_or_else(|| "active".to_string(), |value| value.to_string())
        );
        println!();
    }

    Ok(())
}
