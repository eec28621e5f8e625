use clap::Args;
use storefront_app::{
    auth::PgAuthService,
    database::Db,
    domain::customers::{
        CustomersService, PgCustomersService, data::NewCustomer, records::CustomerUuid,
    },
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Customer display name
    #[arg(long)]
    name: String,

    /// Optional customer UUID; generated when omitted
    #[arg(long)]
    customer_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateCustomerArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = args.database.connect().await?;

    let customers = PgCustomersService::new(Db::new(pool.clone()));
    let auth = PgAuthService::new(pool);

    let customer = customers
        .create_customer(NewCustomer {
            uuid: args
                .customer_uuid
                .map_or_else(CustomerUuid::new, CustomerUuid::from_uuid),
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    let issued = auth
        .issue_customer_token(customer.uuid)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("customer_uuid: {}", customer.uuid);
    println!("customer_name: {}", customer.name);
    println!("token_uuid: {}", issued.metadata.uuid);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
