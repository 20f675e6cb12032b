use clap::Args;
use patron_app::domain::customers::data::NewCustomer;

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
    /// Unique user name
    #[arg(long)]
    user_name: String,

    /// Age in years, 1 to 120
    #[arg(long)]
    age: i32,

    /// Unique ten digit mobile number
    #[arg(long)]
    mobile_number: String,

    /// Unique email address
    #[arg(long)]
    email_address: String,

    /// Optional postal address
    #[arg(long)]
    address: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateCustomerArgs) -> Result<(), String> {
    let context = super::connect(&args.database_url).await?;

    let customer = context
        .customers
        .create_customer(NewCustomer {
            user_name: args.user_name,
            age: args.age,
            mobile_number: args.mobile_number,
            email_address: args.email_address,
            address: args.address,
        })
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    super::print_customer(&customer);

    Ok(())
}
