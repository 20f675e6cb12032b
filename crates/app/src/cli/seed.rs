use clap::Args;
use patron_app::{
    context::AppContext,
    domain::{
        customers::{CustomersSettings, data::NewCustomer},
        pagination::PageRequest,
    },
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// Number of sample customers to insert
    #[arg(long, default_value_t = 100)]
    count: u32,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.database_url, CustomersSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let first_row = PageRequest::new(0, 1).map_err(|error| error.to_string())?;

    let existing = context
        .customers
        .list_page(first_row)
        .await
        .map_err(|error| format!("failed to count customers: {error}"))?
        .total_elements;

    if existing > 0 {
        println!("skipped: {existing} customers already present");

        return Ok(());
    }

    for index in 1..=args.count {
        context
            .customers
            .create_customer(sample_customer(index))
            .await
            .map_err(|error| format!("failed to seed customer {index}: {error}"))?;
    }

    println!("seeded: {}", args.count);

    Ok(())
}

fn sample_customer(index: u32) -> NewCustomer {
    NewCustomer {
        user_name: format!("User{index}"),
        age: 18 + i32::try_from(index % 30).unwrap_or_default(),
        mobile_number: format!("9{index:09}"),
        email_address: format!("user{index}@example.com"),
        address: Some(format!("Address {index}")),
    }
}
