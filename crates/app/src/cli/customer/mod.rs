use clap::{Args, Subcommand};
use patron_app::{
    context::AppContext,
    domain::customers::{CustomersSettings, models::Customer},
};

mod create;
mod purge_inactive;

#[derive(Debug, Args)]
pub(crate) struct CustomerCommand {
    #[command(subcommand)]
    command: CustomerSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomerSubcommand {
    Create(create::CreateCustomerArgs),
    PurgeInactive(purge_inactive::PurgeInactiveArgs),
}

pub(crate) async fn run(command: CustomerCommand) -> Result<(), String> {
    match command.command {
        CustomerSubcommand::Create(args) => create::run(args).await,
        CustomerSubcommand::PurgeInactive(args) => purge_inactive::run(args).await,
    }
}

pub(super) async fn connect(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url, CustomersSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}

pub(super) fn print_customer(customer: &Customer) {
    println!("customer_id: {}", customer.id);
    println!("user_name: {}", customer.user_name);
    println!("mobile_number: {}", customer.mobile_number);
    println!("email_address: {}", customer.email_address);
    println!("status: {}", customer.status);
}
