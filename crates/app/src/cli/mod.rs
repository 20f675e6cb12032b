use clap::{Parser, Subcommand};

mod customer;
mod db;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "patron-app", about = "Patron CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Customer(customer::CustomerCommand),
    Db(db::DbCommand),
    Seed(seed::SeedArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Customer(command) => customer::run(command).await,
            Commands::Db(command) => db::run(command).await,
            Commands::Seed(args) => seed::run(args).await,
        }
    }
}
