use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct PurgeInactiveArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: PurgeInactiveArgs) -> Result<(), String> {
    let context = super::connect(&args.database_url).await?;

    let removed = context
        .customers
        .purge_inactive()
        .await
        .map_err(|error| format!("failed to purge inactive customers: {error}"))?;

    println!("removed: {removed}");

    Ok(())
}
