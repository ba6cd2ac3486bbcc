pub async fn run(args: Args) -> eyre::Result<()> {
    let db = database::connect(&args.database_url, 1).await?;

    match args.command {
        Command::Apply => database::migrate(&db).await?,
        Command::Revert { target } => database::revert(&db, target).await?,
    }

    Ok(())
}

#[derive(clap::Args, Debug)]
pub struct Args {
    /// The database to run migrations on
    #[arg(short, long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Apply all pending migrations
    Apply,
    /// Revert migrations
    ///
    /// Every migration newer than the target is reverted. With no target, all of them are.
    Revert {
        /// The version to revert back to
        #[arg(default_value_t = 0)]
        target: i64,
    },
}
