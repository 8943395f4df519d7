use std::{io, process::ExitCode};

use clap::Parser;
use engine::{Engine, MirrorLog, SessionTotals};
use migration::{Migrator, MigratorTrait};
use settings::{Database, Settings};

use crate::{
    cli::{Cli, Command},
    error::Result,
};

mod cli;
mod commands;
mod error;
mod render;
mod settings;
mod shell;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::new(cli.config.as_deref())?;
    if let Some(path) = cli.database {
        settings.database = Database::from_path(path);
    }
    if let Some(path) = cli.mirror {
        settings.mirror.path = path;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(io::stderr)
        .init();

    let db = connect_database(&settings.database).await?;
    let engine = Engine::builder()
        .database(db)
        .mirror(MirrorLog::new(&settings.mirror.path))
        .build()
        .await?;

    let mut stdout = io::stdout();
    match cli.command {
        Command::Shell => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(&engine, input, &mut stdout).await?;
        }
        command => {
            commands::execute(&engine, &mut SessionTotals::new(), command, &mut stdout).await?;
        }
    }

    Ok(())
}

async fn connect_database(config: &Database) -> Result<sea_orm::DatabaseConnection> {
    let url = config.url();
    let database = sea_orm::Database::connect(url.as_str()).await?;
    Migrator::up(&database, None).await?;
    tracing::debug!(%url, "database ready");
    Ok(database)
}
