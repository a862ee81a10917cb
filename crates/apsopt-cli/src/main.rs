use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use output::Format;

#[derive(Parser, Debug)]
#[command(author, version, about = "APS shell performance and optimization utilities")]
struct Cli {
    /// Load part definitions from a CSV file instead of the built-in tables.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available body modules and heads.
    Parts,
    /// Compute the full stat sheet for one explicit shell assembly.
    Stats(commands::stats::StatsArgs),
    /// Search every legal assembly for the best kinetic DPS per loader length.
    Optimize(commands::optimize::OptimizeArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Parts => commands::parts::handle(&catalog, cli.format),
        Command::Stats(args) => commands::stats::handle(&catalog, &args, cli.format),
        Command::Optimize(args) => commands::optimize::handle(&catalog, &args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
