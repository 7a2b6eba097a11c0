use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "mindtrack", version, about = "MindTrack mood journal CLI")]
struct Cli {
    /// Data directory (default: ~/.config/mindtrack)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record how you feel (1-5)
    Add(commands::add::AddArgs),
    /// Mood history, newest first
    List(commands::list::ListArgs),
    /// Weekly average and daily chart for the last 7 days
    Summary(commands::summary::SummaryArgs),
    /// Delete every entry and mark this week as reset
    Reset(commands::reset::ResetArgs),
    /// Export all entries as CSV
    Export(commands::export::ExportArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = mindtrack_core::storage::ensure_data_dir(
        &cli.data_dir
            .unwrap_or_else(mindtrack_core::storage::default_data_dir),
    )?;

    if let Commands::Config { action } = cli.command {
        init_tracing("warn");
        return commands::config::run(&data_dir, action);
    }

    let config = mindtrack_core::Config::load(&data_dir)?;
    init_tracing(&config.log.level);

    let ctx = Context::open(data_dir, config).await?;
    // one invocation is one app session
    if let Some(outcome) = ctx.journal.auto_reset_if_new_week().await? {
        tracing::debug!(?outcome, "auto reset check");
    }

    match cli.command {
        Commands::Add(args) => commands::add::run(&ctx, args).await,
        Commands::List(args) => commands::list::run(&ctx, args).await,
        Commands::Summary(args) => commands::summary::run(&ctx, args),
        Commands::Reset(args) => commands::reset::run(&ctx, args).await,
        Commands::Export(args) => commands::export::run(&ctx, args).await,
        Commands::Config { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
