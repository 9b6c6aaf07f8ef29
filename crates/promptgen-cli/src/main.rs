mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "promptgen",
    about = "Generate VS Code Copilot prompt files from GSD command sources",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from commands/gsd/ or .git/)
    #[arg(long, global = true, env = "PROMPTGEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .github/prompts/*.prompt.md from commands/gsd/*.md
    Generate,

    /// Verify every command file has a generated prompt file
    Verify,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Generate => cmd::generate::run(&root, cli.json),
        Commands::Verify => cmd::verify::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
