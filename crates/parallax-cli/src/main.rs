mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parallax", about = "Parallax pager background geometry")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or save a default parallax config as TOML
    Config(commands::config::ConfigArgs),
    /// Compute chunk and projected widths for a layout
    Params(commands::params::ParamsArgs),
    /// Show source and destination rectangles at one scroll position
    Scroll(commands::scroll::ScrollArgs),
    /// Step through every page and print the rectangles
    Sweep(commands::sweep::SweepArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Scroll(args) => commands::scroll::run(args),
        Commands::Sweep(args) => commands::sweep::run(args),
    }
}
