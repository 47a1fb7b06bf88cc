use clap::{Parser, Subcommand};
use countyshade::dataset::Dataset;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/counties.json")]
    data: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every county against the active filters
    Shade(cmd::shade::ShadeArgs),
    /// Show one county's details and its class
    Inspect(cmd::inspect::InspectArgs),
    /// Dataset-wide min / max / stdev per attribute
    Stats,
    /// Print the color key
    Key,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Key = cli.command {
        reports::print_key();
        return;
    }

    info!("🚀 Initializing countyshade...");
    let dataset = Dataset::load_from_file(&cli.data).unwrap_or_else(|e| {
        error!("❌ Could not load county data '{}': {}", cli.data, e);
        process::exit(1);
    });
    let stats = dataset.stats();

    let result = match cli.command {
        Commands::Shade(args) => cmd::shade::run(args, &dataset, &stats),
        Commands::Inspect(args) => cmd::inspect::run(args, &dataset, &stats),
        Commands::Stats => {
            reports::print_stats(&stats);
            Ok(())
        }
        Commands::Key => Ok(()),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
