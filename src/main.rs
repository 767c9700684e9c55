use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roadnet_core::MAX_EXPORT_EDGES;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::CliConfig;

/// Build a directed road network graph from an OpenStreetMap extract
#[derive(Parser, Debug)]
#[command(name = "roadnet", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "roadnet.toml")]
    config: PathBuf,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the largest connected road network and save it
    Extract {
        /// Overrides `pipeline.output_path`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add geodesic edge distances to a saved graph
    Annotate {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print connectivity and attribute checks for a saved graph
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Write graph edges as GeoJSON
    Export {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = MAX_EXPORT_EDGES)]
        max_edges: usize,
    },
    /// Extract, annotate distances and save in one go
    Run {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Extract { output } => {
            let config = CliConfig::from_file(&cli.config)?;
            commands::extract(&config, output.as_deref())?;
        }
        Command::Annotate { input, output } => commands::annotate(&input, &output)?,
        Command::Validate { input } => {
            commands::validate(&input, &mut std::io::stdout().lock())?;
        }
        Command::Export {
            input,
            output,
            max_edges,
        } => {
            commands::export(&input, &output, max_edges)?;
        }
        Command::Run { output } => {
            let config = CliConfig::from_file(&cli.config)?;
            commands::run(&config, output.as_deref())?;
        }
    }
    Ok(())
}
