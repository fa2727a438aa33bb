//! Storyline CLI - Tutorial Content Pipeline

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storyline::commands;
use storyline::interface::Context;
use storyline::Config;

#[derive(Parser)]
#[command(name = "storyline")]
#[command(author, version, about = "Tutorial content pipeline", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a tutorial and write it as JSON
    Build {
        /// Tutorial name (defaults to the configured tutorial)
        tutorial: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Assemble a tutorial and report placeholder content
    Check {
        /// Tutorial name (defaults to the configured tutorial)
        tutorial: Option<String>,
    },

    /// Extract the code snippet from one markdown file
    Snippet {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Render one markdown file to HTML
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List available tutorials
    List,

    /// Rebuild the JSON output whenever tutorial files change
    Watch {
        /// Tutorial name (defaults to the configured tutorial)
        tutorial: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Debounce delay in milliseconds
        #[arg(short, long, default_value = "0")]
        debounce: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine working directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    // Read configuration from file or use defaults
    let config = match cli.config {
        Some(ref path) => storyline::config::read_config_file(path),
        None => storyline::config::read_config(&base_dir),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        Config::default()
    });

    let ctx = Context::new(config, base_dir);

    // Execute command
    let result = match cli.command {
        Commands::Build {
            tutorial,
            output,
            pretty,
        } => {
            let options = commands::BuildOptions {
                tutorial,
                output,
                pretty,
            };
            commands::build(&ctx, options).await
        }

        Commands::Check { tutorial } => {
            let options = commands::CheckOptions {
                tutorial,
                verbose: cli.verbose,
            };
            commands::check(&ctx, options).await
        }

        Commands::Snippet { file } => commands::snippet(&ctx, commands::SnippetOptions { file }),

        Commands::Render { file } => commands::render(&ctx, commands::RenderOptions { file }),

        Commands::List => commands::list(&ctx),

        Commands::Watch {
            tutorial,
            output,
            debounce,
        } => {
            let options = commands::WatchOptions {
                tutorial,
                output,
                debounce_ms: debounce,
            };
            commands::watch(&ctx, options).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
