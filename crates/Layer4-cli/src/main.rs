//! ServiceHub CLI - Main entry point

mod cli;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ServiceHub - language service registry and lifecycle controller
#[derive(Parser, Debug)]
#[command(name = "servicehub")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Load configuration from this file instead of global + project config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Additional directory to scan for service manifests (repeatable)
    #[arg(long = "search-path", global = true)]
    search_paths: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show registered services and their states
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start every service that supports a language
    Start {
        /// Language identifier (e.g. go, rust, python)
        language: String,
    },
    /// Start the services for a file's language
    Open {
        /// File path
        file: PathBuf,
    },
    /// Toggle a service (running -> stop, init -> start, stopped -> restart)
    ///
    /// Each invocation is a fresh process, so every service begins in `init`:
    /// toggle starts the service and it is disposed again when the command
    /// exits. Use `run` to keep services alive between operations.
    Toggle {
        /// Service ID
        id: String,
    },
    /// Stop a running service
    ///
    /// Each invocation is a fresh process, so services begin in `init` and are
    /// never running here: stop reports the transition failure. Use `run` to
    /// keep services alive, then Ctrl-C to stop them.
    Stop {
        /// Service ID
        id: String,
    },
    /// Activate services for the given files and keep them running until Ctrl-C
    Run {
        /// Files whose languages should be activated
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let options = cli::SessionOptions {
        config_path: args.config,
        search_paths: args.search_paths,
        working_dir: std::env::current_dir()?,
    };
    let mut session = cli::Session::open(&options).await?;

    match args.command {
        Command::Status { json } => {
            session.flush_notifications();
            render::print_status(&session.controller().service_stats(), json)?;
        }
        Command::Start { language } => {
            let handles = session.controller().start(&language);
            session.finish(handles).await?;
        }
        Command::Open { file } => {
            let handles = session.controller().activate_file(&file);
            if handles.is_empty() {
                println!("No services to start for {}", file.display());
            }
            session.finish(handles).await?;
        }
        Command::Toggle { id } => {
            session.controller().toggle(&id).await;
            session.finish(Vec::new()).await?;
        }
        Command::Stop { id } => {
            session.controller().stop(&id).await;
            session.finish(Vec::new()).await?;
        }
        Command::Run { files } => {
            cli::run(session, &files).await?;
            return Ok(());
        }
    }

    session.controller().dispose();
    session.flush_notifications();
    Ok(())
}
