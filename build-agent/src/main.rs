//! Local entrypoint for the build-agent worker.
//!
//! In production the worker is invoked remotely by the API when a build is
//! triggered; this binary exposes the same two operations for local runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use build_agent::health;

#[derive(Parser, Debug)]
#[command(name = "build-agent", version, about = "App build workflow worker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full build workflow for one project
    Run(RunArgs),
    /// Print the liveness payload
    Health,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Project the run belongs to
    #[arg(long)]
    project_id: String,

    /// Natural-language description of the app to build
    #[arg(long)]
    prompt: String,

    /// Target platform (repeat for multiple)
    #[arg(long = "platform")]
    platforms: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let result =
                build_agent::run_agent_workflow(args.project_id, args.prompt, args.platforms)
                    .await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Health => {
            println!("{}", serde_json::to_string_pretty(&health::health_check())?);
        }
    }

    Ok(())
}
