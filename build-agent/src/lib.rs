// Environment configuration
pub mod config;

// Workflow fault types
pub mod error;

// Liveness probe
pub mod health;

// Model backend seam over the Anthropic client
pub mod llm;

// Stage prompt construction
pub mod prompts;

// Progress callback protocol
pub mod progress;

// Request, plan and result types
pub mod types;

// Two-stage workflow orchestration
pub mod workflow;

use anyhow::Context;

pub use error::WorkflowError;
pub use types::{WorkflowRequest, WorkflowResult};
pub use workflow::WorkflowRunner;

/// Run the full build workflow for one project.
///
/// This is the externally invoked entry point: it wires the Anthropic client
/// and the progress callback from the environment and executes one run.
/// Only setup problems (missing credentials) surface as `Err`; faults inside
/// the workflow itself come back as `Ok(WorkflowResult::Failed { .. })`.
pub async fn run_agent_workflow(
    project_id: impl Into<String>,
    prompt: impl Into<String>,
    platforms: Vec<String>,
) -> anyhow::Result<WorkflowResult> {
    let config = config::Config::from_env().context("failed to load worker configuration")?;

    let backend = anthropic_client::Client::new(&config.api_key, &config.model);
    let sink = progress::CallbackClient::new(&config.callback_url);
    let runner = WorkflowRunner::new(backend, sink);

    let request = WorkflowRequest {
        project_id: project_id.into(),
        prompt: prompt.into(),
        platforms,
    };

    Ok(runner.run(&request).await)
}
