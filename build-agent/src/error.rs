//! Fault taxonomy for the build workflow.
//!
//! Every fault, wherever it happens, funnels to the same terminal failed
//! result; the variants exist so logs and messages say which boundary broke,
//! not to drive different control flow.

use thiserror::Error;

/// Which pipeline stage a fault occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Planning,
    Generation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Planning => write!(f, "planning"),
            Stage::Generation => write!(f, "generation"),
        }
    }
}

/// Faults a workflow run can terminate with.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The model call itself failed (network, auth, rate limit, empty reply).
    #[error("model call failed: {0}")]
    Upstream(#[from] anthropic_client::Error),

    /// The model replied, but its content is not valid JSON.
    #[error("{stage} response is not valid JSON: {source}")]
    MalformedResponse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    /// The model replied with valid JSON of the wrong shape.
    #[error("{stage} response has unexpected shape: {detail}")]
    InvalidShape { stage: Stage, detail: String },

    /// The parsed plan could not be serialized back into the generation
    /// prompt.
    #[error("failed to serialize plan: {0}")]
    PlanSerialization(#[from] serde_json::Error),
}
