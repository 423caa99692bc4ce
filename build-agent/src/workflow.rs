//! Two-stage build workflow orchestration.
//!
//! One run is strictly linear: plan, then generate, then return. Each stage
//! is bracketed by progress events, and any fault in either stage terminates
//! the run with a single failed event and a failed result. There are no
//! retries and no resumption; every invocation starts fresh.

use serde_json::json;

use crate::error::{Stage, WorkflowError};
use crate::llm::ModelBackend;
use crate::progress::{ProgressEvent, ProgressSink, Step};
use crate::prompts;
use crate::types::{GeneratedCode, Plan, WorkflowRequest, WorkflowResult};

/// Token budget for the planning call.
pub const PLANNING_MAX_TOKENS: u32 = 8_000;

/// Token budget for the generation call.
pub const GENERATION_MAX_TOKENS: u32 = 16_000;

/// Executes the plan → generate pipeline for one project.
pub struct WorkflowRunner<B, S> {
    backend: B,
    sink: S,
}

impl<B: ModelBackend, S: ProgressSink> WorkflowRunner<B, S> {
    pub fn new(backend: B, sink: S) -> Self {
        Self { backend, sink }
    }

    /// Run the workflow to completion.
    ///
    /// Always returns a structured result: faults inside the stages are
    /// caught here, reported once on the progress channel, and folded into
    /// `WorkflowResult::Failed`.
    pub async fn run(&self, request: &WorkflowRequest) -> WorkflowResult {
        match self.execute(request).await {
            Ok((plan, generated_code)) => {
                tracing::info!(project_id = %request.project_id, "workflow complete");
                WorkflowResult::Complete {
                    plan,
                    generated_code,
                }
            }
            Err(err) => {
                let error = err.to_string();
                tracing::error!(project_id = %request.project_id, error, "workflow failed");
                self.sink
                    .report(ProgressEvent::new(
                        &request.project_id,
                        Step::Failed,
                        &error,
                    ))
                    .await;
                WorkflowResult::Failed { error }
            }
        }
    }

    async fn execute(
        &self,
        request: &WorkflowRequest,
    ) -> Result<(Plan, GeneratedCode), WorkflowError> {
        let plan = self.plan(request).await?;
        let generated_code = self.generate(request, &plan).await?;
        Ok((plan, generated_code))
    }

    /// Stage 1: ask the model for a structured plan.
    async fn plan(&self, request: &WorkflowRequest) -> Result<Plan, WorkflowError> {
        self.sink
            .report(ProgressEvent::new(
                &request.project_id,
                Step::Planning,
                "Analyzing requirements...",
            ))
            .await;

        tracing::info!(project_id = %request.project_id, "planning stage started");
        let response = self
            .backend
            .complete(&prompts::planning_prompt(request), PLANNING_MAX_TOKENS)
            .await?;

        let plan: Plan = serde_json::from_str(prompts::extract_json(&response)).map_err(
            |source| WorkflowError::MalformedResponse {
                stage: Stage::Planning,
                source,
            },
        )?;

        self.sink
            .report(
                ProgressEvent::new(
                    &request.project_id,
                    Step::Planning,
                    format!("Created plan for {}", plan.display_name()),
                )
                .with_metadata(json!({ "plan": &plan })),
            )
            .await;

        Ok(plan)
    }

    /// Stage 2: ask the model to expand the plan into source files.
    async fn generate(
        &self,
        request: &WorkflowRequest,
        plan: &Plan,
    ) -> Result<GeneratedCode, WorkflowError> {
        self.sink
            .report(ProgressEvent::new(
                &request.project_id,
                Step::Generating,
                "Generating code...",
            ))
            .await;

        tracing::info!(project_id = %request.project_id, "generation stage started");
        let prompt = prompts::generation_prompt(plan)?;
        let response = self.backend.complete(&prompt, GENERATION_MAX_TOKENS).await?;

        let files: serde_json::Value = serde_json::from_str(prompts::extract_json(&response))
            .map_err(|source| WorkflowError::MalformedResponse {
                stage: Stage::Generation,
                source,
            })?;

        let generated_code = Self::into_file_map(files)?;

        self.sink
            .report(ProgressEvent::new(
                &request.project_id,
                Step::Generating,
                format!("Generated {} files", generated_code.len()),
            ))
            .await;

        Ok(generated_code)
    }

    /// Validate the generation output shape: a JSON object whose values are
    /// all strings.
    fn into_file_map(value: serde_json::Value) -> Result<GeneratedCode, WorkflowError> {
        let serde_json::Value::Object(entries) = value else {
            return Err(WorkflowError::InvalidShape {
                stage: Stage::Generation,
                detail: "expected an object mapping filename to content".to_string(),
            });
        };

        entries
            .into_iter()
            .map(|(path, content)| match content {
                serde_json::Value::String(content) => Ok((path, content)),
                other => Err(WorkflowError::InvalidShape {
                    stage: Stage::Generation,
                    detail: format!("content of \"{}\" is {}, not a string", path, kind(&other)),
                }),
            })
            .collect()
    }
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
