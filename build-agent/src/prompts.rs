//! Prompt construction for the two pipeline stages.

use crate::types::{Plan, WorkflowRequest};

/// Build the planning-stage prompt from the raw request.
pub fn planning_prompt(request: &WorkflowRequest) -> String {
    format!(
        "Create a detailed plan for this app:\n\n\
         Prompt: {}\n\
         Platforms: {}\n\n\
         Output JSON with: appName, summary, features, dataModels, apiEndpoints",
        request.prompt,
        request.platforms.join(", ")
    )
}

/// Build the generation-stage prompt from the parsed plan.
///
/// The plan is forwarded verbatim, unknown fields included.
pub fn generation_prompt(plan: &Plan) -> serde_json::Result<String> {
    let plan_json = serde_json::to_string(plan)?;
    Ok(format!(
        "Generate TypeScript code for this app:\n\n\
         Plan: {}\n\n\
         Output JSON mapping filename to content.\n\
         Include: schema.ts, routes.ts, handlers.ts, components/",
        plan_json
    ))
}

/// Strip a surrounding markdown code fence, if the model wrapped its JSON in
/// one. Bare content passes through untouched.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the optional language tag on the opening fence line.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
