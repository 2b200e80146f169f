use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::JsonRejection, State},
};

use crate::AppState;
use crate::api::openai::{request_closer_reply, UpstreamTarget};
use crate::error::CloserError;
use crate::models::closer_models::{
    resolve_selector, CompletionRequest, CompletionResponse, Goal, Tone,
};
use crate::utils::closer_prompts::build_closer_prompt;

pub const EMPTY_REPLY_FALLBACK: &str = "No response from AI.";

pub async fn generate_closer_reply(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompletionRequest>, JsonRejection>,
) -> Result<Json<CompletionResponse>, CloserError> {
    let api_key = state.config.openai_api_key.as_deref().ok_or_else(|| {
        tracing::error!("Closer request refused: OPENAI_API_KEY is not configured");
        CloserError::Configuration
    })?;

    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected closer request body: {}", e);
        CloserError::BadRequest
    })?;

    let input = match request.input.as_deref() {
        Some(input) if !input.trim().is_empty() => input,
        _ => {
            tracing::debug!("Closer request without input");
            return Err(CloserError::BadRequest);
        }
    };
    let tone = resolve_selector(request.tone.as_deref(), Tone::from_selector, "tone");
    let goal = resolve_selector(request.goal.as_deref(), Goal::from_selector, "goal");

    tracing::info!(
        "Generating closer reply: {} chars, tone {:?}, goal {:?}",
        input.chars().count(),
        tone,
        goal
    );

    let target = UpstreamTarget {
        api_base: &state.config.openai_api_base,
        api_key,
        model: &state.config.model,
    };
    let prompt = build_closer_prompt(input, tone, goal);

    let reply = request_closer_reply(&state.http_client, &target, prompt)
        .await
        .map_err(|e| {
            tracing::error!("Failed to contact completion API: {}", e);
            CloserError::Upstream(e)
        })?;

    let output = match reply {
        Some(text) => text,
        None => {
            tracing::warn!("Completion API returned no usable choice");
            EMPTY_REPLY_FALLBACK.to_string()
        }
    };

    Ok(Json(CompletionResponse { output }))
}
