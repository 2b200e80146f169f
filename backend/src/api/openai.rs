use openai_api_rs::v1::{chat_completion, common::GPT4_O};
use reqwest::Client;
use serde_json::Value;

use crate::utils::closer_prompts::CLOSER_SYSTEM_PROMPT;

pub const DEFAULT_MODEL: &str = GPT4_O;
/// Ceiling on reply length; the prompt also asks for under 120 words.
pub const MAX_REPLY_TOKENS: i64 = 300;
pub const TEMPERATURE: f64 = 0.8;

/// Connection details for one upstream call.
pub struct UpstreamTarget<'a> {
    pub api_base: &'a str,
    pub api_key: &'a str,
    pub model: &'a str,
}

pub fn build_closer_request(model: &str, prompt: String) -> chat_completion::ChatCompletionRequest {
    let messages = vec![
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::system,
            content: chat_completion::Content::Text(CLOSER_SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::user,
            content: chat_completion::Content::Text(prompt),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ];

    chat_completion::ChatCompletionRequest::new(model.to_string(), messages)
        .temperature(TEMPERATURE)
        .max_tokens(MAX_REPLY_TOKENS)
}

/// Sends one chat-completion request and returns the first choice's text.
///
/// `Ok(None)` means the upstream answered with JSON that has no usable choice,
/// including error envelopes on non-2xx statuses. Transport failures and
/// bodies that are not JSON at all come back as `Err`.
pub async fn request_closer_reply(
    client: &Client,
    target: &UpstreamTarget<'_>,
    prompt: String,
) -> Result<Option<String>, reqwest::Error> {
    let request = build_closer_request(target.model, prompt);

    let response = client
        .post(format!("{}/chat/completions", target.api_base))
        .bearer_auth(target.api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Completion API answered with status {}", status);
    }

    let body: Value = response.json().await?;
    Ok(first_choice_text(&body))
}

/// Pulls `choices[0].message.content`, trimmed. Blank content counts as missing.
pub fn first_choice_text(body: &Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
