use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::{CompletionRequest, CompletionResponse};

pub const CLOSER_PATH: &str = "/api/closer";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Thin request builder rooted at the configured backend URL.
pub struct Api;

impl Api {
    /// POST `data` as JSON to `path`.
    pub async fn post_json<T: Serialize>(path: &str, data: &T) -> Result<Response, ApiError> {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let body = serde_json::to_string(data)?;
        let response = Request::post(&full_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Ok(response)
    }
}

/// The completion proxy as seen from the page.
#[async_trait(?Send)]
pub trait CloserApi {
    async fn generate(&self, request: &CompletionRequest) -> Result<CompletionResponse, ApiError>;
}

#[async_trait(?Send)]
impl<'a, A: CloserApi + ?Sized> CloserApi for &'a A {
    async fn generate(&self, request: &CompletionRequest) -> Result<CompletionResponse, ApiError> {
        (**self).generate(request).await
    }
}

#[derive(Clone, Copy, Default)]
pub struct HttpCloserApi;

#[async_trait(?Send)]
impl CloserApi for HttpCloserApi {
    async fn generate(&self, request: &CompletionRequest) -> Result<CompletionResponse, ApiError> {
        let response = Api::post_json(CLOSER_PATH, request).await?;
        // Error statuses still carry a displayable `output`.
        if !response.ok() {
            gloo_console::warn!(format!("Closer API answered with status {}", response.status()));
        }
        let reply = response.json::<CompletionResponse>().await.map_err(|e| {
            gloo_console::error!(format!("Failed to read closer reply: {}", e));
            e
        })?;
        Ok(reply)
    }
}
