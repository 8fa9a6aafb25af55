use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use super::gradio_protocol::{decode_prediction, parse_event_stream};
use crate::application::ports::{InferenceClient, InferenceError};
use crate::domain::{StagedAudio, TranscriptionResult};
use crate::presentation::config::InferenceSettings;

/// Client for a hosted Gradio Space exposing a single audio prediction endpoint.
pub struct GradioClient {
    client: reqwest::Client,
    root: String,
    api_prefix: String,
    api_name: String,
    hf_token: Option<String>,
}

#[derive(Deserialize)]
struct SpaceHost {
    host: String,
}

#[derive(Deserialize)]
struct SpaceConfig {
    #[serde(default)]
    api_prefix: Option<String>,
}

#[derive(Deserialize)]
struct EventHandle {
    event_id: String,
}

impl GradioClient {
    /// Resolves the Space root and reads its config. Called once at startup.
    pub async fn connect(settings: &InferenceSettings) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .map_err(|e| InferenceError::InitializationFailed(format!("client: {}", e)))?;

        let hf_token = settings.hf_token.clone().filter(|t| !t.is_empty());
        let root = resolve_root(&client, settings, hf_token.as_deref()).await?;

        let config_url = format!("{}/config", root);
        let response = with_token(client.get(&config_url), hf_token.as_deref())
            .send()
            .await
            .map_err(|e| InferenceError::InitializationFailed(format!("config: {}", e)))?;

        if !response.status().is_success() {
            return Err(InferenceError::InitializationFailed(format!(
                "config request to {} returned status {}",
                config_url,
                response.status()
            )));
        }

        let config: SpaceConfig = response
            .json()
            .await
            .map_err(|e| InferenceError::InitializationFailed(format!("parse config: {}", e)))?;

        let api_prefix = normalize_prefix(config.api_prefix.as_deref().unwrap_or_default());
        let api_name = settings.api_name.trim_start_matches('/').to_string();

        tracing::info!(
            root = %root,
            api_prefix = %api_prefix,
            api_name = %api_name,
            "Connected to Gradio space"
        );

        Ok(Self {
            client,
            root,
            api_prefix,
            api_name,
            hf_token,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}/{}", self.root, self.api_prefix, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        with_token(request, self.hf_token.as_deref())
    }

    async fn upload(&self, audio: &StagedAudio) -> Result<String, InferenceError> {
        let data = tokio::fs::read(audio.path()).await?;

        let file_part = multipart::Part::bytes(data)
            .file_name(audio.file_name())
            .mime_str("audio/wav")
            .map_err(|e| InferenceError::UploadFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new().part("files", file_part);

        let response = self
            .authorized(self.client.post(self.endpoint("upload")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| InferenceError::UploadFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(InferenceError::UploadFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let paths: Vec<String> = response
            .json()
            .await
            .map_err(|e| InferenceError::UploadFailed(format!("parse response: {}", e)))?;

        paths
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::UploadFailed("no file path returned".to_string()))
    }

    async fn submit(&self, server_path: &str, orig_name: &str) -> Result<String, InferenceError> {
        let body = serde_json::json!({
            "data": [{
                "path": server_path,
                "orig_name": orig_name,
                "meta": { "_type": "gradio.FileData" },
            }]
        });

        let response = self
            .authorized(
                self.client
                    .post(self.endpoint(&format!("call/{}", self.api_name))),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(InferenceError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let handle: EventHandle = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedReply(format!("event handle: {}", e)))?;

        Ok(handle.event_id)
    }

    async fn await_result(&self, event_id: &str) -> Result<serde_json::Value, InferenceError> {
        let response = self
            .authorized(
                self.client
                    .get(self.endpoint(&format!("call/{}/{}", self.api_name, event_id))),
            )
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(InferenceError::ApiRequestFailed(format!(
                "result stream returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("body: {}", e)))?;

        parse_event_stream(&body)
    }
}

#[async_trait]
impl InferenceClient for GradioClient {
    #[tracing::instrument(skip(self, audio), fields(bytes = audio.size_bytes()))]
    async fn predict(&self, audio: &StagedAudio) -> Result<TranscriptionResult, InferenceError> {
        let server_path = self.upload(audio).await?;
        tracing::debug!(server_path = %server_path, "Audio uploaded to space");

        let event_id = self.submit(&server_path, &audio.file_name()).await?;
        tracing::debug!(event_id = %event_id, "Prediction queued");

        let payload = self.await_result(&event_id).await?;
        let result = decode_prediction(&payload)?;

        tracing::info!(
            event_id = %event_id,
            chars = result.transcription.len(),
            "Gradio prediction completed"
        );

        Ok(result)
    }
}

async fn resolve_root(
    client: &reqwest::Client,
    settings: &InferenceSettings,
    hf_token: Option<&str>,
) -> Result<String, InferenceError> {
    let space = settings.space.trim();
    if space.starts_with("http://") || space.starts_with("https://") {
        return Ok(space.trim_end_matches('/').to_string());
    }

    let lookup_url = format!(
        "{}/api/spaces/{}/host",
        settings.hub_url.trim_end_matches('/'),
        space
    );

    let response = with_token(client.get(&lookup_url), hf_token)
        .send()
        .await
        .map_err(|e| InferenceError::InitializationFailed(format!("resolve space: {}", e)))?;

    if !response.status().is_success() {
        return Err(InferenceError::InitializationFailed(format!(
            "space {} lookup returned status {}",
            space,
            response.status()
        )));
    }

    let host: SpaceHost = response
        .json()
        .await
        .map_err(|e| InferenceError::InitializationFailed(format!("parse space host: {}", e)))?;

    Ok(host.host.trim_end_matches('/').to_string())
}

fn with_token(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
