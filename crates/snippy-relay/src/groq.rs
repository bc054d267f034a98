//! Groq chat-completions provider
//!
//! Speaks the OpenAI-compatible streaming protocol: a JSON POST with
//! `stream: true`, answered by server-sent events of the form
//! `data: {"choices":[{"delta":{"content":"..."}}]}` and terminated by
//! `data: [DONE]`.

use std::ops::ControlFlow;

use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use snippy_core_types::Sensitive;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::config::{RelayConfig, DEFAULT_MODEL, DEFAULT_PROVIDER_URL};
use crate::error::{RelayError, Result};
use crate::provider::{ChatMessage, CompletionProvider, FragmentStream};

/// Fragments buffered between the network task and the consumer
const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: Sensitive<String>,
    model: String,
    endpoint: String,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: Sensitive::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_PROVIDER_URL.to_string(),
        }
    }

    /// Build from configuration
    ///
    /// # Errors
    ///
    /// `RelayError::Configuration` when no API key is configured.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self::new(api_key.expose().clone())
            .with_model(config.model.clone())
            .with_endpoint(config.provider_url.clone()))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<StreamErrorBody>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
}

#[derive(Deserialize, Default)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct StreamErrorBody {
    #[serde(default)]
    message: String,
}

/// One decoded line of the event stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// Non-empty text delta
    Content(String),
    /// `data: [DONE]`
    Done,
    /// Blank line, comment, non-data field, or a delta without text
    Ignore,
}

/// Decode a single event-stream line (without its trailing newline)
///
/// # Errors
///
/// `MalformedEvent` for undecodable JSON, `ProviderStream` for an
/// in-band provider error.
pub fn parse_sse_line(line: &str) -> Result<SseLine> {
    let line = line.trim_end_matches('\r');
    let Some(data) = line.strip_prefix("data:") else {
        return Ok(SseLine::Ignore);
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return Ok(SseLine::Done);
    }

    let chunk: StreamChunk =
        serde_json::from_str(data).map_err(|e| RelayError::MalformedEvent(e.to_string()))?;

    if let Some(error) = chunk.error {
        return Err(RelayError::ProviderStream(error.message));
    }

    let content = chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .filter(|text| !text.is_empty());

    Ok(content.map_or(SseLine::Ignore, SseLine::Content))
}

type FragmentSender = mpsc::Sender<Result<String>>;

async fn forward_line(raw: &[u8], tx: &FragmentSender) -> ControlFlow<()> {
    let decoded = std::str::from_utf8(raw)
        .map_err(|e| RelayError::MalformedEvent(e.to_string()))
        .and_then(parse_sse_line);

    match decoded {
        Ok(SseLine::Content(text)) => {
            if tx.send(Ok(text)).await.is_err() {
                // Receiver dropped
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        }
        Ok(SseLine::Ignore) => ControlFlow::Continue(()),
        Ok(SseLine::Done) => ControlFlow::Break(()),
        Err(err) => {
            let _ = tx.send(Err(err)).await;
            ControlFlow::Break(())
        }
    }
}

/// Read the response body line by line into the channel
async fn pump_events(response: reqwest::Response, tx: FragmentSender) {
    let mut body = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::new();

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                let _ = tx.send(Err(RelayError::Transport(e.to_string()))).await;
                return;
            }
        };
        buffer.extend_from_slice(&chunk);

        while let Some(newline) = buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = buffer.drain(..=newline).collect();
            if forward_line(&line[..newline], &tx).await.is_break() {
                return;
            }
        }
    }

    if !buffer.is_empty() {
        let _ = forward_line(&buffer, &tx).await;
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn stream_completion(&self, messages: Vec<ChatMessage>) -> Result<FragmentStream> {
        let request = CompletionRequest {
            model: &self.model,
            messages: &messages,
            stream: true,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(RelayError::ProviderStatus { status, body });
        }

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(pump_events(response, tx));

        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}
