use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use snippy_relay::{ChatMessage, CompletionProvider, FragmentStream, RelayError};

/// Provider that replays a fixed script of fragments and errors
#[allow(dead_code)]
pub struct ScriptedProvider {
    script: Vec<Result<String, RelayError>>,
    refuse: Option<RelayError>,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn fragments(fragments: &[&str]) -> Arc<Self> {
        Self::script(fragments.iter().map(|f| Ok(f.to_string())).collect())
    }

    pub fn script(script: Vec<Result<String, RelayError>>) -> Arc<Self> {
        Arc::new(Self {
            script,
            refuse: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider that rejects the request before streaming anything
    pub fn refusing(err: RelayError) -> Arc<Self> {
        Arc::new(Self {
            script: Vec::new(),
            refuse: Some(err),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn stream_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<FragmentStream, RelayError> {
        self.requests.lock().unwrap().push(messages);
        if let Some(err) = &self.refuse {
            return Err(err.clone());
        }
        Ok(Box::pin(futures::stream::iter(self.script.clone())))
    }
}

/// SSE body as a Groq-compatible server would send it
#[allow(dead_code)]
pub fn sse_body(fragments: &[&str]) -> String {
    let mut body = String::from(
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\"}}]}\n\n",
    );
    for fragment in fragments {
        let chunk = serde_json::json!({
            "choices": [{ "index": 0, "delta": { "content": fragment } }]
        });
        body.push_str(&format!("data: {}\n\n", chunk));
    }
    body.push_str("data: [DONE]\n\n");
    body
}
