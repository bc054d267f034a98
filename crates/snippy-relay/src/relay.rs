use std::sync::Arc;
use std::time::Instant;

use futures::stream;
use futures::StreamExt;
use snippy_core::errors::ExError;
use snippy_core::{log_op_end, log_op_error, log_op_start};
use snippy_core_types::RequestId;

use crate::error::{RelayError, Result};
use crate::prompt::{analysis_messages, AnalysisRequest};
use crate::provider::{CompletionProvider, FragmentStream};

/// Operation name on the start/end/end_error events of one analysis
pub const ANALYZE_OP: &str = "analyze_performance";

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn tagged(err: RelayError, request_id: &RequestId) -> ExError {
    ExError::from(err)
        .with_op(ANALYZE_OP)
        .with_request_id(request_id.clone())
}

/// Stateless bridge from an analysis request to a streamed model answer
///
/// Fragments are forwarded in arrival order without buffering or
/// inspection. Empty fragments are dropped; the first error ends the
/// stream.
#[derive(Clone)]
pub struct PerformanceRelay {
    provider: Arc<dyn CompletionProvider>,
}

impl std::fmt::Debug for PerformanceRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceRelay")
            .field("provider", &self.provider.name())
            .field("model", &self.provider.model())
            .finish()
    }
}

impl PerformanceRelay {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn CompletionProvider {
        self.provider.as_ref()
    }

    /// Open a streamed analysis of `request` under a fresh request id
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the request is not accepted. Errors
    /// after acceptance are delivered as the final stream item.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<FragmentStream> {
        self.analyze_with_id(request, RequestId::new()).await
    }

    /// Open a streamed analysis correlated under `request_id`
    ///
    /// The `end` event is logged once the stream is drained, with the
    /// total duration and fragment count.
    ///
    /// # Errors
    ///
    /// Same as [`PerformanceRelay::analyze`].
    pub async fn analyze_with_id(
        &self,
        request: &AnalysisRequest,
        request_id: RequestId,
    ) -> Result<FragmentStream> {
        let start = Instant::now();
        log_op_start!(
            ANALYZE_OP,
            request_id = request_id.as_str(),
            language = request.language.as_str()
        );

        match self
            .provider
            .stream_completion(analysis_messages(request))
            .await
        {
            Ok(stream) => Ok(relay_fragments(stream, start, request_id)),
            Err(err) => {
                log_op_error!(
                    ANALYZE_OP,
                    tagged(err.clone(), &request_id),
                    duration_ms = elapsed_ms(start)
                );
                Err(err)
            }
        }
    }
}

struct RelayState {
    inner: FragmentStream,
    start: Instant,
    request_id: RequestId,
    fragments: u64,
    finished: bool,
}

/// Drop empty fragments, stop after the first error, log the outcome
fn relay_fragments(inner: FragmentStream, start: Instant, request_id: RequestId) -> FragmentStream {
    let state = RelayState {
        inner,
        start,
        request_id,
        fragments: 0,
        finished: false,
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }
        loop {
            match state.inner.next().await {
                Some(Ok(text)) if text.is_empty() => continue,
                Some(Ok(text)) => {
                    state.fragments += 1;
                    return Some((Ok(text), state));
                }
                Some(Err(err)) => {
                    state.finished = true;
                    log_op_error!(
                        ANALYZE_OP,
                        tagged(err.clone(), &state.request_id),
                        duration_ms = elapsed_ms(state.start),
                        fragment_count = state.fragments
                    );
                    return Some((Err(err), state));
                }
                None => {
                    state.finished = true;
                    log_op_end!(
                        ANALYZE_OP,
                        duration_ms = elapsed_ms(state.start),
                        request_id = state.request_id.as_str(),
                        fragment_count = state.fragments
                    );
                    return None;
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::provider::ChatMessage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        items: Vec<std::result::Result<String, RelayError>>,
        seen: Mutex<Vec<ChatMessage>>,
    }

    #[async_trait]
    impl CompletionProvider for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "test-model"
        }

        async fn stream_completion(&self, messages: Vec<ChatMessage>) -> Result<FragmentStream> {
            self.seen.lock().unwrap().extend(messages);
            Ok(Box::pin(futures::stream::iter(self.items.clone())))
        }
    }

    #[tokio::test]
    async fn test_empty_fragments_are_dropped() {
        let provider = Arc::new(Scripted {
            items: vec![Ok("a".into()), Ok(String::new()), Ok("b".into())],
            seen: Mutex::new(Vec::new()),
        });
        let relay = PerformanceRelay::new(provider.clone());

        let items: Vec<_> = relay
            .analyze(&AnalysisRequest::new("x", "python"))
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(items, vec![Ok("a".to_string()), Ok("b".to_string())]);
        assert_eq!(provider.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_nothing_after_first_error() {
        let provider = Arc::new(Scripted {
            items: vec![
                Ok("a".into()),
                Err(RelayError::Transport("reset".into())),
                Ok("late".into()),
                Err(RelayError::Transport("again".into())),
            ],
            seen: Mutex::new(Vec::new()),
        });
        let relay = PerformanceRelay::new(provider);

        let items: Vec<_> = relay
            .analyze(&AnalysisRequest::new("x", "python"))
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(
            items,
            vec![
                Ok("a".to_string()),
                Err(RelayError::Transport("reset".into()))
            ]
        );
    }
}
