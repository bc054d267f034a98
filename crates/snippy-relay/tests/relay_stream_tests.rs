mod common;

use common::ScriptedProvider;
use futures::StreamExt;
use snippy_relay::prompt::JSON_PRIMER;
use snippy_relay::{
    collect_report, AnalysisOutcome, AnalysisRequest, ChatRole, PerformanceRelay, RelayError,
};

fn request() -> AnalysisRequest {
    AnalysisRequest::new("def f(n): return sorted(n)", "python")
}

#[tokio::test]
async fn test_concatenation_equals_provider_response() {
    let fragments = ["{\"execution", "_time\": 12,", " \"memory_usage\": 3", "}"];
    let relay = PerformanceRelay::new(ScriptedProvider::fragments(&fragments));

    let received: Vec<String> = relay
        .analyze(&request())
        .await
        .unwrap()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(received, fragments);
    assert_eq!(received.concat(), fragments.concat());
}

#[tokio::test]
async fn test_error_after_n_fragments_ends_stream() {
    let provider = ScriptedProvider::script(vec![
        Ok("one".into()),
        Ok("two".into()),
        Err(RelayError::Transport("connection reset".into())),
        Ok("never".into()),
    ]);
    let relay = PerformanceRelay::new(provider);

    let items: Vec<_> = relay.analyze(&request()).await.unwrap().collect().await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Ok("one".to_string()));
    assert_eq!(items[1], Ok("two".to_string()));
    assert!(items[2].is_err());
}

#[tokio::test]
async fn test_rejected_request_surfaces_before_streaming() {
    let relay = PerformanceRelay::new(ScriptedProvider::refusing(RelayError::ProviderStatus {
        status: 401,
        body: "invalid api key".into(),
    }));

    let result = relay.analyze(&request()).await;

    assert!(matches!(
        result,
        Err(RelayError::ProviderStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_provider_receives_prompt_and_primer() {
    let provider = ScriptedProvider::fragments(&[]);
    let relay = PerformanceRelay::new(provider.clone());

    let items: Vec<_> = relay.analyze(&request()).await.unwrap().collect().await;
    assert!(items.is_empty());

    let requests = provider.requests.lock().unwrap();
    let messages = &requests[0];
    assert_eq!(messages[0].role, ChatRole::System);
    assert!(messages[0].content.contains("def f(n): return sorted(n)"));
    assert_eq!(messages[1].role, ChatRole::Assistant);
    assert_eq!(messages[1].content, JSON_PRIMER);
}

#[tokio::test]
async fn test_collect_report_from_stream() {
    let relay = PerformanceRelay::new(ScriptedProvider::fragments(&[
        "\n{\"execution_time\": 5, \"memory_usage\": 1.5,",
        " \"cpu_usage\": 10, \"time_complexity\": \"O(n log n)\"}",
        "\n```",
    ]));

    let outcome = collect_report(relay.analyze(&request()).await.unwrap()).await;

    let report = outcome.report().unwrap();
    assert_eq!(report.execution_time, 5.0);
    assert_eq!(report.time_complexity, "O(n log n)");
}

#[tokio::test]
async fn test_collect_report_after_stream_error_is_unavailable() {
    let relay = PerformanceRelay::new(ScriptedProvider::script(vec![
        Ok("{\"execution_time\": 5".into()),
        Err(RelayError::ProviderStream("overloaded".into())),
    ]));

    let outcome = collect_report(relay.analyze(&request()).await.unwrap()).await;

    assert_eq!(outcome, AnalysisOutcome::Unavailable);
}
