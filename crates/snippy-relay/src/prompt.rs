use serde::{Deserialize, Serialize};

use crate::provider::ChatMessage;

/// Body of `POST /api/performance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

/// Assistant turn that primes the model to answer with a bare JSON block
pub const JSON_PRIMER: &str = "```json";

/// System prompt asking for a worst-case performance estimate
pub fn build_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Analyze the performance of this code snippet and provide numerical values for the \
following metrics: execution time, memory usage, CPU usage, and approximate time complexity. \
Provide the execution time in milliseconds and memory usage in megabytes. For CPU usage, \
provide a percentage value. For time complexity, provide the Big O notation.
Take the input of your choice for the worst-case scenario. Return the results in only numerical values.
format:
{{
    \"execution_time\": 100,
    \"memory_usage\": 50,
    \"cpu_usage\": 80,
    \"time_complexity\": \"O(n^2)\"
}}

Code Snippet: {}
Language: {}",
        request.code, request.language
    )
}

/// Conversation sent to the provider for one analysis
pub fn analysis_messages(request: &AnalysisRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(build_prompt(request)),
        ChatMessage::assistant(JSON_PRIMER),
    ]
}
