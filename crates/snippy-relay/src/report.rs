//! Caller-side handling of a streamed analysis
//!
//! The relay forwards raw model text. Consumers accumulate it, strip the
//! code-fence markup the model tends to emit, and decode the metrics.
//! Anything that does not decode is reported as unavailable.

use futures::StreamExt;
use serde::{Deserialize, Deserializer, Serialize};

use crate::provider::FragmentStream;

/// Estimated runtime characteristics for a worst-case input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Milliseconds
    #[serde(deserialize_with = "lenient_number")]
    pub execution_time: f64,
    /// Megabytes
    #[serde(deserialize_with = "lenient_number")]
    pub memory_usage: f64,
    /// Percent
    #[serde(deserialize_with = "lenient_number")]
    pub cpu_usage: f64,
    /// Big-O notation
    pub time_complexity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Available(PerformanceReport),
    Unavailable,
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&PerformanceReport> {
        match self {
            AnalysisOutcome::Available(report) => Some(report),
            AnalysisOutcome::Unavailable => None,
        }
    }
}

/// Models sometimes answer `"120 ms"`, `"~50"` or `"1,200"` instead of a bare number
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(text) => leading_number(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("not a number: {:?}", text))),
    }
}

/// The single number in `text`, ignoring a non-numeric prefix and a unit suffix
///
/// Accepts `1,200` thousands grouping and exponents (`2e3`). Anything else
/// that looks numeric (a second number, a range, bad grouping) is refused so
/// the report becomes unavailable instead of carrying a wrong value.
fn leading_number(text: &str) -> Option<f64> {
    let first_digit = text.find(|c: char| c.is_ascii_digit())?;
    let sign_start = text[..first_digit]
        .char_indices()
        .rev()
        .take_while(|(_, c)| matches!(c, '+' | '-' | '.'))
        .last()
        .map_or(first_digit, |(i, _)| i);

    let candidate = &text[sign_start..];
    let end = candidate
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | 'e' | 'E')))
        .map_or(candidate.len(), |(i, _)| i);
    let (token, rest) = candidate.split_at(end);

    if rest.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }
    ungroup(token)?.parse().ok()
}

/// Remove `,` thousands separators; `None` unless every group has three digits
fn ungroup(token: &str) -> Option<String> {
    if !token.contains(',') {
        return Some(token.to_string());
    }
    let integer_end = token.find(['.', 'e', 'E']).unwrap_or(token.len());
    let (integer, tail) = token.split_at(integer_end);
    if tail.contains(',') {
        return None;
    }

    let mut groups = integer.split(',');
    let head = groups.next()?;
    let head_digits = head.trim_start_matches(['+', '-']);
    if head_digits.is_empty() || head_digits.len() > 3 {
        return None;
    }
    let mut joined = head.to_string();
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        joined.push_str(group);
    }
    joined.push_str(tail);
    Some(joined)
}

/// Collects streamed fragments in arrival order
#[derive(Debug, Default, Clone)]
pub struct ReportAccumulator {
    text: String,
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Raw text received so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn finish(self) -> AnalysisOutcome {
        parse_report(&self.text)
    }
}

/// Remove surrounding ```` ```json ```` / ```` ``` ```` markup
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.strip_prefix("json").unwrap_or(rest);
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Decode accumulated model output into a report
pub fn parse_report(raw: &str) -> AnalysisOutcome {
    let text = strip_code_fences(raw);
    let object = match (text.find('{'), text.rfind('}')) {
        (Some(open), Some(close)) if open < close => &text[open..=close],
        _ => return AnalysisOutcome::Unavailable,
    };

    match serde_json::from_str::<PerformanceReport>(object) {
        Ok(report) => AnalysisOutcome::Available(report),
        Err(err) => {
            tracing::debug!(error = %err, "performance report did not decode");
            AnalysisOutcome::Unavailable
        }
    }
}

/// Drain `stream` and parse the result; a stream error makes it unavailable
pub async fn collect_report(mut stream: FragmentStream) -> AnalysisOutcome {
    let mut accumulator = ReportAccumulator::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => accumulator.push(&fragment),
            Err(_) => return AnalysisOutcome::Unavailable,
        }
    }
    accumulator.finish()
}
