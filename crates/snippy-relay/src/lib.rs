//! Snippy Relay - streamed performance estimates from a hosted model
//!
//! - `CompletionProvider` seam with a Groq (OpenAI-compatible) implementation
//! - `PerformanceRelay`: prompt construction and fragment forwarding
//! - `http`: the `POST /api/performance` endpoint
//! - `report`: caller-side accumulation and parsing of the streamed JSON

pub mod config;
pub mod error;
pub mod groq;
pub mod http;
pub mod prompt;
pub mod provider;
pub mod relay;
pub mod report;

pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use groq::GroqProvider;
pub use prompt::AnalysisRequest;
pub use provider::{ChatMessage, ChatRole, CompletionProvider, FragmentStream};
pub use relay::PerformanceRelay;
pub use report::{collect_report, parse_report, AnalysisOutcome, PerformanceReport, ReportAccumulator};
