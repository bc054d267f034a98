//! Performance analysis of a stored snippet

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use futures::StreamExt;
use snippy_core::{log_op_end, log_op_error, log_op_start, SnippetId};
use snippy_relay::{
    AnalysisOutcome, AnalysisRequest, GroqProvider, PerformanceRelay, RelayConfig, RelayError,
    ReportAccumulator,
};
use snippy_store::open_store;

use super::CommandResult;

pub const ANALYSIS_FAILED: &str = "Failed to analyze performance, try again later";

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    pub id: SnippetId,

    /// Echo the model output to stdout as it streams in
    #[arg(long)]
    pub raw: bool,
}

pub fn execute(data_dir: &Path, args: AnalyzeArgs) -> CommandResult {
    let store = open_store(data_dir);
    let Some(snippet) = store.find_by_id(args.id) else {
        println!("Snippet not found");
        return Ok(());
    };
    let request = AnalysisRequest::new(snippet.code.clone(), snippet.language.clone());

    let config = RelayConfig::from_env();
    let provider = GroqProvider::from_config(&config)?;
    let relay = PerformanceRelay::new(Arc::new(provider));

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(stream_analysis(&relay, &request, args.raw));

    match outcome {
        Ok(AnalysisOutcome::Available(report)) => {
            println!("Execution time:  {} ms", report.execution_time);
            println!("Memory usage:    {} MB", report.memory_usage);
            println!("CPU usage:       {} %", report.cpu_usage);
            println!("Time complexity: {}", report.time_complexity);
            Ok(())
        }
        Ok(AnalysisOutcome::Unavailable) | Err(_) => Err(ANALYSIS_FAILED.into()),
    }
}

async fn stream_analysis(
    relay: &PerformanceRelay,
    request: &AnalysisRequest,
    raw: bool,
) -> Result<AnalysisOutcome, RelayError> {
    let start = Instant::now();
    log_op_start!("cli_analyze");

    let result = accumulate(relay, request, raw).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => {
            log_op_end!("cli_analyze", duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!("cli_analyze", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

async fn accumulate(
    relay: &PerformanceRelay,
    request: &AnalysisRequest,
    raw: bool,
) -> Result<AnalysisOutcome, RelayError> {
    let mut fragments = relay.analyze(request).await?;
    let mut accumulator = ReportAccumulator::new();
    let mut stdout = std::io::stdout();

    while let Some(fragment) = fragments.next().await {
        let fragment = fragment?;
        if raw {
            print!("{}", fragment);
            stdout.flush().ok();
        }
        accumulator.push(&fragment);
    }
    if raw {
        println!();
    }
    Ok(accumulator.finish())
}
