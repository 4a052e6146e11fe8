//! Latency benchmark for an OLLM proxy endpoint.
//!
//! Drives the chat path through the provider adapter: one sequential pass,
//! then one concurrent pass, reporting min/mean/p50/p95/p99/max per pass.
//!
//! Configuration via environment:
//! - `OLLM_API_KEY`            - credential (required to get past the proxy)
//! - `OLLM_BENCH_MODEL`        - model identifier (default: phala llama-3.3-70b)
//! - `OLLM_BENCH_REQUESTS`     - requests per pass (default: 20)
//! - `OLLM_BENCH_CONCURRENCY`  - in-flight cap for the concurrent pass (default: 8)
//! - `OLLM_BENCH_PROMPT`       - prompt text sent on every request

use std::time::{Duration, Instant};

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use futures::stream::{self, StreamExt};
use ollm_provider::{OllmChatModel, OllmError, models, ollm};
use tracing_subscriber::EnvFilter;

const DEFAULT_REQUESTS: usize = 20;
const DEFAULT_CONCURRENCY: usize = 8;
const DEFAULT_PROMPT: &str = "Reply with the single word: pong";

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default)
}

fn chat_request(prompt: &str) -> CreateChatCompletionRequest {
    CreateChatCompletionRequest {
        messages: vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                name: None,
            },
        )],
        max_completion_tokens: Some(64),
        ..Default::default()
    }
}

async fn timed_request(model: &OllmChatModel, prompt: &str) -> Result<Duration, OllmError> {
    let start = Instant::now();
    model.create(chat_request(prompt)).await?;
    Ok(start.elapsed())
}

/// Nearest-rank percentile over a sorted sample set, scaled on (n - 1).
fn percentile(sorted: &[Duration], pct: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let rank = (pct / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn report(label: &str, mut samples: Vec<Duration>, failures: usize) {
    if samples.is_empty() {
        println!("{label}: no successful requests ({failures} failed)");
        return;
    }
    samples.sort();
    let total: Duration = samples.iter().sum();
    let mean = total / samples.len() as u32;

    println!("{label} ({} ok, {} failed):", samples.len(), failures);
    println!("  min   {:>8.1?}", samples[0]);
    println!("  mean  {:>8.1?}", mean);
    println!("  p50   {:>8.1?}", percentile(&samples, 50.0));
    println!("  p95   {:>8.1?}", percentile(&samples, 95.0));
    println!("  p99   {:>8.1?}", percentile(&samples, 99.0));
    println!("  max   {:>8.1?}", samples[samples.len() - 1]);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let model_id = std::env::var("OLLM_BENCH_MODEL")
        .unwrap_or_else(|_| models::phala::LLAMA_3_3_70B_INSTRUCT.to_string());
    let requests = env_usize("OLLM_BENCH_REQUESTS", DEFAULT_REQUESTS);
    let concurrency = env_usize("OLLM_BENCH_CONCURRENCY", DEFAULT_CONCURRENCY);
    let prompt = std::env::var("OLLM_BENCH_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

    let model = ollm(model_id);
    println!(
        "benchmarking {} via {} ({requests} requests per pass, concurrency {concurrency})",
        model.model_id(),
        model.base_url()
    );

    // Sequential pass
    let mut samples = Vec::with_capacity(requests);
    let mut failures = 0usize;
    for _ in 0..requests {
        match timed_request(&model, &prompt).await {
            Ok(elapsed) => samples.push(elapsed),
            Err(e) => {
                failures += 1;
                tracing::warn!("request failed: {e}");
            }
        }
    }
    report("sequential", samples, failures);

    // Concurrent pass
    let results: Vec<Result<Duration, OllmError>> = stream::iter(0..requests)
        .map(|_| timed_request(&model, &prompt))
        .buffer_unordered(concurrency)
        .collect()
        .await;
    let failures = results.iter().filter(|r| r.is_err()).count();
    let samples: Vec<Duration> = results.into_iter().filter_map(Result::ok).collect();
    report("concurrent", samples, failures);
}
