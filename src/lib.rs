pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod messages;
pub mod view;

pub use client::{HttpSummarizer, SummarizationService};
pub use config::Config;
pub use controller::{FormState, SubmitOutcome, SummarizerForm};
pub use error::{AppError, Result};

/// Installs the tracing subscriber: `RUST_LOG` filter (default `info`),
/// written to stderr so stdout carries only the rendered form.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
