//! CLI command handlers.

mod classify;
mod demo;

pub use classify::run_classify;
pub use demo::run_demo;

use anyhow::Result;
use qclass_core::classifier::Classifier;
use qclass_core::config::ClassifierConfig;
use qclass_core::driver::{self, OnFailure};
use qclass_core::transport::BedrockTransport;

/// Connect to Bedrock and run the driver over `queries`, printing to stdout.
fn classify_to_stdout<Q: AsRef<str>>(
    cfg: &ClassifierConfig,
    queries: &[Q],
    on_failure: OnFailure,
) -> Result<()> {
    let transport = BedrockTransport::connect(&cfg.region, cfg.request_timeout())?;
    let classifier = Classifier::new(transport, cfg);
    let stdout = std::io::stdout();
    driver::run_batch(&classifier, queries, on_failure, &mut stdout.lock())?;
    Ok(())
}
