//! `qclass classify` – classify queries given on the command line.

use anyhow::Result;
use qclass_core::config::ClassifierConfig;
use qclass_core::driver::OnFailure;

pub fn run_classify(cfg: &ClassifierConfig, queries: &[String], on_failure: OnFailure) -> Result<()> {
    tracing::info!("classify {} queries", queries.len());
    super::classify_to_stdout(cfg, queries, on_failure)
}
