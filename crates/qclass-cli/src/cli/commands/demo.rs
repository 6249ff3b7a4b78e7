//! `qclass demo` – classify the built-in example queries.

use anyhow::Result;
use qclass_core::config::ClassifierConfig;
use qclass_core::driver::{OnFailure, DEFAULT_QUERIES};

pub fn run_demo(cfg: &ClassifierConfig, on_failure: OnFailure) -> Result<()> {
    super::classify_to_stdout(cfg, DEFAULT_QUERIES, on_failure)
}
