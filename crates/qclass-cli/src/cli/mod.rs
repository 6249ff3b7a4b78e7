//! CLI for the qclass query classifier.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use qclass_core::config::{self, ClassifierConfig};
use qclass_core::driver::OnFailure;

use commands::{run_classify, run_demo};

/// Top-level CLI. With no subcommand, runs the built-in demo queries.
#[derive(Debug, Parser)]
#[command(name = "qclass")]
#[command(about = "Classify queries as simple or complex with a hosted LLM", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Per-run overrides of config.toml.
#[derive(Debug, Args)]
pub struct Overrides {
    /// Bedrock region (overrides config).
    #[arg(long, global = true, value_name = "REGION")]
    pub region: Option<String>,

    /// Bedrock model identifier (overrides config).
    #[arg(long, global = true, value_name = "ID")]
    pub model_id: Option<String>,

    /// Continue past failed queries; exit status is still 1 if any failed.
    #[arg(long, global = true)]
    pub keep_going: bool,
}

impl Overrides {
    fn apply(&self, cfg: &mut ClassifierConfig) {
        if let Some(region) = &self.region {
            cfg.region = region.clone();
        }
        if let Some(model_id) = &self.model_id {
            cfg.model_id = model_id.clone();
        }
    }

    fn on_failure(&self) -> OnFailure {
        if self.keep_going {
            OnFailure::Continue
        } else {
            OnFailure::Abort
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify the built-in example queries.
    Demo,

    /// Classify the given queries in order.
    Classify {
        /// One or more queries.
        #[arg(required = true)]
        queries: Vec<String>,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        cli.overrides.apply(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        let on_failure = cli.overrides.on_failure();
        match cli.command.unwrap_or(CliCommand::Demo) {
            CliCommand::Demo => run_demo(&cfg, on_failure)?,
            CliCommand::Classify { queries } => run_classify(&cfg, &queries, on_failure)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
