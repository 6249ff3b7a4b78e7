//! Sequential batch driver: classify each query in order and print a block per query.

use std::io::{self, Write};

use thiserror::Error;

use crate::classifier::Classifier;
use crate::retry::ClassifyError;
use crate::transport::InferenceTransport;

/// Built-in queries run by `qclass demo`.
pub const DEFAULT_QUERIES: &[&str] = &[
    "What is 2+2?",
    "Explain the economic impact of artificial intelligence on job markets",
    "What color is the sky?",
    "Write a detailed marketing strategy for a new product launch",
];

const DELIMITER_WIDTH: usize = 50;

/// How the driver reacts to a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnFailure {
    /// Stop the batch at the first failure.
    #[default]
    Abort,
    /// Report the failure and continue with the next query.
    Continue,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("query {index} ({query:?}) failed")]
    Classify {
        index: usize,
        query: String,
        #[source]
        source: ClassifyError,
    },
    #[error("{failed} of {total} queries failed")]
    SomeFailed { failed: usize, total: usize },
    #[error("write output")]
    Io(#[from] io::Error),
}

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub classified: usize,
    pub failed: usize,
}

/// Classify `queries` in order, writing one block per query to `out`.
///
/// With `OnFailure::Abort` the first failure is returned immediately and no
/// later query is sent. With `OnFailure::Continue` failures are printed in
/// place and reported as `DriverError::SomeFailed` once the list is done.
pub fn run_batch<T, Q, W>(
    classifier: &Classifier<T>,
    queries: &[Q],
    on_failure: OnFailure,
    out: &mut W,
) -> Result<BatchReport, DriverError>
where
    T: InferenceTransport,
    Q: AsRef<str>,
    W: Write,
{
    let mut report = BatchReport::default();
    for (index, query) in queries.iter().enumerate() {
        let query = query.as_ref();
        match classifier.classify(query) {
            Ok(classification) => {
                writeln!(out, "Query: '{query}'")?;
                writeln!(out, "Classification: {classification}")?;
                report.classified += 1;
            }
            Err(source) if on_failure == OnFailure::Abort => {
                return Err(DriverError::Classify {
                    index,
                    query: query.to_string(),
                    source,
                });
            }
            Err(source) => {
                writeln!(out, "Query: '{query}'")?;
                writeln!(out, "Classification failed: {source}")?;
                report.failed += 1;
            }
        }
        writeln!(out, "{}", "-".repeat(DELIMITER_WIDTH))?;
    }

    tracing::info!(
        classified = report.classified,
        failed = report.failed,
        "batch finished"
    );
    if report.failed > 0 {
        return Err(DriverError::SomeFailed {
            failed: report.failed,
            total: queries.len(),
        });
    }
    Ok(report)
}
