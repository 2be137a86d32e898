//! Link Service - merge fragment files into one graph store artifact

use std::path::PathBuf;

use tracing::info;

use crate::errors::Result;
use crate::features::linking::application::LinkUseCase;
use crate::features::linking::domain::LinkReport;

/// Result of one linking run.
#[derive(Debug)]
pub struct LinkSummary {
    /// Functions with a call-site table in the merged store.
    pub functions: usize,
    /// Entry points recorded.
    pub entries: usize,
    /// Duplicate-key conflicts, in observation order.
    pub report: LinkReport,
}

/// Links CFG fragments in input order and writes the merged document.
pub struct LinkService {
    inputs: Vec<PathBuf>,
    output: PathBuf,
}

impl LinkService {
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self { inputs, output }
    }

    pub fn execute(&self) -> Result<LinkSummary> {
        let outcome = LinkUseCase::new(self.inputs.clone()).execute(&self.output)?;
        let summary = LinkSummary {
            functions: outcome.store.function_count(),
            entries: outcome.store.entries.len(),
            report: outcome.report,
        };
        info!(
            output = %self.output.display(),
            functions = summary.functions,
            conflicts = summary.report.conflicts.len(),
            "link finished"
        );
        Ok(summary)
    }
}
