use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::features::linking::domain::LinkReport;
use crate::features::linking::infrastructure::FragmentLinker;
use crate::shared::models::GraphStore;

pub struct LinkOutcome {
    pub store: GraphStore,
    pub report: LinkReport,
}

/// Links a list of fragment files, in order, into one store.
///
/// Fail-fast: the first unreadable or unparsable input aborts the run and
/// no output is produced. Input order determines the overwrite winner for
/// duplicate `calls`/`edges` keys.
pub struct LinkUseCase {
    inputs: Vec<PathBuf>,
}

impl LinkUseCase {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }

    /// Merge every input, then emit the store to `output`.
    pub fn execute(&self, output: &Path) -> Result<LinkOutcome> {
        let mut linker = FragmentLinker::new();
        for input in &self.inputs {
            linker.add_file(input)?;
        }
        linker.emit(output)?;
        let (store, report) = linker.into_parts();
        Ok(LinkOutcome { store, report })
    }
}
