use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{BenchError, Result};
use crate::timer::Lap;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Create,
    Call,
    Delete,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PhaseReport {
    pub phase: Phase,
    /// Number of RPCs issued during the phase
    pub items: usize,
    #[serde(flatten)]
    pub lap: Lap,
}

/// Summary of a whole run, one entry per timed phase.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub oracle_id: String,
    pub rows: usize,
    pub columns: usize,
    pub phases: Vec<PhaseReport>,
}

impl RunReport {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let to_report_err = |source| BenchError::Report { path: path.to_path_buf(), source };

        let body = serde_json::to_string_pretty(self).map_err(|e| to_report_err(io::Error::from(e)))?;
        fs::write(path, body).map_err(to_report_err)
    }
}
