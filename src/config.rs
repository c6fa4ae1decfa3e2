use std::path::PathBuf;

use crate::model::{DEFAULT_COLUMNS, DEFAULT_ROWS};

pub const DEFAULT_ADDR: &str = "http://127.0.0.1:50051";
pub const DEFAULT_ORACLE_FILE: &str = "example_oracle.js";
pub const DEFAULT_ORACLE_NAME: &str = "dotAll";
pub const DEFAULT_ORACLE_ARG: &str = "0.1";

/// How many indexed records the call phase invokes the oracle against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallPolicy {
    /// Stop after the first successful call, whatever the index size.
    #[default]
    FirstOnly,
    /// One call per indexed record.
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub addr: String,
    pub rows: usize,
    pub columns: usize,
    pub oracle_file: PathBuf,
    pub oracle_name: String,
    /// Second argument passed to every oracle call
    pub oracle_arg: String,
    pub call_policy: CallPolicy,
    /// Where to write the JSON run report, if anywhere
    pub report: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            oracle_file: PathBuf::from(DEFAULT_ORACLE_FILE),
            oracle_name: DEFAULT_ORACLE_NAME.to_string(),
            oracle_arg: DEFAULT_ORACLE_ARG.to_string(),
            call_policy: CallPolicy::default(),
            report: None,
        }
    }
}
