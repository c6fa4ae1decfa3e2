#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;

use oraclebench::model::{Call, CallOutput, OracleRef, Record};
use oraclebench::{Backend, BenchConfig, BenchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    FindOracle,
    CreateOracle,
    CreateRecord,
    Run,
    DeleteRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    FindOracle(String),
    CreateOracle { name: String, code: String },
    CreateRecord(Record),
    Run(Call),
    DeleteRecord(String),
}

impl Request {
    pub fn op(&self) -> Op {
        match self {
            Request::FindOracle(_) => Op::FindOracle,
            Request::CreateOracle { .. } => Op::CreateOracle,
            Request::CreateRecord(_) => Op::CreateRecord,
            Request::Run(_) => Op::Run,
            Request::DeleteRecord(_) => Op::DeleteRecord,
        }
    }
}

/// In-memory service that keeps oracles and records across calls, hands out
/// sequential string ids and logs every request it receives.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub oracles: Vec<OracleRef>,
    pub records: HashMap<String, Record>,
    pub requests: Vec<Request>,
    next_record: u64,
    next_oracle: u64,
    fail_at: Option<(Op, usize)>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `nth` (1-based) request of kind `op` come back with
    /// `success = false`.
    pub fn failing_at(op: Op, nth: usize) -> Self {
        Self { fail_at: Some((op, nth)), ..Self::default() }
    }

    pub fn with_oracle(mut self, id: &str, name: &str) -> Self {
        self.oracles.push(OracleRef { id: id.into(), name: name.into() });
        self
    }

    pub fn count(&self, op: Op) -> usize {
        self.requests.iter().filter(|r| r.op() == op).count()
    }

    fn record(&mut self, req: Request) -> Result<()> {
        let op = req.op();
        self.requests.push(req);
        match self.fail_at {
            Some((fail_op, nth)) if fail_op == op && self.count(op) == nth => {
                Err(BenchError::Rejected(format!("{:?} #{} refused", op, nth)))
            }
            _ => Ok(()),
        }
    }
}

impl Backend for MockBackend {
    async fn find_oracle(&mut self, name: &str) -> Result<Vec<OracleRef>> {
        self.record(Request::FindOracle(name.into()))?;
        Ok(self.oracles.iter().filter(|o| o.name == name).cloned().collect())
    }

    async fn create_oracle(&mut self, name: &str, code: &str) -> Result<String> {
        self.record(Request::CreateOracle { name: name.into(), code: code.into() })?;
        self.next_oracle += 1;
        let id = format!("o{}", self.next_oracle);
        self.oracles.push(OracleRef { id: id.clone(), name: name.into() });
        Ok(id)
    }

    async fn create_record(&mut self, record: &Record) -> Result<String> {
        self.record(Request::CreateRecord(record.clone()))?;
        self.next_record += 1;
        let id = self.next_record.to_string();
        self.records.insert(id.clone(), record.clone());
        Ok(id)
    }

    async fn run(&mut self, call: &Call) -> Result<CallOutput> {
        self.record(Request::Run(call.clone()))?;
        Ok(CallOutput { msg: String::new(), compressed: false, payload: b"{}".to_vec() })
    }

    async fn delete_record(&mut self, id: &str) -> Result<()> {
        self.record(Request::DeleteRecord(id.into()))?;
        match self.records.remove(id) {
            Some(_) => Ok(()),
            None => Err(BenchError::Rejected(format!("record {} not found.", id))),
        }
    }
}

pub const ORACLE_CODE: &str = "function dotAll(id, w) { return records.Find(id).Dot(records.Find(id)) * w; }";

/// Writes oracle code to a temporary file that lives as long as the handle.
pub fn oracle_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ORACLE_CODE.as_bytes()).unwrap();
    file
}

pub fn small_config(file: &tempfile::NamedTempFile, rows: usize, columns: usize) -> BenchConfig {
    BenchConfig {
        rows,
        columns,
        oracle_file: file.path().to_path_buf(),
        ..BenchConfig::default()
    }
}
