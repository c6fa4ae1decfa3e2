use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::{BenchConfig, CallPolicy};
use crate::error::Result;
use crate::gateway::Backend;
use crate::model::{Call, Record};
use crate::oracle::define_oracle;
use crate::report::{Phase, PhaseReport, RunReport};
use crate::timer::Timer;

/// Owns the service handle and the local id -> record index for one run.
///
/// Phases run strictly in order: define, create, call, delete. The first
/// error ends the run; nothing already created is rolled back.
pub struct Driver<B: Backend> {
    backend: B,
    config: BenchConfig,
    index: BTreeMap<String, Record>,
}

impl<B: Backend> Driver<B> {
    pub fn new(backend: B, config: BenchConfig) -> Self {
        Self {
            backend,
            config,
            index: BTreeMap::new(),
        }
    }

    /// Records created so far, keyed by the id the service assigned.
    /// Never pruned during a run.
    pub fn index(&self) -> &BTreeMap<String, Record> {
        &self.index
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub async fn run(&mut self) -> Result<RunReport> {
        let oracle_id = self.define().await?;
        println!();

        let mut phases = Vec::with_capacity(3);
        phases.push(self.create_records().await?);
        phases.push(self.call_oracle(&oracle_id).await?);
        phases.push(self.delete_records().await?);

        Ok(RunReport {
            oracle_id,
            rows: self.config.rows,
            columns: self.config.columns,
            phases,
        })
    }

    pub async fn define(&mut self) -> Result<String> {
        let id = define_oracle(&mut self.backend, &self.config.oracle_file, &self.config.oracle_name).await?;
        info!("oracle '{}' resolved to id {}", self.config.oracle_name, id);
        Ok(id)
    }

    pub async fn create_records(&mut self) -> Result<PhaseReport> {
        let (rows, columns) = (self.config.rows, self.config.columns);
        print!("CREATE ({}x{}) : ", rows, columns);

        let mut rng = rand::thread_rng();
        let timer = Timer::start();
        for _ in 0..rows {
            let record = Record::generate(&mut rng, columns);
            let id = self.backend.create_record(&record).await?;
            debug!("created record {}", id);
            self.index.insert(id, record);
        }
        let lap = timer.stop(Some(rows));

        println!("{}", lap);
        info!("created {} records in {} ms", rows, lap.elapsed_ms);
        Ok(PhaseReport { phase: Phase::Create, items: rows, lap })
    }

    pub async fn call_oracle(&mut self, oracle_id: &str) -> Result<PhaseReport> {
        print!("CALL {} x{} : ", self.config.oracle_name, self.index.len());

        let mut calls = 0;
        let timer = Timer::start();
        for id in self.index.keys() {
            let call = Call::for_record(oracle_id, id, &self.config.oracle_arg);
            let output = self.backend.run(&call).await?;
            calls += 1;
            debug!("oracle {} on {} -> {} payload bytes", oracle_id, id, output.payload.len());

            if self.config.call_policy == CallPolicy::FirstOnly {
                break;
            }
        }
        let lap = timer.stop(None);

        println!("{}", lap);
        info!("issued {} oracle calls in {} ms", calls, lap.elapsed_ms);
        Ok(PhaseReport { phase: Phase::Call, items: calls, lap })
    }

    pub async fn delete_records(&mut self) -> Result<PhaseReport> {
        let count = self.index.len();
        print!("DEL x{} : ", count);

        let timer = Timer::start();
        for id in self.index.keys() {
            self.backend.delete_record(id).await?;
            debug!("deleted record {}", id);
        }
        let lap = timer.stop(Some(count));

        println!("{}", lap);
        info!("deleted {} records in {} ms", count, lap.elapsed_ms);
        Ok(PhaseReport { phase: Phase::Delete, items: count, lap })
    }
}
