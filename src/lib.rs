pub mod error;
pub mod model;
pub mod timer;
pub mod check;
pub mod gateway;
pub mod oracle;
pub mod config;
pub mod report;
pub mod bench;

pub mod pb {
    tonic::include_proto!("sum");
}

pub use bench::Driver;
pub use config::{BenchConfig, CallPolicy};
pub use error::{BenchError, Result};
pub use gateway::{Backend, GrpcGateway};
