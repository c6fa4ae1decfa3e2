use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::check::check;
use crate::error::{BenchError, Result};
use crate::model::{Call, CallOutput, OracleRef, Record};
use crate::pb;
use crate::pb::sum_service_client::SumServiceClient;

/// The five service operations the benchmark drives. Every method returns
/// only after the service answered, and any `success = false` reply surfaces
/// as `BenchError::Rejected`.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn find_oracle(&mut self, name: &str) -> Result<Vec<OracleRef>>;

    /// Returns the new oracle's identifier.
    async fn create_oracle(&mut self, name: &str, code: &str) -> Result<String>;

    /// Returns the new record's identifier.
    async fn create_record(&mut self, record: &Record) -> Result<String>;

    async fn run(&mut self, call: &Call) -> Result<CallOutput>;

    async fn delete_record(&mut self, id: &str) -> Result<()>;
}

/// gRPC client over a single channel, opened once and held for the run.
#[derive(Debug, Clone)]
pub struct GrpcGateway {
    client: SumServiceClient<Channel>,
}

impl GrpcGateway {
    pub async fn connect(addr: &str) -> Result<Self> {
        let endpoint = Endpoint::from_shared(addr.to_string())
            .map_err(|_| BenchError::InvalidEndpoint(addr.to_string()))?
            .tcp_nodelay(true);

        let channel = endpoint.connect().await.map_err(|source| BenchError::Unreachable {
            addr: addr.to_string(),
            source,
        })?;

        debug!("connected to {}", addr);
        Ok(Self::from_channel(channel))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self { client: SumServiceClient::new(channel) }
    }
}

impl Backend for GrpcGateway {
    async fn find_oracle(&mut self, name: &str) -> Result<Vec<OracleRef>> {
        let req = pb::ByName { name: name.to_string() };
        let resp = check(self.client.find_oracle(req).await?.into_inner())?;

        Ok(resp
            .oracles
            .into_iter()
            .map(|o| OracleRef { id: o.id, name: o.name })
            .collect())
    }

    async fn create_oracle(&mut self, name: &str, code: &str) -> Result<String> {
        let req = pb::Oracle {
            id: String::new(),
            name: name.to_string(),
            code: code.to_string(),
        };
        let resp = check(self.client.create_oracle(req).await?.into_inner())?;
        Ok(resp.msg)
    }

    async fn create_record(&mut self, record: &Record) -> Result<String> {
        let req = pb::Record {
            id: String::new(),
            data: record.data.clone(),
            meta: record
                .meta
                .iter()
                .map(|m| pb::NamedValue { name: m.name.clone(), value: m.value.clone() })
                .collect(),
        };
        let resp = check(self.client.create_record(req).await?.into_inner())?;
        Ok(resp.msg)
    }

    async fn run(&mut self, call: &Call) -> Result<CallOutput> {
        let req = pb::Call {
            oracle_id: call.oracle_id.clone(),
            args: call.args.clone(),
        };
        let resp = check(self.client.run(req).await?.into_inner())?;
        let data = resp.data.unwrap_or_default();

        Ok(CallOutput {
            msg: resp.msg,
            compressed: data.compressed,
            payload: data.payload,
        })
    }

    async fn delete_record(&mut self, id: &str) -> Result<()> {
        let req = pb::ById { id: id.to_string() };
        check(self.client.delete_record(req).await?.into_inner())?;
        Ok(())
    }
}
