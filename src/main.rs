use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use oraclebench::{BenchConfig, CallPolicy, Driver, GrpcGateway};
use oraclebench::config::{DEFAULT_ADDR, DEFAULT_ORACLE_ARG, DEFAULT_ORACLE_FILE, DEFAULT_ORACLE_NAME};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about = "Create/call/delete benchmark against an oracle execution service", long_about = None)]
struct Args {
    /// Service endpoint
    #[clap(long, env = "ORACLEBENCH_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Records to create
    #[clap(long, env = "ORACLEBENCH_ROWS", default_value = "3000")]
    rows: usize,

    /// Values per record
    #[clap(long, env = "ORACLEBENCH_COLUMNS", default_value = "475")]
    columns: usize,

    /// File holding the oracle's code, read only if the oracle must be created
    #[clap(long, env = "ORACLEBENCH_ORACLE_FILE", default_value = DEFAULT_ORACLE_FILE)]
    oracle_file: PathBuf,

    #[clap(long, env = "ORACLEBENCH_ORACLE_NAME", default_value = DEFAULT_ORACLE_NAME)]
    oracle_name: String,

    /// Literal passed as the second argument of every call
    #[clap(long, env = "ORACLEBENCH_ORACLE_ARG", default_value = DEFAULT_ORACLE_ARG)]
    oracle_arg: String,

    /// Call the oracle once per record instead of stopping after the first
    #[clap(long, env = "ORACLEBENCH_CALL_ALL")]
    call_all: bool,

    /// Write a JSON summary of the run here
    #[clap(long, env = "ORACLEBENCH_REPORT")]
    report: Option<PathBuf>,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        Self {
            addr: args.addr,
            rows: args.rows,
            columns: args.columns,
            oracle_file: args.oracle_file,
            oracle_name: args.oracle_name,
            oracle_arg: args.oracle_arg,
            call_policy: if args.call_all { CallPolicy::All } else { CallPolicy::FirstOnly },
            report: args.report,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,oraclebench=info"));
    tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_level(true)
    .init();

    let config = BenchConfig::from(Args::parse());

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            println!("ERROR: cannot start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(async_main(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Abort the whole run; already created records stay on the service.
            println!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn async_main(config: BenchConfig) -> oraclebench::Result<()> {
    let gateway = GrpcGateway::connect(&config.addr).await?;
    let report_path = config.report.clone();

    let mut driver = Driver::new(gateway, config);
    let report = driver.run().await?;

    if let Some(path) = report_path {
        report.write_json(&path)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
