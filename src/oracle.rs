use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{BenchError, Result};
use crate::gateway::Backend;

/// Resolves `name` to an oracle id, creating the oracle from the code in
/// `code_path` only when the service does not know it yet. A second call with
/// the same name always finds the first one's oracle.
///
/// If the lookup returns several oracles the first entry wins.
pub async fn define_oracle<B: Backend>(backend: &mut B, code_path: &Path, name: &str) -> Result<String> {
    let found = backend.find_oracle(name).await?;

    if let Some(oracle) = found.first() {
        if found.len() > 1 {
            warn!("{} oracles named '{}', using id {}", found.len(), name, oracle.id);
        }
        println!("Oracle {} -> id:{}", oracle.name, oracle.id);
        return Ok(oracle.id.clone());
    }

    println!("Defining oracle {} ...", name);
    let code = fs::read_to_string(code_path).map_err(|source| BenchError::OracleSource {
        path: code_path.to_path_buf(),
        source,
    })?;

    let id = backend.create_oracle(name, &code).await?;
    info!("created oracle '{}' ({} bytes of code)", name, code.len());
    println!("  -> id:{}", id);

    Ok(id)
}
