//! Persisting partition artifacts

use crate::core::emit::Emission;
use crate::error::{Result, SplitError};
use crate::io::delimited::serialize_records;
use std::path::Path;
use tracing::debug;

/// Create a directory and its parents if missing
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| SplitError::io(path, e))
}

pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| SplitError::io(path, e))?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Write a partition's record file, then its job configuration.
///
/// Both documents are serialized before the first write, so a serialization
/// failure never leaves a record file without its configuration.
pub async fn write_emission(emission: &Emission<'_>, delimiter: u8) -> Result<()> {
    let records = serialize_records(emission.records.iter().map(|r| r.fields()), delimiter)?;
    let config = emission.config.to_json_pretty()?;

    ensure_dir(&emission.paths.split_dir).await?;
    write_file(&emission.paths.records, &records).await?;
    write_file(&emission.paths.config, config.as_bytes()).await
}
