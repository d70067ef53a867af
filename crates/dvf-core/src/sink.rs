// crates/dvf-core/src/sink.rs

use std::io::Cursor;
use std::path::{Path, PathBuf};

use polars::io::parquet::write::{ParquetCompression, ParquetWriter, StatisticsOptions};
use polars::prelude::DataFrame;

use crate::error::{PipelineError, Result};

/// Serializes the relation to a zstd-compressed parquet file with statistics.
///
/// An existing destination is refused unless `overwrite` is set. The frame is
/// serialized to a buffer first and persisted through a sibling temp file
/// renamed into place, so a failure never leaves a truncated parquet at the
/// destination.
pub fn write_parquet(df: &DataFrame, path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(PipelineError::DestinationUnwritable {
            path: path.to_path_buf(),
            message: "destination already exists (enable overwrite to replace it)".to_string(),
        });
    }

    let bytes = parquet_bytes(df)?;

    let tmp = temp_sibling(path);
    if let Err(err) = std::fs::write(&tmp, &bytes) {
        return Err(unwritable(path, err));
    }
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(unwritable(path, err));
    }

    Ok(())
}

fn parquet_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let mut clone = df.clone();
        ParquetWriter::new(&mut cursor)
            .with_compression(ParquetCompression::Zstd(None))
            .with_statistics(StatisticsOptions::default())
            .finish(&mut clone)?;
    }
    Ok(buffer)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{file_name}.tmp"))
}

fn unwritable(path: &Path, err: std::io::Error) -> PipelineError {
    PipelineError::DestinationUnwritable {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
