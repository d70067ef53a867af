// crates/dvf-core/src/loader.rs

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::{PipelineError, Result};

pub const PROPERTY_SEPARATOR: u8 = b',';
pub const SCHOOL_SEPARATOR: u8 = b';';

/// Rows sampled to infer each column's dtype. Values beyond the sample that
/// contradict the inferred dtype fail the load; a whole-file scan would
/// instead quietly widen the column to string.
const INFER_SCHEMA_ROWS: usize = 100;

/// Loads a headered delimited file into a DataFrame with inferred column
/// dtypes. Inference failures are surfaced as `SchemaInference` rather than
/// silently coercing columns to strings.
pub fn load_csv(path: &Path, separator: u8) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_options = CsvParseOptions::default().with_separator(separator);

    // The reader owns the handle; it is released when the read finishes or fails.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_parse_options(parse_options)
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|source| PipelineError::SchemaInference {
            path: path.to_path_buf(),
            source,
        })
}
