use polars::prelude::DataFrame;

use crate::error::{PipelineError, Result};

/// Checks that every named column is present before a stage projects to it,
/// so a missing column surfaces as `MissingColumn` rather than a generic
/// column-not-found failure from deeper in the query.
pub fn require_columns(df: &DataFrame, relation: &'static str, columns: &[&str]) -> Result<()> {
    for name in columns {
        if !df.get_column_names().iter().any(|c| c.as_str() == *name) {
            return Err(PipelineError::MissingColumn {
                relation,
                column: (*name).to_string(),
            });
        }
    }
    Ok(())
}
