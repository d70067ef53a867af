// crates/dvf-core/src/join.rs

use polars::prelude::*;

use crate::error::{PipelineError, Result};
use crate::properties::POSTAL_CODE;
use crate::schema::require_columns;
use crate::schools::POSTAL_CODE_KEY;

/// Inner-joins filtered properties against per-postal-code school counts.
///
/// The counts side is unique on `codepostal`, so this is many-to-one: each
/// property row gains exactly one `count`, and rows whose postal code has no
/// surviving school are dropped. The counts side is also small (one row per
/// postal code) and serves as the hash-join build side. Only the left key
/// survives; the output carries a single postal-code column, `code_postal`.
pub fn join_school_counts(properties: &DataFrame, counts: &DataFrame) -> Result<DataFrame> {
    require_columns(properties, "property", &[POSTAL_CODE])?;
    require_columns(counts, "school count", &[POSTAL_CODE_KEY])?;

    let left_dtype = properties.column(POSTAL_CODE)?.dtype().clone();
    let right_dtype = counts.column(POSTAL_CODE_KEY)?.dtype().clone();

    let mut left = properties.clone().lazy();
    let mut right = counts.clone().lazy();

    if left_dtype != right_dtype {
        // Integer widths can diverge between the two inferred schemas; widen
        // both to Int64. Anything else (string vs integer, float vs integer)
        // is not a comparable key pair.
        if left_dtype.is_integer() && right_dtype.is_integer() {
            left = left.with_column(col(POSTAL_CODE).cast(DataType::Int64));
            right = right.with_column(col(POSTAL_CODE_KEY).cast(DataType::Int64));
        } else {
            return Err(PipelineError::JoinKeyTypeMismatch {
                left: left_dtype,
                right: right_dtype,
            });
        }
    }

    let mut joined = left
        .join(
            right,
            [col(POSTAL_CODE)],
            [col(POSTAL_CODE_KEY)],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;

    // Polars already drops the right key when the names differ; the guard
    // keeps the single-postal-code-column invariant independent of that.
    if joined
        .get_column_names()
        .iter()
        .any(|c| c.as_str() == POSTAL_CODE_KEY)
    {
        joined = joined.drop(POSTAL_CODE_KEY)?;
    }

    Ok(joined)
}
