// crates/dvf-core/src/schools.rs

use polars::prelude::*;

use crate::error::Result;
use crate::schema::require_columns;

pub const ESTABLISHMENT_CODE: &str = "Code établissement";
pub const OFFICIAL_NAME: &str = "Appellation officielle";
pub const POSTAL_CODE: &str = "Code postal";
pub const POSTAL_CODE_KEY: &str = "codepostal";
pub const SCHOOL_COUNT: &str = "count";

/// Reduces the raw school relation to one row per postal code with the number
/// of schools in it.
///
/// Projection happens before the null drop, so nulls in unselected source
/// columns do not eliminate a row. Postal codes whose schools all drop out
/// are absent from the output, not present with a zero count.
pub fn aggregate_school_counts(raw: &DataFrame) -> Result<DataFrame> {
    require_columns(raw, "school", &[ESTABLISHMENT_CODE, OFFICIAL_NAME, POSTAL_CODE])?;

    let counts = raw
        .select([ESTABLISHMENT_CODE, OFFICIAL_NAME, POSTAL_CODE])?
        .lazy()
        .drop_nulls(None)
        .group_by([col(POSTAL_CODE)])
        .agg([len().cast(DataType::Int64).alias(SCHOOL_COUNT)])
        .rename([POSTAL_CODE], [POSTAL_CODE_KEY], true)
        .collect()?;

    Ok(counts)
}
