// crates/dvf-core/src/properties.rs

use polars::prelude::*;

use crate::error::Result;
use crate::schema::require_columns;

pub const PROPERTY_VALUE: &str = "valeur_fonciere";
pub const POSTAL_CODE: &str = "code_postal";
pub const LOCAL_TYPE_CODE: &str = "code_type_local";
pub const LOCAL_TYPE_LABEL: &str = "type_local";

/// Category code for industrial premises. Everything else is kept, including
/// codes with no documented meaning: the filter is a strict inequality, not
/// an allow-list.
pub const INDUSTRIAL_TYPE_CODE: i64 = 4;

/// Projects the raw property relation to the four columns of interest, drops
/// incomplete rows, and excludes industrial premises.
pub fn filter_properties(raw: &DataFrame) -> Result<DataFrame> {
    require_columns(
        raw,
        "property",
        &[PROPERTY_VALUE, POSTAL_CODE, LOCAL_TYPE_CODE, LOCAL_TYPE_LABEL],
    )?;

    let filtered = raw
        .select([PROPERTY_VALUE, POSTAL_CODE, LOCAL_TYPE_CODE, LOCAL_TYPE_LABEL])?
        .lazy()
        .drop_nulls(None)
        .filter(col(LOCAL_TYPE_CODE).neq(lit(INDUSTRIAL_TYPE_CODE)))
        .collect()?;

    Ok(filtered)
}
