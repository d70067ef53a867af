// crates/dvf-core/src/pipeline.rs

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::{join, loader, properties, schools, sink};

/// Row counts observed at each stage of a successful run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub property_rows_read: usize,
    pub school_rows_read: usize,
    pub properties_retained: usize,
    pub postal_codes_with_schools: usize,
    pub output_rows: usize,
}

/// Runs the whole pipeline: load both sources, aggregate school counts,
/// filter properties, join on postal code, write parquet.
///
/// Stages execute one at a time in dependency order. Any failure propagates
/// immediately; there is no retry and no partial output.
pub fn run(full: &Path, school: &Path, output: &Path, overwrite: bool) -> Result<RunSummary> {
    let property_raw = loader::load_csv(full, loader::PROPERTY_SEPARATOR)?;
    info!(
        path = %full.display(),
        rows = property_raw.height(),
        "loaded property dataset"
    );

    let school_raw = loader::load_csv(school, loader::SCHOOL_SEPARATOR)?;
    info!(
        path = %school.display(),
        rows = school_raw.height(),
        "loaded school dataset"
    );

    let counts = schools::aggregate_school_counts(&school_raw)?;
    info!(postal_codes = counts.height(), "aggregated school counts");

    let filtered = properties::filter_properties(&property_raw)?;
    info!(rows = filtered.height(), "filtered property transactions");

    let joined = join::join_school_counts(&filtered, &counts)?;
    info!(rows = joined.height(), "joined school counts onto properties");

    sink::write_parquet(&joined, output, overwrite)?;
    info!(path = %output.display(), "wrote parquet output");

    Ok(RunSummary {
        property_rows_read: property_raw.height(),
        school_rows_read: school_raw.height(),
        properties_retained: filtered.height(),
        postal_codes_with_schools: counts.height(),
        output_rows: joined.height(),
    })
}
