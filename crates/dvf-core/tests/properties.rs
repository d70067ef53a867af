use dvf_core::error::PipelineError;
use dvf_core::properties::{
    filter_properties, LOCAL_TYPE_CODE, LOCAL_TYPE_LABEL, POSTAL_CODE, PROPERTY_VALUE,
};
use polars::prelude::*;

fn raw_properties() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            PROPERTY_VALUE.into(),
            vec![Some(100000.0), Some(200000.0), Some(150000.0), None, Some(90000.0)],
        )
        .into(),
        Series::new(
            POSTAL_CODE.into(),
            vec![Some(75001i64), Some(75001), Some(75002), Some(75001), Some(75003)],
        )
        .into(),
        Series::new(
            LOCAL_TYPE_CODE.into(),
            vec![Some(1i64), Some(4), Some(2), Some(1), Some(9)],
        )
        .into(),
        Series::new(
            LOCAL_TYPE_LABEL.into(),
            vec![
                Some("Maison"),
                Some("Usine"),
                Some("Appartement"),
                Some("Maison"),
                Some("Dépendance"),
            ],
        )
        .into(),
        // Unselected source column full of nulls; never affects survival.
        Series::new("no_disposition".into(), vec![None::<i64>; 5]).into(),
    ])
    .unwrap()
}

#[test]
fn industrial_premises_and_incomplete_rows_are_excluded() -> PolarsResult<()> {
    let filtered = filter_properties(&raw_properties()).unwrap();

    assert_eq!(
        filtered
            .get_column_names()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>(),
        vec![PROPERTY_VALUE, POSTAL_CODE, LOCAL_TYPE_CODE, LOCAL_TYPE_LABEL],
    );

    // Row 2 drops for code 4, row 4 for its null valeur_fonciere. The
    // undocumented code 9 is retained.
    assert_eq!(filtered.height(), 3);
    let codes = filtered.column(LOCAL_TYPE_CODE)?.i64()?;
    assert!(codes.into_iter().all(|code| code != Some(4)));
    assert!(codes.into_iter().any(|code| code == Some(9)));

    Ok(())
}

#[test]
fn null_property_value_is_excluded_even_with_valid_postal_code() -> PolarsResult<()> {
    let filtered = filter_properties(&raw_properties()).unwrap();
    assert_eq!(filtered.column(PROPERTY_VALUE)?.null_count(), 0);
    Ok(())
}

#[test]
fn missing_projection_column_is_reported() {
    let raw = DataFrame::new(vec![
        Series::new(PROPERTY_VALUE.into(), vec![100000.0]).into(),
        Series::new(POSTAL_CODE.into(), vec![75001i64]).into(),
        Series::new(LOCAL_TYPE_LABEL.into(), vec!["Maison"]).into(),
    ])
    .unwrap();

    let err = filter_properties(&raw).unwrap_err();
    match err {
        PipelineError::MissingColumn { relation, column } => {
            assert_eq!(relation, "property");
            assert_eq!(column, LOCAL_TYPE_CODE);
        }
        other => panic!("expected MissingColumn, got {other}"),
    }
}
