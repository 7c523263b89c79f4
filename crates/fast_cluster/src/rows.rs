//! Row normalization: raw point records into validated coordinate rows.
//!
//! Input arrives either as a sequence of rows or in tabular columnar form.
//! Columnar input is transposed to rows first; every row is then validated to
//! carry a finite, in-range latitude/longitude pair in its first two
//! positions. Fields beyond position two are carried through untouched.
use tracing::debug;

use crate::error::{Error, Result};

/// A single scalar value carried in a coordinate row.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<f32> for Field {
    fn from(value: f32) -> Self {
        Field::Number(value as f64)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Number(value as f64)
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Number(value as f64)
    }
}

impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Field::Number(value as f64)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_owned())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

/// One validated point: latitude, longitude, then opaque extra fields.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CoordinateRow {
    pub lat: f64,
    pub lon: f64,
    /// Trailing fields beyond the coordinate pair, in input order.
    pub extras: Vec<Field>,
}

/// Ordered collection of validated coordinate rows.
///
/// Immutable after [normalize]: there is no API to add or remove rows, which
/// is what lets the renderer drop per-marker bookkeeping entirely.
#[derive(Debug, Clone, Default)]
pub struct RowCollection {
    rows: Vec<CoordinateRow>,
}

impl RowCollection {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CoordinateRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoordinateRow> {
        self.rows.iter()
    }
}

/// Raw input accepted by the normalizer.
#[derive(Debug, Clone)]
pub enum ClusterData {
    /// One inner sequence per record: `[lat, lon, extras..]`.
    Rows(Vec<Vec<Field>>),
    /// Tabular columnar form, one inner sequence per column. Transposed to
    /// records before validation; no interpretation of column names or roles.
    Columns(Vec<Vec<Field>>),
}

impl From<Vec<Vec<Field>>> for ClusterData {
    fn from(rows: Vec<Vec<Field>>) -> Self {
        ClusterData::Rows(rows)
    }
}

impl From<Vec<(f64, f64)>> for ClusterData {
    fn from(points: Vec<(f64, f64)>) -> Self {
        ClusterData::Rows(
            points
                .into_iter()
                .map(|(lat, lon)| vec![Field::Number(lat), Field::Number(lon)])
                .collect(),
        )
    }
}

/// Validate raw input into an ordered [RowCollection].
///
/// Fails with [`Error::Validation`] on the first row whose coordinate pair is
/// missing, non-numeric, non-finite, or out of range. Row order is preserved;
/// empty input yields an empty collection.
pub fn normalize(data: impl Into<ClusterData>) -> Result<RowCollection> {
    let raw = match data.into() {
        ClusterData::Rows(rows) => rows,
        ClusterData::Columns(columns) => transpose(columns)?,
    };

    let mut rows = Vec::with_capacity(raw.len());
    for (index, row) in raw.into_iter().enumerate() {
        rows.push(validate_row(index, row)?);
    }

    debug!("normalized {} coordinate row(s)", rows.len());
    Ok(RowCollection { rows })
}

/// Turn columnar input into row-major records, preserving column order within
/// each record. Pure shape transform.
fn transpose(columns: Vec<Vec<Field>>) -> Result<Vec<Vec<Field>>> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };

    let expected = first.len();
    for (column, values) in columns.iter().enumerate() {
        if values.len() != expected {
            return Err(Error::RaggedTable {
                column,
                len: values.len(),
                expected,
            });
        }
    }

    let mut rows = vec![Vec::with_capacity(columns.len()); expected];
    for values in columns {
        for (row, value) in values.into_iter().enumerate() {
            rows[row].push(value);
        }
    }

    Ok(rows)
}

fn validate_row(index: usize, row: Vec<Field>) -> Result<CoordinateRow> {
    if row.len() < 2 {
        return Err(Error::Validation {
            row: index,
            reason: format!(
                "expected at least latitude and longitude, got {} value(s)",
                row.len()
            ),
        });
    }

    let mut values = row.into_iter();
    let lat = coerce_coordinate(index, "latitude", values.next())?;
    let lon = coerce_coordinate(index, "longitude", values.next())?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::Validation {
            row: index,
            reason: format!("latitude {lat} out of range [-90, 90]"),
        });
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::Validation {
            row: index,
            reason: format!("longitude {lon} out of range [-180, 180]"),
        });
    }

    Ok(CoordinateRow {
        lat,
        lon,
        extras: values.collect(),
    })
}

/// Coerce a leading row value to a coordinate. Numeric text is accepted and
/// parsed, matching common tabular sources that carry coordinates as strings.
fn coerce_coordinate(row: usize, axis: &str, value: Option<Field>) -> Result<f64> {
    let value = match value {
        Some(Field::Number(n)) => n,
        Some(Field::Text(s)) => s.trim().parse::<f64>().map_err(|_| Error::Validation {
            row,
            reason: format!("{axis} '{s}' is not numeric"),
        })?,
        Some(other) => {
            return Err(Error::Validation {
                row,
                reason: format!("{axis} must be numeric, got {other:?}"),
            })
        }
        None => {
            return Err(Error::Validation {
                row,
                reason: format!("{axis} is missing"),
            })
        }
    };

    if !value.is_finite() {
        return Err(Error::Validation {
            row,
            reason: format!("{axis} must be finite"),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: Vec<Field>) -> Vec<Vec<Field>> {
        vec![values]
    }

    #[test]
    fn valid_coordinates_pass_through_unchanged() {
        let rows = normalize(row(vec![45.5.into(), (-122.6).into()])).expect("valid");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows()[0].lat, 45.5);
        assert_eq!(rows.rows()[0].lon, -122.6);
        assert!(rows.rows()[0].extras.is_empty());
    }

    #[test]
    fn extra_fields_are_preserved_in_order() {
        let rows = normalize(row(vec![
            45.6.into(),
            (-122.7).into(),
            "red".into(),
            7.into(),
        ]))
        .expect("valid");
        assert_eq!(
            rows.rows()[0].extras,
            vec![Field::Text("red".into()), Field::Number(7.0)]
        );
    }

    #[test]
    fn latitude_out_of_range_fails() {
        let err = normalize(row(vec![90.5.into(), 0.0.into()])).unwrap_err();
        assert!(matches!(err, Error::Validation { row: 0, .. }));
    }

    #[test]
    fn longitude_out_of_range_fails() {
        let err = normalize(row(vec![0.0.into(), 180.5.into()])).unwrap_err();
        assert!(matches!(err, Error::Validation { row: 0, .. }));
    }

    #[test]
    fn short_row_fails_with_its_index() {
        let data: Vec<Vec<Field>> = vec![vec![1.0.into(), 2.0.into()], vec![3.0.into()]];
        let err = normalize(data).unwrap_err();
        assert!(matches!(err, Error::Validation { row: 1, .. }));
    }

    #[test]
    fn textual_coordinates_are_coerced() {
        let rows = normalize(row(vec![" 45.5 ".into(), "-122.6".into()])).expect("coerced");
        assert_eq!(rows.rows()[0].lat, 45.5);
        assert_eq!(rows.rows()[0].lon, -122.6);
    }

    #[test]
    fn non_numeric_coordinate_fails() {
        let err = normalize(row(vec!["north".into(), 0.0.into()])).unwrap_err();
        assert!(matches!(err, Error::Validation { row: 0, .. }));
    }

    #[test]
    fn boolean_coordinate_fails() {
        let err = normalize(row(vec![true.into(), 0.0.into()])).unwrap_err();
        assert!(matches!(err, Error::Validation { row: 0, .. }));
    }

    #[test]
    fn non_finite_coordinate_fails() {
        let err = normalize(row(vec![f64::NAN.into(), 0.0.into()])).unwrap_err();
        assert!(matches!(err, Error::Validation { row: 0, .. }));
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        let rows = normalize(Vec::<Vec<Field>>::new()).expect("empty is valid");
        assert!(rows.is_empty());
    }

    #[test]
    fn columnar_input_is_transposed_in_order() {
        let data = ClusterData::Columns(vec![
            vec![45.5.into(), 45.6.into()],
            vec![(-122.6).into(), (-122.7).into()],
            vec!["a".into(), "b".into()],
        ]);
        let rows = normalize(data).expect("valid table");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows()[0].lat, 45.5);
        assert_eq!(rows.rows()[0].extras, vec![Field::Text("a".into())]);
        assert_eq!(rows.rows()[1].lon, -122.7);
        assert_eq!(rows.rows()[1].extras, vec![Field::Text("b".into())]);
    }

    #[test]
    fn ragged_columns_fail_with_column_index() {
        let data = ClusterData::Columns(vec![
            vec![45.5.into(), 45.6.into()],
            vec![(-122.6).into()],
        ]);
        let err = normalize(data).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedTable {
                column: 1,
                len: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn point_tuples_convert_to_rows() {
        let rows = normalize(vec![(45.5, -122.6), (45.6, -122.7)]).expect("valid");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows()[1].lat, 45.6);
    }
}
