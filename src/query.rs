use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// One coordinate of a query, either a single value or an ordered sequence of them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Coordinates {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl From<f64> for Coordinates {
    fn from(v: f64) -> Self {
        Coordinates::Scalar(v)
    }
}

impl From<Vec<f64>> for Coordinates {
    fn from(v: Vec<f64>) -> Self {
        Coordinates::Sequence(v)
    }
}

impl From<&[f64]> for Coordinates {
    fn from(v: &[f64]) -> Self {
        Coordinates::Sequence(v.to_vec())
    }
}

/// Spherical query, radius in planetary radii and angles in radians.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RtpQuery {
    pub r: Coordinates,
    pub colat: Coordinates,
    pub lon: Coordinates,
}

/// Cartesian query in planetary radii.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct XyzQuery {
    pub x: Coordinates,
    pub y: Coordinates,
    pub z: Coordinates,
}

/// Field vectors in nT, shaped like the query they answer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldOutput {
    Single([f64; 3]),
    Many(Vec<[f64; 3]>),
}

impl FieldOutput {
    pub(crate) fn from_rows(rows: &Array2<f64>, scalar: bool) -> Self {
        if scalar && rows.nrows() == 1 {
            return FieldOutput::Single([rows[[0, 0]], rows[[0, 1]], rows[[0, 2]]]);
        }
        FieldOutput::Many(
            rows.rows()
                .into_iter()
                .map(|row| [row[0], row[1], row[2]])
                .collect(),
        )
    }

    /// Number of field vectors held.
    pub fn len(&self) -> usize {
        match self {
            FieldOutput::Single(_) => 1,
            FieldOutput::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rejects three coordinate columns of unequal length.
pub(crate) fn check_lengths(names: [&str; 3], lens: [usize; 3]) -> Result<(), FieldError> {
    if lens[0] == lens[1] && lens[0] == lens[2] {
        return Ok(());
    }
    Err(FieldError::InputShape(format!(
        "{} has {} values, {} has {} and {} has {}",
        names[0], lens[0], names[1], lens[1], names[2], lens[2]
    )))
}

/// Three coordinate columns of equal length, and whether they came in as scalars.
#[derive(Debug)]
pub(crate) struct Columns {
    pub a: Array1<f64>,
    pub b: Array1<f64>,
    pub c: Array1<f64>,
    pub scalar: bool,
}

/// Checks that the three coordinates are all scalars or all sequences of one length.
pub(crate) fn columns(
    names: [&str; 3],
    a: &Coordinates,
    b: &Coordinates,
    c: &Coordinates,
) -> Result<Columns, FieldError> {
    use Coordinates::*;

    match (a, b, c) {
        (Scalar(a), Scalar(b), Scalar(c)) => Ok(Columns {
            a: Array1::from_elem(1, *a),
            b: Array1::from_elem(1, *b),
            c: Array1::from_elem(1, *c),
            scalar: true,
        }),
        (Sequence(a), Sequence(b), Sequence(c)) => {
            check_lengths(names, [a.len(), b.len(), c.len()])?;
            Ok(Columns {
                a: Array1::from(a.clone()),
                b: Array1::from(b.clone()),
                c: Array1::from(c.clone()),
                scalar: false,
            })
        }
        _ => Err(FieldError::InputShape(format!(
            "{}, {} and {} must be all scalars or all sequences",
            names[0], names[1], names[2]
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use super::Coordinates::{Scalar, Sequence};

    #[test]
    fn test_scalars_make_single_column() {
        let c = columns(["r", "colat", "lon"], &Scalar(1.0), &Scalar(2.0), &Scalar(3.0)).unwrap();
        assert!(c.scalar);
        assert_eq!(c.a, array![1.0]);
        assert_eq!(c.c, array![3.0]);
    }

    #[test]
    fn test_mixed_shapes_are_rejected() {
        let err = columns(
            ["r", "colat", "lon"],
            &Scalar(1.0),
            &Sequence(vec![1.0, 2.0]),
            &Scalar(3.0),
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::InputShape(_)));
    }

    #[test]
    fn test_unequal_sequences_are_rejected() {
        let err = columns(
            ["x", "y", "z"],
            &Sequence(vec![1.0, 2.0]),
            &Sequence(vec![1.0, 2.0]),
            &Sequence(vec![1.0]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("z has 1"));
    }

    #[test]
    fn test_check_lengths() {
        assert!(check_lengths(["r", "colat", "lon"], [0, 0, 0]).is_ok());
        assert!(check_lengths(["r", "colat", "lon"], [4, 4, 4]).is_ok());
        let err = check_lengths(["r", "colat", "lon"], [4, 3, 4]).unwrap_err();
        assert_eq!(err.to_string(), "InputShapeError: r has 4 values, colat has 3 and lon has 4");
    }

    #[test]
    fn test_output_shapes() {
        let rows = array![[1.0, 2.0, 3.0]];
        assert_eq!(FieldOutput::from_rows(&rows, true), FieldOutput::Single([1.0, 2.0, 3.0]));
        assert_eq!(
            FieldOutput::from_rows(&rows, false),
            FieldOutput::Many(vec![[1.0, 2.0, 3.0]])
        );

        let rows = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let out = FieldOutput::from_rows(&rows, false);
        assert_eq!(out, FieldOutput::Many(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
        assert_eq!(out.len(), 2);

        let empty = Array2::<f64>::zeros((0, 3));
        assert!(FieldOutput::from_rows(&empty, false).is_empty());
    }

    #[test]
    fn test_query_deserializes_scalars_and_sequences() {
        let q: RtpQuery =
            serde_json::from_str(r#"{"r": 1.5, "colat": [0.1, 0.2], "lon": 0}"#).unwrap();
        assert_eq!(q.r, Coordinates::Scalar(1.5));
        assert_eq!(q.colat, Coordinates::Sequence(vec![0.1, 0.2]));
        assert_eq!(q.lon, Coordinates::Scalar(0.0));

        let out = serde_json::to_string(&FieldOutput::Single([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(out, "[1.0,2.0,3.0]");
    }
}
