//! Optional serde support for [`Matrix`] (feature = "serde").
//!
//! Matrices serialize as `{ rows, cols, data }`; the memoized
//! decomposition caches are never serialized. Deserialization
//! re-validates the shape.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Matrix;

#[derive(Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMatrix::deserialize(deserializer)?;
        if raw.cols == 0 || raw.rows == 0 {
            return Err(D::Error::custom("matrix dimensions must be at least 1x1"));
        }
        if raw.data.len() != raw.rows * raw.cols {
            return Err(D::Error::custom(
                "matrix data length does not match rows * cols",
            ));
        }
        Ok(Matrix::from_parts(raw.data, raw.rows, raw.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_exact() {
        let a = Matrix::from_vec(vec![1.0, 2.5, -3.0, 4.0e-12, 5.0, 6.0], 3).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn test_serialized_form() {
        let a = Matrix::from_vec(vec![1.0, 2.0], 2).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":2,"data":[1.0,2.0]}"#);
    }

    #[test]
    fn test_deserialize_rejects_bad_shape() {
        let r: Result<Matrix, _> =
            serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1.0,2.0,3.0]}"#);
        assert!(r.is_err());

        let r: Result<Matrix, _> = serde_json::from_str(r#"{"rows":0,"cols":0,"data":[]}"#);
        assert!(r.is_err());
    }
}
