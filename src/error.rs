use std::path::PathBuf;

/// Errors raised while reading and validating a grid data file.
#[derive(Debug, thiserror::Error)]
pub enum GridFileError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading grid data: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is empty, expected a header line")]
    MissingHeader,

    #[error("header is missing field `{field}` (expected 7 fields)")]
    MissingField { field: &'static str },

    #[error("header field `{field}` has invalid value `{token}`")]
    InvalidField { field: &'static str, token: String },

    #[error("header field `{field}` must be positive, got {value}")]
    InvalidDimension { field: &'static str, value: i64 },

    #[error("line {line}, column {column}: `{token}` is not an integer")]
    InvalidValue {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: row has {found} values, previous rows have {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("could not assemble grid matrix: {0}")]
    Matrix(#[from] ndarray::ShapeError),

    #[error("incorrect grid dimensions: header declares {expected:?} (rows, columns), data has {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl GridFileError {
    /// True for the validation failure, false for parse and I/O failures.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, GridFileError::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_matrix_assembly_error_is_not_a_shape_mismatch() {
        let err: GridFileError = Array2::from_shape_vec((2, 2), vec![1, 2, 3]).unwrap_err().into();
        assert!(matches!(err, GridFileError::Matrix(_)));
        assert!(!err.is_shape_mismatch());
        assert!(err.to_string().starts_with("could not assemble grid matrix"));
    }

    #[test]
    fn test_shape_mismatch_message_lists_both_shapes() {
        let err = GridFileError::ShapeMismatch { expected: (2, 3), found: (1, 3) };
        assert!(err.is_shape_mismatch());
        assert_eq!(
            err.to_string(),
            "incorrect grid dimensions: header declares (2, 3) (rows, columns), data has (1, 3)"
        );
    }
}
