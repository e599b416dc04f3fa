use crate::error::GridFileError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coordinate rectangle mapped onto the image axes, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    pub fn span_x(&self) -> f64 {
        (self.x_max - self.x_min).abs()
    }

    pub fn span_y(&self) -> f64 {
        (self.y_max - self.y_min).abs()
    }

    /// Width over height in data units, or `None` when either span is degenerate.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let (sx, sy) = (self.span_x(), self.span_y());
        if sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0 {
            Some(sx / sy)
        } else {
            None
        }
    }
}

/// First line of a grid data file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub width: usize,
    pub height: usize,
    /// Time the generator spent computing the grid, in seconds.
    pub elapsed_seconds: f64,
    pub extent: Extent,
}

const FIELDS: [&str; 7] = ["width", "height", "elapsed", "x_min", "x_max", "y_min", "y_max"];

/// Parse `WIDTH HEIGHT TEMPO X_MIN X_MAX Y_MIN Y_MAX`.
///
/// Fields are positional. Tokens after the seventh are ignored.
pub fn parse_header(line: &str) -> Result<Header, GridFileError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(GridFileError::MissingHeader);
    }
    if tokens.len() < FIELDS.len() {
        return Err(GridFileError::MissingField {
            field: FIELDS[tokens.len()],
        });
    }
    if tokens.len() > FIELDS.len() {
        tracing::debug!(extra = tokens.len() - FIELDS.len(), "ignoring trailing header tokens");
    }

    let width = parse_dimension(FIELDS[0], tokens[0])?;
    let height = parse_dimension(FIELDS[1], tokens[1])?;
    let elapsed_seconds = parse_field::<f64>(FIELDS[2], tokens[2])?;
    let extent = Extent {
        x_min: parse_field(FIELDS[3], tokens[3])?,
        x_max: parse_field(FIELDS[4], tokens[4])?,
        y_min: parse_field(FIELDS[5], tokens[5])?,
        y_max: parse_field(FIELDS[6], tokens[6])?,
    };

    Ok(Header {
        width,
        height,
        elapsed_seconds,
        extent,
    })
}

fn parse_field<T: FromStr>(field: &'static str, token: &str) -> Result<T, GridFileError> {
    token.parse().map_err(|_| GridFileError::InvalidField {
        field,
        token: token.to_string(),
    })
}

fn parse_dimension(field: &'static str, token: &str) -> Result<usize, GridFileError> {
    let value: i64 = parse_field(field, token)?;
    if value <= 0 {
        return Err(GridFileError::InvalidDimension { field, value });
    }
    usize::try_from(value).map_err(|_| GridFileError::InvalidField {
        field,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_header() {
        let header = parse_header("3 2 1.50 -1.0 1.0 -1.0 1.0").unwrap();
        assert_eq!(header.width, 3);
        assert_eq!(header.height, 2);
        assert!((header.elapsed_seconds - 1.5).abs() < 1e-12);
        assert_eq!(header.extent.x_min, -1.0);
        assert_eq!(header.extent.y_max, 1.0);
    }

    #[test]
    fn test_parse_generator_precision() {
        let line = "4000 4000 812.3456 -0.05000000000000000 0.05000000000000000 -0.05000000000000000 0.05000000000000000";
        let header = parse_header(line).unwrap();
        assert_eq!(header.width, 4000);
        assert!((header.extent.span_x() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_missing_field_is_named() {
        let err = parse_header("3 2 1.5 -1 1").unwrap_err();
        assert!(matches!(err, GridFileError::MissingField { field: "y_min" }));
    }

    #[test]
    fn test_empty_line_is_missing_header() {
        assert!(matches!(parse_header("   "), Err(GridFileError::MissingHeader)));
    }

    #[test]
    fn test_non_numeric_field_fails() {
        let err = parse_header("3 two 1.5 -1 1 -1 1").unwrap_err();
        match err {
            GridFileError::InvalidField { field, token } => {
                assert_eq!(field, "height");
                assert_eq!(token, "two");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fractional_width_is_rejected() {
        assert!(matches!(
            parse_header("3.0 2 1.5 -1 1 -1 1"),
            Err(GridFileError::InvalidField { field: "width", .. })
        ));
    }

    #[test]
    fn test_zero_and_negative_dimensions_fail() {
        assert!(matches!(
            parse_header("0 2 1.5 -1 1 -1 1"),
            Err(GridFileError::InvalidDimension { field: "width", value: 0 })
        ));
        assert!(matches!(
            parse_header("3 -2 1.5 -1 1 -1 1"),
            Err(GridFileError::InvalidDimension { field: "height", value: -2 })
        ));
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let header = parse_header("3 2 1.5 -1 1 -1 1 trailing junk").unwrap();
        assert_eq!(header.height, 2);
    }

    #[test]
    fn test_extent_orientation() {
        let extent = Extent { x_min: 1.0, x_max: -1.0, y_min: -2.0, y_max: 2.0 };
        assert_eq!(extent.aspect_ratio(), Some(0.5));

        let flat = Extent { x_min: 0.0, x_max: 0.0, y_min: -1.0, y_max: 1.0 };
        assert_eq!(flat.aspect_ratio(), None);

        let undefined = Extent { x_min: f64::NAN, ..extent };
        assert_eq!(undefined.aspect_ratio(), None);
    }
}
