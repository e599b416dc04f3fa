use super::header::Header;
use crate::error::GridFileError;
use ndarray::Array2;

/// Reject a grid whose shape is not exactly `(header.height, header.width)`.
pub fn validate_shape(grid: &Array2<i32>, header: &Header) -> Result<(), GridFileError> {
    let expected = (header.height, header.width);
    let found = grid.dim();
    if found != expected {
        tracing::warn!(?expected, ?found, "grid shape does not match header");
        return Err(GridFileError::ShapeMismatch { expected, found });
    }
    Ok(())
}
