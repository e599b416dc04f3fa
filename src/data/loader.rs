use super::header::{parse_header, Header};
use super::validate::validate_shape;
use crate::error::GridFileError;
use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A header together with the grid it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct GridData {
    pub header: Header,
    /// Shape `(height, width)`; row 0 is the top of the image.
    pub grid: Array2<i32>,
}

/// Open `path`, read header and matrix, and validate the shape.
///
/// The file handle is dropped before this returns, on success or failure.
pub fn load_grid_file<P: AsRef<Path>>(path: P) -> Result<GridData, GridFileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GridFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let data = read_grid(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = data.header.width,
        height = data.header.height,
        "grid data loaded"
    );
    Ok(data)
}

/// Read a header line followed by the matrix rows, then validate the shape.
pub fn read_grid<R: BufRead>(reader: R) -> Result<GridData, GridFileError> {
    let mut lines = reader.lines();
    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(GridFileError::MissingHeader),
    };
    let header = parse_header(&header_line)?;
    let grid = read_matrix(lines, 2)?;
    validate_shape(&grid, &header)?;
    Ok(GridData { header, grid })
}

/// Parse whitespace-separated integer rows. Blank lines are skipped.
///
/// `first_line` is the 1-based line number of the first item, for error messages.
pub fn read_matrix<I>(lines: I, first_line: usize) -> Result<Array2<i32>, GridFileError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut values: Vec<i32> = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0usize;

    for (offset, line) in lines.enumerate() {
        let line = line?;
        let line_no = first_line + offset;
        let before = values.len();

        for (column, token) in line.split_whitespace().enumerate() {
            let value = token.parse::<i32>().map_err(|_| GridFileError::InvalidValue {
                line: line_no,
                column: column + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }

        let found = values.len() - before;
        if found == 0 {
            continue;
        }
        match columns {
            None => columns = Some(found),
            Some(expected) if expected != found => {
                return Err(GridFileError::RaggedRow {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let columns = columns.unwrap_or(0);
    // Every counted row holds exactly `columns` values.
    Ok(Array2::from_shape_vec((rows, columns), values)?)
}
