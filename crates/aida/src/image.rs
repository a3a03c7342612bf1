use alloc::format;
use alloc::vec::Vec;

use crate::error::{Error, ErrorKind, Result};

/// A matrix flattened into the row-major form wire containers store.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatImage<T> {
    /// Elements laid out row after row.
    pub values: Vec<T>,
    /// Number of elements in a row.
    pub dim_x: usize,
    /// Number of rows.
    pub dim_y: usize,
}

/// Rebuilds a matrix from a flat row-major buffer with the given shape.
///
/// # Errors
///
/// Returns a [`DimensionMismatch`](ErrorKind::DimensionMismatch) error when
/// the buffer length differs from `dim_x * dim_y`.
pub fn to_matrix<T: Clone>(values: &[T], dim_x: usize, dim_y: usize) -> Result<Vec<Vec<T>>> {
    if values.len() != dim_x * dim_y {
        return Err(Error::new(
            ErrorKind::DimensionMismatch,
            format!(
                "A flat buffer of {} elements does not fill a {dim_x}x{dim_y} matrix.",
                values.len()
            ),
        ));
    }

    let mut rows = Vec::with_capacity(dim_y);
    for row in 0..dim_y {
        let offset = row * dim_x;
        rows.push(values[offset..offset + dim_x].to_vec());
    }
    Ok(rows)
}

/// Flattens a matrix into the row-major form wire containers store.
///
/// The row length is taken from the first row and an empty matrix flattens
/// into an empty buffer with both dimensions zero.
///
/// # Errors
///
/// Returns a [`RaggedMatrix`](ErrorKind::RaggedMatrix) error when the rows do
/// not all have the same length.
pub fn to_flat<T: Clone>(rows: &[Vec<T>]) -> Result<FlatImage<T>> {
    let dim_x = rows.first().map_or(0, Vec::len);

    let mut values = Vec::with_capacity(dim_x * rows.len());
    for (index, row) in rows.iter().enumerate() {
        if row.len() != dim_x {
            return Err(Error::new(
                ErrorKind::RaggedMatrix,
                format!(
                    "The row {index} contains {} elements, but rows of {dim_x} elements \
                     are expected.",
                    row.len()
                ),
            ));
        }
        values.extend_from_slice(row);
    }

    Ok(FlatImage {
        values,
        dim_x,
        dim_y: rows.len(),
    })
}
