use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;

/// An error raised by a wire container while extracting or inserting
/// elements.
#[derive(Debug, Clone, PartialEq)]
pub struct WireError {
    // Error description.
    description: Cow<'static, str>,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.description.fmt(f)
    }
}

impl core::error::Error for WireError {}

impl WireError {
    /// Creates a [`WireError`] with the given description.
    pub fn new(description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A transport-owned container holding device data in wire form.
///
/// A wire container always stores its elements as a flat homogeneous
/// sequence, one channel per element type. A scalar travels as a sequence of
/// one element and a matrix as its rows laid end to end, with the shape
/// declared through [`dim_x`] and [`dim_y`]. Containers holding
/// non-image data declare a [`dim_y`] of zero.
///
/// Unsigned 16-bit elements cross the boundary through a dedicated channel of
/// widened 32-bit signed carriers, kept separate from the long channel so the
/// transport can narrow them back on the wire.
///
/// [`dim_x`]: WireValue::dim_x
/// [`dim_y`]: WireValue::dim_y
pub trait WireValue {
    /// Returns the number of elements in a row.
    fn dim_x(&self) -> usize;

    /// Returns the number of rows, or zero for non-image data.
    fn dim_y(&self) -> usize;

    /// Extracts the string elements from the container.
    fn extract_string_array(&self) -> Result<Vec<String>, WireError>;

    /// Extracts the 32-bit floating point elements from the container.
    fn extract_float_array(&self) -> Result<Vec<f32>, WireError>;

    /// Extracts the 64-bit floating point elements from the container.
    fn extract_double_array(&self) -> Result<Vec<f64>, WireError>;

    /// Extracts the 16-bit signed integer elements from the container.
    fn extract_short_array(&self) -> Result<Vec<i16>, WireError>;

    /// Extracts the unsigned 16-bit elements from the container as widened
    /// 32-bit signed carriers.
    fn extract_ushort_array(&self) -> Result<Vec<i32>, WireError>;

    /// Extracts the 32-bit signed integer elements from the container.
    fn extract_long_array(&self) -> Result<Vec<i32>, WireError>;

    /// Extracts the 64-bit signed integer elements from the container.
    fn extract_long64_array(&self) -> Result<Vec<i64>, WireError>;

    /// Inserts string elements into the container with the given shape.
    fn insert_string_array(
        &mut self,
        values: &[String],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;

    /// Inserts 32-bit floating point elements into the container with the
    /// given shape.
    fn insert_float_array(
        &mut self,
        values: &[f32],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;

    /// Inserts 64-bit floating point elements into the container with the
    /// given shape.
    fn insert_double_array(
        &mut self,
        values: &[f64],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;

    /// Inserts 16-bit signed integer elements into the container with the
    /// given shape.
    fn insert_short_array(
        &mut self,
        values: &[i16],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;

    /// Inserts unsigned 16-bit elements into the container with the given
    /// shape, taking widened 32-bit signed carriers.
    fn insert_ushort_array(
        &mut self,
        values: &[i32],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;

    /// Inserts 32-bit signed integer elements into the container with the
    /// given shape.
    fn insert_long_array(
        &mut self,
        values: &[i32],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;

    /// Inserts 64-bit signed integer elements into the container with the
    /// given shape.
    fn insert_long64_array(
        &mut self,
        values: &[i64],
        dim_x: usize,
        dim_y: usize,
    ) -> Result<(), WireError>;
}
