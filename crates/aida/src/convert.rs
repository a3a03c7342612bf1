use alloc::format;
use alloc::vec::Vec;

use crate::code::TypeCode;
use crate::error::{Error, ErrorKind, Result};
use crate::format::FormatKind;
use crate::image;
use crate::value::Value;
use crate::wire::{WireError, WireValue};

/// A resolved converter moving values of one element type and format across
/// a wire container.
///
/// A [`Converter`] is obtained from a
/// [`Registry`](crate::registry::Registry) and stays valid for the whole
/// lifetime of the process, since type pairings never change once the
/// registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    // Format the converter moves.
    format: FormatKind,
    // Element type of the moved values.
    element: TypeCode,
    // Type code declared by the wire container.
    code: TypeCode,
}

impl Converter {
    // Creates a converter for a resolved (format, element, code) triple.
    pub(crate) const fn new(format: FormatKind, element: TypeCode, code: TypeCode) -> Self {
        Self {
            format,
            element,
            code,
        }
    }

    /// Returns the [`FormatKind`] the converter moves.
    #[must_use]
    pub const fn format(&self) -> FormatKind {
        self.format
    }

    /// Returns the element [`TypeCode`] of the moved values.
    #[must_use]
    pub const fn element(&self) -> TypeCode {
        self.element
    }

    /// Returns the [`TypeCode`] declared by the wire container.
    #[must_use]
    pub const fn type_code(&self) -> TypeCode {
        self.code
    }

    /// Extracts a [`Value`] from a wire container.
    ///
    /// # Errors
    ///
    /// Returns an [`Unsupported`](ErrorKind::Unsupported) error for the
    /// `Encoded` element type, an [`Extraction`](ErrorKind::Extraction)
    /// error when the container fails to hand out its elements and a
    /// [`NoMatchingType`](ErrorKind::NoMatchingType) error when the element
    /// type code does not identify an element type.
    pub fn extract(&self, wire: &dyn WireValue) -> Result<Value> {
        match self.format {
            FormatKind::Scalar => self.extract_scalar(wire),
            FormatKind::Spectrum => self.extract_spectrum(wire),
            FormatKind::Image => self.extract_image(wire),
        }
    }

    /// Inserts a [`Value`] into a wire container.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueMismatch`](ErrorKind::ValueMismatch) error when the
    /// value does not match the converter format and element type, an
    /// [`Unsupported`](ErrorKind::Unsupported) error for the `Encoded`
    /// element type, a [`RaggedMatrix`](ErrorKind::RaggedMatrix) error when
    /// an image value holds rows of different lengths and an
    /// [`Insertion`](ErrorKind::Insertion) error when the container refuses
    /// the elements.
    pub fn insert(&self, wire: &mut dyn WireValue, value: &Value) -> Result<()> {
        match self.format {
            FormatKind::Scalar => self.insert_scalar(wire, value),
            FormatKind::Spectrum => self.insert_spectrum(wire, value),
            FormatKind::Image => self.insert_image(wire, value),
        }
    }

    fn extract_scalar(&self, wire: &dyn WireValue) -> Result<Value> {
        let element = self.element;
        match element {
            TypeCode::String => {
                let values = wire
                    .extract_string_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::String(first_element(values, element)?))
            }
            TypeCode::Float => {
                let values = wire
                    .extract_float_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::Float(first_element(values, element)?))
            }
            TypeCode::Double => {
                let values = wire
                    .extract_double_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::Double(first_element(values, element)?))
            }
            TypeCode::Short => {
                let values = wire
                    .extract_short_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::Short(first_element(values, element)?))
            }
            TypeCode::UShort => {
                let values = wire
                    .extract_ushort_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::UShort(first_element(values, element)?))
            }
            TypeCode::Long => {
                let values = wire
                    .extract_long_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::Long(first_element(values, element)?))
            }
            TypeCode::Long64 => {
                let values = wire
                    .extract_long64_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::Long64(first_element(values, element)?))
            }
            TypeCode::Encoded => Err(unsupported_error("extraction")),
            _ => Err(element_error(element)),
        }
    }

    fn extract_spectrum(&self, wire: &dyn WireValue) -> Result<Value> {
        let element = self.element;
        match element {
            TypeCode::String => wire
                .extract_string_array()
                .map(Value::StringSpectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::Float => wire
                .extract_float_array()
                .map(Value::FloatSpectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::Double => wire
                .extract_double_array()
                .map(Value::DoubleSpectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::Short => wire
                .extract_short_array()
                .map(Value::ShortSpectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::UShort => wire
                .extract_ushort_array()
                .map(Value::UShortSpectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::Long => wire
                .extract_long_array()
                .map(Value::LongSpectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::Long64 => wire
                .extract_long64_array()
                .map(Value::Long64Spectrum)
                .map_err(|cause| extraction_error(element, cause)),
            TypeCode::Encoded => Err(unsupported_error("extraction")),
            _ => Err(element_error(element)),
        }
    }

    fn extract_image(&self, wire: &dyn WireValue) -> Result<Value> {
        let element = self.element;
        let dim_x = wire.dim_x();
        let dim_y = wire.dim_y();
        match element {
            TypeCode::Float => {
                let values = wire
                    .extract_float_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::FloatImage(image::to_matrix(&values, dim_x, dim_y)?))
            }
            TypeCode::Double => {
                let values = wire
                    .extract_double_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::DoubleImage(image::to_matrix(&values, dim_x, dim_y)?))
            }
            TypeCode::Short => {
                let values = wire
                    .extract_short_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::ShortImage(image::to_matrix(&values, dim_x, dim_y)?))
            }
            TypeCode::UShort => {
                let values = wire
                    .extract_ushort_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::UShortImage(image::to_matrix(&values, dim_x, dim_y)?))
            }
            TypeCode::Long => {
                let values = wire
                    .extract_long_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::LongImage(image::to_matrix(&values, dim_x, dim_y)?))
            }
            TypeCode::Long64 => {
                let values = wire
                    .extract_long64_array()
                    .map_err(|cause| extraction_error(element, cause))?;
                Ok(Value::Long64Image(image::to_matrix(
                    &values, dim_x, dim_y,
                )?))
            }
            TypeCode::Encoded => Err(unsupported_error("extraction")),
            _ => Err(element_error(element)),
        }
    }

    fn insert_scalar(&self, wire: &mut dyn WireValue, value: &Value) -> Result<()> {
        let element = self.element;
        match (element, value) {
            (TypeCode::String, Value::String(value)) => wire
                .insert_string_array(core::slice::from_ref(value), 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Float, Value::Float(value)) => wire
                .insert_float_array(&[*value], 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Double, Value::Double(value)) => wire
                .insert_double_array(&[*value], 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Short, Value::Short(value)) => wire
                .insert_short_array(&[*value], 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::UShort, Value::UShort(value)) => wire
                .insert_ushort_array(&[*value], 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Long, Value::Long(value)) => wire
                .insert_long_array(&[*value], 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Long64, Value::Long64(value)) => wire
                .insert_long64_array(&[*value], 1, 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Encoded, _) => Err(unsupported_error("insertion")),
            _ => Err(value_mismatch_error(self.format, element, value)),
        }
    }

    fn insert_spectrum(&self, wire: &mut dyn WireValue, value: &Value) -> Result<()> {
        let element = self.element;
        match (element, value) {
            (TypeCode::String, Value::StringSpectrum(values)) => wire
                .insert_string_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Float, Value::FloatSpectrum(values)) => wire
                .insert_float_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Double, Value::DoubleSpectrum(values)) => wire
                .insert_double_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Short, Value::ShortSpectrum(values)) => wire
                .insert_short_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::UShort, Value::UShortSpectrum(values)) => wire
                .insert_ushort_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Long, Value::LongSpectrum(values)) => wire
                .insert_long_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Long64, Value::Long64Spectrum(values)) => wire
                .insert_long64_array(values, values.len(), 0)
                .map_err(|cause| insertion_error(element, cause)),
            (TypeCode::Encoded, _) => Err(unsupported_error("insertion")),
            _ => Err(value_mismatch_error(self.format, element, value)),
        }
    }

    fn insert_image(&self, wire: &mut dyn WireValue, value: &Value) -> Result<()> {
        let element = self.element;
        match (element, value) {
            (TypeCode::Float, Value::FloatImage(rows)) => {
                let flat = image::to_flat(rows)?;
                wire.insert_float_array(&flat.values, flat.dim_x, flat.dim_y)
                    .map_err(|cause| insertion_error(element, cause))
            }
            (TypeCode::Double, Value::DoubleImage(rows)) => {
                let flat = image::to_flat(rows)?;
                wire.insert_double_array(&flat.values, flat.dim_x, flat.dim_y)
                    .map_err(|cause| insertion_error(element, cause))
            }
            (TypeCode::Short, Value::ShortImage(rows)) => {
                let flat = image::to_flat(rows)?;
                wire.insert_short_array(&flat.values, flat.dim_x, flat.dim_y)
                    .map_err(|cause| insertion_error(element, cause))
            }
            (TypeCode::UShort, Value::UShortImage(rows)) => {
                let flat = image::to_flat(rows)?;
                wire.insert_ushort_array(&flat.values, flat.dim_x, flat.dim_y)
                    .map_err(|cause| insertion_error(element, cause))
            }
            (TypeCode::Long, Value::LongImage(rows)) => {
                let flat = image::to_flat(rows)?;
                wire.insert_long_array(&flat.values, flat.dim_x, flat.dim_y)
                    .map_err(|cause| insertion_error(element, cause))
            }
            (TypeCode::Long64, Value::Long64Image(rows)) => {
                let flat = image::to_flat(rows)?;
                wire.insert_long64_array(&flat.values, flat.dim_x, flat.dim_y)
                    .map_err(|cause| insertion_error(element, cause))
            }
            (TypeCode::Encoded, _) => Err(unsupported_error("insertion")),
            _ => Err(value_mismatch_error(self.format, element, value)),
        }
    }
}

fn extraction_error(element: TypeCode, cause: WireError) -> Error {
    Error::new(
        ErrorKind::Extraction,
        format!("Error in extracting `{element}` elements from the wire container."),
    )
    .with_cause(cause)
}

fn insertion_error(element: TypeCode, cause: WireError) -> Error {
    Error::new(
        ErrorKind::Insertion,
        format!("Error in inserting `{element}` elements into the wire container."),
    )
    .with_cause(cause)
}

fn unsupported_error(operation: &str) -> Error {
    Error::new(
        ErrorKind::Unsupported,
        format!("The `Encoded` type does not support {operation}."),
    )
}

fn element_error(code: TypeCode) -> Error {
    Error::new(
        ErrorKind::NoMatchingType,
        format!("The type code `{code}` does not identify an element type."),
    )
}

fn value_mismatch_error(format: FormatKind, element: TypeCode, value: &Value) -> Error {
    Error::new(
        ErrorKind::ValueMismatch,
        format!(
            "A {} `{}` value cannot be inserted through a {format} `{element}` converter.",
            value.format(),
            value.type_code()
        ),
    )
}

fn first_element<T>(mut values: Vec<T>, element: TypeCode) -> Result<T> {
    if values.is_empty() {
        return Err(Error::new(
            ErrorKind::Extraction,
            format!("The wire container holds no `{element}` element for a scalar value."),
        ));
    }
    Ok(values.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::code::TypeCode;
    use crate::error::ErrorKind;
    use crate::format::FormatKind;
    use crate::value::Value;
    use crate::wire::{WireError, WireValue};

    use super::Converter;

    // A wire container backed by per-type element channels.
    #[derive(Debug, Default)]
    struct TestWire {
        dim_x: usize,
        dim_y: usize,
        strings: Vec<String>,
        floats: Vec<f32>,
        doubles: Vec<f64>,
        shorts: Vec<i16>,
        ushorts: Vec<i32>,
        longs: Vec<i32>,
        long64s: Vec<i64>,
        inserted: Option<(usize, usize)>,
        ushort_channel: bool,
        failing: bool,
    }

    impl TestWire {
        fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), WireError> {
            if self.failing {
                Err(WireError::new("The transport timed out."))
            } else {
                Ok(())
            }
        }
    }

    impl WireValue for TestWire {
        fn dim_x(&self) -> usize {
            self.dim_x
        }

        fn dim_y(&self) -> usize {
            self.dim_y
        }

        fn extract_string_array(&self) -> Result<Vec<String>, WireError> {
            self.check().map(|()| self.strings.clone())
        }

        fn extract_float_array(&self) -> Result<Vec<f32>, WireError> {
            self.check().map(|()| self.floats.clone())
        }

        fn extract_double_array(&self) -> Result<Vec<f64>, WireError> {
            self.check().map(|()| self.doubles.clone())
        }

        fn extract_short_array(&self) -> Result<Vec<i16>, WireError> {
            self.check().map(|()| self.shorts.clone())
        }

        fn extract_ushort_array(&self) -> Result<Vec<i32>, WireError> {
            self.check().map(|()| self.ushorts.clone())
        }

        fn extract_long_array(&self) -> Result<Vec<i32>, WireError> {
            self.check().map(|()| self.longs.clone())
        }

        fn extract_long64_array(&self) -> Result<Vec<i64>, WireError> {
            self.check().map(|()| self.long64s.clone())
        }

        fn insert_string_array(
            &mut self,
            values: &[String],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.strings = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            Ok(())
        }

        fn insert_float_array(
            &mut self,
            values: &[f32],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.floats = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            Ok(())
        }

        fn insert_double_array(
            &mut self,
            values: &[f64],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.doubles = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            Ok(())
        }

        fn insert_short_array(
            &mut self,
            values: &[i16],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.shorts = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            Ok(())
        }

        fn insert_ushort_array(
            &mut self,
            values: &[i32],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.ushorts = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            self.ushort_channel = true;
            Ok(())
        }

        fn insert_long_array(
            &mut self,
            values: &[i32],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.longs = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            Ok(())
        }

        fn insert_long64_array(
            &mut self,
            values: &[i64],
            dim_x: usize,
            dim_y: usize,
        ) -> Result<(), WireError> {
            self.check()?;
            self.long64s = values.to_vec();
            self.inserted = Some((dim_x, dim_y));
            Ok(())
        }
    }

    #[test]
    fn test_scalar_extraction_takes_the_first_element() {
        let wire = TestWire {
            doubles: vec![42.5, 99.0],
            dim_x: 2,
            ..TestWire::default()
        };

        let converter = Converter::new(FormatKind::Scalar, TypeCode::Double, TypeCode::Double);
        assert_eq!(converter.extract(&wire).unwrap(), Value::Double(42.5));
    }

    #[test]
    fn test_scalar_extraction_from_empty_channel_fails() {
        let wire = TestWire::default();

        let converter = Converter::new(FormatKind::Scalar, TypeCode::Long, TypeCode::Long);
        let error = converter.extract(&wire).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Extraction);
        assert_eq!(
            error.description(),
            "The wire container holds no `Long` element for a scalar value."
        );
        assert_eq!(error.cause(), None);
    }

    #[test]
    fn test_spectrum_extraction() {
        let wire = TestWire {
            ushorts: vec![50_000, 0, 65_535],
            dim_x: 3,
            ..TestWire::default()
        };

        let converter =
            Converter::new(FormatKind::Spectrum, TypeCode::UShort, TypeCode::UShortArray);
        assert_eq!(
            converter.extract(&wire).unwrap(),
            Value::UShortSpectrum(vec![50_000, 0, 65_535])
        );
    }

    #[test]
    fn test_image_extraction_reshapes_the_buffer() {
        let wire = TestWire {
            floats: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            dim_x: 3,
            dim_y: 2,
            ..TestWire::default()
        };

        let converter = Converter::new(FormatKind::Image, TypeCode::Float, TypeCode::Float);
        assert_eq!(
            converter.extract(&wire).unwrap(),
            Value::FloatImage(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        );
    }

    #[test]
    fn test_image_extraction_with_wrong_dimensions_fails() {
        let wire = TestWire {
            floats: vec![1.0, 2.0, 3.0],
            dim_x: 2,
            dim_y: 2,
            ..TestWire::default()
        };

        let converter = Converter::new(FormatKind::Image, TypeCode::Float, TypeCode::Float);
        let error = converter.extract(&wire).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn test_scalar_insertion_declares_a_single_element() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Scalar, TypeCode::String, TypeCode::String);
        converter
            .insert(&mut wire, &Value::String("ramping".into()))
            .unwrap();
        assert_eq!(wire.strings, ["ramping"]);
        assert_eq!(wire.inserted, Some((1, 0)));
    }

    #[test]
    fn test_spectrum_insertion_declares_the_length() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Spectrum, TypeCode::Short, TypeCode::ShortArray);
        converter
            .insert(&mut wire, &Value::ShortSpectrum(vec![1, 2, 3, 4]))
            .unwrap();
        assert_eq!(wire.shorts, [1, 2, 3, 4]);
        assert_eq!(wire.inserted, Some((4, 0)));
    }

    #[test]
    fn test_image_insertion_flattens_the_rows() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Image, TypeCode::Long64, TypeCode::Long64);
        converter
            .insert(&mut wire, &Value::Long64Image(vec![vec![1, 2], vec![3, 4]]))
            .unwrap();
        assert_eq!(wire.long64s, [1, 2, 3, 4]);
        assert_eq!(wire.inserted, Some((2, 2)));
    }

    #[test]
    fn test_ragged_image_insertion_fails() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Image, TypeCode::Long, TypeCode::Long);
        let error = converter
            .insert(&mut wire, &Value::LongImage(vec![vec![1, 2], vec![3]]))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::RaggedMatrix);
        assert_eq!(wire.inserted, None);
    }

    #[test]
    fn test_ushort_insertion_uses_the_widened_channel() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Scalar, TypeCode::UShort, TypeCode::UShort);
        converter.insert(&mut wire, &Value::UShort(50_000)).unwrap();
        assert!(wire.ushort_channel);
        assert_eq!(wire.ushorts, [50_000]);
        assert!(wire.longs.is_empty());
    }

    #[test]
    fn test_encoded_extraction_is_unsupported() {
        let wire = TestWire::default();

        for format in [FormatKind::Scalar, FormatKind::Spectrum, FormatKind::Image] {
            let converter = Converter::new(format, TypeCode::Encoded, TypeCode::Encoded);
            let error = converter.extract(&wire).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Unsupported);
            assert_eq!(
                error.description(),
                "The `Encoded` type does not support extraction."
            );
        }
    }

    #[test]
    fn test_encoded_insertion_is_unsupported() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Image, TypeCode::Encoded, TypeCode::Encoded);
        let error = converter
            .insert(&mut wire, &Value::Long(7))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unsupported);
        assert_eq!(
            error.description(),
            "The `Encoded` type does not support insertion."
        );
    }

    #[test]
    fn test_mismatched_value_insertion_fails() {
        let mut wire = TestWire::default();

        let converter = Converter::new(FormatKind::Scalar, TypeCode::Double, TypeCode::Double);
        let error = converter
            .insert(&mut wire, &Value::FloatSpectrum(vec![1.0]))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueMismatch);
        assert_eq!(
            error.description(),
            "A Spectrum `FloatArray` value cannot be inserted through a Scalar `Double` converter."
        );
    }

    #[test]
    fn test_transport_failure_carries_the_cause() {
        let wire = TestWire::failing();

        let converter = Converter::new(FormatKind::Spectrum, TypeCode::Float, TypeCode::FloatArray);
        let error = converter.extract(&wire).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Extraction);
        assert_eq!(
            error.description(),
            "Error in extracting `Float` elements from the wire container."
        );
        assert_eq!(error.cause(), Some(&WireError::new("The transport timed out.")));

        let mut wire = TestWire::failing();
        let error = converter
            .insert(&mut wire, &Value::FloatSpectrum(vec![1.0]))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Insertion);
        assert_eq!(
            error.description(),
            "Error in inserting `Float` elements into the wire container."
        );
    }

    #[test]
    fn test_array_code_is_not_an_element_type() {
        let wire = TestWire::default();

        let converter =
            Converter::new(FormatKind::Spectrum, TypeCode::FloatArray, TypeCode::FloatArray);
        let error = converter.extract(&wire).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NoMatchingType);
        assert_eq!(
            error.description(),
            "The type code `FloatArray` does not identify an element type."
        );
    }
}
