use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;

use serde::Serialize;

use crate::code::TypeCode;
use crate::format::FormatKind;
use crate::quality::Quality;

/// A typed in-process value exchanged with a device endpoint.
///
/// Every variant pairs one element type with one [`FormatKind`]: scalar
/// variants hold a single element, spectrum variants hold a one-dimensional
/// sequence, and image variants hold a two-dimensional matrix stored as rows.
///
/// Unsigned 16-bit elements are widened into a 32-bit signed carrier to avoid
/// sign-extension corruption, so the `UShort` variants hold [`i32`] values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub enum Value {
    /// A character string.
    String(String),
    /// A 32-bit floating point number.
    Float(f32),
    /// A 64-bit floating point number.
    Double(f64),
    /// A 16-bit signed integer.
    Short(i16),
    /// An unsigned 16-bit integer widened into a 32-bit signed carrier.
    UShort(i32),
    /// A 32-bit signed integer.
    Long(i32),
    /// A 64-bit signed integer.
    Long64(i64),
    /// A sequence of character strings.
    StringSpectrum(Vec<String>),
    /// A sequence of 32-bit floating point numbers.
    FloatSpectrum(Vec<f32>),
    /// A sequence of 64-bit floating point numbers.
    DoubleSpectrum(Vec<f64>),
    /// A sequence of 16-bit signed integers.
    ShortSpectrum(Vec<i16>),
    /// A sequence of unsigned 16-bit integers widened into 32-bit signed
    /// carriers.
    UShortSpectrum(Vec<i32>),
    /// A sequence of 32-bit signed integers.
    LongSpectrum(Vec<i32>),
    /// A sequence of 64-bit signed integers.
    Long64Spectrum(Vec<i64>),
    /// A matrix of 32-bit floating point numbers.
    FloatImage(Vec<Vec<f32>>),
    /// A matrix of 64-bit floating point numbers.
    DoubleImage(Vec<Vec<f64>>),
    /// A matrix of 16-bit signed integers.
    ShortImage(Vec<Vec<i16>>),
    /// A matrix of unsigned 16-bit integers widened into 32-bit signed
    /// carriers.
    UShortImage(Vec<Vec<i32>>),
    /// A matrix of 32-bit signed integers.
    LongImage(Vec<Vec<i32>>),
    /// A matrix of 64-bit signed integers.
    Long64Image(Vec<Vec<i64>>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Float(value) => value.fmt(f),
            Self::Double(value) => value.fmt(f),
            Self::Short(value) => value.fmt(f),
            Self::UShort(value) | Self::Long(value) => value.fmt(f),
            Self::Long64(value) => value.fmt(f),
            Self::StringSpectrum(values) => {
                write!(f, "String spectrum of {} elements", values.len())
            }
            Self::FloatSpectrum(values) => {
                write!(f, "Float spectrum of {} elements", values.len())
            }
            Self::DoubleSpectrum(values) => {
                write!(f, "Double spectrum of {} elements", values.len())
            }
            Self::ShortSpectrum(values) => {
                write!(f, "Short spectrum of {} elements", values.len())
            }
            Self::UShortSpectrum(values) => {
                write!(f, "UShort spectrum of {} elements", values.len())
            }
            Self::LongSpectrum(values) => {
                write!(f, "Long spectrum of {} elements", values.len())
            }
            Self::Long64Spectrum(values) => {
                write!(f, "Long64 spectrum of {} elements", values.len())
            }
            Self::FloatImage(rows) => write!(f, "Float image of {} rows", rows.len()),
            Self::DoubleImage(rows) => write!(f, "Double image of {} rows", rows.len()),
            Self::ShortImage(rows) => write!(f, "Short image of {} rows", rows.len()),
            Self::UShortImage(rows) => write!(f, "UShort image of {} rows", rows.len()),
            Self::LongImage(rows) => write!(f, "Long image of {} rows", rows.len()),
            Self::Long64Image(rows) => write!(f, "Long64 image of {} rows", rows.len()),
        }
    }
}

impl Value {
    /// Returns the [`FormatKind`] of the [`Value`].
    #[must_use]
    pub const fn format(&self) -> FormatKind {
        match self {
            Self::String(_)
            | Self::Float(_)
            | Self::Double(_)
            | Self::Short(_)
            | Self::UShort(_)
            | Self::Long(_)
            | Self::Long64(_) => FormatKind::Scalar,
            Self::StringSpectrum(_)
            | Self::FloatSpectrum(_)
            | Self::DoubleSpectrum(_)
            | Self::ShortSpectrum(_)
            | Self::UShortSpectrum(_)
            | Self::LongSpectrum(_)
            | Self::Long64Spectrum(_) => FormatKind::Spectrum,
            Self::FloatImage(_)
            | Self::DoubleImage(_)
            | Self::ShortImage(_)
            | Self::UShortImage(_)
            | Self::LongImage(_)
            | Self::Long64Image(_) => FormatKind::Image,
        }
    }

    /// Returns the [`TypeCode`] of the [`Value`].
    ///
    /// Scalar variants carry the scalar side of a type pairing and spectrum
    /// variants the array side. Image variants carry the type code of their
    /// elements, since the matrix shape is described by the [`FormatKind`].
    #[must_use]
    pub const fn type_code(&self) -> TypeCode {
        match self {
            Self::String(_) => TypeCode::String,
            Self::Float(_) => TypeCode::Float,
            Self::Double(_) => TypeCode::Double,
            Self::Short(_) => TypeCode::Short,
            Self::UShort(_) => TypeCode::UShort,
            Self::Long(_) => TypeCode::Long,
            Self::Long64(_) => TypeCode::Long64,
            Self::StringSpectrum(_) => TypeCode::StringArray,
            Self::FloatSpectrum(_) => TypeCode::FloatArray,
            Self::DoubleSpectrum(_) => TypeCode::DoubleArray,
            Self::ShortSpectrum(_) => TypeCode::ShortArray,
            Self::UShortSpectrum(_) => TypeCode::UShortArray,
            Self::LongSpectrum(_) => TypeCode::LongArray,
            Self::Long64Spectrum(_) => TypeCode::Long64Array,
            Self::FloatImage(_) => TypeCode::Float,
            Self::DoubleImage(_) => TypeCode::Double,
            Self::ShortImage(_) => TypeCode::Short,
            Self::UShortImage(_) => TypeCode::UShort,
            Self::LongImage(_) => TypeCode::Long,
            Self::Long64Image(_) => TypeCode::Long64,
        }
    }

    /// Returns the contained string, when the [`Value`] is a scalar string.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        if let Self::String(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Returns the contained element, when the [`Value`] is a scalar float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        if let Self::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Returns the contained element, when the [`Value`] is a scalar double.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        if let Self::Double(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Returns the contained element, when the [`Value`] is a scalar short.
    #[must_use]
    pub const fn as_short(&self) -> Option<i16> {
        if let Self::Short(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Returns the widened carrier, when the [`Value`] is a scalar unsigned
    /// short.
    #[must_use]
    pub const fn as_ushort(&self) -> Option<i32> {
        if let Self::UShort(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Returns the contained element, when the [`Value`] is a scalar long.
    #[must_use]
    pub const fn as_long(&self) -> Option<i32> {
        if let Self::Long(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Returns the contained element, when the [`Value`] is a scalar 64-bit
    /// long.
    #[must_use]
    pub const fn as_long64(&self) -> Option<i64> {
        if let Self::Long64(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Returns the contained sequence, when the [`Value`] is a string
    /// spectrum.
    #[must_use]
    pub fn as_string_spectrum(&self) -> Option<&[String]> {
        if let Self::StringSpectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the contained sequence, when the [`Value`] is a float
    /// spectrum.
    #[must_use]
    pub fn as_float_spectrum(&self) -> Option<&[f32]> {
        if let Self::FloatSpectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the contained sequence, when the [`Value`] is a double
    /// spectrum.
    #[must_use]
    pub fn as_double_spectrum(&self) -> Option<&[f64]> {
        if let Self::DoubleSpectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the contained sequence, when the [`Value`] is a short
    /// spectrum.
    #[must_use]
    pub fn as_short_spectrum(&self) -> Option<&[i16]> {
        if let Self::ShortSpectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the widened carriers, when the [`Value`] is an unsigned short
    /// spectrum.
    #[must_use]
    pub fn as_ushort_spectrum(&self) -> Option<&[i32]> {
        if let Self::UShortSpectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the contained sequence, when the [`Value`] is a long spectrum.
    #[must_use]
    pub fn as_long_spectrum(&self) -> Option<&[i32]> {
        if let Self::LongSpectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the contained sequence, when the [`Value`] is a 64-bit long
    /// spectrum.
    #[must_use]
    pub fn as_long64_spectrum(&self) -> Option<&[i64]> {
        if let Self::Long64Spectrum(values) = self {
            Some(values)
        } else {
            None
        }
    }

    /// Returns the contained rows, when the [`Value`] is a float image.
    #[must_use]
    pub fn as_float_image(&self) -> Option<&[Vec<f32>]> {
        if let Self::FloatImage(rows) = self {
            Some(rows)
        } else {
            None
        }
    }

    /// Returns the contained rows, when the [`Value`] is a double image.
    #[must_use]
    pub fn as_double_image(&self) -> Option<&[Vec<f64>]> {
        if let Self::DoubleImage(rows) = self {
            Some(rows)
        } else {
            None
        }
    }

    /// Returns the contained rows, when the [`Value`] is a short image.
    #[must_use]
    pub fn as_short_image(&self) -> Option<&[Vec<i16>]> {
        if let Self::ShortImage(rows) = self {
            Some(rows)
        } else {
            None
        }
    }

    /// Returns the widened carriers, when the [`Value`] is an unsigned short
    /// image.
    #[must_use]
    pub fn as_ushort_image(&self) -> Option<&[Vec<i32>]> {
        if let Self::UShortImage(rows) = self {
            Some(rows)
        } else {
            None
        }
    }

    /// Returns the contained rows, when the [`Value`] is a long image.
    #[must_use]
    pub fn as_long_image(&self) -> Option<&[Vec<i32>]> {
        if let Self::LongImage(rows) = self {
            Some(rows)
        } else {
            None
        }
    }

    /// Returns the contained rows, when the [`Value`] is a 64-bit long image.
    #[must_use]
    pub fn as_long64_image(&self) -> Option<&[Vec<i64>]> {
        if let Self::Long64Image(rows) = self {
            Some(rows)
        } else {
            None
        }
    }
}

/// A read [`Value`] together with its timestamp and [`Quality`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub struct TimedValue {
    /// Read value.
    pub value: Value,
    /// Read timestamp as milliseconds since the Unix epoch.
    pub time_millis: u64,
    /// Read quality.
    pub quality: Quality,
}

impl fmt::Display for TimedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        writeln!(f, "Value: {}", self.value)?;
        writeln!(f, "Time: {}ms", self.time_millis)?;
        writeln!(f, "Quality: {}", self.quality)
    }
}

impl TimedValue {
    /// Creates a [`TimedValue`].
    #[must_use]
    pub const fn new(value: Value, time_millis: u64, quality: Quality) -> Self {
        Self {
            value,
            time_millis,
            quality,
        }
    }
}
