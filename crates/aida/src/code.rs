use serde::Serialize;

/// All [`TypeCode`]s.
pub const ALL_TYPE_CODES: &[TypeCode] = &[
    TypeCode::String,
    TypeCode::Float,
    TypeCode::Double,
    TypeCode::Short,
    TypeCode::UShort,
    TypeCode::Long,
    TypeCode::Long64,
    TypeCode::Encoded,
    TypeCode::StringArray,
    TypeCode::FloatArray,
    TypeCode::DoubleArray,
    TypeCode::ShortArray,
    TypeCode::UShortArray,
    TypeCode::LongArray,
    TypeCode::Long64Array,
];

/// All type codes an element exchanged with a device endpoint may carry.
///
/// The enumeration is closed: it is defined by the wire protocol and cannot
/// be extended by applications.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub enum TypeCode {
    /// A character string.
    String,
    /// A 32-bit floating point number.
    Float,
    /// A 64-bit floating point number.
    Double,
    /// A 16-bit signed integer.
    Short,
    /// An unsigned 16-bit integer, widened into a 32-bit signed carrier.
    UShort,
    /// A 32-bit signed integer.
    Long,
    /// A 64-bit signed integer.
    Long64,
    /// An opaque encoded binary block.
    ///
    /// The marshalling layer recognises this code but never converts it.
    Encoded,
    /// A sequence of character strings.
    StringArray,
    /// A sequence of 32-bit floating point numbers.
    FloatArray,
    /// A sequence of 64-bit floating point numbers.
    DoubleArray,
    /// A sequence of 16-bit signed integers.
    ShortArray,
    /// A sequence of unsigned 16-bit integers, widened into 32-bit signed
    /// carriers.
    UShortArray,
    /// A sequence of 32-bit signed integers.
    LongArray,
    /// A sequence of 64-bit signed integers.
    Long64Array,
}

impl core::fmt::Debug for TypeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl core::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl TypeCode {
    /// Returns the [`TypeCode`] name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Short => "Short",
            Self::UShort => "UShort",
            Self::Long => "Long",
            Self::Long64 => "Long64",
            Self::Encoded => "Encoded",
            Self::StringArray => "StringArray",
            Self::FloatArray => "FloatArray",
            Self::DoubleArray => "DoubleArray",
            Self::ShortArray => "ShortArray",
            Self::UShortArray => "UShortArray",
            Self::LongArray => "LongArray",
            Self::Long64Array => "Long64Array",
        }
    }

    /// Returns the identifier associated with the [`TypeCode`].
    #[must_use]
    pub const fn id(&self) -> u16 {
        match self {
            Self::String => 0,
            Self::Float => 1,
            Self::Double => 2,
            Self::Short => 3,
            Self::UShort => 4,
            Self::Long => 5,
            Self::Long64 => 6,
            Self::Encoded => 7,
            Self::StringArray => 8,
            Self::FloatArray => 9,
            Self::DoubleArray => 10,
            Self::ShortArray => 11,
            Self::UShortArray => 12,
            Self::LongArray => 13,
            Self::Long64Array => 14,
        }
    }

    /// Returns the [`TypeCode`] associated with the given integer identifier.
    ///
    /// The return value is [`None`] when the identifier is invalid or does
    /// not exist.
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::String),
            1 => Some(Self::Float),
            2 => Some(Self::Double),
            3 => Some(Self::Short),
            4 => Some(Self::UShort),
            5 => Some(Self::Long),
            6 => Some(Self::Long64),
            7 => Some(Self::Encoded),
            8 => Some(Self::StringArray),
            9 => Some(Self::FloatArray),
            10 => Some(Self::DoubleArray),
            11 => Some(Self::ShortArray),
            12 => Some(Self::UShortArray),
            13 => Some(Self::LongArray),
            14 => Some(Self::Long64Array),
            _ => None,
        }
    }

    /// Checks whether the [`TypeCode`] identifies a one-dimensional sequence
    /// of elements.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(
            self,
            Self::StringArray
                | Self::FloatArray
                | Self::DoubleArray
                | Self::ShortArray
                | Self::UShortArray
                | Self::LongArray
                | Self::Long64Array
        )
    }
}
