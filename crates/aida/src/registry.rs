use alloc::format;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

use crate::code::TypeCode;
use crate::convert::Converter;
use crate::error::{Error, ErrorKind, Result};
use crate::format::FormatKind;

// Scalar and array sides of every type pairing.
const ALIAS_PAIRS: &[(TypeCode, TypeCode)] = &[
    (TypeCode::String, TypeCode::StringArray),
    (TypeCode::Float, TypeCode::FloatArray),
    (TypeCode::Double, TypeCode::DoubleArray),
    (TypeCode::Short, TypeCode::ShortArray),
    (TypeCode::UShort, TypeCode::UShortArray),
    (TypeCode::Long, TypeCode::LongArray),
    (TypeCode::Long64, TypeCode::Long64Array),
];

// Element types accepted by the image format.
const IMAGE_ELEMENTS: &[TypeCode] = &[
    TypeCode::Float,
    TypeCode::Double,
    TypeCode::Short,
    TypeCode::UShort,
    TypeCode::Long,
    TypeCode::Long64,
    TypeCode::Encoded,
];

/// A bidirectional map between the scalar and array sides of the type
/// pairings.
///
/// Both directions are filled from the same pairing table, so looking a code
/// up on either side always lands on the other side of the same pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasMap {
    // Scalar code to array code.
    forward: IndexMap<TypeCode, TypeCode, DefaultHashBuilder>,
    // Array code to scalar code.
    inverse: IndexMap<TypeCode, TypeCode, DefaultHashBuilder>,
}

impl AliasMap {
    // Builds both directions from the pairing table.
    pub(crate) fn new() -> Self {
        let mut forward = IndexMap::default();
        let mut inverse = IndexMap::default();
        for &(scalar, array) in ALIAS_PAIRS {
            let _ = forward.insert(scalar, array);
            let _ = inverse.insert(array, scalar);
        }
        Self { forward, inverse }
    }

    /// Returns the array side of the pairing containing the given scalar
    /// code.
    #[must_use]
    pub fn spectrum_code(&self, scalar: TypeCode) -> Option<TypeCode> {
        self.forward.get(&scalar).copied()
    }

    /// Returns the scalar side of the pairing containing the given array
    /// code.
    #[must_use]
    pub fn scalar_code(&self, spectrum: TypeCode) -> Option<TypeCode> {
        self.inverse.get(&spectrum).copied()
    }

    /// Returns the `(scalar, array)` pairing containing the given code,
    /// looked up on either side.
    #[must_use]
    pub fn resolve_pair(&self, code: TypeCode) -> Option<(TypeCode, TypeCode)> {
        if let Some(array) = self.spectrum_code(code) {
            Some((code, array))
        } else {
            self.scalar_code(code).map(|scalar| (scalar, code))
        }
    }

    /// Returns an iterator over the `(scalar, array)` pairings.
    pub fn pairs(&self) -> impl Iterator<Item = (TypeCode, TypeCode)> {
        self.forward.iter().map(|(&scalar, &array)| (scalar, array))
    }
}

/// An immutable registry resolving `(format, type code)` requests into
/// [`Converter`]s.
///
/// The registry is built once from the fixed type pairing table and never
/// changes afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    // Scalar and array pairings.
    alias: AliasMap,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Builds the [`Registry`] from the fixed type pairing table.
    #[must_use]
    pub fn new() -> Self {
        log::debug!(
            "Built the type registry with {} alias pairings.",
            ALIAS_PAIRS.len()
        );
        Self {
            alias: AliasMap::new(),
        }
    }

    /// Returns the [`AliasMap`] between the scalar and array sides of the
    /// type pairings.
    #[must_use]
    pub const fn alias_map(&self) -> &AliasMap {
        &self.alias
    }

    /// Resolves a [`Converter`] for the given format and type code.
    ///
    /// Scalar and spectrum requests accept the type code of either side of a
    /// pairing, so the code of a scalar and the code of its array alias
    /// resolve to the same converter. Image requests accept element type
    /// codes only.
    ///
    /// # Errors
    ///
    /// Returns a [`NoMatchingType`](ErrorKind::NoMatchingType) error when no
    /// type pairing contains the given code for the given format.
    pub fn resolve(&self, format: FormatKind, code: TypeCode) -> Result<Converter> {
        match format {
            FormatKind::Scalar => {
                let (scalar, _) = self.pair(format, code)?;
                Ok(Converter::new(format, scalar, scalar))
            }
            FormatKind::Spectrum => {
                let (scalar, array) = self.pair(format, code)?;
                Ok(Converter::new(format, scalar, array))
            }
            FormatKind::Image => {
                if IMAGE_ELEMENTS.contains(&code) {
                    Ok(Converter::new(format, code, code))
                } else {
                    Err(no_matching_type_error(format, code))
                }
            }
        }
    }

    fn pair(&self, format: FormatKind, code: TypeCode) -> Result<(TypeCode, TypeCode)> {
        self.alias
            .resolve_pair(code)
            .ok_or_else(|| no_matching_type_error(format, code))
    }
}

fn no_matching_type_error(format: FormatKind, code: TypeCode) -> Error {
    Error::new(
        ErrorKind::NoMatchingType,
        format!("No type pairing contains the code `{code}` for the {format} format."),
    )
}
