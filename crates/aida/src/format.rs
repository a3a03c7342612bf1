use serde::{Deserialize, Serialize};

/// All [`FormatKind`]s.
pub const ALL_FORMAT_KINDS: &[FormatKind] =
    &[FormatKind::Scalar, FormatKind::Spectrum, FormatKind::Image];

/// Data formats of the values exchanged with a device endpoint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatKind {
    /// A single data element.
    Scalar,
    /// A one-dimensional ordered sequence of data elements.
    Spectrum,
    /// A two-dimensional rectangular matrix of data elements.
    Image,
}

impl core::fmt::Debug for FormatKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl core::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl FormatKind {
    /// Returns a [`FormatKind`] name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Spectrum => "Spectrum",
            Self::Image => "Image",
        }
    }

    /// Returns a [`FormatKind`] description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Scalar => "A single data element.",
            Self::Spectrum => {
                "A one-dimensional ordered sequence of data elements with a variable length."
            }
            Self::Image => {
                "A two-dimensional matrix of data elements carried as a flat row-major buffer."
            }
        }
    }

    /// Returns the identifier associated with the [`FormatKind`].
    #[must_use]
    pub const fn id(&self) -> u16 {
        match self {
            Self::Scalar => 0,
            Self::Spectrum => 1,
            Self::Image => 2,
        }
    }

    /// Returns the [`FormatKind`] associated with the given integer
    /// identifier.
    ///
    /// The return value is [`None`] when the identifier is invalid or does
    /// not exist.
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::Scalar),
            1 => Some(Self::Spectrum),
            2 => Some(Self::Image),
            _ => None,
        }
    }
}

#[cfg(test)]
#[cfg(feature = "deserialize")]
mod tests {
    use crate::{deserialize, serialize};

    use super::{ALL_FORMAT_KINDS, FormatKind};

    #[test]
    fn test_format_kind() {
        assert_eq!(FormatKind::from_id(1000), None);

        for kind in ALL_FORMAT_KINDS {
            assert_eq!(FormatKind::from_id(kind.id()), Some(*kind));
            assert_eq!(deserialize::<FormatKind>(serialize(kind)), *kind);
        }
    }
}
