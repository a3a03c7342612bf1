use serde::Serialize;

/// All [`Quality`] states.
pub const ALL_QUALITIES: &[Quality] = &[
    Quality::Valid,
    Quality::Invalid,
    Quality::Alarm,
    Quality::Changing,
    Quality::Warning,
];

/// The quality a device endpoint attaches to a read value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub enum Quality {
    /// The read value is valid.
    #[default]
    Valid,
    /// The read value is invalid and must not be trusted.
    Invalid,
    /// The read value crossed an alarm threshold.
    Alarm,
    /// The read value is still settling and may change shortly.
    Changing,
    /// The read value crossed a warning threshold.
    Warning,
}

impl core::fmt::Debug for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl Quality {
    /// Returns the [`Quality`] name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
            Self::Alarm => "Alarm",
            Self::Changing => "Changing",
            Self::Warning => "Warning",
        }
    }

    /// Returns the identifier associated with the [`Quality`].
    #[must_use]
    pub const fn id(&self) -> u16 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::Alarm => 2,
            Self::Changing => 3,
            Self::Warning => 4,
        }
    }

    /// Returns the [`Quality`] associated with the given integer identifier.
    ///
    /// The return value is [`None`] when the identifier is invalid or does
    /// not exist.
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::Valid),
            1 => Some(Self::Invalid),
            2 => Some(Self::Alarm),
            3 => Some(Self::Changing),
            4 => Some(Self::Warning),
            _ => None,
        }
    }
}
