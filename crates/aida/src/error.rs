use alloc::borrow::Cow;

use core::fmt;

use crate::wire::WireError;

/// Marshalling error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No type pairing contains the requested type code.
    NoMatchingType,
    /// A matrix contains rows of different lengths.
    RaggedMatrix,
    /// A flat buffer does not fill the declared matrix shape.
    DimensionMismatch,
    /// A value does not match the converter it was handed to.
    ValueMismatch,
    /// A wire container failed to hand out its elements.
    Extraction,
    /// A wire container refused the inserted elements.
    Insertion,
    /// The requested conversion is not supported.
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl ErrorKind {
    /// Returns the [`ErrorKind`] name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoMatchingType => "No Matching Type",
            Self::RaggedMatrix => "Ragged Matrix",
            Self::DimensionMismatch => "Dimension Mismatch",
            Self::ValueMismatch => "Value Mismatch",
            Self::Extraction => "Extraction",
            Self::Insertion => "Insertion",
            Self::Unsupported => "Unsupported",
        }
    }
}

/// Marshalling error.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    // Error kind.
    kind: ErrorKind,
    // Error description.
    description: Cow<'static, str>,
    // Wire container error which caused this error.
    cause: Option<WireError>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)?;
        if let Some(cause) = &self.cause {
            write!(f, " Caused by: {cause}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl Error {
    /// Creates an [`Error`] from an [`ErrorKind`] and a description.
    pub fn new(kind: ErrorKind, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            description: description.into(),
            cause: None,
        }
    }

    /// Attaches the [`WireError`] which caused this [`Error`].
    #[must_use]
    pub fn with_cause(mut self, cause: WireError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Returns the [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the [`WireError`] which caused this [`Error`], when there is
    /// one.
    #[must_use]
    pub fn cause(&self) -> Option<&WireError> {
        self.cause.as_ref()
    }
}

/// Marshalling result alias.
pub type Result<T> = core::result::Result<T, Error>;
