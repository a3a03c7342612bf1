use std::borrow::Cow;
use std::fmt;

/// Dispatch error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The device does not declare the requested command.
    NoSuchCommand,
    /// The device does not declare the requested attribute.
    NoSuchAttribute,
    /// A command execution failed on the device.
    Execute,
    /// An attribute read failed on the device.
    Read,
    /// An attribute write failed on the device.
    Write,
    /// A method cannot be routed onto the device surface.
    Dispatch,
    /// The device surface changed between binding and invocation.
    Inconsistency,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl ErrorKind {
    /// Returns the [`ErrorKind`] name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoSuchCommand => "No Such Command",
            Self::NoSuchAttribute => "No Such Attribute",
            Self::Execute => "Execute",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Dispatch => "Dispatch",
            Self::Inconsistency => "Inconsistency",
        }
    }
}

/// Dispatch error.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    // Error kind.
    kind: ErrorKind,
    // Error description.
    description: Cow<'static, str>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an [`Error`] from an [`ErrorKind`] and a description.
    pub fn new(kind: ErrorKind, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Creates the [`Error`] a proxy reports when its device does not
    /// declare the requested command.
    #[must_use]
    pub fn no_such_command(command: &str) -> Self {
        Self::new(
            ErrorKind::NoSuchCommand,
            format!("The device does not declare the command `{command}`."),
        )
    }

    /// Creates the [`Error`] a proxy reports when its device does not
    /// declare the requested attribute.
    #[must_use]
    pub fn no_such_attribute(attribute: &str) -> Self {
        Self::new(
            ErrorKind::NoSuchAttribute,
            format!("The device does not declare the attribute `{attribute}`."),
        )
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
}

/// Dispatch result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_error() {
        let error = Error::new(ErrorKind::Dispatch, "The route is unknown.");
        assert_eq!(error.kind(), ErrorKind::Dispatch);
        assert_eq!(error.description(), "The route is unknown.");
        assert_eq!(error.to_string(), "Dispatch: The route is unknown.");
    }

    #[test]
    fn test_proxy_errors() {
        let error = Error::no_such_command("Ramp");
        assert_eq!(error.kind(), ErrorKind::NoSuchCommand);
        assert_eq!(
            error.to_string(),
            "No Such Command: The device does not declare the command `Ramp`."
        );

        let error = Error::no_such_attribute("Voltage");
        assert_eq!(error.kind(), ErrorKind::NoSuchAttribute);
        assert_eq!(
            error.to_string(),
            "No Such Attribute: The device does not declare the attribute `Voltage`."
        );
    }
}
