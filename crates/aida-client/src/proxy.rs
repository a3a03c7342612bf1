use aida::value::{TimedValue, Value};

use crate::error::Result;

/// The contract an open device session fulfils.
///
/// A proxy wraps a session with one remote device and answers command and
/// attribute requests on its behalf. The crate never opens sessions itself,
/// so any transport able to fulfil this contract can sit behind an adapter.
///
/// All methods are synchronous: a call returns once the device answered or
/// the transport gave up.
///
/// # Errors
///
/// A proxy reports a request naming an undeclared command with an error of
/// kind [`NoSuchCommand`](crate::error::ErrorKind::NoSuchCommand) and an
/// undeclared attribute with
/// [`NoSuchAttribute`](crate::error::ErrorKind::NoSuchAttribute), matching
/// the errors built by [`Error::no_such_command`] and
/// [`Error::no_such_attribute`]. Adapters rely on those kinds to tell a
/// vanished target apart from a failed one.
///
/// [`Error::no_such_command`]: crate::error::Error::no_such_command
/// [`Error::no_such_attribute`]: crate::error::Error::no_such_attribute
pub trait DeviceProxy {
    /// Returns the device name.
    fn name(&self) -> &str;

    /// Returns whether the device declares the given command.
    ///
    /// # Errors
    ///
    /// Transport failures may prevent the device surface from being
    /// inspected.
    fn has_command(&self, command: &str) -> Result<bool>;

    /// Returns whether the device declares the given attribute.
    ///
    /// # Errors
    ///
    /// Transport failures may prevent the device surface from being
    /// inspected.
    fn has_attribute(&self, attribute: &str) -> Result<bool>;

    /// Executes a command on the device, forwarding the given argument.
    ///
    /// # Errors
    ///
    /// An error is returned when the device does not declare the command or
    /// when its execution fails.
    fn execute_command(&self, command: &str, argument: Option<&Value>) -> Result<Option<Value>>;

    /// Reads an attribute from the device.
    ///
    /// # Errors
    ///
    /// An error is returned when the device does not declare the attribute
    /// or when the read fails.
    fn read_attribute(&self, attribute: &str) -> Result<Value>;

    /// Reads an attribute from the device together with its timestamp and
    /// quality.
    ///
    /// # Errors
    ///
    /// An error is returned when the device does not declare the attribute
    /// or when the read fails.
    fn read_attribute_timed(&self, attribute: &str) -> Result<TimedValue>;

    /// Writes an attribute on the device.
    ///
    /// # Errors
    ///
    /// An error is returned when the device does not declare the attribute,
    /// when no value is provided or when the write fails.
    fn write_attribute(&self, attribute: &str, value: Option<&Value>) -> Result<()>;
}
