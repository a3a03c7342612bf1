use std::sync::LazyLock;

use aida::code::TypeCode;
use aida::convert::Converter;
use aida::format::FormatKind;
use aida::registry::Registry;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Returns the process-wide marshalling [`Registry`].
///
/// The registry is built once on first use and shared by every caller for
/// the rest of the process lifetime. It is immutable, so no locking guards
/// the returned reference.
#[must_use]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Resolves a [`Converter`] for the given format and type code from the
/// process-wide [`Registry`].
///
/// # Errors
///
/// An error is returned when no type pairing contains the given code for
/// the given format, following [`Registry::resolve`].
pub fn resolve(format: FormatKind, code: TypeCode) -> aida::error::Result<Converter> {
    registry().resolve(format, code)
}
