//! Typed values and wire marshalling for remote device endpoints.
//!
//! This crate provides APIs to:
//!
//! - Describe the type codes and data formats of the values a device endpoint
//!   exchanges over the wire. A value is either a scalar, a spectrum, which is
//!   a one-dimensional sequence, or an image, which is a two-dimensional
//!   rectangular matrix carried as a flat row-major buffer.
//! - Convert between the wire-level representation of those values and richly
//!   typed in-process values, reshaping flat buffers into matrices and back
//!   while enforcing rectangularity.
//! - Resolve the converter for a requested format and type code through an
//!   immutable registry, accepting either side of a scalar and spectrum
//!   type pairing.
//!
//! Data exchange between an application and a device endpoint requires values
//! to be serializable and deserializable. An application which only produces
//! values can avoid importing deserialization functions by disabling the
//! `deserialize` feature at compile time.
//!
//! This crate can be compiled for both `std` and `no_std` environments.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

/// Type codes of the elements exchanged with a device endpoint.
pub mod code;
/// Converters between wire containers and typed values.
pub mod convert;
/// Error management.
pub mod error;
/// Data formats of attribute and command values.
pub mod format;
/// Reshaping between flat buffers and rectangular matrices.
pub mod image;
/// Read quality reported by a device endpoint.
pub mod quality;
/// Converter registration and format resolution.
pub mod registry;
/// Typed in-process values.
pub mod value;
/// The wire-level data contract.
pub mod wire;

#[cfg(test)]
#[cfg(feature = "deserialize")]
pub(crate) fn serialize<T: serde::Serialize>(value: T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

#[cfg(test)]
#[cfg(feature = "deserialize")]
pub(crate) fn deserialize<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
