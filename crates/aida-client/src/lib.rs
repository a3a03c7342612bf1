//! The `aida-client` library crate binds the methods of a device interface
//! to the commands and attributes a remote device actually exposes.
//!
//! A device is reachable through a proxy, an object holding an open session
//! with the remote endpoint. The crate never opens sessions itself: any
//! transport able to answer command and attribute requests can sit behind
//! the [`DeviceProxy`](proxy::DeviceProxy) trait.
//!
//! Core functionalities of this crate include:
//!
//! - Routing the methods of an interface onto device commands and attribute
//!   accesses, resolved once when the interface is bound
//! - Invoking a bound method with typed arguments and returning its typed
//!   result
//! - Reporting devices whose declared surface changed between binding and
//!   invocation
//! - Resolving shared marshalling converters for wire containers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// An adapter binding interface methods to device commands and attributes.
pub mod adapter;
/// Error management.
pub mod error;
/// The contract a device proxy fulfils.
pub mod proxy;
/// A process-wide marshalling registry.
pub mod resolver;
