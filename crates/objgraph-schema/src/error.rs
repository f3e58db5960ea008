// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for schema resolution.
//!
//! Lookup failures fall in two groups:
//!
//! - **Caller bugs** (`InvalidIdentifier`): a non-negative value was passed
//!   where a negative wire id is required. See [`Error::is_fatal`].
//! - **Recoverable** (everything else): corrupt or version-mismatched
//!   streams, types that cannot be described dynamically, names that are
//!   simply not there.
//!
//! Construction failures are never cached; a later call re-attempts.

use std::fmt;

/// Why a runtime type was refused for dynamic description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The type belongs to the schema system itself.
    SchemaType,
    /// Open generic definition (no concrete arguments bound).
    OpenGeneric,
    /// Type is not visible to the deserializer.
    NotPublic,
    /// Concrete type with neither a default nor a positional constructor.
    NoConstructor,
    /// Synthesis disabled by [`RegistryConfig`](crate::RegistryConfig).
    SynthesisDisabled,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::SchemaType => write!(f, "schema-system type"),
            UnsupportedReason::OpenGeneric => write!(f, "open generic definition"),
            UnsupportedReason::NotPublic => write!(f, "type is not public"),
            UnsupportedReason::NoConstructor => write!(f, "no usable constructor"),
            UnsupportedReason::SynthesisDisabled => write!(f, "synthesis disabled"),
        }
    }
}

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Identifier Errors
    // ========================================================================
    /// Non-negative value passed where a negative wire id was required.
    InvalidIdentifier(i16),
    /// Wire id magnitude outside the compact table (corrupt stream).
    UnknownIdentifier(i16),

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// Runtime type is not eligible for dynamic description.
    UnsupportedType {
        /// Qualified name of the refused type.
        name: String,
        /// Eligibility check that failed.
        reason: UnsupportedReason,
    },
    /// By-name resolution exhausted every stage.
    NameNotFound(String),
    /// Binding a module reference failed (not cached, retried on next use).
    ModuleUnavailable {
        /// Assembly wire id.
        id: i16,
        /// Loader-provided cause.
        reason: String,
    },

    // ========================================================================
    // Accessor Errors
    // ========================================================================
    /// Write attempted on a read-only member.
    ReadOnlyMember(String),
    /// Write reserved to the deserializer attempted from ordinary code.
    PrivilegedWrite(String),
    /// Member has no accessor the generic routine can drive.
    AccessorUnsupported(String),
    /// Value does not fit the member's declared type.
    TypeMismatch {
        /// Qualified member name.
        member: String,
        /// Declared value type name.
        expected: String,
    },
    /// No constructor overload with the requested arity.
    ArityMismatch {
        /// Type being constructed.
        type_name: String,
        /// Requested argument count.
        arity: usize,
    },

    // ========================================================================
    // Other Errors
    // ========================================================================
    /// Configuration document could not be read or parsed.
    Config(String),
}

impl Error {
    /// `true` when the error signals a caller contract bug rather than bad data.
    ///
    /// Only [`Error::InvalidIdentifier`] is fatal; stream readers should
    /// surface every other kind as a per-document failure.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::InvalidIdentifier(_))
    }
}

impl fmt::Display for Error {
    // @audit-ok: Simple pattern matching - error message dispatch table
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIdentifier(id) => {
                write!(f, "Invalid identifier: {} (known references are negative)", id)
            }
            Error::UnknownIdentifier(id) => write!(f, "Unknown identifier: {}", id),
            Error::UnsupportedType { name, reason } => {
                write!(f, "Unsupported type {}: {}", name, reason)
            }
            Error::NameNotFound(name) => write!(f, "Name not found: {}", name),
            Error::ModuleUnavailable { id, reason } => {
                write!(f, "Module {} unavailable: {}", id, reason)
            }
            Error::ReadOnlyMember(name) => write!(f, "Member is read-only: {}", name),
            Error::PrivilegedWrite(name) => {
                write!(f, "Member is only writable by the deserializer: {}", name)
            }
            Error::AccessorUnsupported(name) => write!(f, "Member has no accessor: {}", name),
            Error::TypeMismatch { member, expected } => {
                write!(f, "Type mismatch on {}: expected {}", member, expected)
            }
            Error::ArityMismatch { type_name, arity } => {
                write!(f, "{} has no constructor taking {} argument(s)", type_name, arity)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Convenient alias for registry results.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_identifier_is_fatal() {
        assert!(Error::InvalidIdentifier(3).is_fatal());
        assert!(!Error::UnknownIdentifier(-900).is_fatal());
        assert!(!Error::NameNotFound("Grid.Nope".into()).is_fatal());
        assert!(!Error::UnsupportedType {
            name: "app.Widget".into(),
            reason: UnsupportedReason::SchemaType,
        }
        .is_fatal());
    }

    #[test]
    fn display_names_the_offender() {
        let msg = Error::UnknownIdentifier(-760).to_string();
        assert!(msg.contains("-760"));

        let msg = Error::UnsupportedType {
            name: "app.Widget".into(),
            reason: UnsupportedReason::NoConstructor,
        }
        .to_string();
        assert!(msg.contains("app.Widget"));
        assert!(msg.contains("no usable constructor"));
    }
}
