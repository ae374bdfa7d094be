// WRT - wrt-error
// Module: WRT Error Type
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error handling system.
//!
//! This provides a single [`Error`] type covering every failure this tool
//! can raise, organized by [`ErrorCategory`] with a numeric code and a
//! heap-allocated message.

use std::fmt;

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Errors raised while decoding the binary format.
    Parse,
    /// Errors raised by the CLI adapter (I/O, argument handling).
    System,
}

/// The error type returned by every fallible operation in this workspace.
#[derive(Debug, Clone)]
pub struct Error {
    /// Error category.
    pub category: ErrorCategory,
    /// Numeric error code, see [`crate::codes`].
    pub code: u16,
    /// Human-readable message.
    pub message: String,
}

impl Error {
    /// Creates a new error.
    pub fn new<S: Into<String>>(category: ErrorCategory, code: u16, message: S) -> Self {
        Self { category, code, message: message.into() }
    }

    /// Creates a `Parse`-category error.
    pub fn parse<S: Into<String>>(code: u16, message: S) -> Self {
        Self::new(ErrorCategory::Parse, code, message)
    }

    /// Creates a `System`-category error.
    pub fn system<S: Into<String>>(code: u16, message: S) -> Self {
        Self::new(ErrorCategory::System, code, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

/// Formats a file offset and a short hex preview of the triggering bytes,
/// for embedding in an [`Error`] message: `"at offset 0x1a (bytes: 06)"`.
#[must_use]
pub fn context(offset: u64, bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return format!("at offset 0x{offset:x}");
    }
    let hex = bytes.iter().take(8).map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ");
    format!("at offset 0x{offset:x} (bytes: {hex})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn display_includes_code() {
        let err = Error::parse(codes::disasm::BAD_MAGIC, "bad magic");
        assert_eq!(err.to_string(), "bad magic (code: 1101)");
    }

    #[test]
    fn category_accessors() {
        let err = Error::system(codes::disasm::IO_ERROR, "could not open file");
        assert_eq!(err.category, ErrorCategory::System);
    }

    #[test]
    fn context_includes_offset_and_hex_preview() {
        assert_eq!(context(0x1a, &[0x06]), "at offset 0x1a (bytes: 06)");
        assert_eq!(context(0, &[]), "at offset 0x0");
    }
}
