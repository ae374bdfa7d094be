// WRT - wrt-error
// Module: WRT Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the forensic WebAssembly disassembler.
//!
//! Errors are organized into categories (see [`ErrorCategory`]), each
//! carrying a numeric code from [`codes`] and a human-readable message.
//!
//! ```
//! use wrt_error::{Error, ErrorCategory, codes};
//!
//! let error = Error::new(
//!     ErrorCategory::Parse,
//!     codes::disasm::BAD_MAGIC,
//!     "expected magic \\0asm",
//! );
//! assert_eq!(error.category, ErrorCategory::Parse);
//! ```

pub mod codes;
mod errors;

pub use errors::{context, Error, ErrorCategory};

/// A specialized `Result` type for disassembler operations.
pub type Result<T> = core::result::Result<T, Error>;
