// WRT - wrt-disasm
// Module: Annotation Line
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The common unit every decoder produces: one annotated line of output,
//! optionally anchored to the bytes that produced it.

/// One annotated line of disassembly output.
#[derive(Debug, Clone)]
pub struct Line {
    /// Absolute file offset this line is anchored to, for the hex column.
    pub offset: u64,
    /// Raw bytes this line covers. Empty for purely structural lines (a
    /// section banner, say) that contribute no bytes of their own.
    pub bytes: Vec<u8>,
    /// Nesting depth, used to indent the annotation column.
    pub depth: usize,
    /// The annotation text, excluding indentation.
    pub text: String,
}

impl Line {
    /// A line anchored to no bytes at all — a pure structural header.
    #[must_use]
    pub fn header(offset: u64, depth: usize, text: impl Into<String>) -> Self {
        Self { offset, bytes: Vec::new(), depth, text: text.into() }
    }
}
