// WRT - wrt-disasm
// Module: Library Root
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Forensic disassembler for WebAssembly module binaries.
//!
//! Given a single Wasm binary, [`disassemble`] produces a line-by-line dump
//! that juxtaposes, for every byte consumed, its absolute file offset, raw
//! hex bytes, and a semantic annotation — section header, field name,
//! decoded value, or instruction mnemonic and operands.
//!
//! The decoder never recovers from an error: the first malformed byte halts
//! the run and is reported with its offset and a preview of the bytes that
//! triggered it. Bytes left over inside a successfully decoded section are
//! not an error — they are annotated as `unknown data`.

pub mod cursor;
pub mod emit;
pub mod instructions;
pub mod line;
pub mod module;
pub mod opcodes;
pub mod sections;
pub mod types;

use wrt_error::Result;

pub use cursor::ByteCursor;
pub use emit::FormatConfig;
pub use line::Line;
pub use module::Dump;
pub use sections::DecodeOptions;

/// Decodes `buffer` (the full contents of a Wasm file) and renders it per
/// `config`.
pub fn disassemble(path: impl Into<String>, buffer: Vec<u8>, config: &FormatConfig) -> Result<String> {
    let mut cursor = ByteCursor::new(path, buffer, 0);
    let opts = DecodeOptions { indent_width: config.indent_width, max_depth: config.max_depth };
    let dump = module::decode_module(&mut cursor, opts)?;
    Ok(emit::render(&dump.lines, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disassembles_an_empty_module_end_to_end() {
        let bytes = vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        let config = FormatConfig::new(bytes.len() as u64, 8, 2, 1024, false);
        let out = disassemble("empty.wasm", bytes, &config).unwrap();
        assert!(out.contains("magic"));
        assert!(out.contains("version = 1"));
    }

    #[test]
    fn reports_bad_magic_with_path_context() {
        let bytes = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x00, 0x00, 0x00];
        let config = FormatConfig::new(bytes.len() as u64, 8, 2, 1024, false);
        let err = disassemble("bad.wasm", bytes, &config).unwrap_err();
        assert_eq!(err.code, wrt_error::codes::disasm::BAD_MAGIC);
    }
}
