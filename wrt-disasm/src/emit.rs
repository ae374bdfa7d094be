// WRT - wrt-disasm
// Module: Emitter
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Two-column rendering: an offset+hex column beside an indented
//! annotation column, row-aligned so a wide hex dump and a short
//! annotation (or vice versa) both read cleanly.

use crate::line::Line;

/// Immutable formatting parameters, constructed once by the CLI adapter and
/// threaded through every decoder and the emitter.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Hex bytes printed per row of the left column.
    pub bytes_per_row: usize,
    /// Spaces per indentation level in the annotation column.
    pub indent_width: usize,
    /// Recursion guard for nested control flow.
    pub max_depth: usize,
    /// Width (in hex digits) used to render offsets, derived once from the
    /// input file's size.
    pub offset_width: usize,
    /// Whether to render an ASCII sidecar next to hex rows.
    pub show_ascii: bool,
}

impl FormatConfig {
    /// Derives `offset_width` as `ceil(log16(file_size))`, matching the
    /// source's `len(f'{len(file)-1:x}')` formula.
    #[must_use]
    pub fn new(file_size: u64, bytes_per_row: usize, indent_width: usize, max_depth: usize, show_ascii: bool) -> Self {
        let offset_width = format!("{:x}", file_size.saturating_sub(1)).len().max(1);
        Self { bytes_per_row, indent_width, max_depth, offset_width, show_ascii }
    }

    fn left_column_width(&self) -> usize {
        self.offset_width + 2 + self.bytes_per_row * 3 - 1
    }
}

/// Renders one [`Line`]'s hex column: each row is `<offset>: <hex bytes>`,
/// wrapped every `bytes_per_row` bytes.
fn hex_rows(line: &Line, config: &FormatConfig) -> Vec<String> {
    if line.bytes.is_empty() {
        return Vec::new();
    }
    let mut rows = Vec::new();
    for (i, chunk) in line.bytes.chunks(config.bytes_per_row).enumerate() {
        let row_offset = line.offset + (i * config.bytes_per_row) as u64;
        let hex = chunk.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ");
        let mut row = format!("{:0width$x}: {hex}", row_offset, width = config.offset_width);
        if config.show_ascii {
            let ascii: String = chunk
                .iter()
                .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
                .collect();
            row.push_str("  ");
            row.push_str(&ascii);
        }
        rows.push(row);
    }
    rows
}

/// Renders a full dump: one [`Line`] at a time, joining its hex rows and
/// annotation text row-by-row.
#[must_use]
pub fn render(lines: &[Line], config: &FormatConfig) -> String {
    let left_width = config.left_column_width();
    let mut out = String::new();
    for line in lines {
        let hex = hex_rows(line, config);
        let annotation = format!("{}{}", " ".repeat(line.depth * config.indent_width), line.text);
        let row_count = hex.len().max(1);
        for row in 0..row_count {
            let left = hex.get(row).cloned().unwrap_or_default();
            let padded_left = format!("{left:<left_width$}");
            let right = if row == 0 { annotation.as_str() } else { "" };
            out.push_str(&padded_left);
            out.push_str(" | ");
            out.push_str(right);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_width_matches_source_formula() {
        let config = FormatConfig::new(256, 8, 2, 1024, false);
        assert_eq!(config.offset_width, 2); // 255 -> "ff" -> 2 hex digits
    }

    #[test]
    fn single_byte_line_renders_one_row() {
        let config = FormatConfig::new(16, 8, 2, 1024, false);
        let line = Line { offset: 0, bytes: vec![0x00, 0x61, 0x73, 0x6D], depth: 0, text: "magic = b'\\x00asm'".to_string() };
        let out = render(&[line], &config);
        assert!(out.contains("00 61 73 6d"));
        assert!(out.contains("magic = b'\\x00asm'"));
    }

    #[test]
    fn wraps_hex_every_bytes_per_row() {
        let config = FormatConfig::new(32, 4, 2, 1024, false);
        let line = Line { offset: 0, bytes: vec![0; 9], depth: 0, text: "payload".to_string() };
        let out = render(&[line], &config);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn indentation_applies_to_annotation_only() {
        let config = FormatConfig::new(16, 8, 2, 1024, false);
        let line = Line { offset: 0, bytes: vec![], depth: 2, text: "end".to_string() };
        let out = render(&[line], &config);
        assert!(out.contains("    end"));
    }

    #[test]
    fn header_with_no_bytes_still_emits_one_row() {
        let config = FormatConfig::new(16, 8, 2, 1024, false);
        let line = Line::header(4, 0, "-- type section --");
        let out = render(&[line], &config);
        assert_eq!(out.lines().count(), 1);
    }
}
