// WRT - wrt-disasm
// Module: Module Driver
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Top-level driver: validates the header, then loops over framed sections
//! delegating each to [`crate::sections`].

use log::debug;
use wrt_error::{codes::disasm, context, Error, Result};

use crate::cursor::ByteCursor;
use crate::line::Line;
use crate::sections::{decode_section, DecodeOptions, SectionId};

const MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];

/// A fully decoded module: a flat sequence of lines, one section at a time.
pub struct Dump {
    pub lines: Vec<Line>,
}

/// Decodes an entire module from `cursor`, which must be positioned at the
/// start of the file.
pub fn decode_module(cursor: &mut ByteCursor, opts: DecodeOptions) -> Result<Dump> {
    let mut lines = Vec::new();

    let magic = cursor.require(4)?;
    if magic.value != MAGIC {
        return Err(Error::parse(
            disasm::BAD_MAGIC,
            format!(
                "expected magic {MAGIC:02x?}, found {:02x?} {}",
                magic.value,
                context(magic.span.file_offset, &magic.span.bytes)
            ),
        ));
    }
    lines.push(Line {
        offset: magic.span.file_offset,
        bytes: magic.span.bytes,
        depth: 0,
        text: "magic = b'\\x00asm'".to_string(),
    });

    let version = cursor.u32_le()?;
    if version.value != 1 {
        debug!("module declares unusual version {}", version.value);
    }
    lines.push(Line {
        offset: version.span.file_offset,
        bytes: version.span.bytes,
        depth: 0,
        text: format!("version = {}", version.value),
    });

    while !cursor.is_empty() {
        let id_byte = cursor.byte()?;
        let section_id = SectionId::from_byte(&id_byte)?;
        let size = cursor.leb128_u()?;
        debug!("section {} ({}): size = {}", section_id.name(), id_byte.value, size.value);

        lines.push(Line {
            offset: id_byte.span.file_offset,
            bytes: id_byte.span.bytes,
            depth: 0,
            text: format!("-- {} section (id={}) --", section_id.name(), id_byte.value),
        });

        let mut section_cursor = cursor.sub_cursor(size.value as usize)?;
        let section_lines = decode_section(section_id, &mut section_cursor, opts)?;
        lines.extend(indent(section_lines, 1));
    }

    Ok(Dump { lines })
}

fn indent(lines: Vec<Line>, by: usize) -> Vec<Line> {
    lines.into_iter().map(|mut l| { l.depth += by; l }).collect()
}
