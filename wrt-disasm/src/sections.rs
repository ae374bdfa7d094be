// WRT - wrt-disasm
// Module: Section Decoder
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! One handler per Wasm section kind. Each handler drains its section's
//! framed sub-cursor and reports anything left over as "unknown data" —
//! never an error, since some producers pad or trail custom bytes.

use wrt_error::{codes::disasm, context, Error, Result};

use crate::cursor::{ByteCursor, Decoded};
use crate::instructions::decode_expression;
use crate::line::Line;
use crate::types::{decode_func_type, decode_limits, decode_mutability, RefType, ValType};

/// A known section id, 0..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Custom,
    Type,
    Import,
    Function,
    Table,
    Memory,
    Global,
    Export,
    Start,
    Element,
    Code,
    Data,
    DataCount,
}

impl SectionId {
    pub fn from_byte(byte: &Decoded<u8>) -> Result<Self> {
        Ok(match byte.value {
            0 => Self::Custom,
            1 => Self::Type,
            2 => Self::Import,
            3 => Self::Function,
            4 => Self::Table,
            5 => Self::Memory,
            6 => Self::Global,
            7 => Self::Export,
            8 => Self::Start,
            9 => Self::Element,
            10 => Self::Code,
            11 => Self::Data,
            12 => Self::DataCount,
            other => {
                return Err(Error::parse(
                    disasm::UNKNOWN_SECTION_ID,
                    format!(
                        "unknown section id {other} {}",
                        context(byte.span.file_offset, &byte.span.bytes)
                    ),
                ))
            }
        })
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Type => "type",
            Self::Import => "import",
            Self::Function => "function",
            Self::Table => "table",
            Self::Memory => "memory",
            Self::Global => "global",
            Self::Export => "export",
            Self::Start => "start",
            Self::Element => "element",
            Self::Code => "code",
            Self::Data => "data",
            Self::DataCount => "datacount",
        }
    }
}

/// Reusable options threaded through every section handler.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    pub indent_width: usize,
    pub max_depth: usize,
}

/// Decodes one section's framed payload into annotation lines.
pub fn decode_section(
    id: SectionId,
    cursor: &mut ByteCursor,
    opts: DecodeOptions,
) -> Result<Vec<Line>> {
    let mut lines = match id {
        SectionId::Custom => custom_section(cursor)?,
        SectionId::Type => type_section(cursor)?,
        SectionId::Import => import_section(cursor)?,
        SectionId::Function => function_section(cursor)?,
        SectionId::Table => table_section(cursor)?,
        SectionId::Memory => memory_section(cursor)?,
        SectionId::Global => global_section(cursor, opts)?,
        SectionId::Export => export_section(cursor)?,
        SectionId::Start => start_section(cursor)?,
        SectionId::Element => element_section(cursor, opts)?,
        SectionId::Code => code_section(cursor, opts)?,
        SectionId::Data => data_section(cursor, opts)?,
        SectionId::DataCount => datacount_section(cursor)?,
    };
    if !cursor.is_empty() {
        lines.push(trailing_unknown_data(cursor));
    }
    Ok(lines)
}

fn trailing_unknown_data(cursor: &mut ByteCursor) -> Line {
    let remaining = cursor.remaining();
    let rest = cursor.take(remaining);
    Line {
        offset: rest.span.file_offset,
        bytes: rest.span.bytes,
        depth: 0,
        text: format!("unknown data: size = {remaining}"),
    }
}

fn custom_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let name = cursor.utf8_name()?;
    let mut lines = vec![Line {
        offset: name.span.file_offset,
        bytes: name.span.bytes,
        depth: 0,
        text: format!("name = {:?}", name.value),
    }];
    if !cursor.is_empty() {
        let remaining = cursor.remaining();
        let payload = cursor.take(remaining);
        lines.push(Line {
            offset: payload.span.file_offset,
            bytes: payload.span.bytes,
            depth: 0,
            text: format!("payload: size = {remaining}"),
        });
    }
    Ok(lines)
}

fn type_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("functype count = {}", count.value))];
    for i in 0..count.value {
        let prefix = cursor.byte()?;
        if prefix.value != 0x60 {
            return Err(Error::parse(
                disasm::MALFORMED_FUNC_TYPE,
                format!(
                    "type[{i}]: expected 0x60, found 0x{:02x} {}",
                    prefix.value,
                    context(prefix.span.file_offset, &prefix.span.bytes)
                ),
            ));
        }
        lines.push(Line {
            offset: prefix.span.file_offset,
            bytes: prefix.span.bytes,
            depth: 0,
            text: format!("type[{i}]"),
        });
        let func_type = decode_func_type(cursor)?;
        lines.push(Line::header(
            cursor.absolute_offset(),
            1,
            format!("params = {:?}", func_type.params.iter().map(|t| t.name()).collect::<Vec<_>>()),
        ));
        lines.push(Line::header(
            cursor.absolute_offset(),
            1,
            format!("results = {:?}", func_type.results.iter().map(|t| t.name()).collect::<Vec<_>>()),
        ));
    }
    Ok(lines)
}

fn decode_import_kind_payload(cursor: &mut ByteCursor, kind: &Decoded<u8>, idx: usize) -> Result<Vec<Line>> {
    Ok(match kind.value {
        0 => {
            let typeidx = cursor.leb128_u()?;
            vec![Line {
                offset: typeidx.span.file_offset,
                bytes: typeidx.span.bytes,
                depth: 1,
                text: format!("typeidx = {}", typeidx.value),
            }]
        }
        1 => {
            let reftype = cursor.byte()?;
            let rt = RefType::from_byte(&reftype)?;
            let limits = decode_limits(cursor)?;
            vec![
                Line {
                    offset: reftype.span.file_offset,
                    bytes: reftype.span.bytes,
                    depth: 1,
                    text: rt.name().to_string(),
                },
                Line::header(cursor.absolute_offset(), 1, limits_text(&limits)),
            ]
        }
        2 => {
            let limits = decode_limits(cursor)?;
            vec![Line::header(cursor.absolute_offset(), 1, limits_text(&limits))]
        }
        3 => {
            let val_type = cursor.byte()?;
            let vt = ValType::from_byte(&val_type)?;
            let mutability = decode_mutability(cursor)?;
            vec![
                Line {
                    offset: val_type.span.file_offset,
                    bytes: val_type.span.bytes,
                    depth: 1,
                    text: vt.name().to_string(),
                },
                Line::header(cursor.absolute_offset(), 1, mutability_text(mutability)),
            ]
        }
        other => {
            return Err(Error::parse(
                disasm::UNKNOWN_IMPORT_KIND,
                format!(
                    "import[{idx}]: unknown import kind {other} {}",
                    context(kind.span.file_offset, &kind.span.bytes)
                ),
            ))
        }
    })
}

fn limits_text(limits: &crate::types::Limits) -> String {
    match limits.max {
        Some(max) => format!("limits = {{min: {}, max: {}}}", limits.min, max),
        None => format!("limits = {{min: {}}}", limits.min),
    }
}

fn mutability_text(mutability: crate::types::Mutability) -> String {
    match mutability {
        crate::types::Mutability::Const => "mutability = const".to_string(),
        crate::types::Mutability::Var => "mutability = var".to_string(),
    }
}

fn import_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("import count = {}", count.value))];
    for i in 0..count.value as usize {
        let module = cursor.utf8_name()?;
        let name = cursor.utf8_name()?;
        lines.push(Line {
            offset: module.span.file_offset,
            bytes: module.span.bytes,
            depth: 0,
            text: format!("import[{i}] module = {:?}", module.value),
        });
        lines.push(Line {
            offset: name.span.file_offset,
            bytes: name.span.bytes,
            depth: 0,
            text: format!("import[{i}] name = {:?}", name.value),
        });
        let kind = cursor.byte()?;
        lines.push(Line { offset: kind.span.file_offset, bytes: kind.span.bytes.clone(), depth: 1, text: format!("kind = {}", kind.value) });
        lines.extend(decode_import_kind_payload(cursor, &kind, i)?);
    }
    Ok(lines)
}

fn function_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("function count = {}", count.value))];
    for i in 0..count.value {
        let typeidx = cursor.leb128_u()?;
        lines.push(Line {
            offset: typeidx.span.file_offset,
            bytes: typeidx.span.bytes,
            depth: 0,
            text: format!("function[{i}] typeidx = {}", typeidx.value),
        });
    }
    Ok(lines)
}

fn table_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("table count = {}", count.value))];
    for i in 0..count.value {
        let reftype = cursor.byte()?;
        let rt = RefType::from_byte(&reftype)?;
        let limits = decode_limits(cursor)?;
        lines.push(Line {
            offset: reftype.span.file_offset,
            bytes: reftype.span.bytes,
            depth: 0,
            text: format!("table[{i}] reftype = {}", rt.name()),
        });
        lines.push(Line::header(cursor.absolute_offset(), 1, limits_text(&limits)));
    }
    Ok(lines)
}

fn memory_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("memory count = {}", count.value))];
    for i in 0..count.value {
        let limits = decode_limits(cursor)?;
        lines.push(Line::header(cursor.absolute_offset(), 0, format!("memory[{i}] {}", limits_text(&limits))));
    }
    Ok(lines)
}

fn global_section(cursor: &mut ByteCursor, opts: DecodeOptions) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("global count = {}", count.value))];
    for i in 0..count.value {
        let val_type = cursor.byte()?;
        let vt = ValType::from_byte(&val_type)?;
        let mutability = decode_mutability(cursor)?;
        lines.push(Line {
            offset: val_type.span.file_offset,
            bytes: val_type.span.bytes,
            depth: 0,
            text: format!("global[{i}] {}", vt.name()),
        });
        lines.push(Line::header(cursor.absolute_offset(), 1, mutability_text(mutability)));
        let expr = decode_expression(cursor, opts.indent_width, opts.max_depth)?;
        lines.extend(indent(expr, 1));
    }
    Ok(lines)
}

fn export_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("export count = {}", count.value))];
    for i in 0..count.value as usize {
        let name = cursor.utf8_name()?;
        lines.push(Line {
            offset: name.span.file_offset,
            bytes: name.span.bytes,
            depth: 0,
            text: format!("export[{i}] name = {:?}", name.value),
        });
        let kind = cursor.byte()?;
        if kind.value > 3 {
            return Err(Error::parse(
                disasm::UNKNOWN_EXPORT_KIND,
                format!(
                    "export[{i}]: unknown export kind {} {}",
                    kind.value,
                    context(kind.span.file_offset, &kind.span.bytes)
                ),
            ));
        }
        let idx = cursor.leb128_u()?;
        lines.push(Line { offset: kind.span.file_offset, bytes: kind.span.bytes, depth: 1, text: format!("kind = {}", kind.value) });
        lines.push(Line { offset: idx.span.file_offset, bytes: idx.span.bytes, depth: 1, text: format!("index = {}", idx.value) });
    }
    Ok(lines)
}

fn start_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let funcidx = cursor.leb128_u()?;
    Ok(vec![Line {
        offset: funcidx.span.file_offset,
        bytes: funcidx.span.bytes,
        depth: 0,
        text: format!("funcidx = {}", funcidx.value),
    }])
}

fn element_section(cursor: &mut ByteCursor, opts: DecodeOptions) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("element count = {}", count.value))];
    for i in 0..count.value as usize {
        let mode = cursor.byte()?;
        if mode.value >= 8 {
            return Err(Error::parse(
                disasm::UNKNOWN_ELEMENT_MODE,
                format!(
                    "elem[{i}]: unknown element mode {} {}",
                    mode.value,
                    context(mode.span.file_offset, &mode.span.bytes)
                ),
            ));
        }
        lines.push(Line {
            offset: mode.span.file_offset,
            bytes: mode.span.bytes,
            depth: 0,
            text: format!("elem[{i}] (mode:{})", mode.value),
        });

        let has_tableidx_field = mode.value == 2 || mode.value == 6;
        let is_active = mode.value & 1 == 0;
        let has_explicit_table_or_kind = mode.value & 0b011 != 0;
        let uses_expressions = mode.value & 0b100 != 0;

        if has_tableidx_field {
            let tableidx = cursor.leb128_u()?;
            lines.push(Line {
                offset: tableidx.span.file_offset,
                bytes: tableidx.span.bytes,
                depth: 1,
                text: format!("tableidx = {}", tableidx.value),
            });
        }
        if is_active {
            let offset_expr = decode_expression(cursor, opts.indent_width, opts.max_depth)?;
            lines.extend(indent(offset_expr, 1));
        }
        if uses_expressions {
            if has_explicit_table_or_kind {
                let reftype = cursor.byte()?;
                let rt = RefType::from_byte(&reftype)?;
                lines.push(Line {
                    offset: reftype.span.file_offset,
                    bytes: reftype.span.bytes,
                    depth: 1,
                    text: rt.name().to_string(),
                });
            }
            let expr_count = cursor.leb128_u()?;
            lines.push(Line::header(expr_count.span.file_offset, 1, format!("expr count = {}", expr_count.value)));
            for _ in 0..expr_count.value {
                let expr = decode_expression(cursor, opts.indent_width, opts.max_depth)?;
                lines.extend(indent(expr, 2));
            }
        } else {
            if has_explicit_table_or_kind {
                let elemkind = cursor.byte()?;
                if elemkind.value != 0 {
                    return Err(Error::parse(
                        disasm::UNKNOWN_ELEM_KIND,
                        format!(
                            "elem[{i}]: unknown elemkind {} {}",
                            elemkind.value,
                            context(elemkind.span.file_offset, &elemkind.span.bytes)
                        ),
                    ));
                }
                lines.push(Line {
                    offset: elemkind.span.file_offset,
                    bytes: elemkind.span.bytes,
                    depth: 1,
                    text: format!("elemkind = {}", elemkind.value),
                });
            }
            let funcidx_count = cursor.leb128_u()?;
            lines.push(Line::header(funcidx_count.span.file_offset, 1, format!("funcidx count = {}", funcidx_count.value)));
            for _ in 0..funcidx_count.value {
                let funcidx = cursor.leb128_u()?;
                lines.push(Line {
                    offset: funcidx.span.file_offset,
                    bytes: funcidx.span.bytes,
                    depth: 2,
                    text: funcidx.value.to_string(),
                });
            }
        }
    }
    Ok(lines)
}

fn code_section(cursor: &mut ByteCursor, opts: DecodeOptions) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("code count = {}", count.value))];
    for i in 0..count.value as usize {
        let size = cursor.leb128_u()?;
        lines.push(Line {
            offset: size.span.file_offset,
            bytes: size.span.bytes,
            depth: 0,
            text: format!("code[{i}] size = {}", size.value),
        });
        let mut body = cursor.sub_cursor(size.value as usize)?;

        let local_group_count = body.leb128_u()?;
        lines.push(Line::header(local_group_count.span.file_offset, 1, format!("local groups = {}", local_group_count.value)));
        for _ in 0..local_group_count.value {
            let local_count = body.leb128_u()?;
            let val_type = body.byte()?;
            let vt = ValType::from_byte(&val_type)?;
            lines.push(Line::header(
                local_count.span.file_offset,
                2,
                format!("locals: count = {} type = {}", local_count.value, vt.name()),
            ));
        }

        let expr = decode_expression(&mut body, opts.indent_width, opts.max_depth)?;
        lines.extend(indent(expr, 1));

        if !body.is_empty() {
            lines.push(trailing_unknown_data(&mut body));
        }
    }
    Ok(lines)
}

fn data_section(cursor: &mut ByteCursor, opts: DecodeOptions) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    let mut lines = vec![Line::header(count.span.file_offset, 0, format!("data count = {}", count.value))];
    for i in 0..count.value as usize {
        let mode = cursor.leb128_u()?;
        lines.push(Line {
            offset: mode.span.file_offset,
            bytes: mode.span.bytes.clone(),
            depth: 0,
            text: format!("data[{i}] (mode:{})", mode.value),
        });
        match mode.value {
            0 => {
                let offset_expr = decode_expression(cursor, opts.indent_width, opts.max_depth)?;
                lines.extend(indent(offset_expr, 1));
                lines.extend(decode_data_bytes(cursor)?);
            }
            1 => {
                lines.extend(decode_data_bytes(cursor)?);
            }
            2 => {
                let memidx = cursor.leb128_u()?;
                lines.push(Line {
                    offset: memidx.span.file_offset,
                    bytes: memidx.span.bytes,
                    depth: 1,
                    text: format!("memidx = {}", memidx.value),
                });
                let offset_expr = decode_expression(cursor, opts.indent_width, opts.max_depth)?;
                lines.extend(indent(offset_expr, 1));
                lines.extend(decode_data_bytes(cursor)?);
            }
            other => {
                return Err(Error::parse(
                    disasm::UNKNOWN_DATA_MODE,
                    format!(
                        "data[{i}]: unknown data mode {other} {}",
                        context(mode.span.file_offset, &mode.span.bytes)
                    ),
                ))
            }
        }
    }
    Ok(lines)
}

fn decode_data_bytes(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let len = cursor.leb128_u()?;
    let payload = cursor.require(len.value as usize)?;
    Ok(vec![Line {
        offset: payload.span.file_offset,
        bytes: payload.span.bytes,
        depth: 1,
        text: format!("bytes: size = {}", len.value),
    }])
}

fn datacount_section(cursor: &mut ByteCursor) -> Result<Vec<Line>> {
    let count = cursor.leb128_u()?;
    Ok(vec![Line {
        offset: count.span.file_offset,
        bytes: count.span.bytes,
        depth: 0,
        text: format!("count = {}", count.value),
    }])
}

fn indent(lines: Vec<Line>, by: usize) -> Vec<Line> {
    lines.into_iter().map(|mut l| { l.depth += by; l }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> DecodeOptions {
        DecodeOptions { indent_width: 2, max_depth: 1024 }
    }

    #[test]
    fn type_section_decodes_func_type() {
        let bytes = vec![0x01, 0x60, 0x02, 0x7F, 0x7F, 0x01, 0x7F];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::Type, &mut cursor, opts()).unwrap();
        assert!(lines.iter().any(|l| l.text.contains("params")));
        assert!(lines.iter().any(|l| l.text.contains("results")));
    }

    #[test]
    fn type_section_bad_prefix_fails() {
        let bytes = vec![0x01, 0x61];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let err = decode_section(SectionId::Type, &mut cursor, opts()).unwrap_err();
        assert_eq!(err.code, disasm::MALFORMED_FUNC_TYPE);
    }

    #[test]
    fn function_section_lists_typeidx() {
        let bytes = vec![0x02, 0x00, 0x01];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::Function, &mut cursor, opts()).unwrap();
        assert!(lines.iter().any(|l| l.text.contains("typeidx = 0")));
        assert!(lines.iter().any(|l| l.text.contains("typeidx = 1")));
    }

    #[test]
    fn start_section_reads_single_funcidx() {
        let bytes = vec![0x07];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::Start, &mut cursor, opts()).unwrap();
        assert_eq!(lines[0].text, "funcidx = 7");
    }

    #[test]
    fn element_mode_0_is_active_funcidx_list() {
        // count=1; mode=0; offset expr = i32.const 0 / end; funcidx count=1; funcidx=2
        let bytes = vec![0x01, 0x00, 0x41, 0x00, 0x0B, 0x01, 0x02];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::Element, &mut cursor, opts()).unwrap();
        assert!(lines.iter().any(|l| l.text == "funcidx count = 1"));
        assert!(lines.iter().any(|l| l.text == "2"));
    }

    #[test]
    fn element_mode_above_seven_fails() {
        let bytes = vec![0x01, 0x08];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let err = decode_section(SectionId::Element, &mut cursor, opts()).unwrap_err();
        assert_eq!(err.code, disasm::UNKNOWN_ELEMENT_MODE);
    }

    #[test]
    fn data_mode_1_is_passive_bytes_only() {
        let bytes = vec![0x01, 0x01, 0x03, b'a', b'b', b'c'];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::Data, &mut cursor, opts()).unwrap();
        assert!(lines.iter().any(|l| l.text == "bytes: size = 3"));
    }

    #[test]
    fn data_mode_above_two_fails() {
        let bytes = vec![0x01, 0x03];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let err = decode_section(SectionId::Data, &mut cursor, opts()).unwrap_err();
        assert_eq!(err.code, disasm::UNKNOWN_DATA_MODE);
    }

    #[test]
    fn datacount_section_reads_leb128u() {
        let bytes = vec![0xE5, 0x8E, 0x26];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::DataCount, &mut cursor, opts()).unwrap();
        assert_eq!(lines[0].text, "count = 624485");
    }

    #[test]
    fn trailing_bytes_are_unknown_data_not_an_error() {
        let bytes = vec![0x07, 0xAA, 0xBB];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_section(SectionId::Start, &mut cursor, opts()).unwrap();
        assert!(lines.iter().any(|l| l.text == "unknown data: size = 2"));
    }

    #[test]
    fn unknown_section_id_fails() {
        let byte = Decoded { value: 13u8, span: crate::cursor::Span { file_offset: 0, bytes: vec![13] } };
        assert!(SectionId::from_byte(&byte).is_err());
    }

    #[test]
    fn elemkind_nonzero_fails() {
        // count=1; mode=2 (active w/ explicit table, expr-free); tableidx=0;
        // offset expr = i32.const 0 / end; elemkind = 1 (invalid, must be 0)
        let bytes = vec![0x01, 0x02, 0x00, 0x41, 0x00, 0x0B, 0x01];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let err = decode_section(SectionId::Element, &mut cursor, opts()).unwrap_err();
        assert_eq!(err.code, disasm::UNKNOWN_ELEM_KIND);
    }
}
