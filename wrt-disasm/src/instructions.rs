// WRT - wrt-disasm
// Module: Instruction Decoder
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Decodes a sequence of instructions into annotation lines, recursing into
//! structured control flow (`block`/`loop`/`if`/`else`) and stopping at the
//! matching `end`.

use wrt_error::{codes::disasm, context, Error, Result};

use crate::cursor::ByteCursor;
use crate::line::Line;
use crate::opcodes::{OperandKind, PLANE_A, PLANE_B, PLANE_C};
use crate::types::{RefType, ValType};

/// Alias kept for readability within this module: every line produced here
/// is anchored to the instruction bytes that produced it.
pub type AnnotatedLine = Line;

/// Decodes instructions from `cursor` until a top-level `end` (0x0B) is
/// consumed, honoring `max_depth` as a recursion guard against
/// pathologically nested input.
pub fn decode_expression(
    cursor: &mut ByteCursor,
    indent_width: usize,
    max_depth: usize,
) -> Result<Vec<AnnotatedLine>> {
    let mut lines = Vec::new();
    decode_block_body(cursor, indent_width, max_depth, 0, &mut lines)?;
    Ok(lines)
}

fn decode_block_body(
    cursor: &mut ByteCursor,
    indent_width: usize,
    max_depth: usize,
    depth: usize,
    lines: &mut Vec<AnnotatedLine>,
) -> Result<()> {
    if depth > max_depth {
        return Err(Error::parse(
            disasm::UNKNOWN_OPCODE,
            format!(
                "control-flow nesting exceeded max depth {max_depth} {}",
                context(cursor.absolute_offset(), cursor.peek_remaining())
            ),
        ));
    }
    loop {
        let opcode_byte = cursor.byte()?;
        let c1 = opcode_byte.value;

        if c1 == 0x0B {
            lines.push(AnnotatedLine {
                offset: opcode_byte.span.file_offset,
                bytes: opcode_byte.span.bytes.clone(),
                depth: depth.saturating_sub(1),
                text: "end".to_string(),
            });
            return Ok(());
        }
        if c1 == 0x05 {
            lines.push(AnnotatedLine {
                offset: opcode_byte.span.file_offset,
                bytes: opcode_byte.span.bytes.clone(),
                depth: depth.saturating_sub(1),
                text: "else".to_string(),
            });
            decode_block_body(cursor, indent_width, max_depth, depth, lines)?;
            return Ok(());
        }

        let (mnemonic, operands, sub_span_bytes) = if c1 == 0xFC || c1 == 0xFD {
            let sub = cursor.leb128_u()?;
            let plane = if c1 == 0xFC { &PLANE_B } else { &PLANE_C };
            let entry = plane
                .get(sub.value as usize)
                .and_then(|slot| *slot)
                .ok_or_else(|| {
                    Error::parse(
                        disasm::UNKNOWN_OPCODE,
                        format!(
                            "unknown opcode 0x{c1:02x} 0x{:x} {}",
                            sub.value,
                            context(opcode_byte.span.file_offset, &sub.span.bytes)
                        ),
                    )
                })?;
            (entry.mnemonic, entry.operands, sub.span.bytes)
        } else {
            let entry = PLANE_A[c1 as usize].ok_or_else(|| {
                Error::parse(
                    disasm::UNKNOWN_OPCODE,
                    format!(
                        "unknown opcode 0x{c1:02x} {}",
                        context(opcode_byte.span.file_offset, &opcode_byte.span.bytes)
                    ),
                )
            })?;
            (entry.mnemonic, entry.operands, Vec::new())
        };

        log::trace!("opcode 0x{c1:02x} at depth {depth}: {mnemonic}");

        let mut header_bytes = opcode_byte.span.bytes.clone();
        header_bytes.extend(sub_span_bytes);
        lines.push(AnnotatedLine {
            offset: opcode_byte.span.file_offset,
            bytes: header_bytes,
            depth,
            text: mnemonic.to_string(),
        });

        let is_structured = matches!(mnemonic, "block" | "loop" | "if");
        let mut block_type_line = None;
        for operand in operands {
            if *operand == OperandKind::Bt {
                block_type_line = Some(decode_block_type(cursor, depth)?);
            } else {
                lines.extend(decode_operand(cursor, *operand, depth)?);
            }
        }
        if let Some(bt_line) = block_type_line {
            lines.push(bt_line);
        }

        if is_structured {
            decode_block_body(cursor, indent_width, max_depth, depth + 1, lines)?;
        }
    }
}

fn decode_block_type(cursor: &mut ByteCursor, depth: usize) -> Result<AnnotatedLine> {
    let peek = cursor.peek_remaining().first().copied();
    if let Some(b) = peek {
        if b & 0x40 != 0 {
            let byte = cursor.byte()?;
            if byte.value == 0x40 {
                return Ok(AnnotatedLine {
                    offset: byte.span.file_offset,
                    bytes: byte.span.bytes,
                    depth,
                    text: "(empty)".to_string(),
                });
            }
            let val_type = ValType::from_byte(&byte)?;
            return Ok(AnnotatedLine {
                offset: byte.span.file_offset,
                bytes: byte.span.bytes,
                depth,
                text: val_type.name().to_string(),
            });
        }
    }
    let type_idx = cursor.leb128_s()?;
    Ok(AnnotatedLine {
        offset: type_idx.span.file_offset,
        bytes: type_idx.span.bytes,
        depth,
        text: type_idx.value.to_string(),
    })
}

fn decode_operand(
    cursor: &mut ByteCursor,
    kind: OperandKind,
    depth: usize,
) -> Result<Vec<AnnotatedLine>> {
    match kind {
        OperandKind::Idx => {
            let v = cursor.leb128_u()?;
            Ok(vec![AnnotatedLine {
                offset: v.span.file_offset,
                bytes: v.span.bytes,
                depth,
                text: v.value.to_string(),
            }])
        }
        OperandKind::I32 => {
            let v = cursor.leb128_s()?;
            Ok(vec![AnnotatedLine {
                offset: v.span.file_offset,
                bytes: v.span.bytes,
                depth,
                text: (v.value as i32).to_string(),
            }])
        }
        OperandKind::I64 => {
            let v = cursor.leb128_s()?;
            Ok(vec![AnnotatedLine {
                offset: v.span.file_offset,
                bytes: v.span.bytes,
                depth,
                text: v.value.to_string(),
            }])
        }
        OperandKind::F32 => {
            let v = cursor.u32_le()?;
            let value = f32::from_bits(v.value);
            Ok(vec![AnnotatedLine {
                offset: v.span.file_offset,
                bytes: v.span.bytes,
                depth,
                text: value.to_string(),
            }])
        }
        OperandKind::F64 => {
            let d = cursor.require(8)?;
            let bytes: [u8; 8] = d.value.clone().try_into().expect("require(8) yields 8 bytes");
            let value = f64::from_le_bytes(bytes);
            Ok(vec![AnnotatedLine {
                offset: d.span.file_offset,
                bytes: d.span.bytes,
                depth,
                text: value.to_string(),
            }])
        }
        OperandKind::Mao => {
            let align = cursor.leb128_u()?;
            let offset = cursor.leb128_u()?;
            Ok(vec![
                AnnotatedLine {
                    offset: align.span.file_offset,
                    bytes: align.span.bytes,
                    depth,
                    text: format!("align = {}", align.value),
                },
                AnnotatedLine {
                    offset: offset.span.file_offset,
                    bytes: offset.span.bytes,
                    depth,
                    text: format!("offset = {}", offset.value),
                },
            ])
        }
        OperandKind::TPlus => {
            let count = cursor.leb128_u()?;
            let mut out = vec![AnnotatedLine {
                offset: count.span.file_offset,
                bytes: count.span.bytes,
                depth,
                text: format!("(types={})", count.value),
            }];
            for _ in 0..count.value {
                let byte = cursor.byte()?;
                let val_type = ValType::from_byte(&byte)?;
                out.push(AnnotatedLine {
                    offset: byte.span.file_offset,
                    bytes: byte.span.bytes,
                    depth,
                    text: val_type.name().to_string(),
                });
            }
            Ok(out)
        }
        OperandKind::LidPlus => {
            let count = cursor.leb128_u()?;
            let mut out = vec![AnnotatedLine {
                offset: count.span.file_offset,
                bytes: count.span.bytes,
                depth,
                text: format!("(types={})", count.value),
            }];
            for _ in 0..count.value {
                let idx = cursor.leb128_u()?;
                out.push(AnnotatedLine {
                    offset: idx.span.file_offset,
                    bytes: idx.span.bytes,
                    depth,
                    text: idx.value.to_string(),
                });
            }
            Ok(out)
        }
        OperandKind::Ref => {
            let byte = cursor.byte()?;
            let ref_type = RefType::from_byte(&byte)?;
            Ok(vec![AnnotatedLine {
                offset: byte.span.file_offset,
                bytes: byte.span.bytes,
                depth,
                text: ref_type.name().to_string(),
            }])
        }
        OperandKind::Vb16 => {
            let d = cursor.require(16)?;
            let hex = d.value.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ");
            Ok(vec![AnnotatedLine { offset: d.span.file_offset, bytes: d.span.bytes, depth, text: hex }])
        }
        OperandKind::Vl => {
            let byte = cursor.byte()?;
            Ok(vec![AnnotatedLine {
                offset: byte.span.file_offset,
                bytes: byte.span.bytes,
                depth,
                text: format!("lane = 0x{:02x}", byte.value),
            }])
        }
        OperandKind::Literal(expected) => {
            let byte = cursor.byte()?;
            if byte.value != expected {
                return Err(Error::parse(
                    disasm::UNKNOWN_OPCODE,
                    format!(
                        "expected literal byte 0x{expected:02x}, found 0x{:02x} {}",
                        byte.value,
                        context(byte.span.file_offset, &byte.span.bytes)
                    ),
                ));
            }
            Ok(vec![AnnotatedLine {
                offset: byte.span.file_offset,
                bytes: byte.span.bytes,
                depth,
                text: format!("(code:0x{:02x})", byte.value),
            }])
        }
        OperandKind::Bt => unreachable!("block type is handled by decode_block_type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_sequence_ends_at_top_level_end() {
        // i32.const 5; i32.const 7; i32.add; end
        let bytes = vec![0x41, 0x05, 0x41, 0x07, 0x6A, 0x0B];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_expression(&mut cursor, 2, 1024).unwrap();
        let mnemonics: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(mnemonics.contains(&"i32.add"));
        assert_eq!(mnemonics.last(), Some(&"end"));
        assert!(cursor.is_empty());
    }

    #[test]
    fn nested_block_recurses_and_tracks_depth() {
        // block (empty) / nop / end / end
        let bytes = vec![0x02, 0x40, 0x01, 0x0B, 0x0B];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_expression(&mut cursor, 2, 1024).unwrap();
        let nop_line = lines.iter().find(|l| l.text == "nop").unwrap();
        assert_eq!(nop_line.depth, 1);
        // the `end` closing the nested block prints one level shallower than
        // the body it closes, at the depth of the `block` header itself.
        let first_end = lines.iter().find(|l| l.text == "end").unwrap();
        assert_eq!(first_end.depth, 0);
    }

    #[test]
    fn if_else_end_recurses_into_both_arms() {
        // if (empty) / nop / else / nop / end / end
        let bytes = vec![0x04, 0x40, 0x01, 0x05, 0x01, 0x0B, 0x0B];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_expression(&mut cursor, 2, 1024).unwrap();
        let nops: Vec<_> = lines.iter().filter(|l| l.text == "nop").collect();
        assert_eq!(nops.len(), 2);
        assert!(nops.iter().all(|l| l.depth == 1));
        // `else` drops one level, then its arm's body returns to depth 1.
        let else_line = lines.iter().find(|l| l.text == "else").unwrap();
        assert_eq!(else_line.depth, 0);
    }

    #[test]
    fn unknown_opcode_fails() {
        let bytes = vec![0x06, 0x0B];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let err = decode_expression(&mut cursor, 2, 1024).unwrap_err();
        assert_eq!(err.code, disasm::UNKNOWN_OPCODE);
    }

    #[test]
    fn br_table_decodes_count_then_each_label() {
        // br_table with 2 labels [3, 4]; end
        let bytes = vec![0x0E, 0x02, 0x03, 0x04, 0x0B];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_expression(&mut cursor, 2, 1024).unwrap();
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"(types=2)"));
        assert!(texts.contains(&"3"));
        assert!(texts.contains(&"4"));
    }

    #[test]
    fn memory_size_checks_trailing_literal_zero() {
        let bytes = vec![0x3F, 0x00, 0x0B];
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_expression(&mut cursor, 2, 1024).unwrap();
        assert!(lines.iter().any(|l| l.text == "(code:0x00)"));
    }

    #[test]
    fn simd_v128_const_reads_sixteen_bytes() {
        let mut bytes = vec![0xFD, 0x0C];
        bytes.extend(std::iter::repeat(0xAB).take(16));
        bytes.push(0x0B);
        let mut cursor = ByteCursor::new("t", bytes, 0);
        let lines = decode_expression(&mut cursor, 2, 1024).unwrap();
        let payload = lines.iter().find(|l| l.text.starts_with("ab ")).unwrap();
        assert_eq!(payload.text.split(' ').count(), 16);
    }
}
