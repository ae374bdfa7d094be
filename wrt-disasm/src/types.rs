//! Value types, reference types, function types, limits, and mutability.

use wrt_error::{codes::disasm, context, Error, Result};

use crate::cursor::{ByteCursor, Decoded};

/// A Wasm value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValType {
    I32,
    I64,
    F32,
    F64,
    V128,
    FuncRef,
    ExternRef,
}

impl ValType {
    /// Decodes a value-type byte, failing with `UnknownValType` if it is
    /// not one of the seven codes in the table.
    pub fn from_byte(byte: &Decoded<u8>) -> Result<Self> {
        Ok(match byte.value {
            0x7F => Self::I32,
            0x7E => Self::I64,
            0x7D => Self::F32,
            0x7C => Self::F64,
            0x7B => Self::V128,
            0x70 => Self::FuncRef,
            0x6F => Self::ExternRef,
            _ => {
                return Err(Error::parse(
                    disasm::UNKNOWN_VAL_TYPE,
                    format!(
                        "unknown value type code 0x{:02x} {}",
                        byte.value,
                        context(byte.span.file_offset, &byte.span.bytes)
                    ),
                ))
            }
        })
    }

    /// The name shown in the annotation column.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::V128 => "v128",
            Self::FuncRef => "funcref",
            Self::ExternRef => "externref",
        }
    }
}

/// A Wasm reference type — the `funcref`/`externref` subset of [`ValType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    FuncRef,
    ExternRef,
}

impl RefType {
    /// Decodes a reference-type byte, failing with `UnknownRefType` if it
    /// is not `funcref` or `externref`.
    pub fn from_byte(byte: &Decoded<u8>) -> Result<Self> {
        match byte.value {
            0x70 => Ok(Self::FuncRef),
            0x6F => Ok(Self::ExternRef),
            _ => Err(Error::parse(
                disasm::UNKNOWN_REF_TYPE,
                format!(
                    "unknown reference type code 0x{:02x} {}",
                    byte.value,
                    context(byte.span.file_offset, &byte.span.bytes)
                ),
            )),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FuncRef => "funcref",
            Self::ExternRef => "externref",
        }
    }
}

/// A count-prefixed vector of value types (a Wasm `resulttype`).
pub fn decode_result_type(cursor: &mut ByteCursor) -> Result<(Vec<Decoded<ValType>>, Decoded<u64>)> {
    let count = cursor.leb128_u()?;
    let mut types = Vec::with_capacity(count.value as usize);
    for _ in 0..count.value {
        let byte = cursor.byte()?;
        let val_type = ValType::from_byte(&byte)?;
        types.push(Decoded { value: val_type, span: byte.span });
    }
    Ok((types, count))
}

/// A decoded function type: `0x60 params results`.
#[derive(Debug, Clone)]
pub struct FuncType {
    pub params: Vec<ValType>,
    pub results: Vec<ValType>,
}

/// Decodes a function type, expecting the `0x60` prefix byte (already
/// consumed by the caller, which owns its span for annotation purposes).
pub fn decode_func_type(cursor: &mut ByteCursor) -> Result<FuncType> {
    let (params, _) = decode_result_type(cursor)?;
    let (results, _) = decode_result_type(cursor)?;
    Ok(FuncType {
        params: params.into_iter().map(|d| d.value).collect(),
        results: results.into_iter().map(|d| d.value).collect(),
    })
}

/// Table/memory limits: `min` only, or `min` and `max`.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub min: u64,
    pub max: Option<u64>,
}

/// Decodes limits: a flag byte (0 = min only, 1 = min and max) followed by
/// one or two LEB128u integers.
pub fn decode_limits(cursor: &mut ByteCursor) -> Result<Limits> {
    let flag = cursor.byte()?;
    match flag.value {
        0 => {
            let min = cursor.leb128_u()?;
            Ok(Limits { min: min.value, max: None })
        }
        1 => {
            let min = cursor.leb128_u()?;
            let max = cursor.leb128_u()?;
            Ok(Limits { min: min.value, max: Some(max.value) })
        }
        other => Err(Error::parse(
            disasm::MALFORMED_LIMITS,
            format!(
                "malformed limits flag 0x{other:02x} {}",
                context(flag.span.file_offset, &flag.span.bytes)
            ),
        )),
    }
}

/// Global mutability: `0` = const, `1` = var.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Const,
    Var,
}

/// Decodes a mutability byte.
pub fn decode_mutability(cursor: &mut ByteCursor) -> Result<Mutability> {
    let byte = cursor.byte()?;
    match byte.value {
        0 => Ok(Mutability::Const),
        1 => Ok(Mutability::Var),
        other => Err(Error::parse(
            disasm::MALFORMED_MUTABILITY,
            format!(
                "malformed mutability flag 0x{other:02x} {}",
                context(byte.span.file_offset, &byte.span.bytes)
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Span;

    fn byte_at(value: u8, offset: u64) -> Decoded<u8> {
        Decoded { value, span: Span { file_offset: offset, bytes: vec![value] } }
    }

    #[test]
    fn decodes_all_value_types() {
        assert_eq!(ValType::from_byte(&byte_at(0x7F, 0)).unwrap().name(), "i32");
        assert_eq!(ValType::from_byte(&byte_at(0x6F, 0)).unwrap().name(), "externref");
    }

    #[test]
    fn unknown_value_type_fails() {
        assert!(ValType::from_byte(&byte_at(0x01, 0)).is_err());
    }

    #[test]
    fn unknown_value_type_error_includes_offset() {
        let err = ValType::from_byte(&byte_at(0x01, 0x2a)).unwrap_err();
        assert!(err.message.contains("0x2a"));
    }

    #[test]
    fn limits_min_only() {
        let mut cursor = ByteCursor::new("t", vec![0x00, 0x05], 0);
        let limits = decode_limits(&mut cursor).unwrap();
        assert_eq!(limits.min, 5);
        assert_eq!(limits.max, None);
    }

    #[test]
    fn limits_min_and_max() {
        let mut cursor = ByteCursor::new("t", vec![0x01, 0x02, 0x09], 0);
        let limits = decode_limits(&mut cursor).unwrap();
        assert_eq!(limits.min, 2);
        assert_eq!(limits.max, Some(9));
    }

    #[test]
    fn malformed_limits_flag() {
        let mut cursor = ByteCursor::new("t", vec![0x02], 0);
        assert!(decode_limits(&mut cursor).is_err());
    }

    #[test]
    fn func_type_params_and_results() {
        let mut cursor = ByteCursor::new("t", vec![0x02, 0x7F, 0x7F, 0x01, 0x7F], 0);
        let func_type = decode_func_type(&mut cursor).unwrap();
        assert_eq!(func_type.params.len(), 2);
        assert_eq!(func_type.results.len(), 1);
        assert_eq!(func_type.results[0].name(), "i32");
    }
}
