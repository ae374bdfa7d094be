//! Positioned byte cursor over an in-memory Wasm binary.
//!
//! Every read advances the cursor and returns both the decoded value and
//! the [`Span`] of raw bytes that produced it, so the rest of the decoder
//! never has to recompute "where did this come from".

use wrt_error::{codes::disasm, context, Error, Result};

/// An absolute byte range within the input file.
///
/// Spans are immutable once produced. For aggregate reads (a length-prefixed
/// name, say) the span covers the length prefix and the payload
/// contiguously — nothing is ever appended to a span after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Absolute offset of `bytes[0]` within the original file.
    pub file_offset: u64,
    /// The raw bytes consumed to produce the decoded value.
    pub bytes: Vec<u8>,
}

impl Span {
    /// Offset one past the last byte covered by this span.
    #[must_use]
    pub fn end_offset(&self) -> u64 {
        self.file_offset + self.bytes.len() as u64
    }
}

/// A decoded value paired with the span of bytes it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    /// The decoded value.
    pub value: T,
    /// The bytes (and absolute offset) that produced it.
    pub span: Span,
}

impl<T> Decoded<T> {
    fn new(value: T, file_offset: u64, bytes: Vec<u8>) -> Self {
        Self { value, span: Span { file_offset, bytes } }
    }
}

/// A positioned view over an in-memory byte buffer.
///
/// `base_offset + read_pos` is always the absolute file position of the
/// next unread byte. Section framing creates sub-cursors over a section's
/// framed payload via [`ByteCursor::sub_cursor`]; these carry the
/// appropriate `base_offset` so spans they produce still read as absolute
/// file offsets.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    path: String,
    buffer: Vec<u8>,
    base_offset: u64,
    read_pos: usize,
}

impl ByteCursor {
    /// Creates a cursor over `buffer`, whose first byte sits at
    /// `base_offset` in the original file.
    #[must_use]
    pub fn new(path: impl Into<String>, buffer: Vec<u8>, base_offset: u64) -> Self {
        Self { path: path.into(), buffer, base_offset, read_pos: 0 }
    }

    /// The path reported in error messages.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of unread bytes remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.read_pos
    }

    /// Whether every byte in the buffer has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The absolute file offset of the next unread byte.
    #[must_use]
    pub fn absolute_offset(&self) -> u64 {
        self.base_offset + self.read_pos as u64
    }

    /// Bytes not yet consumed, without advancing the cursor.
    #[must_use]
    pub fn peek_remaining(&self) -> &[u8] {
        &self.buffer[self.read_pos..]
    }

    /// Captures the current read position, to be paired later with
    /// [`ByteCursor::rewind_and_require`].
    #[must_use]
    pub fn mark(&self) -> usize {
        self.read_pos
    }

    /// Advances by up to `n` bytes, returning whatever was available. Never
    /// fails; callers that need a hard minimum should use
    /// [`ByteCursor::require`].
    pub fn take(&mut self, n: usize) -> Decoded<Vec<u8>> {
        let start = self.read_pos;
        let end = (self.read_pos + n).min(self.buffer.len());
        let bytes = self.buffer[start..end].to_vec();
        self.read_pos = end;
        Decoded::new(bytes.clone(), self.base_offset + start as u64, bytes)
    }

    /// As [`ByteCursor::take`], but fails with `TruncatedInput` if fewer
    /// than `n` bytes remain.
    pub fn require(&mut self, n: usize) -> Result<Decoded<Vec<u8>>> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        Ok(self.take(n))
    }

    /// Builds the span covering `[saved_pos, current read position)`
    /// without moving the cursor any further. Used to materialize the span
    /// of a field that was consumed across several primitive reads (e.g.
    /// "the whole LEB128 integer", after reading it byte by byte).
    #[must_use]
    pub fn rewind_and_require(&self, saved_pos: usize) -> Decoded<Vec<u8>> {
        let bytes = self.buffer[saved_pos..self.read_pos].to_vec();
        Decoded::new(bytes.clone(), self.base_offset + saved_pos as u64, bytes)
    }

    /// Reads a single byte.
    pub fn byte(&mut self) -> Result<Decoded<u8>> {
        let d = self.require(1)?;
        Ok(Decoded::new(d.value[0], d.span.file_offset, d.span.bytes))
    }

    /// Reads a 4-byte little-endian `u32`.
    pub fn u32_le(&mut self) -> Result<Decoded<u32>> {
        let d = self.require(4)?;
        let value = u32::from_le_bytes([d.value[0], d.value[1], d.value[2], d.value[3]]);
        Ok(Decoded::new(value, d.span.file_offset, d.span.bytes))
    }

    /// Reads the raw bytes of a LEB128-encoded integer: every byte up to
    /// and including the first one whose high bit is clear.
    pub fn leb128_raw(&mut self) -> Result<Decoded<Vec<u8>>> {
        let start = self.read_pos;
        loop {
            if self.is_empty() {
                self.read_pos = start;
                return Err(self.truncated(1));
            }
            let byte = self.buffer[self.read_pos];
            self.read_pos += 1;
            if byte & 0x80 == 0 {
                break;
            }
        }
        Ok(self.rewind_and_require(start))
    }

    /// Reads an unsigned LEB128 integer: `sum((byte_i & 0x7F) << (7*i))`.
    /// No bit-width cap is applied at decode time.
    pub fn leb128_u(&mut self) -> Result<Decoded<u64>> {
        let raw = self.leb128_raw()?;
        let mut value: u64 = 0;
        for (i, byte) in raw.value.iter().enumerate() {
            value |= u64::from(byte & 0x7F) << (7 * i);
        }
        Ok(Decoded::new(value, raw.span.file_offset, raw.span.bytes))
    }

    /// Reads a signed LEB128 integer, sign-extending from bit 6 of the
    /// final byte.
    pub fn leb128_s(&mut self) -> Result<Decoded<i64>> {
        let raw = self.leb128_raw()?;
        let mut value: i64 = 0;
        let mut shift = 0u32;
        let mut last = 0u8;
        for byte in &raw.value {
            value |= i64::from(byte & 0x7F) << shift;
            shift += 7;
            last = *byte;
        }
        if shift < 64 && last & 0x40 != 0 {
            value |= -(1i64 << shift);
        }
        Ok(Decoded::new(value, raw.span.file_offset, raw.span.bytes))
    }

    /// Reads a length-prefixed UTF-8 name: `n = leb128_u()`, then `n` bytes
    /// decoded as UTF-8. The span covers both the length prefix and the
    /// payload.
    pub fn utf8_name(&mut self) -> Result<Decoded<String>> {
        let start = self.read_pos;
        let len = self.leb128_u()?;
        let payload = self.require(len.value as usize)?;
        let offset = self.base_offset + start as u64;
        let text = String::from_utf8(payload.value).map_err(|e| {
            Error::parse(
                disasm::INVALID_UTF8,
                format!("invalid UTF-8 name {}", context(offset, e.as_bytes())),
            )
        })?;
        let span = self.rewind_and_require(start);
        Ok(Decoded::new(text, span.span.file_offset, span.span.bytes))
    }

    /// Creates a sub-cursor over the next `n` bytes, consuming them from
    /// `self`. Used for section framing: each section gets a sub-cursor
    /// over its own payload so that trailing "unknown data" can be
    /// detected by checking `remaining()` after the handler returns.
    pub fn sub_cursor(&mut self, n: usize) -> Result<ByteCursor> {
        let d = self.require(n)?;
        Ok(ByteCursor::new(self.path.clone(), d.value, d.span.file_offset))
    }

    fn truncated(&self, wanted: usize) -> Error {
        Error::parse(
            disasm::TRUNCATED_INPUT,
            format!(
                "truncated input: wanted {} byte(s), {} remaining {}",
                wanted,
                self.remaining(),
                context(self.absolute_offset(), self.peek_remaining())
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leb128_u_shortest_and_padded_agree() {
        let mut short = ByteCursor::new("t", vec![0xE5, 0x8E, 0x26], 0);
        let mut padded =
            ByteCursor::new("t", vec![0xE5, 0x8E, 0xA6, 0x80, 0x80, 0x80, 0x00], 0);
        assert_eq!(short.leb128_u().unwrap().value, 624_485);
        assert_eq!(padded.leb128_u().unwrap().value, 624_485);
    }

    #[test]
    fn leb128_s_last_byte_0x7f_is_minus_one() {
        let mut cursor = ByteCursor::new("t", vec![0x7F], 0);
        assert_eq!(cursor.leb128_s().unwrap().value, -1);
    }

    #[test]
    fn require_fails_truncated() {
        let mut cursor = ByteCursor::new("t", vec![0x01], 0);
        let err = cursor.require(2).unwrap_err();
        assert_eq!(err.code, disasm::TRUNCATED_INPUT);
    }

    #[test]
    fn utf8_name_span_covers_prefix_and_payload() {
        let mut cursor = ByteCursor::new("t", vec![0x03, b'f', b'o', b'o'], 10);
        let decoded = cursor.utf8_name().unwrap();
        assert_eq!(decoded.value, "foo");
        assert_eq!(decoded.span.file_offset, 10);
        assert_eq!(decoded.span.bytes, vec![0x03, b'f', b'o', b'o']);
    }

    #[test]
    fn span_file_offset_matches_absolute_position() {
        let mut cursor = ByteCursor::new("t", vec![0xAA, 0xBB, 0xCC], 100);
        let first = cursor.take(1);
        assert_eq!(first.span.file_offset, 100);
        let second = cursor.take(2);
        assert_eq!(second.span.file_offset, 101);
        assert_eq!(second.span.bytes.len(), 2);
    }
}
