//! The static, three-plane opcode dispatch table.
//!
//! Plane A covers one-byte opcodes; Plane B covers the `0xFC`-prefixed
//! (misc / bulk-memory / table) extension space; Plane C covers the
//! `0xFD`-prefixed (vector / SIMD) extension space. Each plane is a fixed
//! 256-entry array indexed by the raw opcode (Plane A) or the
//! LEB128u-decoded sub-opcode (Planes B/C); empty slots are reserved and
//! cause `UnknownOpcode` if ever dispatched.
//!
//! Two entries intentionally diverge from a naive transcription of the
//! Python original this tool is grounded on: Plane C's `0xA5`/`0xA6` are
//! `i16x8.narrow_i32x4_s`/`_u` here (the original names these
//! `i32x4.narrow_i32x4_*`, which is not a real Wasm SIMD instruction — see
//! DESIGN.md).

/// A single operand's decoding rule. Every Wasm instruction operand in this
/// tool's supported opcode space is one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Any index space (type/func/table/mem/global/elem/data/local/label) —
    /// decoded as LEB128u, displayed as a bare decimal.
    Idx,
    /// Signed 32-bit constant.
    I32,
    /// Signed 64-bit constant.
    I64,
    /// IEEE-754 binary32, little-endian.
    F32,
    /// IEEE-754 binary64, little-endian.
    F64,
    /// Memory argument: `align` then `offset`, both LEB128u.
    Mao,
    /// Block type: empty, a value type, or a type index.
    Bt,
    /// A count-prefixed vector of value types (`select t*`).
    TPlus,
    /// A count-prefixed vector of label indices (`br_table`).
    LidPlus,
    /// A single-byte reference type.
    Ref,
    /// 16 raw bytes: a `v128.const` literal or `i8x16.shuffle` lane list.
    Vb16,
    /// A single-byte SIMD lane index.
    Vl,
    /// A fixed literal byte that must follow (reserved-for-future-use
    /// operands such as the `0x00` memory index after `memory.size`).
    Literal(u8),
}

/// One live slot in the opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Display mnemonic, e.g. `i32.add`, `v128.load8_lane`.
    pub mnemonic: &'static str,
    /// Operand grammar, in encoding order.
    pub operands: &'static [OperandKind],
}

const fn e(mnemonic: &'static str) -> Option<OpcodeEntry> {
    Some(OpcodeEntry { mnemonic, operands: &[] })
}

const fn eo(mnemonic: &'static str, operands: &'static [OperandKind]) -> Option<OpcodeEntry> {
    Some(OpcodeEntry { mnemonic, operands })
}

use OperandKind::{Bt, Idx, LidPlus, Literal, Mao, Ref, TPlus, Vb16, Vl, F32, F64, I32, I64};

/// Plane A: one-byte opcodes.
pub static PLANE_A: [Option<OpcodeEntry>; 256] = [
    // 0x00
    e("unreachable"),
    e("nop"),
    eo("block", &[Bt]),
    eo("loop", &[Bt]),
    eo("if", &[Bt]),
    e("else"),
    None, None, None, None,
    e("end"),
    eo("br", &[Idx]),
    eo("br_if", &[Idx]),
    eo("br_table", &[LidPlus]),
    e("return"),
    // 0x10
    eo("call", &[Idx]),
    eo("call_indirect", &[Idx, Idx]),
    None, None, None, None, None, None, None, None,
    e("drop"),
    e("select"),
    eo("select", &[TPlus]),
    None, None, None,
    // 0x20
    eo("local.get", &[Idx]),
    eo("local.set", &[Idx]),
    eo("local.tee", &[Idx]),
    eo("global.get", &[Idx]),
    eo("global.set", &[Idx]),
    eo("table.get", &[Idx]),
    eo("table.set", &[Idx]),
    None,
    eo("i32.load", &[Mao]),
    eo("i64.load", &[Mao]),
    eo("f32.load", &[Mao]),
    eo("f64.load", &[Mao]),
    eo("i32.load8_s", &[Mao]),
    eo("i32.load8_u", &[Mao]),
    eo("i32.load16_s", &[Mao]),
    eo("i32.load16_u", &[Mao]),
    // 0x30
    eo("i64.load8_s", &[Mao]),
    eo("i64.load8_u", &[Mao]),
    eo("i64.load16_s", &[Mao]),
    eo("i64.load16_u", &[Mao]),
    eo("i64.load32_s", &[Mao]),
    eo("i64.load32_u", &[Mao]),
    eo("i32.store", &[Mao]),
    eo("i64.store", &[Mao]),
    eo("f32.store", &[Mao]),
    eo("f64.store", &[Mao]),
    eo("i32.store8", &[Mao]),
    eo("i32.store16", &[Mao]),
    eo("i64.store8", &[Mao]),
    eo("i64.store16", &[Mao]),
    eo("i64.store32", &[Mao]),
    eo("memory.size", &[Literal(0)]),
    // 0x40
    eo("memory.grow", &[Literal(0)]),
    eo("i32.const", &[I32]),
    eo("i64.const", &[I64]),
    eo("f32.const", &[F32]),
    eo("f64.const", &[F64]),
    e("i32.eqz"),
    e("i32.eq"),
    e("i32.ne"),
    e("i32.lt_s"),
    e("i32.lt_u"),
    e("i32.gt_s"),
    e("i32.gt_u"),
    e("i32.le_s"),
    e("i32.le_u"),
    e("i32.ge_s"),
    e("i32.ge_u"),
    // 0x50
    e("i64.eqz"),
    e("i64.eq"),
    e("i64.ne"),
    e("i64.lt_s"),
    e("i64.lt_u"),
    e("i64.gt_s"),
    e("i64.gt_u"),
    e("i64.le_s"),
    e("i64.le_u"),
    e("i64.ge_s"),
    e("i64.ge_u"),
    e("f32.eq"),
    e("f32.ne"),
    e("f32.lt"),
    e("f32.gt"),
    e("f32.le"),
    // 0x60
    e("f32.ge"),
    e("f64.eq"),
    e("f64.ne"),
    e("f64.lt"),
    e("f64.gt"),
    e("f64.le"),
    e("f64.ge"),
    e("i32.clz"),
    e("i32.ctz"),
    e("i32.popcnt"),
    e("i32.add"),
    e("i32.sub"),
    e("i32.mul"),
    e("i32.div_s"),
    e("i32.div_u"),
    e("i32.rem_s"),
    // 0x70
    e("i32.rem_u"),
    e("i32.and"),
    e("i32.or"),
    e("i32.xor"),
    e("i32.shl"),
    e("i32.shr_s"),
    e("i32.shr_u"),
    e("i32.rotl"),
    e("i32.rotr"),
    e("i64.clz"),
    e("i64.ctz"),
    e("i64.popcnt"),
    e("i64.add"),
    e("i64.sub"),
    e("i64.mul"),
    e("i64.div_s"),
    // 0x80
    e("i64.div_u"),
    e("i64.rem_s"),
    e("i64.rem_u"),
    e("i64.and"),
    e("i64.or"),
    e("i64.xor"),
    e("i64.shl"),
    e("i64.shr_s"),
    e("i64.shr_u"),
    e("i64.rotl"),
    e("i64.rotr"),
    e("f32.abs"),
    e("f32.neg"),
    e("f32.ceil"),
    e("f32.floor"),
    e("f32.trunc"),
    // 0x90
    e("f32.nearest"),
    e("f32.sqrt"),
    e("f32.add"),
    e("f32.sub"),
    e("f32.mul"),
    e("f32.div"),
    e("f32.min"),
    e("f32.max"),
    e("f32.copysign"),
    e("f64.abs"),
    e("f64.neg"),
    e("f64.ceil"),
    e("f64.floor"),
    e("f64.trunc"),
    e("f64.nearest"),
    e("f64.sqrt"),
    // 0xA0
    e("f64.add"),
    e("f64.sub"),
    e("f64.mul"),
    e("f64.div"),
    e("f64.min"),
    e("f64.max"),
    e("f64.copysign"),
    e("i32.wrap"),
    e("i32.trunc_f32_s"),
    e("i32.trunc_f32_u"),
    e("i32.trunc_f64_s"),
    e("i32.trunc_f64_u"),
    e("i64.extend_i32_s"),
    e("i64.extend_i32_u"),
    e("i64.trunc_f32_s"),
    e("i64.trunc_f32_u"),
    // 0xB0
    e("i64.trunc_f64_s"),
    e("i64.trunc_f64_u"),
    e("f32.convert_i32_s"),
    e("f32.convert_i32_u"),
    e("f32.convert_i64_s"),
    e("f32.convert_i64_u"),
    e("f32.demote_f64"),
    e("f64.convert_i32_s"),
    e("f64.convert_i32_u"),
    e("f64.convert_i64_s"),
    e("f64.convert_i64_u"),
    e("f64.promote_f32"),
    e("i32.reinterpret_f32"),
    e("i64.reinterpret_f64"),
    e("f32.reinterpret_i32"),
    e("f64.reinterpret_i64"),
    // 0xC0
    e("i32.extend8_s"),
    e("i32.extend16_s"),
    e("i64.extend8_s"),
    e("i64.extend16_s"),
    e("i64.extend32_s"),
    None, None, None, None, None, None, None, None, None, None, None,
    // 0xD0
    eo("ref.null", &[Ref]),
    e("ref.is_null"),
    eo("ref.func", &[Idx]),
    None, None, None, None, None, None, None, None, None, None, None, None, None,
    // 0xE0
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    // 0xF0
    None, None, None, None, None, None, None, None, None, None, None, None,
];

/// Plane B: the `0xFC`-prefixed misc/bulk-memory/table extension space,
/// indexed by the LEB128u-decoded sub-opcode.
pub static PLANE_B: [Option<OpcodeEntry>; 256] = {
    let mut table: [Option<OpcodeEntry>; 256] = [None; 256];
    table[0x00] = e("i32.trunc_sat_f32_s");
    table[0x01] = e("i32.trunc_sat_f32_u");
    table[0x02] = e("i32.trunc_sat_f64_s");
    table[0x03] = e("i32.trunc_sat_f64_u");
    table[0x04] = e("i64.trunc_sat_f32_s");
    table[0x05] = e("i64.trunc_sat_f32_u");
    table[0x06] = e("i64.trunc_sat_f64_s");
    table[0x07] = e("i64.trunc_sat_f64_u");
    table[0x08] = eo("memory.init", &[Idx, Literal(0)]);
    table[0x09] = eo("data.drop", &[Idx]);
    table[0x0A] = eo("memory.copy", &[Literal(0), Literal(0)]);
    table[0x0B] = eo("memory.fill", &[Literal(0)]);
    table[0x0C] = eo("table.init", &[Idx, Idx]);
    table[0x0D] = eo("elem.drop", &[Idx]);
    table[0x0E] = eo("table.copy", &[Idx, Idx]);
    table[0x0F] = eo("table.grow", &[Idx]);
    table[0x10] = eo("table.size", &[Idx]);
    table[0x11] = eo("table.fill", &[Idx]);
    table
};

/// Plane C: the `0xFD`-prefixed vector (SIMD) extension space, indexed by
/// the LEB128u-decoded sub-opcode.
pub static PLANE_C: [Option<OpcodeEntry>; 256] = {
    let mut t: [Option<OpcodeEntry>; 256] = [None; 256];
    // 0x00
    t[0x00] = eo("v128.load", &[Mao]);
    t[0x01] = eo("v128.load8x8_s", &[Mao]);
    t[0x02] = eo("v128.load8x8_u", &[Mao]);
    t[0x03] = eo("v128.load16x4_s", &[Mao]);
    t[0x04] = eo("v128.load16x4_u", &[Mao]);
    t[0x05] = eo("v128.load32x2_s", &[Mao]);
    t[0x06] = eo("v128.load32x2_u", &[Mao]);
    t[0x07] = eo("v128.load8_splat", &[Mao]);
    t[0x08] = eo("v128.load16_splat", &[Mao]);
    t[0x09] = eo("v128.load32_splat", &[Mao]);
    t[0x0A] = eo("v128.load64_splat", &[Mao]);
    t[0x0B] = eo("v128.store", &[Mao]);
    t[0x0C] = eo("v128.const", &[Vb16]);
    t[0x0D] = eo("i8x16.shuffle", &[Vb16]);
    t[0x0E] = e("i8x16.swizzle");
    t[0x0F] = e("i8x16.splat");
    // 0x10
    t[0x10] = e("i16x8.splat");
    t[0x11] = e("i32x4.splat");
    t[0x12] = e("i64x2.splat");
    t[0x13] = e("f32x4.splat");
    t[0x14] = e("f64x2.splat");
    t[0x15] = eo("i8x16.extract_lane_s", &[Vl]);
    t[0x16] = eo("i8x16.extract_lane_u", &[Vl]);
    t[0x17] = eo("i8x16.replace_lane", &[Vl]);
    t[0x18] = eo("i16x8.extract_lane_s", &[Vl]);
    t[0x19] = eo("i16x8.extract_lane_u", &[Vl]);
    t[0x1A] = eo("i16x8.replace_lane", &[Vl]);
    t[0x1B] = eo("i32x4.extract_lane", &[Vl]);
    t[0x1C] = eo("i32x4.replace_lane", &[Vl]);
    t[0x1D] = eo("i64x2.extract_lane", &[Vl]);
    t[0x1E] = eo("i64x2.replace_lane", &[Vl]);
    t[0x1F] = eo("f32x4.extract_lane", &[Vl]);
    // 0x20
    t[0x20] = eo("f32x4.replace_lane", &[Vl]);
    t[0x21] = eo("f64x2.extract_lane", &[Vl]);
    t[0x22] = eo("f64x2.replace_lane", &[Vl]);
    t[0x23] = e("i8x16.eq");
    t[0x24] = e("i8x16.ne");
    t[0x25] = e("i8x16.lt_s");
    t[0x26] = e("i8x16.lt_u");
    t[0x27] = e("i8x16.gt_s");
    t[0x28] = e("i8x16.gt_u");
    t[0x29] = e("i8x16.le_s");
    t[0x2A] = e("i8x16.le_u");
    t[0x2B] = e("i8x16.ge_s");
    t[0x2C] = e("i8x16.ge_u");
    t[0x2D] = e("i16x8.eq");
    t[0x2E] = e("i16x8.ne");
    t[0x2F] = e("i16x8.lt_s");
    // 0x30
    t[0x30] = e("i16x8.lt_u");
    t[0x31] = e("i16x8.gt_s");
    t[0x32] = e("i16x8.gt_u");
    t[0x33] = e("i16x8.le_s");
    t[0x34] = e("i16x8.le_u");
    t[0x35] = e("i16x8.ge_s");
    t[0x36] = e("i16x8.ge_u");
    t[0x37] = e("i32x4.eq");
    t[0x38] = e("i32x4.ne");
    t[0x39] = e("i32x4.lt_s");
    t[0x3A] = e("i32x4.lt_u");
    t[0x3B] = e("i32x4.gt_s");
    t[0x3C] = e("i32x4.gt_u");
    t[0x3D] = e("i32x4.le_s");
    t[0x3E] = e("i32x4.le_u");
    t[0x3F] = e("i32x4.ge_s");
    // 0x40
    t[0x40] = e("i32x4.ge_u");
    t[0x41] = e("f32x4.eq");
    t[0x42] = e("f32x4.ne");
    t[0x43] = e("f32x4.lt");
    t[0x44] = e("f32x4.gt");
    t[0x45] = e("f32x4.le");
    t[0x46] = e("f32x4.ge");
    t[0x47] = e("f64x2.eq");
    t[0x48] = e("f64x2.ne");
    t[0x49] = e("f64x2.lt");
    t[0x4A] = e("f64x2.gt");
    t[0x4B] = e("f64x2.le");
    t[0x4C] = e("f64x2.ge");
    t[0x4D] = e("v128.not");
    t[0x4E] = e("v128.and");
    t[0x4F] = e("v128.andnot");
    // 0x50
    t[0x50] = e("v128.or");
    t[0x51] = e("v128.xor");
    t[0x52] = e("v128.bitselect");
    t[0x53] = e("v128.any_true");
    t[0x54] = eo("v128.load8_lane", &[Mao, Vl]);
    t[0x55] = eo("v128.load16_lane", &[Mao, Vl]);
    t[0x56] = eo("v128.load32_lane", &[Mao, Vl]);
    t[0x57] = eo("v128.load64_lane", &[Mao, Vl]);
    t[0x58] = eo("v128.store8_lane", &[Mao, Vl]);
    t[0x59] = eo("v128.store16_lane", &[Mao, Vl]);
    t[0x5A] = eo("v128.store32_lane", &[Mao, Vl]);
    t[0x5B] = eo("v128.store64_lane", &[Mao, Vl]);
    t[0x5C] = eo("v128.load32_zero", &[Mao]);
    t[0x5D] = eo("v128.load64_zero", &[Mao]);
    t[0x5E] = e("f32x4.demote_f64x2_zero");
    t[0x5F] = e("f64x2.promote_low_f32x4");
    // 0x60
    t[0x60] = e("i8x16.abs");
    t[0x61] = e("i8x16.neg");
    t[0x62] = e("i8x16.popcnt");
    t[0x63] = e("i8x16.all_true");
    t[0x64] = e("i8x16.bitmask");
    t[0x65] = e("i8x16.narrow_i16x8_s");
    t[0x66] = e("i8x16.narrow_i16x8_u");
    t[0x67] = e("f32x4.ceil");
    t[0x68] = e("f32x4.floor");
    t[0x69] = e("f32x4.trunc");
    t[0x6A] = e("f32x4.nearest");
    t[0x6B] = e("i8x16.shl");
    t[0x6C] = e("i8x16.shr_s");
    t[0x6D] = e("i8x16.shr_u");
    t[0x6E] = e("i8x16.add");
    t[0x6F] = e("i8x16.add_sat_s");
    // 0x70
    t[0x70] = e("i8x16.add_sat_u");
    t[0x71] = e("i8x16.sub");
    t[0x72] = e("i8x16.sub_sat_s");
    t[0x73] = e("i8x16.sub_sat_u");
    t[0x74] = e("f64x2.ceil");
    t[0x75] = e("f64x2.floor");
    t[0x76] = e("i8x16.min_s");
    t[0x77] = e("i8x16.min_u");
    t[0x78] = e("i8x16.max_s");
    t[0x79] = e("i8x16.max_u");
    t[0x7A] = e("f64x2.trunc");
    t[0x7B] = e("i8x16.avgr_u");
    t[0x7C] = e("i16x8.extadd_pairwise_i8x16_s");
    t[0x7D] = e("i16x8.extadd_pairwise_i8x16_u");
    t[0x7E] = e("i32x4.extadd_pairwise_i16x8_s");
    t[0x7F] = e("i32x4.extadd_pairwise_i16x8_u");
    // 0x80
    t[0x80] = e("i16x8.abs");
    t[0x81] = e("i16x8.neg");
    t[0x82] = e("i16x8.q15mulr_sat_s");
    t[0x83] = e("i16x8.all_true");
    t[0x84] = e("i16x8.bitmask");
    t[0x85] = e("i16x8.narrow_i32x4_s");
    t[0x86] = e("i16x8.narrow_i32x4_u");
    t[0x87] = e("i16x8.extend_low_i8x16_s");
    t[0x88] = e("i16x8.extend_high_i8x16_s");
    t[0x89] = e("i16x8.extend_low_i8x16_u");
    t[0x8A] = e("i16x8.extend_high_i8x16_u");
    t[0x8B] = e("i16x8.shl");
    t[0x8C] = e("i16x8.shr_s");
    t[0x8D] = e("i16x8.shr_u");
    t[0x8E] = e("i16x8.add");
    t[0x8F] = e("i16x8.add_sat_s");
    // 0x90
    t[0x90] = e("i16x8.add_sat_u");
    t[0x91] = e("i16x8.sub");
    t[0x92] = e("i16x8.sub_sat_s");
    t[0x93] = e("i16x8.sub_sat_u");
    t[0x94] = e("f64x2.nearest");
    t[0x95] = e("i16x8.mul");
    t[0x96] = e("i16x8.min_s");
    t[0x97] = e("i16x8.min_u");
    t[0x98] = e("i16x8.max_s");
    t[0x99] = e("i16x8.max_u");
    t[0x9B] = e("i16x8.avgr_u");
    t[0x9C] = e("i16x8.extmul_low_i8x16_s");
    t[0x9D] = e("i16x8.extmul_high_i8x16_s");
    t[0x9E] = e("i16x8.extmul_low_i8x16_u");
    t[0x9F] = e("i16x8.extmul_high_i8x16_u");
    // 0xA0
    t[0xA0] = e("i32x4.abs");
    t[0xA1] = e("i32x4.neg");
    t[0xA3] = e("i32x4.all_true");
    t[0xA4] = e("i32x4.bitmask");
    // Corrected from the source's `i32x4.narrow_i32x4_{s,u}` — see DESIGN.md.
    t[0xA5] = e("i16x8.narrow_i32x4_s");
    t[0xA6] = e("i16x8.narrow_i32x4_u");
    t[0xA7] = e("i32x4.extend_low_i16x8_s");
    t[0xA8] = e("i32x4.extend_high_i16x8_s");
    t[0xA9] = e("i32x4.extend_low_i16x8_u");
    t[0xAA] = e("i32x4.extend_high_i16x8_u");
    t[0xAB] = e("i32x4.shl");
    t[0xAC] = e("i32x4.shr_s");
    t[0xAD] = e("i32x4.shr_u");
    t[0xAE] = e("i32x4.add");
    // 0xB0
    t[0xB1] = e("i32x4.sub");
    t[0xB5] = e("i32x4.mul");
    t[0xB6] = e("i32x4.min_s");
    t[0xB7] = e("i32x4.min_u");
    t[0xB8] = e("i32x4.max_s");
    t[0xB9] = e("i32x4.max_u");
    t[0xBA] = e("i32x4.dot_i16x8_s");
    t[0xBC] = e("i32x4.extmul_low_i16x8_s");
    t[0xBD] = e("i32x4.extmul_high_i16x8_s");
    t[0xBE] = e("i32x4.extmul_low_i16x8_u");
    t[0xBF] = e("i32x4.extmul_high_i16x8_u");
    // 0xC0
    t[0xC0] = e("i64x2.abs");
    t[0xC1] = e("i64x2.neg");
    t[0xC3] = e("i64x2.all_true");
    t[0xC4] = e("i64x2.bitmask");
    t[0xC7] = e("i64x2.extend_low_i32x4_s");
    t[0xC8] = e("i64x2.extend_high_i32x4_s");
    t[0xC9] = e("i64x2.extend_low_i32x4_u");
    t[0xCA] = e("i64x2.extend_high_i32x4_u");
    t[0xCB] = e("i64x2.shl");
    t[0xCC] = e("i64x2.shr_s");
    t[0xCD] = e("i64x2.shr_u");
    t[0xCE] = e("i64x2.add");
    // 0xD0
    t[0xD1] = e("i64x2.sub");
    t[0xD5] = e("i64x2.mul");
    t[0xD6] = e("i64x2.eq");
    t[0xD7] = e("i64x2.ne");
    t[0xD8] = e("i64x2.lt_s");
    t[0xD9] = e("i64x2.gt_s");
    t[0xDA] = e("i64x2.le_s");
    t[0xDB] = e("i64x2.ge_s");
    t[0xDC] = e("i64x2.extmul_low_i8x16_s");
    t[0xDD] = e("i64x2.extmul_high_i8x16_s");
    t[0xDE] = e("i64x2.extmul_low_i8x16_u");
    t[0xDF] = e("i64x2.extmul_high_i8x16_u");
    // 0xE0
    t[0xE0] = e("f32x4.abs");
    t[0xE1] = e("f32x4.neg");
    t[0xE3] = e("f32x4.sqrt");
    t[0xE4] = e("f32x4.add");
    t[0xE5] = e("f32x4.sub");
    t[0xE6] = e("f32x4.mul");
    t[0xE7] = e("f32x4.div");
    t[0xE8] = e("f32x4.min");
    t[0xE9] = e("f32x4.max");
    t[0xEA] = e("f32x4.pmin");
    t[0xEB] = e("f32x4.pmax");
    t[0xEC] = e("f64x2.abs");
    t[0xED] = e("f64x2.neg");
    t[0xEF] = e("f64x2.sqrt");
    // 0xF0
    t[0xF0] = e("f64x2.add");
    t[0xF1] = e("f64x2.sub");
    t[0xF2] = e("f64x2.mul");
    t[0xF3] = e("f64x2.div");
    t[0xF4] = e("f64x2.min");
    t[0xF5] = e("f64x2.max");
    t[0xF6] = e("f64x2.pmin");
    t[0xF7] = e("f64x2.pmax");
    t[0xF8] = e("i32x4.trunc_sat_f32x4_s");
    t[0xF9] = e("i32x4.trunc_sat_f32x4_u");
    t[0xFA] = e("f32x4.convert_i32x4_s");
    t[0xFB] = e("f32x4.convert_i32x4_u");
    t[0xFC] = e("i32x4.trunc_sat_f64x2_s_zero");
    t[0xFD] = e("i32x4.trunc_sat_f64x2_u_zero");
    t[0xFE] = e("f64x2.convert_low_i32x4_s");
    t[0xFF] = e("f64x2.convert_low_i32x4_u");
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_a_has_reserved_gaps() {
        assert!(PLANE_A[0x06].is_none());
        assert!(PLANE_A[0x00].is_some());
    }

    #[test]
    fn plane_c_fixes_the_narrow_typo() {
        assert_eq!(PLANE_C[0xA5].unwrap().mnemonic, "i16x8.narrow_i32x4_s");
        assert_eq!(PLANE_C[0xA6].unwrap().mnemonic, "i16x8.narrow_i32x4_u");
    }

    #[test]
    fn plane_b_covers_bulk_memory_ops() {
        assert_eq!(PLANE_B[0x0D].unwrap().mnemonic, "elem.drop");
        assert!(PLANE_B[0x12].is_none());
    }
}
