// WRT - wrt-disasm
// Integration tests: LEB128 round-trip laws
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use proptest::prelude::*;
use wrt_disasm::ByteCursor;

fn encode_u(mut value: u64) -> Vec<u8> {
    let mut bytes = Vec::new();
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        bytes.push(byte);
        if value == 0 {
            break;
        }
    }
    bytes
}

fn encode_s(mut value: i64) -> Vec<u8> {
    let mut bytes = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);
        bytes.push(if done { byte } else { byte | 0x80 });
        if done {
            break;
        }
    }
    bytes
}

proptest! {
    #[test]
    fn leb128_u_round_trips(value: u64) {
        let encoded = encode_u(value);
        let mut cursor = ByteCursor::new("t", encoded, 0);
        let decoded = cursor.leb128_u().unwrap();
        prop_assert_eq!(decoded.value, value);
    }

    #[test]
    fn leb128_s_round_trips(value: i64) {
        let encoded = encode_s(value);
        let mut cursor = ByteCursor::new("t", encoded, 0);
        let decoded = cursor.leb128_s().unwrap();
        prop_assert_eq!(decoded.value, value);
    }
}
