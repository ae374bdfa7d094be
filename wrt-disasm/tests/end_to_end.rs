// WRT - wrt-disasm
// Integration tests: end-to-end scenarios
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use wrt_disasm::{disassemble, FormatConfig};

fn dump(bytes: Vec<u8>) -> Result<String, wrt_error::Error> {
    let config = FormatConfig::new(bytes.len() as u64, 8, 2, 1024, false);
    disassemble("fixture.wasm", bytes, &config)
}

#[test]
fn empty_module_has_magic_and_version_and_no_sections() {
    let bytes = wat::parse_str("(module)").unwrap();
    let out = dump(bytes).unwrap();
    assert!(out.contains("magic = b'\\x00asm'"));
    assert!(out.contains("version = 1"));
    assert!(!out.contains("section"));
}

#[test]
fn minimal_add_function_lists_type_then_body_instructions_in_order() {
    let wat = r#"
        (module
          (func (param i32 i32) (result i32)
            local.get 0
            local.get 1
            i32.add))
    "#;
    let bytes = wat::parse_str(wat).unwrap();
    let out = dump(bytes).unwrap();

    let type_pos = out.find("type section").expect("type section present");
    let code_pos = out.find("code section").expect("code section present");
    assert!(type_pos < code_pos);

    let local_get_0 = out.find("local.get").unwrap();
    let i32_add = out.rfind("i32.add").unwrap();
    assert!(local_get_0 < i32_add);
    assert!(out.contains("end"));
}

#[test]
fn truncated_input_fails_after_emitting_magic() {
    let bytes = vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00];
    let err = dump(bytes).unwrap_err();
    assert_eq!(err.code, wrt_error::codes::disasm::TRUNCATED_INPUT);
}

#[test]
fn bad_magic_fails_immediately() {
    let bytes = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x00, 0x00, 0x00];
    let err = dump(bytes).unwrap_err();
    assert_eq!(err.code, wrt_error::codes::disasm::BAD_MAGIC);
}

#[test]
fn unknown_opcode_fails_but_prior_instructions_already_emitted() {
    // A hand-built module: one function type (no params/results), one
    // function, and a code section whose body contains reserved opcode 0x06
    // after a valid `nop`.
    let mut bytes = vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
    bytes.extend([0x01, 0x04, 0x01, 0x60, 0x00, 0x00]); // type section: () -> ()
    bytes.extend([0x03, 0x02, 0x01, 0x00]); // function section: funcidx 0 -> typeidx 0
    bytes.extend([0x0A, 0x05, 0x01, 0x03, 0x00, 0x01, 0x06]); // code section: body = [locals:0] nop, 0x06
    let err = dump(bytes).unwrap_err();
    assert_eq!(err.code, wrt_error::codes::disasm::UNKNOWN_OPCODE);
}

#[test]
fn simd_v128_load8_lane_annotates_align_offset_and_lane() {
    let wat = r#"
        (module
          (memory 1)
          (func (param i32) (result v128)
            local.get 0
            v128.const i32x4 0 0 0 0
            v128.load8_lane align=1 offset=16 3))
    "#;
    let bytes = wat::parse_str(wat).unwrap();
    let out = dump(bytes).unwrap();
    assert!(out.contains("v128.load8_lane"));
    assert!(out.contains("offset = 16"));
    assert!(out.contains("lane = 0x03"));
}

#[test]
fn module_with_import_global_table_and_export_decodes_without_error() {
    let wat = r#"
        (module
          (import "env" "log" (func $log (param i32)))
          (memory (export "memory") 1)
          (global (export "g") (mut i32) (i32.const 42))
          (table 1 funcref)
          (func (export "run")))
    "#;
    let bytes = wat::parse_str(wat).unwrap();
    let out = dump(bytes).unwrap();
    assert!(out.contains("import section"));
    assert!(out.contains("global section"));
    assert!(out.contains("export section"));
    assert!(out.contains("mutability = var"));
}

#[test]
fn data_segment_with_active_offset_expression_decodes() {
    let wat = r#"
        (module
          (memory 1)
          (data (i32.const 0) "hi"))
    "#;
    let bytes = wat::parse_str(wat).unwrap();
    let out = dump(bytes).unwrap();
    assert!(out.contains("data section"));
    assert!(out.contains("bytes: size = 2"));
}
