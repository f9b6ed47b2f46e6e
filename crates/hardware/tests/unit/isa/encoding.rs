//! # Encoding and Decoding Tests

use archsim_core::isa::disasm::disassemble;
use archsim_core::isa::{Opcode, decode, encode, parse_program};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("LOAD 10", 0x100A)]
#[case("STORE 12", 0x200C)]
#[case("ADD 11", 0x300B)]
#[case("ADD 4096", 0x3000)]
#[case("NOP 3", 0x0000)]
fn encodes_source_lines(#[case] line: &str, #[case] word: u16) {
    let program = parse_program(line);
    assert_eq!(program[0].encode(), word);
}

#[rstest]
#[case(0x100A, "LOAD 10")]
#[case(0x200C, "STORE 12")]
#[case(0x300B, "ADD 11")]
#[case(0x0005, "DATA 0x0005")]
fn disassembles_words(#[case] word: u16, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn mnemonic_lookup_ignores_case() {
    assert_eq!(Opcode::from_mnemonic("store"), Some(Opcode::Store));
    assert_eq!(Opcode::from_mnemonic("Load"), Some(Opcode::Load));
    assert_eq!(Opcode::from_mnemonic("SUB"), None);
}

proptest! {
    #[test]
    fn decode_recovers_opcode_and_address(address in 0u16..0x1000, op in 0usize..3) {
        let op = [Opcode::Load, Opcode::Store, Opcode::Add][op];
        let d = decode(encode(op, i64::from(address)));
        prop_assert_eq!(d.opcode, Some(op));
        prop_assert_eq!(d.address, address);
    }

    #[test]
    fn operands_are_masked_to_twelve_bits(address in any::<i64>()) {
        let d = decode(encode(Opcode::Add, address));
        prop_assert_eq!(d.opcode, Some(Opcode::Add));
        prop_assert_eq!(i64::from(d.address), address & 0x0FFF);
    }
}
