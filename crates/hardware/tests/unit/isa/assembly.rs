//! # Program Parsing Tests
//!
//! Covers line indexing, mnemonic normalization, and lenient operand parsing.

use archsim_core::isa::parse_program;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn parses_one_instruction_per_line() {
    let program = parse_program("LOAD 10\nADD 11\nSTORE 12");
    let mnemonics: Vec<&str> = program.iter().map(|i| i.mnemonic.as_str()).collect();
    assert_eq!(mnemonics, vec!["LOAD", "ADD", "STORE"]);
    let lines: Vec<usize> = program.iter().map(|i| i.source_line).collect();
    assert_eq!(lines, vec![0, 1, 2]);
}

#[test]
fn blank_and_whitespace_lines_are_skipped_but_counted() {
    let program = parse_program("\n   \nload 4\n\t\nstore 5\n");
    assert_eq!(program.len(), 2);
    assert_eq!(program[0].source_line, 2);
    assert_eq!(program[1].source_line, 4);
}

#[test]
fn mnemonics_are_upper_cased_and_unknown_ones_kept() {
    let program = parse_program("Add 1\njump 2");
    assert_eq!(program[0].mnemonic, "ADD");
    assert_eq!(program[1].mnemonic, "JUMP");
    assert!(program[1].opcode().is_none());
}

#[rstest]
#[case("LOAD 7", 7)]
#[case("LOAD", 0)]
#[case("LOAD abc", 0)]
#[case("LOAD 12abc", 12)]
#[case("LOAD -3", -3)]
#[case("LOAD +9", 9)]
#[case("LOAD 4 extra tokens", 4)]
fn operand_parsing(#[case] line: &str, #[case] expected: i64) {
    let program = parse_program(line);
    assert_eq!(program[0].operand_address, expected);
}

#[test]
fn empty_source_is_an_empty_program() {
    assert!(parse_program("").is_empty());
    assert!(parse_program("\n\n").is_empty());
}
