//! Program Source Parser.
//!
//! Program text is line oriented: each line is blank or `MNEMONIC [operand]`.
//! Blank lines are skipped but still count toward the source-line index, which
//! doubles as the memory cell an instruction is loaded into. Mnemonics are
//! case-insensitive and stored upper-cased; operands are base-10 integers
//! where only the leading digits count (`"12abc"` is 12), and a missing or
//! unparsable operand is 0. Unrecognized mnemonics are kept as-is.

use crate::isa::instruction::Instruction;

/// Parses program source into instruction records.
pub fn parse_program(source: &str) -> Vec<Instruction> {
    source
        .split('\n')
        .enumerate()
        .filter_map(|(line, text)| parse_line(line, text))
        .collect()
}

/// Parses a single line; `None` for blank lines.
fn parse_line(source_line: usize, text: &str) -> Option<Instruction> {
    let mut tokens = text.split_whitespace();
    let mnemonic = tokens.next()?.to_ascii_uppercase();
    let operand_address = tokens.next().map_or(0, parse_operand);
    Some(Instruction {
        mnemonic,
        operand_address,
        source_line,
    })
}

/// Parses the leading signed decimal digits of `token`, falling back to 0.
fn parse_operand(token: &str) -> i64 {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().unwrap_or(0);
    if negative { -magnitude } else { magnitude }
}
