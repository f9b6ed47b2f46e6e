//! Address decomposition.
//!
//! A 6-bit address splits differently under each mapping policy:
//!
//! | policy            | tag bits     | index bits  |
//! |-------------------|--------------|-------------|
//! | direct            | `[5:3]`      | `[2:0]`     |
//! | set-associative   | `[5:2]`      | `[1:0]`     |
//! | fully-associative | `[5:0]`      | none        |

use std::fmt;

use serde::Serialize;

use crate::common::constants::{
    ADDRESS_BITS, DIRECT_INDEX_BITS, DIRECT_TAG_BITS, SET_INDEX_BITS, SET_TAG_BITS,
};
use crate::config::MappingPolicy;

/// Tag and index fields of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressBreakdown {
    /// The full address.
    pub address: u8,
    /// Tag field.
    pub tag: u8,
    /// Width of the tag field.
    pub tag_bits: u32,
    /// Index field (line for direct, set for set-associative); `None` when fully associative.
    pub index: Option<u8>,
    /// Width of the index field.
    pub index_bits: u32,
}

impl AddressBreakdown {
    /// Splits `address` according to `policy`.
    pub const fn split(address: u8, policy: MappingPolicy) -> Self {
        match policy {
            MappingPolicy::Direct => Self::with_index(address, DIRECT_INDEX_BITS, DIRECT_TAG_BITS),
            MappingPolicy::SetAssociative => {
                Self::with_index(address, SET_INDEX_BITS, SET_TAG_BITS)
            }
            MappingPolicy::FullyAssociative => Self {
                address,
                tag: address,
                tag_bits: ADDRESS_BITS,
                index: None,
                index_bits: 0,
            },
        }
    }

    const fn with_index(address: u8, index_bits: u32, tag_bits: u32) -> Self {
        Self {
            address,
            tag: (address >> index_bits) & mask(tag_bits),
            tag_bits,
            index: Some(address & mask(index_bits)),
            index_bits,
        }
    }

    /// Index as a slice position; 0 when there is no index field.
    pub fn index_position(&self) -> usize {
        self.index.map_or(0, usize::from)
    }
}

const fn mask(bits: u32) -> u8 {
    ((1u16 << bits) - 1) as u8
}

/// Zero-padded binary rendering of `value`.
pub fn binary(value: u8, width: u32) -> String {
    format!("{value:0width$b}", width = width as usize)
}

impl fmt::Display for AddressBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag: {} ({})",
            binary(self.tag, self.tag_bits),
            self.tag
        )?;
        if let Some(index) = self.index {
            write!(f, ", index: {} ({index})", binary(index, self.index_bits))?;
        }
        Ok(())
    }
}
