//! Cache line storage.

use serde::Serialize;

/// One cache line.
///
/// `access_time` is the engine's access counter at the last fill or hit; it
/// only ranks lines for LRU replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheLine {
    /// Whether the line holds data.
    pub valid: bool,
    /// Tag of the cached address.
    pub tag: u8,
    /// Cached word.
    pub data: u16,
    /// Logical time of the last touch.
    pub access_time: u64,
}

impl CacheLine {
    /// An empty line.
    pub const INVALID: Self = Self {
        valid: false,
        tag: 0,
        data: 0,
        access_time: 0,
    };

    /// A freshly filled line.
    pub const fn filled(tag: u8, data: u16, access_time: u64) -> Self {
        Self {
            valid: true,
            tag,
            data,
            access_time,
        }
    }

    /// Whether the line is valid and holds `tag`.
    pub const fn matches(&self, tag: u8) -> bool {
        self.valid && self.tag == tag
    }
}
