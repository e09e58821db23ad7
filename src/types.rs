//! Shared types and enums used across logoprep.
//! Includes the UTF-16 decoding modes (`Utf16Mode`) tried by the text prober.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Utf16Mode {
    /// Honor a leading byte-order mark when one is present (the mark is
    /// consumed); fall back to little-endian when there is none.
    Detect,
    /// Decode every byte pair as a little-endian code unit. A leading
    /// byte-order mark is ordinary content and stays in the output.
    Le,
}

impl std::fmt::Display for Utf16Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Utf16Mode::Detect => "utf-16",
            Utf16Mode::Le => "utf-16-le",
        };
        write!(f, "{}", s)
    }
}
