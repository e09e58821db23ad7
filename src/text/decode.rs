use thiserror::Error;

use crate::types::Utf16Mode;

/// Errors surfaced by a single UTF-16 decoding attempt.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated UTF-16 data: odd byte count {len}")]
    OddByteLength { len: usize },

    #[error("invalid UTF-16: unpaired surrogate")]
    InvalidCodeUnits,
}

const BOM_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_LE: [u8; 2] = [0xFF, 0xFE];

/// Decodes `bytes` as UTF-16 text under the given mode.
///
/// `Detect` honors a leading byte-order mark, consuming it, and falls back
/// to little-endian when none is present. `Le` is unconditional
/// little-endian; a leading mark stays in the output as U+FEFF.
pub fn decode_utf16(bytes: &[u8], mode: Utf16Mode) -> Result<String, DecodeError> {
    let (payload, big_endian) = match mode {
        Utf16Mode::Detect => {
            if bytes.len() >= 2 && bytes[..2] == BOM_BE {
                (&bytes[2..], true)
            } else if bytes.len() >= 2 && bytes[..2] == BOM_LE {
                (&bytes[2..], false)
            } else {
                (bytes, false)
            }
        }
        Utf16Mode::Le => (bytes, false),
    };

    if payload.len() % 2 != 0 {
        return Err(DecodeError::OddByteLength { len: bytes.len() });
    }

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|_| DecodeError::InvalidCodeUnits)
}
