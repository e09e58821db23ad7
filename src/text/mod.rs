//! UTF-16 text decoding and the two-step encoding probe.
//! Reads files that may carry a byte-order mark or raw little-endian UTF-16:
//! a mark-sensitive attempt first, then an explicit little-endian attempt.
pub mod decode;
pub use decode::{DecodeError, decode_utf16};

use std::fs;
use std::path::Path;

use tracing::info;

use crate::types::Utf16Mode;

/// The fixed probe order: mark-sensitive first, explicit little-endian second.
pub const PROBE_SEQUENCE: [Utf16Mode; 2] = [Utf16Mode::Detect, Utf16Mode::Le];

/// Reads and decodes a whole file under one UTF-16 mode.
pub fn read_utf16_file(path: &Path, mode: Utf16Mode) -> Result<String, DecodeError> {
    let bytes = fs::read(path)?;
    decode_utf16(&bytes, mode)
}

/// One failed probe attempt: the mode tried and the error it produced.
#[derive(Debug)]
pub struct ProbeFailure {
    pub mode: Utf16Mode,
    pub error: DecodeError,
}

/// Result of probing a file through [`PROBE_SEQUENCE`].
#[derive(Debug)]
pub enum ProbeOutcome {
    /// An attempt decoded the file; failures of earlier attempts are kept
    /// in order.
    Decoded {
        mode: Utf16Mode,
        text: String,
        failures: Vec<ProbeFailure>,
    },
    /// Every attempt failed.
    Failed(Vec<ProbeFailure>),
}

/// Tries each mode in [`PROBE_SEQUENCE`] until one decodes the file.
/// The file is re-read for every attempt.
pub fn probe_file(path: &Path) -> ProbeOutcome {
    let mut failures = Vec::new();

    for mode in PROBE_SEQUENCE {
        match read_utf16_file(path, mode) {
            Ok(text) => {
                info!("Decoded {:?} as {}", path, mode);
                return ProbeOutcome::Decoded {
                    mode,
                    text,
                    failures,
                };
            }
            Err(error) => failures.push(ProbeFailure { mode, error }),
        }
    }

    ProbeOutcome::Failed(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn probe_decodes_marked_file_on_first_attempt() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "content".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (_dir, path) = write_temp(&bytes);

        match probe_file(&path) {
            ProbeOutcome::Decoded {
                mode,
                text,
                failures,
            } => {
                assert_eq!(mode, Utf16Mode::Detect);
                assert_eq!(text, "content");
                assert!(failures.is_empty());
            }
            ProbeOutcome::Failed(_) => panic!("expected a successful decode"),
        }
    }

    #[test]
    fn probe_falls_back_when_mark_misleads() {
        // A big-endian mark whose payload is a lone surrogate in big-endian
        // order; the second attempt decodes every pair, mark included, as
        // little-endian content.
        let (_dir, path) = write_temp(&[0xFE, 0xFF, 0xD8, 0x00]);

        match probe_file(&path) {
            ProbeOutcome::Decoded {
                mode,
                text,
                failures,
            } => {
                assert_eq!(mode, Utf16Mode::Le);
                assert_eq!(text, "\u{fffe}\u{00d8}");
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].mode, Utf16Mode::Detect);
            }
            ProbeOutcome::Failed(_) => panic!("expected the fallback to succeed"),
        }
    }

    #[test]
    fn probe_reports_both_failures_for_undecodable_file() {
        // An odd byte count fails under both modes.
        let (_dir, path) = write_temp(&[0x41, 0x00, 0x42]);

        match probe_file(&path) {
            ProbeOutcome::Failed(failures) => {
                assert_eq!(failures.len(), 2);
                assert_eq!(failures[0].mode, Utf16Mode::Detect);
                assert_eq!(failures[1].mode, Utf16Mode::Le);
            }
            ProbeOutcome::Decoded { .. } => panic!("expected both attempts to fail"),
        }
    }

    #[test]
    fn probe_missing_file_fails_both_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        match probe_file(&path) {
            ProbeOutcome::Failed(failures) => {
                assert_eq!(failures.len(), 2);
                assert!(matches!(failures[0].error, DecodeError::Io(_)));
                assert!(matches!(failures[1].error, DecodeError::Io(_)));
            }
            ProbeOutcome::Decoded { .. } => panic!("expected failure for a missing file"),
        }
    }
}
