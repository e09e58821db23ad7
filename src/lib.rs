#![doc = r#"
logoprep — logo asset preparation utilities.

This crate turns a logo with a (near-)black backdrop into a transparent,
fixed-size PNG: near-black pixels are matted out, the image is downscaled to
fit a square canvas and centered on it, and the result is saved with full
alpha. A companion prober reads text files that may be UTF-16 encoded with or
without a byte-order mark. It powers the `logoprep` and `textprobe` binaries
and can be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on top
of a working MVP used by the CLI and is robust, but may evolve as the crate
stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
logoprep = "0.1"
```

Quick start: process a logo to a file
-------------------------------------
```rust,no_run
use std::path::Path;
use logoprep::{LogoParams, process_logo_to_path};

fn main() -> logoprep::Result<()> {
    let params = LogoParams {
        canvas_size: 120,
        threshold: 30,
        sidecar: false,
    };

    let report = process_logo_to_path(
        Path::new("/assets/logo_raw.png"),
        Path::new("/site/static/logo_120.png"),
        &params,
    )?;

    println!(
        "{}x{} -> {}x{} at ({}, {})",
        report.source_width,
        report.source_height,
        report.scaled_width,
        report.scaled_height,
        report.offset_x,
        report.offset_y
    );
    Ok(())
}
```

Process in-memory to `ProcessedLogo`
------------------------------------
```rust,no_run
use logoprep::{LogoParams, process_logo_to_buffer};

fn main() -> logoprep::Result<()> {
    let bytes = std::fs::read("/assets/logo_raw.png")?;
    let processed = process_logo_to_buffer(&bytes, &LogoParams::default())?;

    // `processed.image` is the composited RGBA canvas; `processed.report`
    // records the matting, resize, and centering that produced it.
    assert_eq!(processed.image.dimensions(), (120, 120));
    Ok(())
}
```

Probe a text file for UTF-16 content
------------------------------------
```rust,no_run
use std::path::Path;
use logoprep::{ProbeOutcome, probe_text_file};

fn main() {
    match probe_text_file(Path::new("/notes/exported.txt")) {
        ProbeOutcome::Decoded { mode, text, .. } => {
            println!("decoded as {mode}:");
            println!("{text}");
        }
        ProbeOutcome::Failed(failures) => {
            for failure in failures {
                eprintln!("Error reading {}: {}", failure.mode, failure.error);
            }
        }
    }
}
```

Error handling
--------------
All fallible public functions return `logoprep::Result<T>`; match on
`logoprep::Error` to handle specific cases, e.g. a missing source file.

```rust,no_run
use std::path::Path;
use logoprep::{Error, LogoParams, process_logo_to_path};

fn main() {
    let params = LogoParams::default();
    match process_logo_to_path(Path::new("/bad/path.png"), Path::new("/out/logo.png"), &params) {
        Ok(report) => println!("cleared {} pixels", report.cleared_pixels),
        Err(Error::SourceNotFound { path }) => eprintln!("no such file: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — shared enums (e.g. `Utf16Mode`).
- [`core`] — matting, fit-resize, and canvas-centering primitives.
- [`text`] — UTF-16 decoding and the probe sequence.
- [`io`] — image reader and PNG/sidecar writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod text;
pub mod types;

// Curated public API surface
// Types
pub use core::params::LogoParams;
pub use error::{Error, Result};
pub use types::Utf16Mode;

// Text decoding and probing
pub use text::{DecodeError, PROBE_SEQUENCE, ProbeFailure, ProbeOutcome, decode_utf16};

// Selected writer helpers (keep low-level save helpers public)
pub use io::writers::png::write_rgba_png;
pub use io::writers::sidecar::create_png_metadata_sidecar;

// High-level API re-exports
pub use api::{
    ProcessReport, ProcessedLogo, probe_text_file, process_logo_to_buffer, process_logo_to_path,
    read_text_file,
};
