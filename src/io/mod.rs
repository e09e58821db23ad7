//! I/O layer for reading source images and writing processed outputs.
//! Provides the `reader` for decoding image files into RGBA and `writers`
//! for the PNG output and its JSON metadata sidecar.
pub mod reader;
pub use reader::{load_rgba, load_rgba_from_memory};

pub mod writers;
