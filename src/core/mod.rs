//! Core processing building blocks: background matting, fit-resizing,
//! canvas centering, and the pipeline composing them. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
