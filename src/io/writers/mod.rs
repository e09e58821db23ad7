pub mod png;
pub mod sidecar;
