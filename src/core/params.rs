use serde::{Deserialize, Serialize};

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoParams {
    /// Square canvas edge in pixels; the image is downscaled to fit inside it
    pub canvas_size: u32,
    /// Near-black cutoff: a pixel is matted out when all three color channels
    /// are strictly below this value
    pub threshold: u8,
    /// If true, write a JSON metadata sidecar next to the output PNG
    pub sidecar: bool,
}

impl Default for LogoParams {
    fn default() -> Self {
        Self {
            canvas_size: 120,
            threshold: 30,
            sidecar: false,
        }
    }
}
