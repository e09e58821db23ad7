pub mod background;
pub mod canvas;
pub mod pipeline;
pub mod resize;
