//! WebGPU rendering module
//!
//! Solid-color rectangles and bitmap text, batched into one triangle list
//! per frame.

pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::DrawList;
pub use vertex::{Color, Vertex, colors};
