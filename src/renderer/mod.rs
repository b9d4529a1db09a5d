//! WebGPU rendering module
//!
//! Draws the field, net, paddles and ball as flat-colored rectangles from
//! the entities' projections. Scores and status text live in the page.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, field_to_ndc};
pub use vertex::Vertex;
