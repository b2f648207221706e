//! WebGPU rendering module
//!
//! Flat-colored triangles built on the CPU from a `FrameSnapshot` each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_vertices;
pub use vertex::Vertex;
