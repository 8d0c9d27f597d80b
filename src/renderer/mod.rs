//! WebGPU rendering module
//!
//! Flat-colour triangles in viewport pixel coordinates. The scene is rebuilt
//! from the session every frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
