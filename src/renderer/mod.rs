//! WebGPU rendering module
//!
//! The sim is drawn as flat colored triangles: `shapes` turns a `GameState`
//! into a vertex list in game coordinates, `pipeline` maps it to NDC and
//! draws it in one pass.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_scene;
pub use vertex::Vertex;
