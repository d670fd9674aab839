pub mod constants;
pub mod frame;
pub mod geometry;
pub mod state;
pub mod transform;

// Shader bundled as a string constant
pub static POLYGON_WGSL: &str = include_str!("../../../shaders/polygon.wgsl");

pub use constants::*;
pub use frame::*;
pub use geometry::*;
pub use state::*;
pub use transform::*;
