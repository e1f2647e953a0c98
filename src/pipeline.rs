pub mod cull;
pub mod projection;
pub mod renderer;
pub mod sort;
pub mod transform;
