pub mod camera;
pub mod context;
pub mod loader;
pub mod mesh;
pub mod object;
pub mod texture;
