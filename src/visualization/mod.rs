pub mod scene;
pub mod render;
