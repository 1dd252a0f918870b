pub mod scene;
pub mod surface;
