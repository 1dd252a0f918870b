pub mod composite;
pub mod stencil;
