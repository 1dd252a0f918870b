pub mod farbfeld;
pub mod theme;
