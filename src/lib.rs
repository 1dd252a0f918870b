//! tuxeye is the image core of a pointer-following desktop toy.
//!
//! It reads and writes [farbfeld](crate::farbfeld) images, composites RGBA16 layers onto a
//! reusable canvas, and places sprites ("movers") whose anchors chase the pointer but stay
//! inside a disc around a fixed center.
//!
//! # Pipeline overview
//!
//! 1. **Load**: theme files -> [`PixelBuffer`] layers via [`farbfeld::decode`] / [`ThemeSpec`]
//! 2. **Place**: pointer -> clamped anchor -> integer sprite offset ([`clamp`], [`placement`])
//! 3. **Composite**: clear, background, movers, foreground ([`Scene::render`])
//! 4. **Export**: packed 24-bit RGB plus a 1-bit stencil for the display collaborator
//!    ([`to_packed_rgb`], [`to_bitmask`], [`DisplaySurface`])
//!
//! Nothing here talks to a display server. Windowing code implements [`DisplaySurface`] and
//! [`PointerSource`] and drives [`Scene::present`].
//!
//! Blending uses truncating 16-bit fixed-point arithmetic so output is bit-identical to
//! existing reference images; see [`over`].
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod effects;
mod foundation;
mod render;

pub use animation::motion::{clamp, displacement, placement};
pub use assets::farbfeld;
pub use assets::theme::{
    BACKGROUND_FILE, DESCRIPTOR_FILE, FOREGROUND_FILE, LoadedTheme, MoverParams, MoverSpec,
    ThemeSpec, mover_file_name, parse_descriptor, validate_theme_name,
};
pub use effects::composite::{clear, over, overlay};
pub use effects::stencil::{Bitmask, pack_rgb, to_bitmask, to_packed_rgb};
pub use foundation::core::{CHANNELS, PixelBuffer, Point, Rgba16, Vec2};
pub use foundation::error::{TuxeyeError, TuxeyeResult};
pub use render::scene::{Mover, RenderStats, Scene};
pub use render::surface::{
    DisplaySurface, InMemorySurface, PointerSource, PresentedFrame, ScriptedPointer,
};
