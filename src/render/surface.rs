use std::collections::VecDeque;

use crate::effects::stencil::{Bitmask, to_bitmask, to_packed_rgb};
use crate::foundation::core::Point;
use crate::foundation::error::TuxeyeResult;
use crate::render::scene::Scene;

/// Display collaborator that shows composited frames.
///
/// Implementations own every display-server detail; they only ever see packed pixels.
pub trait DisplaySurface {
    /// Paint a `width x height` frame of `0x00RRGGBB` words, row-major.
    fn present(&mut self, packed_rgb: &[u32], width: u32, height: u32) -> TuxeyeResult<()>;

    /// Restrict the visible window region to the set pixels of `mask`.
    fn shape(&mut self, mask: &Bitmask) -> TuxeyeResult<()>;

    /// Whether `shape` should be called for every presented frame.
    fn wants_shape(&self) -> bool {
        true
    }
}

/// Source of pointer positions, already translated into canvas-local space.
pub trait PointerSource {
    /// Current pointer position, or `None` once the source is exhausted.
    fn pointer(&mut self) -> Option<Point>;
}

/// One frame captured by [`InMemorySurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentedFrame {
    pub width: u32,
    pub height: u32,
    pub packed_rgb: Vec<u32>,
}

/// Surface that records everything it is given. Used by tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    frames: Vec<PresentedFrame>,
    mask: Option<Bitmask>,
    shape_enabled: bool,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self {
            shape_enabled: true,
            ..Self::default()
        }
    }

    /// A surface that never asks for a window shape.
    pub fn without_shape() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[PresentedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&PresentedFrame> {
        self.frames.last()
    }

    /// Most recent stencil received through `shape`.
    pub fn mask(&self) -> Option<&Bitmask> {
        self.mask.as_ref()
    }
}

impl DisplaySurface for InMemorySurface {
    fn present(&mut self, packed_rgb: &[u32], width: u32, height: u32) -> TuxeyeResult<()> {
        self.frames.push(PresentedFrame {
            width,
            height,
            packed_rgb: packed_rgb.to_vec(),
        });
        Ok(())
    }

    fn shape(&mut self, mask: &Bitmask) -> TuxeyeResult<()> {
        self.mask = Some(mask.clone());
        Ok(())
    }

    fn wants_shape(&self) -> bool {
        self.shape_enabled
    }
}

/// Pointer source replaying a fixed list of positions.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPointer {
    points: VecDeque<Point>,
}

impl ScriptedPointer {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }
}

impl PointerSource for ScriptedPointer {
    fn pointer(&mut self) -> Option<Point> {
        self.points.pop_front()
    }
}

impl Scene {
    /// Render for `pointer` and hand the frame (and stencil, if wanted) to `surface`.
    pub fn present<S: DisplaySurface + ?Sized>(
        &mut self,
        pointer: Point,
        surface: &mut S,
    ) -> TuxeyeResult<()> {
        let canvas = self.render(pointer);
        let packed = to_packed_rgb(canvas);
        surface.present(&packed, canvas.width(), canvas.height())?;
        if surface.wants_shape() {
            surface.shape(&to_bitmask(canvas))?;
        }
        Ok(())
    }

    /// Pull one pointer sample and present a frame for it.
    ///
    /// Returns `Ok(false)` without rendering once the source is exhausted.
    pub fn tick<P, S>(&mut self, pointer: &mut P, surface: &mut S) -> TuxeyeResult<bool>
    where
        P: PointerSource + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let Some(p) = pointer.pointer() else {
            return Ok(false);
        };
        self.present(p, surface)?;
        Ok(true)
    }

    /// Present frames until `pointer` runs dry. Returns the number of frames presented.
    pub fn run<P, S>(&mut self, pointer: &mut P, surface: &mut S) -> TuxeyeResult<u64>
    where
        P: PointerSource + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let mut frames = 0;
        while self.tick(pointer, surface)? {
            frames += 1;
        }
        tracing::info!(frames, "pointer source exhausted");
        Ok(frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
