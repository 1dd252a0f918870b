use crate::animation::motion;
use crate::effects::composite::{clear, overlay};
use crate::foundation::core::{PixelBuffer, Point};
use crate::foundation::error::{TuxeyeError, TuxeyeResult};

/// A sprite whose anchor follows the pointer within a disc around `center`.
#[derive(Clone, Debug)]
pub struct Mover {
    image: PixelBuffer,
    center: Point,
    radius: f64,
}

impl Mover {
    /// Build a mover. `radius` must be finite and non-negative.
    pub fn new(image: PixelBuffer, center: Point, radius: f64) -> TuxeyeResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(TuxeyeError::validation(format!(
                "mover radius must be finite and >= 0, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(TuxeyeError::validation("mover center must be finite"));
        }
        Ok(Self {
            image,
            center,
            radius,
        })
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Top-left offset of this mover's image for the given pointer.
    pub fn placement(&self, pointer: Point) -> (i64, i64) {
        motion::placement(
            pointer,
            self.center,
            self.radius,
            self.image.width(),
            self.image.height(),
        )
    }
}

/// Counters describing the most recent renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Frames rendered since the scene was built.
    pub frames: u64,
    /// Pointer used for the last frame.
    pub last_pointer: Option<Point>,
    /// Per-mover top-left offsets used for the last frame, in mover order.
    pub last_placements: Vec<(i64, i64)>,
}

/// Layer stack composited into a reusable canvas once per frame.
///
/// `render` mutates the canvas in place; callers sharing a scene across threads must serialize
/// access themselves.
#[derive(Clone, Debug)]
pub struct Scene {
    canvas: PixelBuffer,
    background: PixelBuffer,
    foreground: PixelBuffer,
    movers: Vec<Mover>,
    stats: RenderStats,
}

impl Scene {
    /// Build a scene whose canvas matches the background's dimensions.
    pub fn new(
        background: PixelBuffer,
        foreground: PixelBuffer,
        movers: Vec<Mover>,
    ) -> TuxeyeResult<Self> {
        let canvas = PixelBuffer::new(background.width(), background.height())?;

        let (cw, ch) = canvas.dimensions();
        let layers = std::iter::once(("foreground", &foreground))
            .chain(movers.iter().map(|m| ("mover", &m.image)));
        for (kind, layer) in layers {
            if layer.width() > cw || layer.height() > ch {
                tracing::warn!(
                    kind,
                    width = layer.width(),
                    height = layer.height(),
                    canvas_width = cw,
                    canvas_height = ch,
                    "layer larger than canvas; it will be clipped"
                );
            }
        }

        let stats = RenderStats {
            last_placements: Vec::with_capacity(movers.len()),
            ..RenderStats::default()
        };
        Ok(Self {
            canvas,
            background,
            foreground,
            movers,
            stats,
        })
    }

    /// Composite one frame for `pointer` (canvas-local coordinates) and borrow the result.
    ///
    /// Order: opaque black, background, movers in declaration order, foreground.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render(&mut self, pointer: Point) -> &PixelBuffer {
        clear(&mut self.canvas, 1.0);
        overlay(&mut self.canvas, &self.background, 0, 0);

        self.stats.last_placements.clear();
        for (i, mover) in self.movers.iter().enumerate() {
            let (x, y) = mover.placement(pointer);
            tracing::trace!(mover = i, x, y, "placed mover");
            overlay(&mut self.canvas, &mover.image, x, y);
            self.stats.last_placements.push((x, y));
        }

        overlay(&mut self.canvas, &self.foreground, 0, 0);

        self.stats.frames += 1;
        self.stats.last_pointer = Some(pointer);
        &self.canvas
    }

    /// The canvas as left by the last `render` (transparent before the first frame).
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn background(&self) -> &PixelBuffer {
        &self.background
    }

    pub fn foreground(&self) -> &PixelBuffer {
        &self.foreground
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
