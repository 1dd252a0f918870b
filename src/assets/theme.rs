use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::assets::farbfeld;
use crate::foundation::core::{PixelBuffer, Point};
use crate::foundation::error::{TuxeyeError, TuxeyeResult};
use crate::render::scene::{Mover, Scene};

/// Background layer file name inside a theme directory.
pub const BACKGROUND_FILE: &str = "bg.ff";
/// Foreground layer file name inside a theme directory.
pub const FOREGROUND_FILE: &str = "fg.ff";
/// Mover descriptor file name inside a theme directory.
pub const DESCRIPTOR_FILE: &str = "movers.txt";

/// Placement parameters of one mover as written in a theme descriptor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoverParams {
    pub center: Point,
    pub radius: f64,
}

/// A mover's image path plus its placement parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoverSpec {
    pub image: PathBuf,
    #[serde(flatten)]
    pub params: MoverParams,
}

/// Fully resolved theme: every file path the theme needs, nothing decoded yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeSpec {
    pub name: String,
    pub background: PathBuf,
    pub foreground: PathBuf,
    pub movers: Vec<MoverSpec>,
}

/// Decoded theme layers, ready to become a [`Scene`].
#[derive(Clone, Debug)]
pub struct LoadedTheme {
    pub background: PixelBuffer,
    pub foreground: PixelBuffer,
    pub movers: Vec<Mover>,
}

/// Parse a mover descriptor.
///
/// Each mover takes two lines: `x y` for its center, then `radius`. Blank lines and
/// `#` comments are skipped.
pub fn parse_descriptor(text: &str) -> TuxeyeResult<Vec<MoverParams>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.split('#').next().unwrap_or("").trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut out = Vec::new();
    while let Some((line_no, center_line)) = lines.next() {
        let center = parse_numbers::<2>(line_no, center_line, "center `x y`")?;
        let Some((radius_no, radius_line)) = lines.next() else {
            return Err(TuxeyeError::validation(format!(
                "line {line_no}: mover center has no radius line"
            )));
        };
        let [radius] = parse_numbers::<1>(radius_no, radius_line, "radius")?;
        if radius < 0.0 {
            return Err(TuxeyeError::validation(format!(
                "line {radius_no}: radius must be >= 0, got {radius}"
            )));
        }
        out.push(MoverParams {
            center: Point::new(center[0], center[1]),
            radius,
        });
    }
    Ok(out)
}

fn parse_numbers<const N: usize>(
    line_no: usize,
    line: &str,
    what: &str,
) -> TuxeyeResult<[f64; N]> {
    let mut out = [0.0; N];
    let mut fields = line.split_whitespace();
    for slot in &mut out {
        let field = fields.next().ok_or_else(|| {
            TuxeyeError::validation(format!("line {line_no}: expected {what}, got '{line}'"))
        })?;
        let v: f64 = field.parse().map_err(|_| {
            TuxeyeError::validation(format!("line {line_no}: '{field}' is not a number"))
        })?;
        if !v.is_finite() {
            return Err(TuxeyeError::validation(format!(
                "line {line_no}: '{field}' is not finite"
            )));
        }
        *slot = v;
    }
    if fields.next().is_some() {
        return Err(TuxeyeError::validation(format!(
            "line {line_no}: expected {what}, got '{line}'"
        )));
    }
    Ok(out)
}

/// File name of the `index`-th mover image (0-based index, 1-based name).
pub fn mover_file_name(index: usize) -> String {
    format!("moving{}.ff", index + 1)
}

/// Validate a theme name as a single plain directory component.
pub fn validate_theme_name(name: &str) -> TuxeyeResult<()> {
    let mut comps = Path::new(name).components();
    match (comps.next(), comps.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(TuxeyeError::validation(format!(
            "theme name must be a single directory name, got '{name}'"
        ))),
    }
}

impl ThemeSpec {
    /// Resolve theme `name` under `themes_root`, reading its descriptor.
    #[tracing::instrument(skip(themes_root), fields(root = %themes_root.as_ref().display()))]
    pub fn resolve(themes_root: impl AsRef<Path>, name: &str) -> TuxeyeResult<Self> {
        validate_theme_name(name)?;
        let dir = themes_root.as_ref().join(name);
        let descriptor_path = dir.join(DESCRIPTOR_FILE);
        let text = std::fs::read_to_string(&descriptor_path)
            .with_context(|| format!("read theme descriptor '{}'", descriptor_path.display()))?;
        let params = parse_descriptor(&text)?;

        let movers = params
            .into_iter()
            .enumerate()
            .map(|(i, params)| MoverSpec {
                image: dir.join(mover_file_name(i)),
                params,
            })
            .collect::<Vec<_>>();
        tracing::debug!(movers = movers.len(), "resolved theme");

        Ok(Self {
            name: name.to_string(),
            background: dir.join(BACKGROUND_FILE),
            foreground: dir.join(FOREGROUND_FILE),
            movers,
        })
    }

    /// Decode every layer the theme references.
    #[tracing::instrument(skip(self), fields(theme = %self.name))]
    pub fn load(&self) -> TuxeyeResult<LoadedTheme> {
        let background = load_layer(&self.background)?;
        let foreground = load_layer(&self.foreground)?;
        let movers = self
            .movers
            .iter()
            .map(|m| Mover::new(load_layer(&m.image)?, m.params.center, m.params.radius))
            .collect::<TuxeyeResult<Vec<_>>>()?;
        Ok(LoadedTheme {
            background,
            foreground,
            movers,
        })
    }

    /// Resolve paths and decode layers into a ready-to-render scene.
    pub fn open(themes_root: impl AsRef<Path>, name: &str) -> TuxeyeResult<Scene> {
        Scene::from_theme(Self::resolve(themes_root, name)?.load()?)
    }
}

fn load_layer(path: &Path) -> TuxeyeResult<PixelBuffer> {
    farbfeld::load(path).map_err(|e| match e {
        TuxeyeError::Io(io) => TuxeyeError::Other(
            anyhow::Error::new(io).context(format!("load layer '{}'", path.display())),
        ),
        other => other,
    })
}

impl Scene {
    /// Build a scene from decoded theme layers.
    pub fn from_theme(theme: LoadedTheme) -> TuxeyeResult<Self> {
        Self::new(theme.background, theme.foreground, theme.movers)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/theme.rs"]
mod tests;
