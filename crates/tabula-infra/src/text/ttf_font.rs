// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tabula_core::math::{Extent2D, Vec2};
use tabula_core::renderer::{FontSystem, GlyphBitmap};
use tabula_lanes::raster_lane::{CoverageRasterizer, Path as VectorPath};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Well-known locations of a sans-serif UI font, probed in order.
pub const TEXT_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    // Debian / Ubuntu
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    // Fedora
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/google-noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
];

/// Transparent border around rasterized glyphs, in pixels.
const GLYPH_PADDING: f32 = 1.0;

/// Font-wide metrics in font units, read once at load time.
#[derive(Debug, Clone, Copy)]
struct Metrics {
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    line_gap: f32,
}

/// A [`FontSystem`] over a TrueType/OpenType font parsed with `ttf-parser`.
///
/// Outlines are flattened and filled with the anti-aliased
/// [`CoverageRasterizer`]. The font bytes are owned; faces are re-parsed on
/// demand, which only touches table headers.
pub struct TtfFontSystem {
    data: Vec<u8>,
    index: u32,
    metrics: Metrics,
}

impl std::fmt::Debug for TtfFontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontSystem")
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl TtfFontSystem {
    /// Parses a font from raw file bytes, using the first face of a collection.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let face = Face::parse(&data, 0).map_err(|e| anyhow!("Invalid font data: {e}"))?;
        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(anyhow!("Font declares zero units per em"));
        }
        let metrics = Metrics {
            units_per_em: units_per_em as f32,
            ascender: face.ascender() as f32,
            descender: face.descender() as f32,
            line_gap: face.line_gap() as f32,
        };
        Ok(Self {
            data,
            index: 0,
            metrics,
        })
    }

    /// Loads a font file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_bytes(data)
    }

    /// Loads the first usable font among `preferred` followed by
    /// [`TEXT_FONT_CANDIDATES`].
    pub fn probe(preferred: &[PathBuf]) -> Option<Self> {
        let candidates = preferred
            .iter()
            .cloned()
            .chain(TEXT_FONT_CANDIDATES.iter().map(PathBuf::from));
        super::probe_paths(candidates, "text font", Self::load)
    }

    fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, self.index).ok()
    }

    fn scale(&self, px: f32) -> f32 {
        px / self.metrics.units_per_em
    }
}

impl FontSystem for TtfFontSystem {
    fn ascent(&self, px: f32) -> f32 {
        self.metrics.ascender * self.scale(px)
    }

    fn line_height(&self, px: f32) -> f32 {
        let m = &self.metrics;
        (m.ascender - m.descender + m.line_gap) * self.scale(px)
    }

    fn advance(&self, ch: char, px: f32) -> f32 {
        let advance = self.face().and_then(|face| {
            let glyph = face.glyph_index(ch)?;
            face.glyph_hor_advance(glyph)
        });
        match advance {
            Some(units) => units as f32 * self.scale(px),
            // Missing glyphs still take up half an em so text stays readable.
            None => px * 0.5,
        }
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.face().is_some_and(|face| face.glyph_index(ch).is_some())
    }

    fn rasterize(&self, ch: char, px: f32) -> Option<GlyphBitmap> {
        if ch.is_whitespace() || !(px > 0.0) {
            return None;
        }
        let face = self.face()?;
        let glyph = face.glyph_index(ch)?;
        rasterize_outline(&face, glyph, self.scale(px))
    }
}

fn rasterize_outline(face: &Face<'_>, glyph: GlyphId, scale: f32) -> Option<GlyphBitmap> {
    let bbox = face.glyph_bounding_box(glyph)?;
    let left = bbox.x_min as f32 * scale - GLYPH_PADDING;
    let top = bbox.y_max as f32 * scale + GLYPH_PADDING;
    let extent =
        |min: i16, max: i16| ((max as f32 - min as f32) * scale + GLYPH_PADDING * 2.0).ceil();
    let width = extent(bbox.x_min, bbox.x_max) as u32;
    let height = extent(bbox.y_min, bbox.y_max) as u32;
    if width == 0 || height == 0 {
        return None;
    }

    let mut builder = OutlineCollector {
        path: VectorPath::new(),
        scale,
        left,
        top,
    };
    face.outline_glyph(glyph, &mut builder)?;

    let mut raster = CoverageRasterizer::new(width, height);
    for contour in builder.path.contours() {
        raster.add_polygon(contour);
    }
    Some(GlyphBitmap {
        size: Extent2D::new(width, height),
        // Font space is Y-up; the mask's top-left sits above the baseline.
        offset: Vec2::new(left, -top),
        coverage: raster.coverage(),
    })
}

/// Collects a glyph outline into a flattened path in mask pixel space.
struct OutlineCollector {
    path: VectorPath,
    scale: f32,
    left: f32,
    top: f32,
}

impl OutlineCollector {
    fn map(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x * self.scale - self.left, self.top - y * self.scale)
    }
}

impl OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.map(x1, y1), self.map(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.map(x1, y1), self.map(x2, y2), self.map(x, y));
        self.path.cubic_to(c1, c2, p);
    }

    // Contours are closed implicitly when filled.
    fn close(&mut self) {}
}
