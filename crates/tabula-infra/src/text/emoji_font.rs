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
use tabula_core::math::Extent2D;
use tabula_core::renderer::{CpuTexture, EmojiRasterizer};
use tabula_lanes::asset_lane::TextureLoaderLane;
use tabula_lanes::text_lane::{is_emoji_modifier, ZWJ};
use ttf_parser::{Face, RasterImageFormat};

/// Well-known locations of color emoji fonts, probed in order.
pub const EMOJI_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    // Debian / Ubuntu
    "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
    // Fedora
    "/usr/share/fonts/google-noto-color-emoji-fonts/NotoColorEmoji.ttf",
    "/usr/share/fonts/google-noto-emoji/NotoColorEmoji.ttf",
    // macOS
    "/System/Library/Fonts/Apple Color Emoji.ttc",
];

/// Codepoint used to check that a font actually carries color bitmaps.
const PROBE_EMOJI: char = '\u{1F600}';
const PROBE_PIXELS_PER_EM: u16 = 64;

/// An [`EmojiRasterizer`] over the PNG strikes (CBDT or sbix) of a color emoji font.
///
/// Clusters are rendered from their base codepoint: joiners, variation
/// selectors and skin tones are not shaped.
pub struct ColorEmojiFont {
    data: Vec<u8>,
    decoder: TextureLoaderLane,
}

impl std::fmt::Debug for ColorEmojiFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorEmojiFont")
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl ColorEmojiFont {
    /// Parses a color emoji font, rejecting fonts without PNG bitmaps.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        {
            let face = Face::parse(&data, 0).map_err(|e| anyhow!("Invalid font data: {e}"))?;
            let has_bitmaps = face
                .glyph_index(PROBE_EMOJI)
                .and_then(|glyph| face.glyph_raster_image(glyph, PROBE_PIXELS_PER_EM))
                .is_some_and(|image| image.format == RasterImageFormat::PNG);
            if !has_bitmaps {
                return Err(anyhow!("Font has no PNG color bitmaps"));
            }
        }
        Ok(Self {
            data,
            decoder: TextureLoaderLane::new(),
        })
    }

    /// Loads a color emoji font file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_bytes(data)
    }

    /// Loads the first usable font among `preferred` followed by
    /// [`EMOJI_FONT_CANDIDATES`].
    pub fn probe(preferred: &[PathBuf]) -> Option<Self> {
        let candidates = preferred
            .iter()
            .cloned()
            .chain(EMOJI_FONT_CANDIDATES.iter().map(PathBuf::from));
        super::probe_paths(candidates, "color emoji font", Self::load)
    }
}

/// The codepoint a cluster is drawn from.
fn base_codepoint(cluster: &str) -> Option<char> {
    cluster
        .chars()
        .find(|&ch| ch != ZWJ && !is_emoji_modifier(ch))
}

impl EmojiRasterizer for ColorEmojiFont {
    fn rasterize(&self, cluster: &str, px: u32) -> Option<CpuTexture> {
        let base = base_codepoint(cluster)?;
        let face = Face::parse(&self.data, 0).ok()?;
        let glyph = face.glyph_index(base)?;
        let strike = face.glyph_raster_image(glyph, px.clamp(1, u16::MAX as u32) as u16)?;
        if strike.format != RasterImageFormat::PNG || strike.height == 0 {
            log::debug!("Emoji {cluster:?} has no PNG strike");
            return None;
        }
        let height = px.max(1);
        let width = (px as f32 * strike.width as f32 / strike.height as f32).round() as u32;
        match self
            .decoder
            .load_resized(strike.data, Extent2D::new(width.max(1), height))
        {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("Failed to decode emoji {cluster:?}: {e}");
                None
            }
        }
    }
}
