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

//! Defines the text services injected into the primitive renderer.

use crate::math::{Extent2D, Vec2};
use crate::renderer::api::CpuTexture;

/// A rasterized monochrome glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    /// Size of the coverage mask in pixels.
    pub size: Extent2D,
    /// Offset from the pen position (on the baseline) to the mask's top-left corner.
    pub offset: Vec2,
    /// One coverage byte per pixel, row-major.
    pub coverage: Vec<u8>,
}

/// The font measurement and rasterization subsystem.
///
/// Implementations are expected to degrade silently: a character the font
/// cannot render yields `None` from [`FontSystem::rasterize`] and a zero or
/// fallback advance, never an error.
pub trait FontSystem: Send {
    /// Distance from the top of a line to its baseline at `px` pixels per em.
    fn ascent(&self, px: f32) -> f32;

    /// Total height of one line at `px` pixels per em.
    fn line_height(&self, px: f32) -> f32;

    /// Horizontal advance of `ch` at `px` pixels per em.
    fn advance(&self, ch: char, px: f32) -> f32;

    /// Returns `true` if the font has a real glyph for `ch`.
    fn has_glyph(&self, ch: char) -> bool;

    /// Rasterizes `ch` at `px` pixels per em. Whitespace and missing glyphs yield `None`.
    fn rasterize(&self, ch: char, px: f32) -> Option<GlyphBitmap>;
}

/// A full-color emoji backend (the "secondary vector backend" for emoji glyphs).
pub trait EmojiRasterizer: Send {
    /// Rasterizes an emoji cluster (base codepoint plus modifiers/joiners) into a
    /// square-ish RGBA texture roughly `px` pixels tall.
    fn rasterize(&self, cluster: &str, px: u32) -> Option<CpuTexture>;
}
