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

//! Text layout and drawing, including the color emoji path.

use super::agent::{CachedGlyph, PrimitiveRenderer};
use tabula_core::math::{Color, Extent2D, Rect, Vec2};
use tabula_core::renderer::{CpuTexture, SpriteDraw, TextureId};
use tabula_lanes::raster_lane::VectorCanvas;
use tabula_lanes::text_lane::{emoji_clusters, emoji_tint};

/// Width of an emoji cluster drawn without a glyph, in ems.
const FALLBACK_EMOJI_ADVANCE: f32 = 0.8;
/// Cache key of the round dot drawn for emoji the font cannot render.
const EMOJI_DOT_KEY: &str = "emoji:dot";
const EMOJI_DOT_SIZE: u32 = 32;

/// Horizontal anchor of a text block relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    /// The position is the left edge.
    #[default]
    Left,
    /// The position is the horizontal center.
    Center,
    /// The position is the right edge.
    Right,
}

/// Vertical anchor of a text block relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    /// The position is the top of the first line.
    #[default]
    Top,
    /// The position is the vertical center of the block.
    Center,
    /// The position is the bottom of the last line.
    Bottom,
}

/// Placement options for [`PrimitiveRenderer::draw_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    /// Horizontal anchor.
    pub h_align: HAlign,
    /// Vertical anchor.
    pub v_align: VAlign,
    /// Clockwise rotation around the anchor, in radians.
    pub rotation: f32,
    /// Uniform scale applied to the font size.
    pub scale: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl TextOptions {
    /// Options anchoring the text at its center.
    pub fn centered() -> Self {
        Self {
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            ..Self::default()
        }
    }
}

/// Rounds a font size to the pixel size used for cache keys.
fn pixel_size(px: f32) -> u32 {
    (px.round() as u32).max(1)
}

impl PrimitiveRenderer {
    /// Measures `text` at `size` pixels: the widest line by the total height.
    ///
    /// Returns zero when no font subsystem is installed.
    pub fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        let Some(fonts) = self.fonts.as_deref() else {
            return Vec2::ZERO;
        };
        let px = pixel_size(size) as f32;
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| self.line_width(line, px))
            .fold(0.0, f32::max);
        Vec2::new(width, fonts.line_height(px) * lines.len() as f32)
    }

    fn cluster_advance(&self, cluster: &str, px: f32) -> f32 {
        if self.emoji.is_some() {
            return px;
        }
        match (self.fonts.as_deref(), cluster.chars().next()) {
            (Some(fonts), Some(ch)) if fonts.has_glyph(ch) => fonts.advance(ch, px),
            _ => px * FALLBACK_EMOJI_ADVANCE,
        }
    }

    fn line_width(&self, line: &str, px: f32) -> f32 {
        let Some(fonts) = self.fonts.as_deref() else {
            return 0.0;
        };
        self.segmenter
            .segment(line)
            .iter()
            .map(|run| {
                if run.is_emoji {
                    emoji_clusters(run.text)
                        .into_iter()
                        .map(|c| self.cluster_advance(c, px))
                        .sum::<f32>()
                } else {
                    run.text.chars().map(|ch| fonts.advance(ch, px)).sum()
                }
            })
            .sum()
    }

    /// Draws `text` anchored at `position`.
    ///
    /// Lines split on `\n` are anchored horizontally one by one and the block
    /// is anchored vertically. Emoji runs are drawn from the color emoji
    /// backend when one is installed; otherwise the monochrome glyph is tinted
    /// with an approximate emoji color, or a tinted dot stands in for emoji
    /// the font lacks.
    pub fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        size: f32,
        color: Color,
        options: TextOptions,
    ) {
        if !self.accepts_draws("draw_text") || text.is_empty() {
            return;
        }
        let Some((ascent, line_height)) = self.fonts.as_deref().map(|f| {
            let px = pixel_size(size * options.scale) as f32;
            (f.ascent(px), f.line_height(px))
        }) else {
            log::debug!("draw_text without a font system");
            return;
        };
        let px = pixel_size(size * options.scale) as f32;

        let lines: Vec<&str> = text.split('\n').collect();
        let block_height = line_height * lines.len() as f32;
        let top = match options.v_align {
            VAlign::Top => 0.0,
            VAlign::Center => -block_height * 0.5,
            VAlign::Bottom => -block_height,
        };

        for (i, line) in lines.iter().enumerate() {
            let width = self.line_width(line, px);
            let left = match options.h_align {
                HAlign::Left => 0.0,
                HAlign::Center => -width * 0.5,
                HAlign::Right => -width,
            };
            let baseline = Vec2::new(left, top + line_height * i as f32 + ascent);
            self.draw_line_runs(line, position, baseline, px, ascent, color, options.rotation);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_line_runs(
        &mut self,
        line: &str,
        anchor: Vec2,
        baseline: Vec2,
        px: f32,
        ascent: f32,
        color: Color,
        rotation: f32,
    ) {
        let mut pen = baseline;
        for run in self.segmenter.segment(line) {
            if run.is_emoji {
                for cluster in emoji_clusters(run.text) {
                    let advance = self.cluster_advance(cluster, px);
                    self.draw_emoji_cluster(cluster, anchor, pen, px, ascent, color, rotation);
                    pen.x += advance;
                }
            } else {
                for ch in run.text.chars() {
                    self.draw_glyph(ch, anchor, pen, px, color, rotation);
                    if let Some(fonts) = self.fonts.as_deref() {
                        pen.x += fonts.advance(ch, px);
                    }
                }
            }
        }
    }

    /// Submits a sprite whose top-left corner sits at `local` in the rotated text frame.
    fn submit_text_sprite(
        &mut self,
        texture: TextureId,
        anchor: Vec2,
        local: Vec2,
        scale: Vec2,
        rotation: f32,
        tint: Color,
    ) {
        self.submit(SpriteDraw {
            texture,
            source: None,
            position: anchor + local.rotate(rotation),
            origin: Vec2::ZERO,
            scale,
            rotation,
            tint,
        });
    }

    fn glyph(&mut self, ch: char, px: f32) -> Option<CachedGlyph> {
        let fonts = self.fonts.as_deref()?;
        let batch = self.batch.as_mut();
        let stats = &mut self.stats;
        self.glyphs.get_or_create((ch, pixel_size(px)), || {
            let bitmap = fonts.rasterize(ch, px)?;
            let uploaded = CpuTexture::from_coverage(bitmap.size, &bitmap.coverage)
                .and_then(|texture| Self::upload(batch, stats, &texture));
            match uploaded {
                Ok(texture) => Some(CachedGlyph {
                    texture,
                    offset: bitmap.offset,
                }),
                Err(e) => {
                    log::warn!("Failed to upload glyph {ch:?}: {e}");
                    None
                }
            }
        })
    }

    fn draw_glyph(
        &mut self,
        ch: char,
        anchor: Vec2,
        pen: Vec2,
        px: f32,
        color: Color,
        rotation: f32,
    ) {
        if ch.is_whitespace() {
            return;
        }
        if let Some(glyph) = self.glyph(ch, px) {
            self.submit_text_sprite(
                glyph.texture,
                anchor,
                pen + glyph.offset,
                Vec2::ONE,
                rotation,
                color,
            );
        }
    }

    fn emoji_texture(&mut self, cluster: &str, px: f32) -> Option<TextureId> {
        let emoji = self.emoji.as_deref()?;
        let size = pixel_size(px);
        let batch = self.batch.as_mut();
        let stats = &mut self.stats;
        self.emoji_textures.get_or_create((cluster.to_owned(), size), || {
            let texture = emoji.rasterize(cluster, size)?;
            match Self::upload(batch, stats, &texture) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Failed to upload emoji {cluster:?}: {e}");
                    None
                }
            }
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_emoji_cluster(
        &mut self,
        cluster: &str,
        anchor: Vec2,
        pen: Vec2,
        px: f32,
        ascent: f32,
        color: Color,
        rotation: f32,
    ) {
        let top_left = Vec2::new(pen.x, pen.y - ascent);
        if let Some(texture) = self.emoji_texture(cluster, px) {
            let size = self
                .batch
                .texture_size(texture)
                .unwrap_or(Extent2D::new(1, 1));
            let scale = Vec2::new(px / size.width.max(1) as f32, px / size.height.max(1) as f32);
            self.submit_text_sprite(
                texture,
                anchor,
                top_left,
                scale,
                rotation,
                Color::WHITE.with_alpha(color.a),
            );
            return;
        }

        let Some(base) = cluster.chars().next() else {
            return;
        };
        let tint = emoji_tint(base)
            .map(|t| t.with_alpha(color.a))
            .unwrap_or(color);
        let has_glyph = self.fonts.as_deref().is_some_and(|f| f.has_glyph(base));
        if has_glyph {
            self.draw_glyph(base, anchor, pen, px, tint, rotation);
        } else {
            self.draw_emoji_dot(anchor, top_left, px, ascent, tint, rotation);
        }
    }

    fn draw_emoji_dot(
        &mut self,
        anchor: Vec2,
        top_left: Vec2,
        px: f32,
        ascent: f32,
        tint: Color,
        rotation: f32,
    ) {
        let size = EMOJI_DOT_SIZE;
        let paint = |canvas: &mut VectorCanvas| {
            let c = size as f32 * 0.5;
            canvas.fill_circle(Vec2::new(c, c), c - 1.0, Color::WHITE);
        };
        let dot = self.get_or_create_canvas_texture(EMOJI_DOT_KEY, size, size, paint);
        let Some(dot) = dot else {
            return;
        };
        let diameter = px * FALLBACK_EMOJI_ADVANCE * 0.75;
        let area = Rect::new(
            top_left.x + (px * FALLBACK_EMOJI_ADVANCE - diameter) * 0.5,
            top_left.y + (ascent - diameter) * 0.5,
            diameter,
            diameter,
        );
        let scale = Vec2::splat(diameter / EMOJI_DOT_SIZE as f32);
        self.submit_text_sprite(dot, anchor, area.origin(), scale, rotation, tint);
    }
}
