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

//! Defines the PrimitiveRenderer, the orchestrator of every 2D draw call.

use std::ops::Range;

use super::cache::MemoCache;
use super::clip::ClipStack;
use tabula_core::lane::Lane;
use tabula_core::math::{Color, Extent2D, Rect, Vec2};
use tabula_core::renderer::{
    CpuTexture, EmojiRasterizer, FontSystem, FrameStats, RenderError, ResourceError, SpriteBatch,
    SpriteDraw, TextureId,
};
use tabula_lanes::raster_lane::{ScanlineLane, Span, VectorCanvas};
use tabula_lanes::text_lane::TextSegmentationLane;

/// Lines shorter than this are skipped.
const MIN_LINE_LENGTH: f32 = 0.5;

/// A glyph texture and the offset from the pen to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CachedGlyph {
    pub(super) texture: TextureId,
    pub(super) offset: Vec2,
}

/// The renderer translating 2D draw requests into sprite batch submissions.
///
/// Draws are only accepted between [`begin_frame`](Self::begin_frame) and
/// [`end_frame`](Self::end_frame); anything issued outside a frame is dropped.
pub struct PrimitiveRenderer {
    // The backend receiving every sprite.
    pub(super) batch: Box<dyn SpriteBatch>,
    // Cached 1x1 white texture, stretched and tinted for solid fills.
    pub(super) white: TextureId,
    // Drawable size, the root of every scissor.
    pub(super) viewport: Extent2D,
    // Span generator for circles, rings and polygon fills.
    pub(super) scanline: ScanlineLane,
    // Splits text into emoji and non-emoji runs.
    pub(super) segmenter: TextSegmentationLane,
    pub(super) fonts: Option<Box<dyn FontSystem>>,
    pub(super) emoji: Option<Box<dyn EmojiRasterizer>>,
    pub(super) clips: ClipStack,
    // Vector-canvas textures keyed by caller-chosen strings.
    pub(super) canvas_textures: MemoCache<String, TextureId>,
    // Monochrome glyphs keyed by (char, pixel size).
    pub(super) glyphs: MemoCache<(char, u32), CachedGlyph>,
    // Color emoji clusters keyed by (cluster, pixel size).
    pub(super) emoji_textures: MemoCache<(String, u32), TextureId>,
    pub(super) in_frame: bool,
    pub(super) stats: FrameStats,
}

impl PrimitiveRenderer {
    /// Creates a renderer over `batch` for a `width` x `height` surface.
    ///
    /// Uploading the white fill texture is the only fallible step.
    pub fn new(
        mut batch: Box<dyn SpriteBatch>,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let white = batch
            .create_texture(&CpuTexture::solid(Extent2D::new(1, 1), Color::WHITE))
            .map_err(|e| RenderError::InitializationFailed(format!("white texture: {e}")))?;
        let viewport = Extent2D::new(width, height);
        batch.resize(viewport);
        log::info!("PrimitiveRenderer created for a {width}x{height} surface");

        let scanline = ScanlineLane::new();
        let segmenter = TextSegmentationLane::new();
        log::debug!(
            "Lanes: {} ({}), {} ({})",
            scanline.strategy_name(),
            scanline.lane_kind(),
            segmenter.strategy_name(),
            segmenter.lane_kind()
        );

        Ok(Self {
            batch,
            white,
            viewport,
            scanline,
            segmenter,
            fonts: None,
            emoji: None,
            clips: ClipStack::default(),
            canvas_textures: MemoCache::new(),
            glyphs: MemoCache::new(),
            emoji_textures: MemoCache::new(),
            in_frame: false,
            stats: FrameStats {
                texture_uploads: 1,
                ..FrameStats::default()
            },
        })
    }

    /// The current drawable size.
    pub fn viewport(&self) -> Extent2D {
        self.viewport
    }

    /// Updates the drawable size used as the root scissor.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Extent2D::new(width, height);
        self.batch.resize(self.viewport);
    }

    /// Installs (or removes) the font subsystem used by text drawing.
    pub fn set_font_system(&mut self, fonts: Option<Box<dyn FontSystem>>) {
        self.fonts = fonts;
        self.glyphs.clear();
    }

    /// Installs (or removes) the color emoji backend.
    pub fn set_emoji_rasterizer(&mut self, emoji: Option<Box<dyn EmojiRasterizer>>) {
        self.emoji = emoji;
        self.emoji_textures.clear();
    }

    /// Returns `true` if a color emoji backend is installed.
    pub fn has_color_emoji(&self) -> bool {
        self.emoji.is_some()
    }

    /// Submission counters for the current frame.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Number of entries in the string-keyed canvas texture cache.
    ///
    /// The cache is never evicted, so this grows with every distinct key.
    pub fn cached_texture_count(&self) -> usize {
        self.canvas_textures.len()
    }

    /// Number of clip rectangles currently pushed.
    pub fn clip_depth(&self) -> usize {
        self.clips.depth()
    }

    /// Returns `true` between `begin_frame` and `end_frame`.
    pub fn is_in_frame(&self) -> bool {
        self.in_frame
    }

    // --- Frame lifecycle ---

    /// Starts a frame and opens the first batch.
    pub fn begin_frame(&mut self) {
        if self.in_frame {
            log::warn!("begin_frame called twice without end_frame; flushing the open frame");
            self.end_frame();
        }
        self.stats.sprites = 0;
        self.stats.batches = 0;
        self.clips.clear();
        self.in_frame = true;
        self.restart_batch(None);
    }

    /// Flushes the current batch and ends the frame.
    pub fn end_frame(&mut self) {
        if !self.in_frame {
            log::debug!("end_frame called outside a frame");
            return;
        }
        if self.clips.depth() > 0 {
            log::warn!(
                "end_frame with {} unbalanced clip(s); resetting the clip stack",
                self.clips.depth()
            );
            self.clips.clear();
        }
        self.batch.end();
        self.in_frame = false;
    }

    /// Restricts subsequent draws to `rect`, intersected with the current clip.
    ///
    /// The scissor is fixed per batch, so this ends the current batch and
    /// begins a new one.
    pub fn push_clip(&mut self, rect: Rect) {
        if !self.accepts_draws("push_clip") {
            return;
        }
        let root = Rect::from_extent(self.viewport);
        let scissor = self.clips.push(rect, root);
        self.batch.end();
        self.restart_batch(Some(scissor));
    }

    /// Restores the clip that was active before the last `push_clip`.
    pub fn pop_clip(&mut self) {
        if !self.accepts_draws("pop_clip") {
            return;
        }
        if !self.clips.pop() {
            log::debug!("pop_clip with an empty clip stack");
            return;
        }
        self.batch.end();
        self.restart_batch(self.clips.current());
    }

    /// Rows that can receive pixels: the active clip, or the whole viewport.
    fn row_window(&self) -> Range<i32> {
        let visible = self
            .clips
            .current()
            .unwrap_or_else(|| Rect::from_extent(self.viewport));
        visible.y.floor() as i32..visible.bottom().ceil() as i32
    }

    fn restart_batch(&mut self, scissor: Option<Rect>) {
        self.batch.begin(scissor);
        self.stats.batches += 1;
    }

    pub(super) fn accepts_draws(&self, operation: &str) -> bool {
        if !self.in_frame {
            log::debug!("{operation} outside begin_frame/end_frame dropped");
        }
        self.in_frame
    }

    // --- Submission helpers ---

    pub(super) fn submit(&mut self, sprite: SpriteDraw) {
        self.batch.draw(&sprite);
        self.stats.sprites += 1;
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.submit(SpriteDraw::stretched(self.white, rect, color));
    }

    fn fill_spans(&mut self, spans: &[Span], color: Color) {
        for span in spans {
            self.fill(Rect::new(span.x0, span.y as f32, span.width(), 1.0), color);
        }
    }

    /// Uploads a texture, counting it in the stats.
    pub(super) fn upload(
        batch: &mut dyn SpriteBatch,
        stats: &mut FrameStats,
        texture: &CpuTexture,
    ) -> Result<TextureId, ResourceError> {
        let id = batch.create_texture(texture)?;
        stats.texture_uploads += 1;
        Ok(id)
    }

    // --- Primitives ---

    /// Draws a rectangle, filled when `width <= 0`, otherwise outlined with
    /// four border strips of thickness `width`. Empty rectangles draw nothing.
    pub fn draw_rect(&mut self, color: Color, rect: Rect, width: f32, alpha: f32) {
        if !self.accepts_draws("draw_rect") || rect.is_empty() {
            return;
        }
        let color = color.fade(alpha);
        if width <= 0.0 || width * 2.0 >= rect.width.min(rect.height) {
            self.fill(rect, color);
            return;
        }
        let inner_height = rect.height - width * 2.0;
        self.fill(Rect::new(rect.x, rect.y, rect.width, width), color);
        self.fill(Rect::new(rect.x, rect.bottom() - width, rect.width, width), color);
        self.fill(Rect::new(rect.x, rect.y + width, width, inner_height), color);
        self.fill(
            Rect::new(rect.right() - width, rect.y + width, width, inner_height),
            color,
        );
    }

    /// Draws a circle, filled when `width <= 0`, otherwise a ring of
    /// thickness `width` inside `radius`.
    ///
    /// Submits one sprite per scanline span, which is fine for card-sized
    /// radii but grows linearly with the radius. Only rows inside the active
    /// clip (or the viewport) are generated.
    pub fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32, width: f32, alpha: f32) {
        if !self.accepts_draws("draw_circle") {
            return;
        }
        let rows = self.row_window();
        let spans = if width <= 0.0 {
            self.scanline.circle(center, radius, rows)
        } else {
            self.scanline.ring(center, radius, width, rows)
        };
        if spans.is_empty() {
            log::trace!("draw_circle with radius {radius} produced no spans");
        }
        self.fill_spans(&spans, color.fade(alpha));
    }

    /// Draws a line segment of thickness `width` as a single rotated sprite.
    /// Near-zero-length and non-finite segments are skipped.
    pub fn draw_line(&mut self, color: Color, start: Vec2, end: Vec2, width: f32, alpha: f32) {
        if !self.accepts_draws("draw_line") {
            return;
        }
        let delta = end - start;
        let length = delta.length();
        if !(length >= MIN_LINE_LENGTH) || !length.is_finite() || !(width > 0.0) {
            log::trace!("degenerate line skipped");
            return;
        }
        self.submit(SpriteDraw {
            texture: self.white,
            source: None,
            position: start,
            origin: Vec2::new(0.0, 0.5),
            scale: Vec2::new(length, width),
            rotation: delta.angle(),
            tint: color.fade(alpha),
        });
    }

    /// Draws a polygon: outlined with lines of thickness `width` when
    /// `width > 0`, otherwise filled with the even-odd rule. Fewer than three
    /// points draw nothing.
    pub fn draw_polygon(&mut self, color: Color, points: &[Vec2], width: f32, alpha: f32) {
        if !self.accepts_draws("draw_polygon") {
            return;
        }
        if points.len() < 3 {
            log::trace!("polygon with {} point(s) skipped", points.len());
            return;
        }
        if width > 0.0 {
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                self.draw_line(color, a, b, width, alpha);
            }
        } else {
            let rows = self.row_window();
            let spans = self.scanline.polygon(points, rows);
            self.fill_spans(&spans, color.fade(alpha));
        }
    }

    /// Draws a whole texture stretched over `dest`.
    pub fn draw_texture(&mut self, texture: TextureId, dest: Rect, alpha: f32) {
        if !self.accepts_draws("draw_texture") || dest.is_empty() {
            return;
        }
        let Some(size) = self.batch.texture_size(texture) else {
            log::debug!("draw_texture with unknown texture {texture:?}");
            return;
        };
        let size = Vec2::new(size.width as f32, size.height as f32);
        self.submit(SpriteDraw::fitted(
            texture,
            size,
            dest,
            Color::WHITE.fade(alpha),
        ));
    }

    // --- Texture cache ---

    /// Returns the texture cached under `key`, rasterizing it with `draw` on a
    /// fresh `width` x `height` [`VectorCanvas`] on the first request.
    ///
    /// Entries are never invalidated or evicted. A failed upload is cached as
    /// a failure and yields `None` for the rest of the renderer's lifetime.
    pub fn get_or_create_canvas_texture<F>(
        &mut self,
        key: &str,
        width: u32,
        height: u32,
        draw: F,
    ) -> Option<TextureId>
    where
        F: FnOnce(&mut VectorCanvas),
    {
        let batch = self.batch.as_mut();
        let stats = &mut self.stats;
        self.canvas_textures.get_or_create(key.to_owned(), || {
            let mut canvas = VectorCanvas::new(width, height);
            draw(&mut canvas);
            let uploaded = canvas
                .into_texture()
                .and_then(|texture| Self::upload(batch, stats, &texture));
            match uploaded {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Failed to create cached texture '{key}': {e}");
                    None
                }
            }
        })
    }
}
