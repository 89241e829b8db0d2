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

use std::sync::{Arc, Mutex};
use tabula_agents::render_agent::{HAlign, PrimitiveRenderer, TextOptions, VAlign};
use tabula_core::math::{Color, Extent2D, Rect, Vec2};
use tabula_core::renderer::{
    CpuTexture, EmojiRasterizer, FontSystem, GlyphBitmap, ResourceError, SpriteBatch, SpriteDraw,
    TextureId,
};

#[derive(Debug, Default)]
struct BatchLog {
    textures: Vec<Extent2D>,
    scissors: Vec<Option<Rect>>,
    draws: Vec<SpriteDraw>,
    ends: usize,
}

/// A sprite batch recording every call into a shared log.
struct RecordingBatch {
    log: Arc<Mutex<BatchLog>>,
    fail_uploads_after: Option<usize>,
}

impl SpriteBatch for RecordingBatch {
    fn create_texture(&mut self, texture: &CpuTexture) -> Result<TextureId, ResourceError> {
        let mut log = self.log.lock().unwrap();
        if self
            .fail_uploads_after
            .is_some_and(|limit| log.textures.len() >= limit)
        {
            return Err(ResourceError::BackendError("out of memory".into()));
        }
        log.textures.push(texture.size);
        Ok(TextureId(log.textures.len() as u32 - 1))
    }

    fn texture_size(&self, texture: TextureId) -> Option<Extent2D> {
        self.log
            .lock()
            .unwrap()
            .textures
            .get(texture.0 as usize)
            .copied()
    }

    fn begin(&mut self, scissor: Option<Rect>) {
        self.log.lock().unwrap().scissors.push(scissor);
    }

    fn draw(&mut self, sprite: &SpriteDraw) {
        self.log.lock().unwrap().draws.push(*sprite);
    }

    fn end(&mut self) {
        self.log.lock().unwrap().ends += 1;
    }

    fn resize(&mut self, _size: Extent2D) {}
}

/// A monospace font whose glyphs are solid boxes; it has no glyph for '🦄'.
struct BoxFont;

impl FontSystem for BoxFont {
    fn ascent(&self, px: f32) -> f32 {
        px * 0.8
    }

    fn line_height(&self, px: f32) -> f32 {
        px * 1.2
    }

    fn advance(&self, _ch: char, px: f32) -> f32 {
        px * 0.5
    }

    fn has_glyph(&self, ch: char) -> bool {
        ch != '🦄'
    }

    fn rasterize(&self, ch: char, px: f32) -> Option<GlyphBitmap> {
        if ch.is_whitespace() || !self.has_glyph(ch) {
            return None;
        }
        let size = Extent2D::new((px * 0.5) as u32, (px * 0.8) as u32);
        Some(GlyphBitmap {
            size,
            offset: Vec2::new(0.0, -px * 0.8),
            coverage: vec![255; size.area() as usize],
        })
    }
}

struct SquareEmoji;

impl EmojiRasterizer for SquareEmoji {
    fn rasterize(&self, _cluster: &str, px: u32) -> Option<CpuTexture> {
        Some(CpuTexture::solid(Extent2D::new(px, px), Color::YELLOW))
    }
}

fn renderer() -> (PrimitiveRenderer, Arc<Mutex<BatchLog>>) {
    renderer_with_limit(None)
}

fn renderer_with_limit(limit: Option<usize>) -> (PrimitiveRenderer, Arc<Mutex<BatchLog>>) {
    let log = Arc::new(Mutex::new(BatchLog::default()));
    let batch = RecordingBatch {
        log: log.clone(),
        fail_uploads_after: limit,
    };
    let renderer = PrimitiveRenderer::new(Box::new(batch), 200, 100).unwrap();
    (renderer, log)
}

fn draw_count(log: &Arc<Mutex<BatchLog>>) -> usize {
    log.lock().unwrap().draws.len()
}

#[test]
fn test_white_texture_is_created_once() {
    let (renderer, log) = renderer();
    assert_eq!(log.lock().unwrap().textures, vec![Extent2D::new(1, 1)]);
    assert_eq!(renderer.stats().texture_uploads, 1);
}

#[test]
fn test_failed_white_texture_fails_construction() {
    let log = Arc::new(Mutex::new(BatchLog::default()));
    let batch = RecordingBatch {
        log,
        fail_uploads_after: Some(0),
    };
    assert!(PrimitiveRenderer::new(Box::new(batch), 10, 10).is_err());
}

#[test]
fn test_draws_outside_a_frame_are_dropped() {
    let (mut renderer, log) = renderer();
    renderer.draw_rect(Color::RED, Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 1.0);
    assert_eq!(draw_count(&log), 0);

    renderer.begin_frame();
    renderer.draw_rect(Color::RED, Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 1.0);
    renderer.end_frame();
    assert_eq!(draw_count(&log), 1);
    assert_eq!(log.lock().unwrap().ends, 1);
}

#[test]
fn test_filled_rect_is_one_stretched_sprite() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_rect(Color::BLUE, Rect::new(5.0, 6.0, 30.0, 20.0), 0.0, 0.5);
    renderer.end_frame();

    let log = log.lock().unwrap();
    let sprite = log.draws[0];
    assert_eq!(sprite.position, Vec2::new(5.0, 6.0));
    assert_eq!(sprite.scale, Vec2::new(30.0, 20.0));
    assert_eq!(sprite.tint.a, 0.5);
}

#[test]
fn test_outlined_rect_is_four_strips() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_rect(Color::BLUE, Rect::new(0.0, 0.0, 40.0, 30.0), 2.0, 1.0);
    renderer.end_frame();
    assert_eq!(draw_count(&log), 4);
}

#[test]
fn test_empty_rect_is_a_no_op() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_rect(Color::BLUE, Rect::new(0.0, 0.0, -5.0, 10.0), 0.0, 1.0);
    renderer.draw_rect(Color::BLUE, Rect::new(0.0, 0.0, 5.0, 0.0), 1.0, 1.0);
    renderer.end_frame();
    assert_eq!(draw_count(&log), 0);
}

#[test]
fn test_circle_with_non_positive_radius_draws_nothing() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_circle(Color::RED, Vec2::new(50.0, 50.0), 0.0, 0.0, 1.0);
    renderer.draw_circle(Color::RED, Vec2::new(50.0, 50.0), -4.0, 2.0, 1.0);
    renderer.end_frame();
    assert_eq!(draw_count(&log), 0);
    assert_eq!(renderer.stats().sprites, 0);
}

#[test]
fn test_circle_submits_one_sprite_per_row() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_circle(Color::RED, Vec2::new(50.0, 50.0), 10.0, 0.0, 1.0);
    renderer.end_frame();
    assert_eq!(draw_count(&log), 20);
}

#[test]
fn test_ring_uses_two_spans_through_the_hole() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_circle(Color::RED, Vec2::new(50.0, 50.0), 10.0, 3.0, 1.0);
    renderer.end_frame();
    assert!(draw_count(&log) > 20);
}

#[test]
fn test_non_finite_geometry_draws_nothing() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_circle(Color::RED, Vec2::new(50.0, 50.0), f32::INFINITY, 0.0, 1.0);
    renderer.draw_circle(Color::RED, Vec2::new(f32::NAN, 50.0), 10.0, 2.0, 1.0);
    renderer.draw_line(Color::RED, Vec2::ZERO, Vec2::new(f32::INFINITY, 4.0), 2.0, 1.0);
    renderer.draw_polygon(
        Color::RED,
        &[Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(4.0, f32::NAN)],
        0.0,
        1.0,
    );
    renderer.end_frame();
    assert_eq!(draw_count(&log), 0);
}

#[test]
fn test_fills_only_cover_visible_rows() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    // The viewport is 100 rows tall.
    renderer.draw_polygon(
        Color::GREEN,
        &[Vec2::ZERO, Vec2::new(2.0, 0.0), Vec2::new(1.0, 5e6)],
        0.0,
        1.0,
    );
    assert_eq!(renderer.stats().sprites, 100);

    renderer.push_clip(Rect::new(0.0, 45.0, 200.0, 3.0));
    renderer.draw_circle(Color::RED, Vec2::new(50.0, 50.0), 10.0, 0.0, 1.0);
    renderer.pop_clip();
    renderer.end_frame();

    let log = log.lock().unwrap();
    let rows: Vec<f32> = log.draws[100..].iter().map(|d| d.position.y).collect();
    assert_eq!(rows, vec![45.0, 46.0, 47.0]);
}

#[test]
fn test_line_is_a_single_rotated_sprite() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_line(Color::WHITE, Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 3.0, 1.0);
    renderer.draw_line(Color::WHITE, Vec2::new(5.0, 5.0), Vec2::new(5.1, 5.1), 3.0, 1.0);
    renderer.end_frame();

    let log = log.lock().unwrap();
    assert_eq!(log.draws.len(), 1);
    let sprite = log.draws[0];
    assert!((sprite.scale.x - 10.0).abs() < 1e-4);
    assert_eq!(sprite.scale.y, 3.0);
    assert!((sprite.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn test_polygon_boundaries() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_polygon(Color::GREEN, &[Vec2::ZERO, Vec2::new(5.0, 5.0)], 0.0, 1.0);
    renderer.draw_polygon(
        Color::GREEN,
        &[Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0)],
        0.0,
        1.0,
    );
    renderer.end_frame();
    assert_eq!(draw_count(&log), 0);
}

#[test]
fn test_polygon_outline_is_one_line_per_edge() {
    let (mut renderer, log) = renderer();
    let triangle = [Vec2::new(10.0, 10.0), Vec2::new(40.0, 10.0), Vec2::new(25.0, 40.0)];
    renderer.begin_frame();
    renderer.draw_polygon(Color::GREEN, &triangle, 2.0, 1.0);
    renderer.end_frame();
    assert_eq!(draw_count(&log), 3);
}

#[test]
fn test_clip_stack_restarts_batches() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.push_clip(Rect::new(10.0, 10.0, 50.0, 50.0));
    renderer.push_clip(Rect::new(30.0, 0.0, 500.0, 20.0));
    assert_eq!(renderer.clip_depth(), 2);
    renderer.pop_clip();
    renderer.pop_clip();
    renderer.pop_clip();
    renderer.end_frame();

    let log = log.lock().unwrap();
    assert_eq!(
        log.scissors,
        vec![
            None,
            Some(Rect::new(10.0, 10.0, 50.0, 50.0)),
            Some(Rect::new(30.0, 10.0, 30.0, 10.0)),
            Some(Rect::new(10.0, 10.0, 50.0, 50.0)),
            None,
        ]
    );
    assert_eq!(log.ends, 5);
    assert_eq!(renderer.stats().batches, 5);
}

#[test]
fn test_unbalanced_clips_are_reset_at_end_of_frame() {
    let (mut renderer, _log) = renderer();
    renderer.begin_frame();
    renderer.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
    renderer.end_frame();
    assert_eq!(renderer.clip_depth(), 0);
}

#[test]
fn test_canvas_textures_are_rasterized_once() {
    let (mut renderer, log) = renderer();
    let mut rasterizations = 0;
    for _ in 0..3 {
        let texture = renderer.get_or_create_canvas_texture("bg:test", 16, 8, |canvas| {
            rasterizations += 1;
            canvas.clear(Color::RED);
        });
        assert!(texture.is_some());
    }
    assert_eq!(rasterizations, 1);
    assert_eq!(renderer.cached_texture_count(), 1);
    assert_eq!(log.lock().unwrap().textures.len(), 2);

    renderer.begin_frame();
    let texture = renderer
        .get_or_create_canvas_texture("bg:test", 16, 8, |_| unreachable!())
        .unwrap();
    renderer.draw_texture(texture, Rect::new(0.0, 0.0, 32.0, 16.0), 1.0);
    renderer.end_frame();
    assert_eq!(log.lock().unwrap().draws[0].scale, Vec2::new(2.0, 2.0));
}

#[test]
fn test_failed_canvas_texture_is_not_retried() {
    let (mut renderer, log) = renderer_with_limit(Some(1));
    let mut attempts = 0;
    for _ in 0..2 {
        let texture = renderer.get_or_create_canvas_texture("bg:fail", 4, 4, |_| attempts += 1);
        assert!(texture.is_none());
    }
    assert_eq!(attempts, 1);
    assert_eq!(log.lock().unwrap().textures.len(), 1);
}

#[test]
fn test_text_without_font_draws_nothing() {
    let (mut renderer, log) = renderer();
    renderer.begin_frame();
    renderer.draw_text("Hello", Vec2::ZERO, 16.0, Color::WHITE, TextOptions::default());
    renderer.end_frame();
    assert_eq!(draw_count(&log), 0);
    assert_eq!(renderer.measure_text("Hello", 16.0), Vec2::ZERO);
}

#[test]
fn test_text_glyphs_are_cached_per_char_and_size() {
    let (mut renderer, log) = renderer();
    renderer.set_font_system(Some(Box::new(BoxFont)));
    renderer.begin_frame();
    renderer.draw_text("aab a", Vec2::ZERO, 20.0, Color::WHITE, TextOptions::default());
    renderer.end_frame();

    let log = log.lock().unwrap();
    // Four visible glyphs, two distinct characters uploaded.
    assert_eq!(log.draws.len(), 4);
    assert_eq!(log.textures.len(), 3);
}

#[test]
fn test_text_alignment() {
    let (mut renderer, log) = renderer();
    renderer.set_font_system(Some(Box::new(BoxFont)));
    assert_eq!(renderer.measure_text("abcd\nab", 10.0), Vec2::new(20.0, 24.0));

    let options = TextOptions {
        h_align: HAlign::Right,
        v_align: VAlign::Bottom,
        ..TextOptions::default()
    };
    renderer.begin_frame();
    renderer.draw_text("ab", Vec2::new(100.0, 50.0), 10.0, Color::WHITE, options);
    renderer.end_frame();

    let log = log.lock().unwrap();
    // Right-aligned: the first glyph starts one line width left of the anchor.
    assert_eq!(log.draws[0].position.x, 90.0);
    // Bottom-aligned: the glyph top sits one line height above the anchor.
    assert!((log.draws[0].position.y - 38.0).abs() < 1e-4);
}

#[test]
fn test_emoji_without_color_backend_falls_back_to_dot() {
    let (mut renderer, log) = renderer();
    renderer.set_font_system(Some(Box::new(BoxFont)));
    renderer.begin_frame();
    renderer.draw_text("🦄", Vec2::ZERO, 20.0, Color::WHITE, TextOptions::default());
    renderer.end_frame();

    assert_eq!(draw_count(&log), 1);
    assert_eq!(renderer.cached_texture_count(), 1);
    let tint = log.lock().unwrap().draws[0].tint;
    assert_ne!(tint, Color::WHITE);
}

#[test]
fn test_color_emoji_clusters_are_cached() {
    let (mut renderer, log) = renderer();
    renderer.set_font_system(Some(Box::new(BoxFont)));
    renderer.set_emoji_rasterizer(Some(Box::new(SquareEmoji)));
    assert!(renderer.has_color_emoji());

    renderer.begin_frame();
    renderer.draw_text("🔥 hot 🔥", Vec2::ZERO, 16.0, Color::WHITE, TextOptions::default());
    renderer.end_frame();

    let log = log.lock().unwrap();
    // Two emoji sprites and three letters.
    assert_eq!(log.draws.len(), 5);
    // White, one emoji texture and three glyph textures.
    assert_eq!(log.textures.len(), 5);
}
