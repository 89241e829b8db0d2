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

//! The cached atmospheric background behind every illustration.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabula_agents::render_agent::PrimitiveRenderer;
use tabula_core::math::{Color, Rect, Vec2};
use tabula_lanes::raster_lane::VectorCanvas;

use crate::kind::CardKind;
use crate::palette::Palette;

/// Builds the texture cache key of a background.
pub(crate) fn cache_key(
    kind: CardKind,
    variant: usize,
    width: u32,
    height: u32,
    card_name: Option<&str>,
) -> String {
    let name = card_name.map(|n| n.trim().to_lowercase()).unwrap_or_default();
    format!("bg:{kind}:{variant}:{width}x{height}:{name}")
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Grain seed of a cache key: 64-bit FNV-1a over the key bytes, fixed
/// across builds and toolchains.
fn seed_for(key: &str) -> u64 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Draws the background of `area`, rasterizing it on first use.
pub(crate) fn draw(
    renderer: &mut PrimitiveRenderer,
    kind: CardKind,
    variant: usize,
    area: Rect,
    card_name: Option<&str>,
    palette: &Palette,
) {
    let width = area.width.round().max(1.0) as u32;
    let height = area.height.round().max(1.0) as u32;
    let key = cache_key(kind, variant, width, height, card_name);
    let seed = seed_for(&key);
    let texture = renderer.get_or_create_canvas_texture(&key, width, height, |canvas| {
        log::debug!("Rasterizing background '{key}'");
        paint(canvas, variant, palette, seed);
    });
    match texture {
        Some(texture) => renderer.draw_texture(texture, area, 1.0),
        // Degrade to a flat fill.
        None => renderer.draw_rect(palette.sky_outer, area, 0.0, 1.0),
    }
}

/// Paints the eight background layers.
fn paint(canvas: &mut VectorCanvas, variant: usize, palette: &Palette, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bounds = canvas.bounds();
    let (w, h) = (bounds.width, bounds.height);
    let size = w.min(h);
    let center = Vec2::new(w * 0.5, h * 0.45);

    // 1. Radial sky.
    canvas.clear(palette.sky_outer);
    canvas.radial_gradient(center, w.max(h) * 0.75, palette.sky_inner, palette.sky_outer);

    // 2. Glow behind the subject.
    canvas.soft_circle(center, size * 0.45, palette.glow.with_alpha(0.55));

    // 3. S-curve energy arcs, mirrored on odd variants.
    let flip = if variant % 2 == 0 { 1.0 } else { -1.0 };
    for i in 0..3 {
        let t = i as f32 / 3.0;
        let y0 = h * (0.15 + 0.3 * t);
        let x = |fx: f32| w * 0.5 + flip * (fx - 0.5) * w;
        canvas.stroke_cubic(
            Vec2::new(x(-0.05), y0),
            Vec2::new(x(0.35), y0 - h * 0.25),
            Vec2::new(x(0.65), y0 + h * 0.35),
            Vec2::new(x(1.05), y0 + h * 0.1),
            (size * 0.012).max(1.0),
            palette.accent.with_alpha(0.22 - 0.05 * t),
        );
    }

    // 4. Blurred sparkle clouds.
    for _ in 0..10 {
        let p = Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
        let r = size * rng.gen_range(0.04..0.1);
        canvas.soft_circle(p, r, palette.highlight.with_alpha(0.3));
    }

    // 5. Spotlight cone from the top.
    let spread = w * (0.35 + 0.05 * variant as f32);
    canvas.fill_polygon(
        &[
            Vec2::new(w * 0.5 - w * 0.06, 0.0),
            Vec2::new(w * 0.5 + w * 0.06, 0.0),
            Vec2::new(w * 0.5 + spread, h),
            Vec2::new(w * 0.5 - spread, h),
        ],
        palette.highlight.with_alpha(0.07),
    );

    // 6. Vignette.
    canvas.vignette(palette.shadow, 0.6);

    // 7. Film grain.
    let grains = (w * h / 12.0) as usize;
    for _ in 0..grains {
        let x = rng.gen_range(0..pixel_extent(w));
        let y = rng.gen_range(0..pixel_extent(h));
        let tone = if rng.gen_bool(0.5) { Color::WHITE } else { Color::BLACK };
        canvas.blend_pixel(x, y, tone.with_alpha(0.05));
    }

    // 8. Dust motes.
    for _ in 0..18 {
        let p = Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
        let r = rng.gen_range(0.6..1.8) * (size / 200.0).max(0.5);
        let alpha = rng.gen_range(0.35..0.7);
        canvas.fill_circle(p, r, palette.highlight.with_alpha(alpha));
    }
}

fn pixel_extent(extent: f32) -> i32 {
    (extent as i32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_cache_key_normalizes_the_name() {
        assert_eq!(
            cache_key(CardKind::Unicorn, 2, 120, 160, Some("  Zombie Unicorn ")),
            "bg:unicorn:2:120x160:zombie unicorn"
        );
        assert_eq!(cache_key(CardKind::Neigh, 0, 10, 20, None), "bg:neigh:0:10x20:");
    }

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(seed_for(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(seed_for("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(seed_for("bg:neigh:0:10x20:"), 0xfa7b_080e_041a_1264);
    }

    #[test]
    fn test_painting_is_deterministic() {
        let render = |seed| {
            let mut canvas = VectorCanvas::new(24, 32);
            paint(&mut canvas, 1, &palette::ARCANE, seed);
            canvas.into_texture().unwrap()
        };
        assert_eq!(render(7), render(7));
        assert_ne!(render(7), render(8));
    }

    #[test]
    fn test_background_is_opaque() {
        let mut canvas = VectorCanvas::new(16, 16);
        paint(&mut canvas, 0, &palette::GOLDEN, 1);
        assert!(canvas.image().pixels().all(|p| p.0[3] == 255));
    }
}
