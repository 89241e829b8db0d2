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
use tabula_agents::render_agent::PrimitiveRenderer;
use tabula_cards::{draw_illustration, named_override, named_tokens, CardKind};
use tabula_core::math::{Extent2D, Rect};
use tabula_core::renderer::{CpuTexture, ResourceError, SpriteBatch, SpriteDraw, TextureId};

#[derive(Default)]
struct Recorded {
    textures: Vec<CpuTexture>,
    draws: usize,
}

struct RecordingBatch(Arc<Mutex<Recorded>>);

impl SpriteBatch for RecordingBatch {
    fn create_texture(&mut self, texture: &CpuTexture) -> Result<TextureId, ResourceError> {
        let mut recorded = self.0.lock().unwrap();
        recorded.textures.push(texture.clone());
        Ok(TextureId(recorded.textures.len() as u32 - 1))
    }

    fn texture_size(&self, texture: TextureId) -> Option<Extent2D> {
        let recorded = self.0.lock().unwrap();
        recorded.textures.get(texture.0 as usize).map(|t| t.size)
    }

    fn begin(&mut self, _scissor: Option<Rect>) {}

    fn draw(&mut self, _sprite: &SpriteDraw) {
        self.0.lock().unwrap().draws += 1;
    }

    fn end(&mut self) {}

    fn resize(&mut self, _size: Extent2D) {}
}

fn renderer() -> (PrimitiveRenderer, Arc<Mutex<Recorded>>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let batch = Box::new(RecordingBatch(recorded.clone()));
    let renderer = PrimitiveRenderer::new(batch, 320, 240).unwrap();
    (renderer, recorded)
}

const AREA: Rect = Rect::new(10.0, 10.0, 48.0, 64.0);

const KIND_NAMES: [&str; 9] = [
    "baby unicorn",
    "unicorn",
    "upgrade",
    "downgrade",
    "magic",
    "instant",
    "neigh",
    "super neigh",
    "mystery",
];

#[test]
fn test_every_kind_and_variant_draws_something() {
    let (mut renderer, _) = renderer();
    for kind in KIND_NAMES {
        for variant in 0..4 {
            renderer.begin_frame();
            draw_illustration(&mut renderer, kind, variant, AREA, None);
            let sprites = renderer.stats().sprites;
            renderer.end_frame();
            // The background blit plus at least one foreground primitive.
            assert!(sprites > 1, "{kind} #{variant} drew {sprites} sprite(s)");
        }
    }
    assert_eq!(renderer.clip_depth(), 0);
}

#[test]
fn test_every_named_unicorn_draws_something() {
    let (mut renderer, _) = renderer();
    for token in named_tokens() {
        let name = format!("The {token} Unicorn");
        assert_eq!(named_override(&name), Some(token));
        renderer.begin_frame();
        draw_illustration(&mut renderer, "Unicorn", 0, AREA, Some(&name));
        assert!(renderer.stats().sprites > 1, "{name} drew nothing");
        renderer.end_frame();
    }
}

#[test]
fn test_background_is_rasterized_once_per_combination() {
    let (mut renderer, recorded) = renderer();
    renderer.begin_frame();
    draw_illustration(&mut renderer, "magic", 2, AREA, None);
    let uploads = recorded.lock().unwrap().textures.len();
    draw_illustration(&mut renderer, "magic", 2, AREA, None);
    draw_illustration(&mut renderer, "MAGIC", 6, AREA, None);
    renderer.end_frame();

    assert_eq!(renderer.cached_texture_count(), 1);
    assert_eq!(recorded.lock().unwrap().textures.len(), uploads);

    // Any change in the combination is a new entry.
    renderer.begin_frame();
    draw_illustration(&mut renderer, "magic", 3, AREA, None);
    draw_illustration(&mut renderer, "magic", 2, Rect::new(0.0, 0.0, 50.0, 64.0), None);
    draw_illustration(&mut renderer, "magic", 2, AREA, Some("Glitter Bomb"));
    renderer.end_frame();
    assert_eq!(renderer.cached_texture_count(), 4);
}

#[test]
fn test_negative_variants_wrap() {
    let (mut renderer, _) = renderer();
    renderer.begin_frame();
    draw_illustration(&mut renderer, "instant", -1, AREA, None);
    draw_illustration(&mut renderer, "instant", 3, AREA, None);
    renderer.end_frame();
    assert_eq!(renderer.cached_texture_count(), 1);
}

#[test]
fn test_identical_calls_produce_identical_backgrounds() {
    let render = || {
        let (mut renderer, recorded) = renderer();
        renderer.begin_frame();
        draw_illustration(&mut renderer, "unicorn", 1, AREA, Some("Zombie Unicorn"));
        renderer.end_frame();
        let textures = recorded.lock().unwrap().textures.clone();
        textures
    };
    assert_eq!(render(), render());
}

#[test]
fn test_name_palette_changes_the_background() {
    let background = |name: Option<&str>| {
        let (mut renderer, recorded) = renderer();
        renderer.begin_frame();
        draw_illustration(&mut renderer, "unicorn", 0, AREA, name);
        renderer.end_frame();
        let recorded = recorded.lock().unwrap();
        // Index 0 is the white fill texture.
        recorded.textures[1].pixel(24, 20)
    };
    assert_ne!(background(Some("Zombie Unicorn")), background(Some("Basic Unicorn")));
}

#[test]
fn test_tiny_areas_draw_nothing() {
    let (mut renderer, recorded) = renderer();
    renderer.begin_frame();
    draw_illustration(&mut renderer, "unicorn", 0, Rect::new(0.0, 0.0, 0.5, 40.0), None);
    draw_illustration(&mut renderer, "unicorn", 0, Rect::new(0.0, 0.0, 40.0, 0.0), None);
    draw_illustration(&mut renderer, "unicorn", 0, Rect::new(0.0, 0.0, -4.0, 40.0), None);
    renderer.end_frame();
    assert_eq!(renderer.stats().sprites, 0);
    assert_eq!(renderer.cached_texture_count(), 0);
    assert_eq!(recorded.lock().unwrap().draws, 0);
}

#[test]
fn test_outside_a_frame_nothing_is_submitted() {
    let (mut renderer, recorded) = renderer();
    draw_illustration(&mut renderer, "neigh", 0, AREA, None);
    assert_eq!(recorded.lock().unwrap().draws, 0);
    assert_eq!(CardKind::parse("neigh"), CardKind::Neigh);
}
