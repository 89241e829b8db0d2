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

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use tabula_core::math::{Color, Extent2D, Rect, Vec2};
use tabula_core::renderer::{CpuTexture, ResourceError, SpriteBatch, SpriteDraw, TextureId};

/// A [`SpriteBatch`] that rasterizes sprites on the CPU.
///
/// Sprites are buffered between `begin` and `end` and composited on `end`
/// with nearest-neighbour sampling and straight-alpha source-over blending.
/// This makes the primitive renderer usable without a GPU, for tests and
/// for offline rendering.
#[derive(Debug)]
pub struct SoftwareSpriteBatch {
    target: RgbaImage,
    // Uploaded textures, indexed by `TextureId`.
    textures: Vec<CpuTexture>,
    queue: Vec<SpriteDraw>,
    scissor: Option<Rect>,
    in_batch: bool,
}

impl SoftwareSpriteBatch {
    /// Creates a batch drawing into a transparent `width` x `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RgbaImage::new(width, height),
            textures: Vec::new(),
            queue: Vec::new(),
            scissor: None,
            in_batch: false,
        }
    }

    /// The rendered image.
    pub fn image(&self) -> &RgbaImage {
        &self.target
    }

    /// Number of textures uploaded so far.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Fills the whole target with `color`, ignoring the scissor.
    pub fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for pixel in self.target.pixels_mut() {
            *pixel = px;
        }
    }

    /// Writes the rendered image to `path` as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.target
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn flush(&mut self) {
        let queue = std::mem::take(&mut self.queue);
        for sprite in &queue {
            self.rasterize(sprite);
        }
        self.queue = queue;
        self.queue.clear();
    }

    /// The pixel-space area sprites may touch: the target, narrowed by the scissor.
    fn clip_bounds(&self) -> Rect {
        let root = Rect::new(
            0.0,
            0.0,
            self.target.width() as f32,
            self.target.height() as f32,
        );
        match self.scissor {
            Some(scissor) => root.intersect(&scissor),
            None => root,
        }
    }

    fn rasterize(&mut self, sprite: &SpriteDraw) {
        let Some(texture) = self.textures.get(sprite.texture.0 as usize) else {
            log::debug!("Sprite references unknown texture {:?}", sprite.texture);
            return;
        };
        let full = Rect::new(
            0.0,
            0.0,
            texture.size.width as f32,
            texture.size.height as f32,
        );
        let source = sprite.source.map_or(full, |s| s.intersect(&full));
        if source.is_empty() || sprite.scale.x.abs() < 1e-6 || sprite.scale.y.abs() < 1e-6 {
            return;
        }

        let to_screen = |local: Vec2| {
            sprite.position + ((local - sprite.origin) * sprite.scale).rotate(sprite.rotation)
        };
        let corners = [
            to_screen(Vec2::ZERO),
            to_screen(Vec2::new(source.width, 0.0)),
            to_screen(Vec2::new(source.width, source.height)),
            to_screen(Vec2::new(0.0, source.height)),
        ];
        let (min, max) = corners.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), c| {
                (
                    Vec2::new(min.x.min(c.x), min.y.min(c.y)),
                    Vec2::new(max.x.max(c.x), max.y.max(c.y)),
                )
            },
        );
        let bounds = Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
            .intersect(&self.clip_bounds());
        if bounds.is_empty() {
            return;
        }

        let x0 = bounds.x.floor().max(0.0) as u32;
        let y0 = bounds.y.floor().max(0.0) as u32;
        let x1 = (bounds.right().ceil() as u32).min(self.target.width());
        let y1 = (bounds.bottom().ceil() as u32).min(self.target.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if !bounds.contains(center) {
                    continue;
                }
                // Inverse transform: screen -> source texels.
                let d = (center - sprite.position).rotate(-sprite.rotation);
                let local = Vec2::new(d.x / sprite.scale.x, d.y / sprite.scale.y) + sprite.origin;
                let inside = local.x >= 0.0 && local.y >= 0.0;
                if !inside || local.x >= source.width || local.y >= source.height {
                    continue;
                }
                let tx = (source.x + local.x).floor() as u32;
                let ty = (source.y + local.y).floor() as u32;
                let Some([r, g, b, a]) = texture.pixel(tx, ty) else {
                    continue;
                };
                let src = Color::rgba8(r, g, b, a) * sprite.tint;
                if src.a <= 0.0 {
                    continue;
                }
                let dst = self.target.get_pixel_mut(x, y);
                let [dr, dg, db, da] = dst.0;
                *dst = Rgba(src.over(Color::rgba8(dr, dg, db, da)).to_rgba8());
            }
        }
    }
}

impl SpriteBatch for SoftwareSpriteBatch {
    fn create_texture(&mut self, texture: &CpuTexture) -> Result<TextureId, ResourceError> {
        if texture.size.is_empty() {
            return Err(ResourceError::EmptyTexture);
        }
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(texture.clone());
        Ok(id)
    }

    fn texture_size(&self, texture: TextureId) -> Option<Extent2D> {
        self.textures.get(texture.0 as usize).map(|t| t.size)
    }

    fn begin(&mut self, scissor: Option<Rect>) {
        if self.in_batch {
            log::debug!("begin called on an open batch; flushing it first");
            self.flush();
        }
        self.scissor = scissor;
        self.in_batch = true;
    }

    fn draw(&mut self, sprite: &SpriteDraw) {
        if !self.in_batch {
            log::trace!("Sprite submitted outside begin/end dropped");
            return;
        }
        self.queue.push(*sprite);
    }

    fn end(&mut self) {
        self.flush();
        self.in_batch = false;
        self.scissor = None;
    }

    fn resize(&mut self, size: Extent2D) {
        if size.width == self.target.width() && size.height == self.target.height() {
            return;
        }
        log::debug!("Software target resized to {}x{}", size.width, size.height);
        self.target = RgbaImage::new(size.width, size.height);
    }
}
