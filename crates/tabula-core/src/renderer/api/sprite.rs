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

//! Defines the single sprite submission understood by every sprite batch.

use crate::math::{Color, Rect, Vec2};
use crate::renderer::api::TextureId;

/// One textured quad submitted to a [`SpriteBatch`](crate::renderer::SpriteBatch).
///
/// The quad is the `source` region of the texture (in texels), scaled by
/// `scale`, rotated by `rotation` radians around `origin` (in source texels,
/// relative to the region's top-left corner) and placed so that `origin`
/// lands on `position`. The texel color is multiplied by `tint`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// The texture to sample from.
    pub texture: TextureId,
    /// The region of the texture to draw, `None` for the whole texture.
    pub source: Option<Rect>,
    /// Where the origin lands on screen.
    pub position: Vec2,
    /// The rotation and scaling pivot, in source texels.
    pub origin: Vec2,
    /// Per-axis scale applied to the source region.
    pub scale: Vec2,
    /// Clockwise rotation in radians.
    pub rotation: f32,
    /// Color multiplied with every sampled texel.
    pub tint: Color,
}

impl SpriteDraw {
    /// Creates a sprite that stretches a 1x1 texture over `rect`.
    ///
    /// This is how the primitive renderer draws every solid fill.
    pub fn stretched(texture: TextureId, rect: Rect, tint: Color) -> Self {
        Self {
            texture,
            source: None,
            position: rect.origin(),
            origin: Vec2::ZERO,
            scale: rect.size(),
            rotation: 0.0,
            tint,
        }
    }

    /// Creates a sprite that fits a `texture_size` texture into `dest`.
    pub fn fitted(texture: TextureId, texture_size: Vec2, dest: Rect, tint: Color) -> Self {
        let scale = Vec2::new(
            dest.width / texture_size.x.max(1.0),
            dest.height / texture_size.y.max(1.0),
        );
        Self {
            texture,
            source: None,
            position: dest.origin(),
            origin: Vec2::ZERO,
            scale,
            rotation: 0.0,
            tint,
        }
    }
}
