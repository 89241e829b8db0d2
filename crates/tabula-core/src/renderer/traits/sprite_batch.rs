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

use crate::math::{Extent2D, Rect};
use crate::renderer::api::{CpuTexture, SpriteDraw, TextureId};
use crate::renderer::error::ResourceError;

/// The abstract contract for a game engine's sprite batch.
///
/// This trait is the boundary between the primitive renderer and whatever
/// actually puts pixels on screen. A batch buffers sprites between `begin` and
/// `end` and flushes them as a single submission. The scissor rectangle is
/// fixed for the lifetime of a batch, which is why changing the clip requires
/// ending the current batch and beginning a new one.
///
/// Coordinates are top-left-origin pixels; implementations must not flip Y.
pub trait SpriteBatch: Send {
    /// Uploads a CPU texture and returns a handle usable in [`SpriteDraw`].
    fn create_texture(&mut self, texture: &CpuTexture) -> Result<TextureId, ResourceError>;

    /// Returns the dimensions of a previously created texture.
    fn texture_size(&self, texture: TextureId) -> Option<Extent2D>;

    /// Starts buffering sprites, discarding pixels outside `scissor` when set.
    fn begin(&mut self, scissor: Option<Rect>);

    /// Buffers a sprite for the current batch.
    fn draw(&mut self, sprite: &SpriteDraw);

    /// Flushes every buffered sprite.
    fn end(&mut self);

    /// Informs the backend that the drawable surface changed size.
    fn resize(&mut self, size: Extent2D);
}
