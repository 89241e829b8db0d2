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

//! Defines texture handles and the CPU-side texture payload.

use crate::math::{Color, Extent2D};
use crate::renderer::error::ResourceError;

/// An opaque handle to a texture owned by a [`SpriteBatch`](crate::renderer::SpriteBatch) backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// A texture that lives in CPU memory, ready to be uploaded to a backend.
///
/// Pixels are tightly packed, row-major, 8-bit RGBA with straight alpha in sRGB.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTexture {
    /// The raw pixel bytes, `width * height * 4` long.
    pub pixels: Vec<u8>,
    /// The texture dimensions in pixels.
    pub size: Extent2D,
}

impl CpuTexture {
    /// Creates a texture from raw RGBA bytes, validating the buffer length.
    pub fn from_rgba8(size: Extent2D, pixels: Vec<u8>) -> Result<Self, ResourceError> {
        if size.is_empty() {
            return Err(ResourceError::EmptyTexture);
        }
        let expected = size.area() as usize * 4;
        if pixels.len() != expected {
            return Err(ResourceError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels, size })
    }

    /// Creates a texture filled with a single color.
    pub fn solid(size: Extent2D, color: Color) -> Self {
        let rgba = color.to_rgba8();
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(size.area() as usize * 4)
            .collect();
        Self { pixels, size }
    }

    /// Creates a white texture whose alpha channel is the given coverage mask.
    ///
    /// This is the layout used for monochrome glyphs, which are tinted at draw time.
    pub fn from_coverage(size: Extent2D, coverage: &[u8]) -> Result<Self, ResourceError> {
        let expected = size.area() as usize;
        if coverage.len() != expected {
            return Err(ResourceError::InvalidPixelData {
                expected,
                actual: coverage.len(),
            });
        }
        let pixels = coverage.iter().flat_map(|&a| [255, 255, 255, a]).collect();
        Self::from_rgba8(size, pixels)
    }

    /// Reads the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
