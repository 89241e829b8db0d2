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

//! Texture decoding.

use super::{AssetError, AssetLoaderLane};
use tabula_core::math::Extent2D;
use tabula_core::renderer::CpuTexture;

/// A lane dedicated to decoding image files into CPU textures.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextureLoaderLane;

impl TextureLoaderLane {
    /// Creates a new instance of `TextureLoaderLane`.
    pub fn new() -> Self {
        Self
    }

    /// Decodes an image and resizes it to `size` with a smooth filter.
    pub fn load_resized(&self, bytes: &[u8], size: Extent2D) -> Result<CpuTexture, AssetError> {
        let img = image::load_from_memory(bytes).map_err(|e| AssetError::decode("image", e))?;
        let resized = img.resize_exact(
            size.width.max(1),
            size.height.max(1),
            image::imageops::FilterType::Triangle,
        );
        let rgba = resized.to_rgba8();
        let (width, height) = rgba.dimensions();
        CpuTexture::from_rgba8(Extent2D::new(width, height), rgba.into_raw())
            .map_err(|e| AssetError::decode("image", e))
    }
}

impl AssetLoaderLane<CpuTexture> for TextureLoaderLane {
    fn load(&self, bytes: &[u8]) -> Result<CpuTexture, AssetError> {
        // Keep sRGB, straight alpha.
        let rgba = image::load_from_memory(bytes)
            .map_err(|e| AssetError::decode("image", e))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        CpuTexture::from_rgba8(Extent2D::new(width, height), rgba.into_raw())
            .map_err(|e| AssetError::decode("image", e))
    }
}

impl tabula_core::lane::Lane for TextureLoaderLane {
    fn strategy_name(&self) -> &'static str {
        "TextureLoader"
    }

    fn lane_kind(&self) -> tabula_core::lane::LaneKind {
        tabula_core::lane::LaneKind::Asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_png_decodes() {
        let bytes = png_bytes(3, 2, [10, 20, 30, 255]);
        let texture = TextureLoaderLane::new().load(&bytes).unwrap();
        assert_eq!(texture.size, Extent2D::new(3, 2));
        assert_eq!(texture.pixel(2, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_resize() {
        let bytes = png_bytes(8, 8, [255, 0, 0, 255]);
        let texture = TextureLoaderLane::new()
            .load_resized(&bytes, Extent2D::new(4, 4))
            .unwrap();
        assert_eq!(texture.size, Extent2D::new(4, 4));
        let [r, g, _, a] = texture.pixel(1, 1).unwrap();
        assert!(r > 250 && g < 5 && a > 250);
    }

    #[test]
    fn test_garbage_fails() {
        assert!(TextureLoaderLane::new().load(&[1, 2, 3]).is_err());
    }
}
