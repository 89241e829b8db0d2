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

//! Assembly of the renderer and the audio manager.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{bail, Result};
use tabula_agents::audio_agent::{default_sounds_dir, AudioManager, MixerPlayback, NullPlayback};
use tabula_agents::render_agent::PrimitiveRenderer;
use tabula_core::audio::PlaybackBackend;
use tabula_core::math::{Color, Extent2D, Rect};
use tabula_core::renderer::{CpuTexture, ResourceError, SpriteBatch, SpriteDraw, TextureId};
use tabula_infra::audio::backends::cpal::CpalAudioDevice;
use tabula_infra::graphics::software::SoftwareSpriteBatch;
use tabula_infra::text::{ColorEmojiFont, TtfFontSystem};

use crate::config::ClientConfig;

/// A software batch the client keeps a handle on after handing it to the renderer.
#[derive(Clone)]
struct SharedSoftwareBatch(Arc<Mutex<SoftwareSpriteBatch>>);

impl SharedSoftwareBatch {
    fn lock(&self) -> MutexGuard<'_, SoftwareSpriteBatch> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SpriteBatch for SharedSoftwareBatch {
    fn create_texture(&mut self, texture: &CpuTexture) -> Result<TextureId, ResourceError> {
        self.lock().create_texture(texture)
    }

    fn texture_size(&self, texture: TextureId) -> Option<Extent2D> {
        self.lock().texture_size(texture)
    }

    fn begin(&mut self, scissor: Option<Rect>) {
        self.lock().begin(scissor);
    }

    fn draw(&mut self, sprite: &SpriteDraw) {
        self.lock().draw(sprite);
    }

    fn end(&mut self) {
        self.lock().end();
    }

    fn resize(&mut self, size: Extent2D) {
        self.lock().resize(size);
    }
}

/// A renderer and an audio manager, ready to use.
///
/// Both halves follow the single-writer rule through `&mut self`; wrap the
/// client in a `Mutex` to share it between threads.
pub struct VisualClient {
    renderer: PrimitiveRenderer,
    audio: AudioManager,
    // Present when the client owns an offscreen software target.
    canvas: Option<SharedSoftwareBatch>,
}

impl VisualClient {
    /// Creates a client drawing into an offscreen image, without sound.
    pub fn headless(config: &ClientConfig) -> Result<Self> {
        Self::offscreen(config, Box::new(NullPlayback::new()))
    }

    /// Creates a client drawing into an offscreen image and playing sound on
    /// the default output device.
    ///
    /// When no device can be opened the client stays silent instead of failing.
    pub fn with_audio(config: &ClientConfig) -> Result<Self> {
        let playback: Box<dyn PlaybackBackend> =
            match MixerPlayback::start(Box::new(CpalAudioDevice::new())) {
                Ok(mixer) => Box::new(mixer),
                Err(e) => {
                    log::warn!("Audio output unavailable, continuing silently: {e:#}");
                    Box::new(NullPlayback::new())
                }
            };
        Self::offscreen(config, playback)
    }

    /// Creates a client around an engine-provided sprite batch and playback backend.
    pub fn with_backends(
        config: &ClientConfig,
        batch: Box<dyn SpriteBatch>,
        playback: Box<dyn PlaybackBackend>,
    ) -> Result<Self> {
        Self::assemble(config, batch, playback, None)
    }

    fn offscreen(config: &ClientConfig, playback: Box<dyn PlaybackBackend>) -> Result<Self> {
        let (width, height) = config.viewport;
        let canvas = SharedSoftwareBatch(Arc::new(Mutex::new(SoftwareSpriteBatch::new(
            width, height,
        ))));
        Self::assemble(config, Box::new(canvas.clone()), playback, Some(canvas))
    }

    fn assemble(
        config: &ClientConfig,
        batch: Box<dyn SpriteBatch>,
        playback: Box<dyn PlaybackBackend>,
        canvas: Option<SharedSoftwareBatch>,
    ) -> Result<Self> {
        let (width, height) = config.viewport;
        let mut renderer = PrimitiveRenderer::new(batch, width, height)?;
        if let Some(fonts) = TtfFontSystem::probe(config.font_path.as_slice()) {
            renderer.set_font_system(Some(Box::new(fonts)));
        }
        if let Some(emoji) = ColorEmojiFont::probe(&config.emoji_font_paths) {
            renderer.set_emoji_rasterizer(Some(Box::new(emoji)));
        }

        let sounds_dir = config.sounds_dir.clone().unwrap_or_else(default_sounds_dir);
        let audio = AudioManager::new(playback, config.audio_settings(), sounds_dir);

        log::info!("Visual client ready ({width}x{height})");
        Ok(Self {
            renderer,
            audio,
            canvas,
        })
    }

    /// The primitive renderer.
    pub fn renderer(&mut self) -> &mut PrimitiveRenderer {
        &mut self.renderer
    }

    /// The audio manager.
    pub fn audio(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    /// Returns `true` if the client draws into its own offscreen image.
    pub fn is_offscreen(&self) -> bool {
        self.canvas.is_some()
    }

    /// Fills the offscreen image with `color`. Does nothing for engine-provided batches.
    pub fn clear(&mut self, color: Color) {
        if let Some(canvas) = &self.canvas {
            canvas.lock().clear(color);
        }
    }

    /// Reads one pixel of the offscreen image as straight-alpha RGBA.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let canvas = self.canvas.as_ref()?;
        let batch = canvas.lock();
        let image = batch.image();
        (x < image.width() && y < image.height()).then(|| image.get_pixel(x, y).0)
    }

    /// Writes the offscreen image to `path` as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        match &self.canvas {
            Some(canvas) => canvas.lock().save_png(path),
            None => bail!("This client renders through an external sprite batch"),
        }
    }
}
