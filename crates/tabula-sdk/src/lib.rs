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

//! The public-facing SDK of Tabula.
//!
//! This crate assembles the renderer, the audio manager and their concrete
//! backends from a [`ClientConfig`], so a game only has to pick a
//! [`VisualClient`] constructor and start drawing.

#![warn(missing_docs)]

mod client;
pub mod config;

pub use client::VisualClient;
pub use config::ClientConfig;

/// The types a game needs to draw cards and play sounds.
pub mod prelude {
    pub use crate::{init_logging, ClientConfig, VisualClient};
    pub use tabula_agents::audio_agent::{AudioManager, AudioSettings, MusicTable};
    pub use tabula_agents::render_agent::{HAlign, PrimitiveRenderer, TextOptions, VAlign};
    pub use tabula_cards::{draw_illustration, named_tokens, CardKind, VARIANT_COUNT};
    pub use tabula_core::math::{Color, Extent2D, Rect, Vec2};
    pub use tabula_core::renderer::{FrameStats, SpriteBatch};
}

/// Installs `env_logger` with an `info` default, overridable with `RUST_LOG`.
///
/// Calling it more than once is harmless.
pub fn init_logging() {
    use env_logger::{Builder, Env};

    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("symphonia", log::LevelFilter::Warn)
        .try_init();
}
