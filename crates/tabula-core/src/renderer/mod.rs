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

//! Provides the public, backend-agnostic 2D rendering contracts.
//!
//! This module defines the "common language" for all drawing operations: the
//! abstract [`SpriteBatch`] that a game engine (or the software backend in
//! `tabula-infra`) implements, the [`FontSystem`] and [`EmojiRasterizer`]
//! services used for text, the CPU-side [`CpuTexture`] and the error types.
//!
//! This module defines the 'what' of rendering. The 'how' lives in a concrete
//! backend, and the primitive renderer in `tabula-agents` only ever talks to
//! these traits.

pub mod api;
pub mod error;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::error::{RenderError, ResourceError};
pub use self::traits::{EmojiRasterizer, FontSystem, GlyphBitmap, SpriteBatch};
