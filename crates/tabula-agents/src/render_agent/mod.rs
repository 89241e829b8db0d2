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

//! Acts as the **[A]gent** for 2D rendering.
//!
//! The [`PrimitiveRenderer`] translates abstract drawing requests (rectangles,
//! circles, lines, polygons, text, textures) into [`SpriteBatch`] submissions
//! in top-left-origin pixel coordinates. It owns the cached 1x1 white texture
//! used for solid fills, the glyph and emoji caches, and the string-keyed
//! cache of textures rasterized by the vector canvas.
//!
//! Every operation is best-effort: degenerate geometry, missing fonts and
//! failed uploads are logged and skipped, never reported to the caller.
//!
//! [`SpriteBatch`]: tabula_core::renderer::SpriteBatch

mod agent;
mod cache;
mod clip;
mod text;

pub use agent::*;
pub use text::{HAlign, TextOptions, VAlign};
