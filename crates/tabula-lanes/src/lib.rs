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

//! # Tabula Lanes
//!
//! The hot-path algorithms of the client visual layer. Lanes are stateless (or
//! nearly so) strategies owned by the agents in `tabula-agents`:
//!
//! - [`raster_lane`]: scanline span generation for the primitive renderer and
//!   the anti-aliased vector canvas used for backgrounds and glyphs.
//! - [`text_lane`]: emoji classification and text-run segmentation.
//! - [`audio_lane`]: the voice mixer driven by the audio device callback.
//! - [`asset_lane`]: decoders turning raw bytes into sounds and textures.

#![warn(missing_docs)]

pub mod asset_lane;
pub mod audio_lane;
pub mod raster_lane;
pub mod text_lane;
