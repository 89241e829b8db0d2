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

//! # Tabula Agents
//!
//! Stateful orchestrators sitting on top of the lanes:
//!
//! - [`render_agent::PrimitiveRenderer`] turns 2D draw requests into sprite
//!   batch submissions and owns every texture cache.
//! - [`audio_agent::AudioManager`] owns background music, sound effects, mute
//!   voting and per-client volume.
//!
//! Both take `&mut self` for every mutation and are meant to be driven from a
//! single control thread.

#![warn(missing_docs)]

pub mod audio_agent;
pub mod render_agent;
