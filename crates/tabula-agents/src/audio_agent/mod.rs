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

//! Acts as the **[A]gent** for the audio subsystem.
//!
//! The [`AudioManager`] owns at most one looping background track and any
//! number of overlapping one-shot effects. It maps game states to music,
//! aggregates per-client mute votes and volume preferences, and drives a
//! [`PlaybackBackend`]. Playback failures are logged and swallowed.
//!
//! [`MixerPlayback`] is the concrete backend: it decodes sound files through
//! the asset lanes and feeds the [`VoiceMixingLane`] running on the audio
//! device thread.
//!
//! [`PlaybackBackend`]: tabula_core::audio::PlaybackBackend
//! [`VoiceMixingLane`]: tabula_lanes::audio_lane::VoiceMixingLane

mod error;
mod manager;
mod mixer_backend;
mod music;
mod null;
mod sounds_dir;
mod voting;

pub use error::*;
pub use manager::*;
pub use mixer_backend::*;
pub use music::*;
pub use null::*;
pub use sounds_dir::*;
pub use voting::*;
