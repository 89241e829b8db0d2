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

//! Defines the playback service the audio manager drives.

use anyhow::Result;
use std::path::PathBuf;

/// An opaque handle to one playing sound instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceId(pub u64);

/// Describes a sound to start.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    /// Absolute or working-directory-relative path of the sound file.
    pub path: PathBuf,
    /// Loop back to the start when the sound ends.
    pub looping: bool,
    /// Playback volume in `[0.0, 1.0]`.
    pub volume: f32,
}

/// The audio-playback library as seen by the audio manager.
///
/// Every started voice is independent: non-looping voices dispose of
/// themselves when they finish, looping voices play until stopped.
/// Errors are returned to the manager, which logs and swallows them.
pub trait PlaybackBackend: Send {
    /// Starts a new voice.
    fn play(&mut self, request: &PlaybackRequest) -> Result<VoiceId>;

    /// Stops a voice. Stopping an already finished voice is not an error.
    fn stop(&mut self, voice: VoiceId) -> Result<()>;

    /// Changes the volume of a playing voice.
    fn set_volume(&mut self, voice: VoiceId, volume: f32) -> Result<()>;
}
