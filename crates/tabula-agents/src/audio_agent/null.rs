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

use anyhow::Result;
use tabula_core::audio::{PlaybackBackend, PlaybackRequest, VoiceId};

/// A playback backend that accepts every request and plays nothing.
///
/// Used when no audio device is available.
#[derive(Debug, Default)]
pub struct NullPlayback {
    next_voice: u64,
}

impl NullPlayback {
    /// Creates a new `NullPlayback`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaybackBackend for NullPlayback {
    fn play(&mut self, request: &PlaybackRequest) -> Result<VoiceId> {
        log::trace!("NullPlayback: {}", request.path.display());
        self.next_voice += 1;
        Ok(VoiceId(self.next_voice))
    }

    fn stop(&mut self, _voice: VoiceId) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _voice: VoiceId, _volume: f32) -> Result<()> {
        Ok(())
    }
}
