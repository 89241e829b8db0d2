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

//! Defines the AudioManager, the orchestrator of music and sound effects.

use super::music::MusicTable;
use super::voting::{ClientVolumes, MuteVotes};
use std::path::{Path, PathBuf};
use tabula_core::audio::{PlaybackBackend, PlaybackRequest, VoiceId};

/// Volume used when no client registered a preference.
pub const DEFAULT_BASE_VOLUME: f32 = 0.35;
/// Upper bound on effect volume so effects never overpower the music.
pub const DEFAULT_SFX_VOLUME_CEILING: f32 = 0.5;

/// Tunables of the [`AudioManager`].
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    /// Background volume when no client volume is registered.
    pub base_volume: f32,
    /// Maximum volume of sound effects.
    pub sfx_volume_ceiling: f32,
    /// Game-state to track mapping.
    pub music: MusicTable,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            base_volume: DEFAULT_BASE_VOLUME,
            sfx_volume_ceiling: DEFAULT_SFX_VOLUME_CEILING,
            music: MusicTable::default(),
        }
    }
}

/// The background track currently playing.
#[derive(Debug, Clone)]
struct BgMusic {
    track: String,
    // `None` when the track failed to start; it is not retried until the
    // desired track changes.
    voice: Option<VoiceId>,
}

/// The agent owning background music, sound effects, mute voting and volume.
///
/// # State machine
///
/// ```text
/// Stopped --set_bg_music(Some(t))--> Playing(t)
/// Playing(t) --set_bg_music(None)--> Stopped
/// Playing(t) --set_bg_music(Some(u)), u != t--> Playing(u)
/// ```
///
/// Requesting the track that is already playing is a no-op, so calling
/// [`sync_bg_music`](Self::sync_bg_music) every frame never restarts music.
/// While a majority of clients votes for mute the desired track is forced to
/// none; it resumes when the majority is lost.
pub struct AudioManager {
    backend: Box<dyn PlaybackBackend>,
    settings: AudioSettings,
    sounds_dir: PathBuf,
    // What the game asked for, before muting is applied.
    wanted: Option<String>,
    current: Option<BgMusic>,
    votes: MuteVotes,
    volumes: ClientVolumes,
}

impl AudioManager {
    /// Creates a stopped manager reading sound files from `sounds_dir`.
    pub fn new(
        backend: Box<dyn PlaybackBackend>,
        settings: AudioSettings,
        sounds_dir: PathBuf,
    ) -> Self {
        log::info!("AudioManager using sounds from {}", sounds_dir.display());
        Self {
            backend,
            settings,
            sounds_dir,
            wanted: None,
            current: None,
            votes: MuteVotes::default(),
            volumes: ClientVolumes::default(),
        }
    }

    /// The directory sound files are resolved against.
    pub fn sounds_dir(&self) -> &Path {
        &self.sounds_dir
    }

    /// The active settings.
    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    // --- Background music ---

    /// Requests a background track by file name, or silence with `None`.
    pub fn set_bg_music(&mut self, track: Option<&str>) {
        self.wanted = track.map(str::to_owned);
        self.apply_music();
    }

    /// Requests the background track mapped to a game state.
    ///
    /// Unknown states request silence.
    pub fn sync_bg_music(&mut self, state: &str) {
        let track = self.settings.music.track_for(state).map(str::to_owned);
        if track.is_none() {
            log::debug!("No background music for state '{state}'");
        }
        self.wanted = track;
        self.apply_music();
    }

    /// The background track currently selected, if any.
    pub fn current_track(&self) -> Option<&str> {
        self.current.as_ref().map(|bg| bg.track.as_str())
    }

    fn apply_music(&mut self) {
        let desired = if self.is_muted() {
            None
        } else {
            self.wanted.clone()
        };
        if desired.as_deref() == self.current_track() {
            return;
        }

        if let Some(previous) = self.current.take() {
            if let Some(voice) = previous.voice {
                if let Err(e) = self.backend.stop(voice) {
                    log::warn!("Failed to stop '{}': {e:#}", previous.track);
                }
            }
        }

        if let Some(track) = desired {
            let request = PlaybackRequest {
                path: self.sounds_dir.join(&track),
                looping: true,
                volume: self.effective_volume(),
            };
            let voice = match self.backend.play(&request) {
                Ok(voice) => {
                    log::info!("Background music: {track}");
                    Some(voice)
                }
                Err(e) => {
                    log::warn!("Failed to play background track '{track}': {e:#}");
                    None
                }
            };
            self.current = Some(BgMusic { track, voice });
        }
    }

    // --- Sound effects ---

    /// Plays a one-shot effect.
    ///
    /// A majority mute silences the whole table, so effects are skipped
    /// while muted, not only the background track.
    ///
    /// The effect volume is the effective volume capped at the configured ceiling.
    pub fn play_sfx(&mut self, file: &str) {
        if self.is_muted() {
            log::trace!("Muted; skipping sound effect '{file}'");
            return;
        }
        let request = PlaybackRequest {
            path: self.sounds_dir.join(file),
            looping: false,
            volume: self.sfx_volume(),
        };
        if let Err(e) = self.backend.play(&request) {
            log::warn!("Failed to play sound effect '{file}': {e:#}");
        }
    }

    /// The volume applied to sound effects.
    pub fn sfx_volume(&self) -> f32 {
        self.effective_volume().min(self.settings.sfx_volume_ceiling)
    }

    // --- Mute voting ---

    /// Records a client's mute vote and re-evaluates the majority.
    pub fn set_mute_vote(&mut self, client: &str, mute: bool) {
        self.votes.set_vote(client, mute);
        self.apply_music();
    }

    /// Removes a client's mute vote and volume preference.
    pub fn remove_client(&mut self, client: &str) {
        let had_vote = self.votes.remove(client);
        let had_volume = self.volumes.remove(client);
        if had_volume {
            self.apply_volume();
        }
        if had_vote {
            self.apply_music();
        }
    }

    /// Returns `true` while a strict majority votes for mute.
    pub fn is_muted(&self) -> bool {
        self.votes.is_muted()
    }

    /// Number of clients voting for mute.
    pub fn mute_count(&self) -> usize {
        self.votes.mute_count()
    }

    /// Number of mute votes needed to mute.
    pub fn mute_required(&self) -> usize {
        self.votes.mute_required()
    }

    /// Number of clients that voted.
    pub fn voter_count(&self) -> usize {
        self.votes.voter_count()
    }

    // --- Volume ---

    /// Records a client's listening volume (clamped to `[0, 1]`) and applies
    /// the new effective volume to the background track.
    pub fn set_client_volume(&mut self, client: &str, volume: f32) {
        self.volumes.set(client, volume);
        self.apply_volume();
    }

    /// The quietest client volume, or the base volume when none is registered.
    pub fn effective_volume(&self) -> f32 {
        self.volumes.effective(self.settings.base_volume)
    }

    fn apply_volume(&mut self) {
        let volume = self.effective_volume();
        if let Some(BgMusic {
            voice: Some(voice), ..
        }) = self.current
        {
            if let Err(e) = self.backend.set_volume(voice, volume) {
                log::warn!("Failed to change the music volume: {e:#}");
            }
        }
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        if let Some(BgMusic {
            voice: Some(voice), ..
        }) = self.current.take()
        {
            let _ = self.backend.stop(voice);
        }
    }
}
