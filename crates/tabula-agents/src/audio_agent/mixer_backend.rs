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

//! The playback service backed by the voice mixing lane.

use super::error::AudioError;
use ahash::AHashMap;
use anyhow::Result;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tabula_core::audio::{AudioDevice, PlaybackBackend, PlaybackRequest, SoundData, VoiceId};
use tabula_core::lane::Lane;
use tabula_lanes::asset_lane::load_sound_file;
use tabula_lanes::audio_lane::{AudioMixingLane, MixerCommand, VoiceMixingLane};

/// A [`PlaybackBackend`] feeding a [`VoiceMixingLane`].
///
/// Sound files are decoded once and shared between voices. A file that fails
/// to load is remembered and never decoded again.
pub struct MixerPlayback {
    commands: Sender<MixerCommand>,
    sounds: AHashMap<PathBuf, Option<Arc<SoundData>>>,
    next_voice: u64,
}

impl MixerPlayback {
    /// Creates a backend sending commands to an already running mixer.
    pub fn new(commands: Sender<MixerCommand>) -> Self {
        Self {
            commands,
            sounds: AHashMap::new(),
            next_voice: 0,
        }
    }

    /// Starts `device` with a fresh mixing lane and returns the backend driving it.
    ///
    /// This consumes the device, as the stream runs for the lifetime of the application.
    pub fn start(device: Box<dyn AudioDevice>) -> Result<Self> {
        let (commands, mut lane) = VoiceMixingLane::new();
        let strategy = lane.strategy_name();
        let on_mix_needed = Box::new(
            move |output_buffer: &mut [f32], stream_info: &tabula_core::audio::StreamInfo| {
                lane.mix(output_buffer, stream_info);
            },
        );
        let info = device.start(on_mix_needed)?;
        log::info!(
            "Audio mixer '{strategy}' running: {} channel(s) at {} Hz",
            info.channels,
            info.sample_rate
        );
        Ok(Self::new(commands))
    }

    /// Number of decoded (or failed) sound files held in the cache.
    pub fn cached_sounds(&self) -> usize {
        self.sounds.len()
    }

    fn sound(&mut self, path: &Path) -> Result<Arc<SoundData>, AudioError> {
        if let Some(cached) = self.sounds.get(path) {
            return cached
                .clone()
                .ok_or_else(|| AudioError::PreviouslyFailed(path.to_path_buf()));
        }
        match load_sound_file(path) {
            Ok(sound) => {
                let sound = Arc::new(sound);
                self.sounds.insert(path.to_path_buf(), Some(sound.clone()));
                Ok(sound)
            }
            Err(source) => {
                self.sounds.insert(path.to_path_buf(), None);
                Err(AudioError::Load {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    fn send(&self, command: MixerCommand) -> Result<(), AudioError> {
        self.commands
            .send(command)
            .map_err(|_| AudioError::MixerDisconnected)
    }
}

impl PlaybackBackend for MixerPlayback {
    fn play(&mut self, request: &PlaybackRequest) -> Result<VoiceId> {
        let sound = self.sound(&request.path)?;
        self.next_voice += 1;
        let voice = VoiceId(self.next_voice);
        self.send(MixerCommand::Play {
            voice,
            sound,
            looping: request.looping,
            volume: request.volume,
        })?;
        Ok(voice)
    }

    fn stop(&mut self, voice: VoiceId) -> Result<()> {
        Ok(self.send(MixerCommand::Stop(voice))?)
    }

    fn set_volume(&mut self, voice: VoiceId, volume: f32) -> Result<()> {
        Ok(self.send(MixerCommand::SetVolume(voice, volume))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tabula_core::audio::{MixCallback, StreamInfo};

    const TEST_WAV_BYTES: &[u8] = &[
        82, 73, 70, 70, 52, 0, 0, 0, 87, 65, 86, 69, 102, 109, 116, 32, 16, 0, 0, 0, 1, 0, 1, 0,
        68, 172, 0, 0, 136, 88, 1, 0, 2, 0, 16, 0, 100, 97, 116, 97, 8, 0, 0, 0, 0, 12, 204, 251,
        51, 13, 205, 243,
    ];

    /// A device that hands its callback back to the test instead of a sound card.
    struct ManualDevice(Arc<Mutex<Option<MixCallback>>>);

    impl AudioDevice for ManualDevice {
        fn start(self: Box<Self>, on_mix_needed: MixCallback) -> Result<StreamInfo> {
            *self.0.lock().unwrap() = Some(on_mix_needed);
            Ok(StreamInfo {
                channels: 1,
                sample_rate: 44100,
            })
        }
    }

    #[test]
    fn test_play_reaches_mixer_and_decodes_once() {
        let slot = Arc::new(Mutex::new(None));
        let mut playback = MixerPlayback::start(Box::new(ManualDevice(slot.clone()))).unwrap();

        let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        file.write_all(TEST_WAV_BYTES).unwrap();
        let request = PlaybackRequest {
            path: file.path().to_path_buf(),
            looping: false,
            volume: 1.0,
        };

        let first = playback.play(&request).unwrap();
        let second = playback.play(&request).unwrap();
        assert_ne!(first, second);
        assert_eq!(playback.cached_sounds(), 1);

        let mut callback = slot.lock().unwrap().take().unwrap();
        let mut buffer = vec![0.0f32; 8];
        callback(
            &mut buffer,
            &StreamInfo {
                channels: 1,
                sample_rate: 44100,
            },
        );
        assert!(buffer.iter().any(|s| *s != 0.0));
    }

    #[test]
    fn test_failed_load_is_not_retried() {
        let (sender, _lane) = VoiceMixingLane::new();
        let mut playback = MixerPlayback::new(sender);
        let dir = tempfile::tempdir().unwrap();
        let request = PlaybackRequest {
            path: dir.path().join("missing.ogg"),
            looping: false,
            volume: 1.0,
        };
        let first = playback.play(&request).unwrap_err();
        assert!(matches!(
            first.downcast_ref::<AudioError>(),
            Some(AudioError::Load { .. })
        ));
        let second = playback.play(&request).unwrap_err();
        assert!(matches!(
            second.downcast_ref::<AudioError>(),
            Some(AudioError::PreviouslyFailed(_))
        ));
    }

    #[test]
    fn test_disconnected_mixer() {
        let (sender, lane) = VoiceMixingLane::new();
        drop(lane);
        let mut playback = MixerPlayback::new(sender);
        assert!(playback.stop(VoiceId(1)).is_err());
    }
}
