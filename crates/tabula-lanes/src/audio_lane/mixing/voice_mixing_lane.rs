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

//! The voice mixer running on the audio device thread.

use super::AudioMixingLane;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use tabula_core::audio::{SoundData, StreamInfo, VoiceId};

/// A control message sent from the game thread to the mixer.
#[derive(Debug, Clone)]
pub enum MixerCommand {
    /// Starts a new voice.
    Play {
        /// Handle chosen by the sender.
        voice: VoiceId,
        /// The decoded sound, shared with the sender's cache.
        sound: Arc<SoundData>,
        /// Wrap around at the end instead of finishing.
        looping: bool,
        /// Initial volume.
        volume: f32,
    },
    /// Stops a voice. Unknown voices are ignored.
    Stop(VoiceId),
    /// Changes the volume of a voice. Unknown voices are ignored.
    SetVolume(VoiceId, f32),
}

struct Voice {
    id: VoiceId,
    sound: Arc<SoundData>,
    /// Playback position: the whole source frame plus the phase in `[0, 1)`
    /// between it and the next one. Kept apart so long tracks never run out
    /// of float precision.
    frame: usize,
    phase: f32,
    looping: bool,
    volume: f32,
}

impl Voice {
    fn new(id: VoiceId, sound: Arc<SoundData>, looping: bool, volume: f32) -> Self {
        Self {
            id,
            sound,
            frame: 0,
            phase: 0.0,
            looping,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Moves the position forward by `step` source frames.
    fn advance(&mut self, step: f32) {
        self.phase += step;
        let whole = self.phase.floor();
        self.frame += whole as usize;
        self.phase -= whole;
    }

    /// Linearly interpolated sample of `channel` at the current position.
    fn sample(&self, channel: usize, frame_count: usize) -> f32 {
        let channels = self.sound.channels as usize;
        let frame = self.frame;
        let next = if self.looping {
            (frame + 1) % frame_count
        } else {
            (frame + 1).min(frame_count - 1)
        };
        let s1 = self.sound.samples.get(frame * channels + channel).copied();
        let s2 = self.sound.samples.get(next * channels + channel).copied();
        match (s1, s2) {
            (Some(s1), Some(s2)) => s1 + (s2 - s1) * self.phase,
            (Some(s1), None) => s1,
            _ => 0.0,
        }
    }
}

/// A lane that mixes independent voices, each playing one decoded sound.
///
/// The lane owns its voices and receives every change through a channel, so
/// the audio thread never takes a lock. Non-looping voices dispose of
/// themselves when they reach the end of their sound.
pub struct VoiceMixingLane {
    commands: Receiver<MixerCommand>,
    voices: Vec<Voice>,
}

impl VoiceMixingLane {
    /// Creates a mixer and the sender used to control it.
    pub fn new() -> (Sender<MixerCommand>, Self) {
        let (sender, commands) = crossbeam_channel::unbounded();
        (
            sender,
            Self {
                commands,
                voices: Vec::new(),
            },
        )
    }

    /// Number of voices currently playing.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Applies every pending command.
    pub fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                MixerCommand::Play {
                    voice,
                    sound,
                    looping,
                    volume,
                } => {
                    if sound.frame_count() == 0 {
                        log::debug!("Ignoring empty sound for voice {:?}", voice);
                        continue;
                    }
                    self.voices.push(Voice::new(voice, sound, looping, volume));
                }
                MixerCommand::Stop(id) => self.voices.retain(|v| v.id != id),
                MixerCommand::SetVolume(id, volume) => {
                    if let Some(v) = self.voices.iter_mut().find(|v| v.id == id) {
                        v.volume = volume.clamp(0.0, 1.0);
                    }
                }
            }
        }
    }
}

impl AudioMixingLane for VoiceMixingLane {
    fn mix(&mut self, output_buffer: &mut [f32], stream_info: &StreamInfo) {
        self.drain_commands();
        output_buffer.fill(0.0);

        let out_channels = stream_info.channels.max(1) as usize;
        let frames_to_write = output_buffer.len() / out_channels;

        for voice in self.voices.iter_mut() {
            let frame_count = voice.sound.frame_count();
            let src_channels = voice.sound.channels as usize;
            let resample_ratio =
                voice.sound.sample_rate as f32 / stream_info.sample_rate.max(1) as f32;

            for i in 0..frames_to_write {
                if voice.frame >= frame_count {
                    if voice.looping {
                        voice.frame %= frame_count;
                    } else {
                        break;
                    }
                }

                let out_idx = i * out_channels;
                if out_channels == 1 && src_channels > 1 {
                    let sum: f32 = (0..src_channels)
                        .map(|c| voice.sample(c, frame_count))
                        .sum();
                    output_buffer[out_idx] += sum / src_channels as f32 * voice.volume;
                } else {
                    for c in 0..out_channels {
                        // Mono sources are duplicated across every output channel.
                        let sample = voice.sample(c % src_channels, frame_count);
                        output_buffer[out_idx + c] += sample * voice.volume;
                    }
                }

                voice.advance(resample_ratio);
            }
        }

        self.voices
            .retain(|v| v.looping || v.frame < v.sound.frame_count());

        // Limiter
        for sample in output_buffer.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }
    }
}

impl tabula_core::lane::Lane for VoiceMixingLane {
    fn strategy_name(&self) -> &'static str {
        "VoiceMixing"
    }

    fn lane_kind(&self) -> tabula_core::lane::LaneKind {
        tabula_core::lane::LaneKind::Audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to create a simple SoundData for tests.
    fn create_test_sound(len: usize, channels: u16, sample_rate: u32) -> Arc<SoundData> {
        let samples = (0..len * channels as usize)
            .map(|i| ((i / channels as usize) as f32 + 1.0).sin() * 0.5)
            .collect();
        Arc::new(SoundData {
            samples,
            channels,
            sample_rate,
        })
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn play(sender: &Sender<MixerCommand>, id: u64, sound: Arc<SoundData>, looping: bool) {
        sender
            .send(MixerCommand::Play {
                voice: VoiceId(id),
                sound,
                looping,
                volume: 1.0,
            })
            .unwrap();
    }

    #[test]
    fn test_sound_finishes_and_disposes() {
        let (sender, mut lane) = VoiceMixingLane::new();
        let stream_info = StreamInfo {
            channels: 2,
            sample_rate: 10,
        };
        play(&sender, 1, create_test_sound(5, 1, 10), false);

        let mut buffer = vec![0.0; 20];
        lane.mix(&mut buffer, &stream_info);

        assert_eq!(lane.active_voices(), 0, "the voice should dispose of itself");
        let first = buffer[0..10].iter().map(|s| s * s).sum::<f32>();
        let second = buffer[10..20].iter().map(|s| s * s).sum::<f32>();
        assert!(first > 0.0);
        assert!(approx_eq(second, 0.0), "the second half should be silent");
    }

    #[test]
    fn test_mono_is_duplicated_to_stereo() {
        let (sender, mut lane) = VoiceMixingLane::new();
        let stream_info = StreamInfo {
            channels: 2,
            sample_rate: 44100,
        };
        play(&sender, 1, create_test_sound(64, 1, 44100), true);

        let mut buffer = vec![0.0; 32];
        lane.mix(&mut buffer, &stream_info);
        for frame in buffer.chunks_exact(2) {
            assert!(approx_eq(frame[0], frame[1]));
        }
    }

    #[test]
    fn test_looping_voice_survives() {
        let (sender, mut lane) = VoiceMixingLane::new();
        let stream_info = StreamInfo {
            channels: 1,
            sample_rate: 10,
        };
        play(&sender, 7, create_test_sound(5, 1, 10), true);

        let mut buffer = vec![0.0; 12];
        lane.mix(&mut buffer, &stream_info);
        assert_eq!(lane.active_voices(), 1);
        assert!(!approx_eq(buffer[11], 0.0));
    }

    #[test]
    fn test_stop_and_volume_commands() {
        let (sender, mut lane) = VoiceMixingLane::new();
        let stream_info = StreamInfo {
            channels: 1,
            sample_rate: 10,
        };
        play(&sender, 1, create_test_sound(100, 1, 10), true);
        sender.send(MixerCommand::SetVolume(VoiceId(1), 0.0)).unwrap();

        let mut buffer = vec![0.0; 10];
        lane.mix(&mut buffer, &stream_info);
        assert!(buffer.iter().all(|s| approx_eq(*s, 0.0)));

        sender.send(MixerCommand::Stop(VoiceId(1))).unwrap();
        lane.mix(&mut buffer, &stream_info);
        assert_eq!(lane.active_voices(), 0);
    }

    #[test]
    fn test_output_is_limited() {
        let (sender, mut lane) = VoiceMixingLane::new();
        let stream_info = StreamInfo {
            channels: 1,
            sample_rate: 10,
        };
        let loud = Arc::new(SoundData {
            samples: vec![0.9; 10],
            channels: 1,
            sample_rate: 10,
        });
        play(&sender, 1, loud.clone(), true);
        play(&sender, 2, loud, true);

        let mut buffer = vec![0.0; 10];
        lane.mix(&mut buffer, &stream_info);
        assert!(buffer.iter().all(|s| approx_eq(*s, 1.0)));
    }

    #[test]
    fn test_empty_sound_is_ignored() {
        let (sender, mut lane) = VoiceMixingLane::new();
        play(&sender, 1, create_test_sound(0, 1, 10), false);
        lane.drain_commands();
        assert_eq!(lane.active_voices(), 0);
    }

    #[test]
    fn test_long_looping_track_keeps_advancing() {
        // Past 2^24 frames an `f32` position can no longer step by one frame.
        const START: usize = 1 << 24;
        let frames = START + 32;
        let long = Arc::new(SoundData {
            samples: (0..frames).map(|i| (i % 5) as f32 * 0.1).collect(),
            channels: 1,
            sample_rate: 44100,
        });
        let (_sender, mut lane) = VoiceMixingLane::new();
        let mut voice = Voice::new(VoiceId(1), long.clone(), true, 1.0);
        voice.frame = START;
        lane.voices.push(voice);

        let stream_info = StreamInfo {
            channels: 1,
            sample_rate: 44100,
        };
        let mut buffer = vec![0.0; 64];
        lane.mix(&mut buffer, &stream_info);

        // 32 frames reach the end, the next 32 wrap to the start.
        assert_eq!(lane.voices[0].frame, 32);
        assert!(approx_eq(buffer[0], long.samples[START]));
        assert!(approx_eq(buffer[40], long.samples[8]));
        let distinct = buffer
            .iter()
            .map(|s| (s * 10.0).round() as i32)
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_fractional_steps_stay_exact_late_in_a_track() {
        let mut voice = Voice::new(VoiceId(1), create_test_sound(4, 1, 10), true, 1.0);
        voice.frame = (1 << 24) + 3;
        for _ in 0..3 {
            voice.advance(0.5);
        }
        assert_eq!(voice.frame, (1 << 24) + 4);
        assert!(approx_eq(voice.phase, 0.5));
    }
}
