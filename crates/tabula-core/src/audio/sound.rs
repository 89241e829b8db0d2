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

//! Defines the decoded audio payload.

/// A sound decoded and ready for playback.
///
/// Audio data is held in a normalized, interleaved `f32` format.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundData {
    /// The raw, interleaved audio samples.
    /// For stereo, samples are ordered `[L, R, L, R, ...]`.
    /// Values are expected to be in the range `[-1.0, 1.0]`.
    pub samples: Vec<f32>,
    /// The number of channels in the audio data (e.g., 1 for mono, 2 for stereo).
    pub channels: u16,
    /// The number of samples per second (e.g., 44100 Hz).
    pub sample_rate: u32,
}

impl SoundData {
    /// The number of frames (samples per channel) in the sound.
    pub fn frame_count(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// The duration of the sound in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frame_count() as f32 / self.sample_rate as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_divides_by_channels() {
        let sound = SoundData {
            samples: vec![0.0; 8],
            channels: 2,
            sample_rate: 4,
        };
        assert_eq!(sound.frame_count(), 4);
        assert_eq!(sound.duration_secs(), 1.0);
    }

    #[test]
    fn zero_channels_is_empty() {
        let sound = SoundData {
            samples: vec![0.0; 8],
            channels: 0,
            sample_rate: 44100,
        };
        assert_eq!(sound.frame_count(), 0);
    }
}
