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

//! Groups different audio mixing lanes.

mod voice_mixing_lane;

pub use voice_mixing_lane::*;

use tabula_core::audio::StreamInfo;

/// A trait defining the behavior of an audio mixing lane.
pub trait AudioMixingLane: Send {
    /// Mixes every active voice into the provided output buffer.
    ///
    /// # Arguments
    /// * `output_buffer`: The interleaved buffer to overwrite with mixed samples.
    /// * `stream_info`: Information about the audio stream (e.g., sample rate, channels).
    fn mix(&mut self, output_buffer: &mut [f32], stream_info: &StreamInfo);
}
