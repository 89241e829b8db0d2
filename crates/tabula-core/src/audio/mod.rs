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

//! Audio contracts: the hardware device, the playback backend used by the
//! audio manager, and the decoded sound payload.

pub mod device;
pub mod playback;
pub mod sound;

pub use self::device::{AudioDevice, MixCallback, StreamInfo};
pub use self::playback::{PlaybackBackend, PlaybackRequest, VoiceId};
pub use self::sound::SoundData;
