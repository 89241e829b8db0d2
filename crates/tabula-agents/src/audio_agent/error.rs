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

use std::path::PathBuf;
use tabula_lanes::asset_lane::AssetError;
use thiserror::Error;

/// Errors raised by the mixer-backed playback service.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A sound file could not be read or decoded.
    #[error("cannot load sound '{path}'")]
    Load {
        /// The sound file.
        path: PathBuf,
        /// Why loading failed.
        #[source]
        source: AssetError,
    },
    /// The sound failed to load earlier; loads are not retried.
    #[error("sound '{0}' failed to load earlier")]
    PreviouslyFailed(PathBuf),
    /// The mixer thread is gone (the audio stream was dropped).
    #[error("the audio mixer is no longer running")]
    MixerDisconnected,
}
