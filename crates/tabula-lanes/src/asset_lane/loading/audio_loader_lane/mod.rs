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

//! Audio decoding lanes and the file-level entry point used by the mixer backend.

mod symphonia_loader_lane;
mod wav_loader_lane;

pub use symphonia_loader_lane::*;
pub use wav_loader_lane::*;

use super::{AssetError, AssetLoaderLane};
use std::path::Path;
use tabula_core::audio::SoundData;
use tabula_core::lane::Lane;

/// Reads and decodes a sound file.
///
/// `.wav` files go through [`WavLoaderLane`] first and fall back to
/// [`SymphoniaLoaderLane`] for encodings `hound` does not support. Every other
/// extension is probed by symphonia directly.
pub fn load_sound_file(path: &Path) -> Result<SoundData, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    if extension.as_deref() == Some("wav") {
        let wav = WavLoaderLane::new();
        match wav.load(&bytes) {
            Ok(sound) => return Ok(sound),
            Err(e) => {
                let strategy = wav.strategy_name();
                log::debug!("{strategy} could not decode {}: {e}", path.display());
            }
        }
    }
    SymphoniaLoaderLane::new().load_with_hint(&bytes, extension.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_WAV_BYTES: &[u8] = &[
        82, 73, 70, 70, 52, 0, 0, 0, 87, 65, 86, 69, 102, 109, 116, 32, 16, 0, 0, 0, 1, 0, 1, 0,
        68, 172, 0, 0, 136, 88, 1, 0, 2, 0, 16, 0, 100, 97, 116, 97, 8, 0, 0, 0, 0, 12, 204, 251,
        51, 13, 205, 243,
    ];

    #[test]
    fn test_load_wav_file() {
        let mut file = tempfile::Builder::new().suffix(".WAV").tempfile().unwrap();
        file.write_all(TEST_WAV_BYTES).unwrap();
        let sound = load_sound_file(file.path()).unwrap();
        assert_eq!(sound.channels, 1);
        assert_eq!(sound.sample_rate, 44100);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_sound_file(&dir.path().join("nope.ogg"));
        assert!(matches!(result, Err(AssetError::Io { .. })));
    }
}
