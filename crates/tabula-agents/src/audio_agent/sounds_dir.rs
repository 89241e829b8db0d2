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

//! Discovery of the sounds directory.

use std::path::{Path, PathBuf};

/// Name of the directory holding music and effects.
pub const SOUNDS_DIR_NAME: &str = "sounds";

/// How many ancestors of the start directory are searched.
pub const MAX_SEARCH_DEPTH: usize = 8;

/// Walks up from `start` looking for a `sounds/` directory.
///
/// `start` itself and at most [`MAX_SEARCH_DEPTH`] of its ancestors are
/// checked. Falls back to `./sounds` when nothing is found.
pub fn locate_sounds_dir(start: &Path) -> PathBuf {
    for dir in start.ancestors().take(MAX_SEARCH_DEPTH + 1) {
        let candidate = dir.join(SOUNDS_DIR_NAME);
        if candidate.is_dir() {
            log::debug!("Found sounds directory at {}", candidate.display());
            return candidate;
        }
    }
    log::debug!(
        "No sounds directory above {}; using ./{SOUNDS_DIR_NAME}",
        start.display()
    );
    PathBuf::from(SOUNDS_DIR_NAME)
}

/// Locates the sounds directory starting from the running executable.
pub fn default_sounds_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => locate_sounds_dir(dir),
            None => PathBuf::from(SOUNDS_DIR_NAME),
        },
        Err(e) => {
            log::warn!("Cannot resolve the executable path: {e}");
            PathBuf::from(SOUNDS_DIR_NAME)
        }
    }
}
