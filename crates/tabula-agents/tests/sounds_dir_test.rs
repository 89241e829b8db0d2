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

use std::fs;
use tabula_agents::audio_agent::{locate_sounds_dir, MAX_SEARCH_DEPTH, SOUNDS_DIR_NAME};

#[test]
fn test_finds_sounds_in_an_ancestor() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join(SOUNDS_DIR_NAME)).unwrap();
    let deep = root.path().join("target").join("debug").join("deps");
    fs::create_dir_all(&deep).unwrap();

    assert_eq!(locate_sounds_dir(&deep), root.path().join(SOUNDS_DIR_NAME));
}

#[test]
fn test_start_directory_itself_is_checked() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join(SOUNDS_DIR_NAME)).unwrap();
    assert_eq!(locate_sounds_dir(root.path()), root.path().join(SOUNDS_DIR_NAME));
}

#[test]
fn test_search_depth_is_bounded() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join(SOUNDS_DIR_NAME)).unwrap();
    let mut deep = root.path().to_path_buf();
    for i in 0..=MAX_SEARCH_DEPTH {
        deep.push(format!("level{i}"));
    }
    fs::create_dir_all(&deep).unwrap();

    // The sounds directory sits one level beyond the search window.
    let found = locate_sounds_dir(&deep);
    assert_ne!(found, root.path().join(SOUNDS_DIR_NAME));
}

#[test]
fn test_a_file_named_sounds_is_ignored() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("app");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join(SOUNDS_DIR_NAME), b"not a directory").unwrap();
    let found = locate_sounds_dir(&dir);
    assert_ne!(found, dir.join(SOUNDS_DIR_NAME));
}
