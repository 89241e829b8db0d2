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

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tabula_agents::audio_agent::{AudioManager, AudioSettings, MusicTable};
use tabula_core::audio::{PlaybackBackend, PlaybackRequest, VoiceId};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Play { file: String, looping: bool, volume: f32 },
    Stop(VoiceId),
    SetVolume(VoiceId, f32),
}

/// Records every call; optionally fails `play` for one file name.
#[derive(Default)]
struct RecordingBackend {
    calls: Arc<Mutex<Vec<Call>>>,
    failing_file: Option<String>,
    next: u64,
}

impl PlaybackBackend for RecordingBackend {
    fn play(&mut self, request: &PlaybackRequest) -> Result<VoiceId> {
        let file = request
            .path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing_file.as_deref() == Some(file.as_str()) {
            return Err(anyhow!("cannot open {file}"));
        }
        self.calls.lock().unwrap().push(Call::Play {
            file,
            looping: request.looping,
            volume: request.volume,
        });
        self.next += 1;
        Ok(VoiceId(self.next))
    }

    fn stop(&mut self, voice: VoiceId) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Stop(voice));
        Ok(())
    }

    fn set_volume(&mut self, voice: VoiceId, volume: f32) -> Result<()> {
        self.calls.lock().unwrap().push(Call::SetVolume(voice, volume));
        Ok(())
    }
}

fn manager() -> (AudioManager, Arc<Mutex<Vec<Call>>>) {
    let backend = RecordingBackend::default();
    let calls = backend.calls.clone();
    let manager = AudioManager::new(
        Box::new(backend),
        AudioSettings::default(),
        PathBuf::from("sounds"),
    );
    (manager, calls)
}

fn starts(calls: &Arc<Mutex<Vec<Call>>>) -> usize {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| matches!(c, Call::Play { looping: true, .. }))
        .count()
}

fn stops(calls: &Arc<Mutex<Vec<Call>>>) -> usize {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| matches!(c, Call::Stop(_)))
        .count()
}

#[test]
fn test_same_state_does_not_restart_music() {
    let (mut audio, calls) = manager();
    audio.sync_bg_music("blackjack");
    audio.sync_bg_music("blackjack");
    audio.sync_bg_music("BlackJack");

    assert_eq!(starts(&calls), 1);
    assert_eq!(stops(&calls), 0);
    assert_eq!(audio.current_track(), Some("blackjack_table.ogg"));
}

#[test]
fn test_state_change_stops_then_starts() {
    let (mut audio, calls) = manager();
    audio.sync_bg_music("blackjack");
    audio.sync_bg_music("menu");

    assert_eq!(starts(&calls), 2);
    assert_eq!(stops(&calls), 1);
    let log = calls.lock().unwrap();
    assert_eq!(log[1], Call::Stop(VoiceId(1)));
    assert!(matches!(&log[2], Call::Play { file, .. } if file == "menu_theme.ogg"));
}

#[test]
fn test_unknown_state_stops_music() {
    let (mut audio, calls) = manager();
    audio.sync_bg_music("poker");
    audio.sync_bg_music("chess");
    assert_eq!(audio.current_track(), None);
    assert_eq!(stops(&calls), 1);
}

#[test]
fn test_explicit_track_control() {
    let (mut audio, calls) = manager();
    audio.set_bg_music(Some("custom.ogg"));
    assert_eq!(audio.current_track(), Some("custom.ogg"));
    audio.set_bg_music(None);
    assert_eq!(audio.current_track(), None);
    assert_eq!(starts(&calls), 1);
    assert_eq!(stops(&calls), 1);
}

#[test]
fn test_majority_mute_stops_and_resumes_music() {
    let (mut audio, calls) = manager();
    audio.set_mute_vote("bob", false);
    audio.set_mute_vote("carol", false);
    audio.set_mute_vote("alice", true);
    audio.sync_bg_music("lobby");
    assert!(!audio.is_muted());
    assert_eq!(audio.current_track(), Some("lobby_lounge.ogg"));
    assert_eq!(audio.mute_count(), 1);
    assert_eq!(audio.mute_required(), 2);
    assert_eq!(audio.voter_count(), 3);

    audio.set_mute_vote("bob", true);
    assert!(audio.is_muted());
    assert_eq!(audio.current_track(), None);
    assert_eq!(stops(&calls), 1);

    // While muted, state changes are remembered but not played.
    audio.sync_bg_music("poker");
    assert_eq!(audio.current_track(), None);

    // Removing a mute voter tips the majority back.
    audio.remove_client("bob");
    assert!(!audio.is_muted());
    assert_eq!(audio.current_track(), Some("poker_night.ogg"));
    assert_eq!(starts(&calls), 2);
}

#[test]
fn test_sfx_skipped_while_muted() {
    let (mut audio, calls) = manager();
    audio.set_mute_vote("alice", true);
    audio.play_sfx("card_flip.wav");
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_effective_volume_is_the_quietest_client() {
    let (mut audio, _) = manager();
    assert_eq!(audio.effective_volume(), 0.35);

    audio.set_client_volume("a", 0.8);
    audio.set_client_volume("b", 0.3);
    audio.set_client_volume("c", 0.6);
    assert_eq!(audio.effective_volume(), 0.3);

    audio.set_client_volume("b", 1.5);
    assert_eq!(audio.effective_volume(), 0.6);
    audio.set_client_volume("d", -0.2);
    assert_eq!(audio.effective_volume(), 0.0);
}

#[test]
fn test_volume_applies_to_playing_music() {
    let (mut audio, calls) = manager();
    audio.sync_bg_music("slots");
    audio.set_client_volume("a", 0.2);
    assert_eq!(
        calls.lock().unwrap().last(),
        Some(&Call::SetVolume(VoiceId(1), 0.2))
    );
    audio.remove_client("a");
    assert_eq!(
        calls.lock().unwrap().last(),
        Some(&Call::SetVolume(VoiceId(1), 0.35))
    );
}

#[test]
fn test_sfx_volume_is_capped() {
    let (mut audio, calls) = manager();
    audio.set_client_volume("a", 0.9);
    audio.play_sfx("win.wav");
    audio.set_client_volume("a", 0.1);
    audio.play_sfx("win.wav");

    let log = calls.lock().unwrap();
    let volumes: Vec<f32> = log
        .iter()
        .filter_map(|c| match c {
            Call::Play {
                looping: false,
                volume,
                ..
            } => Some(*volume),
            _ => None,
        })
        .collect();
    assert_eq!(volumes, vec![0.5, 0.1]);
}

#[test]
fn test_playback_failures_are_swallowed() {
    let backend = RecordingBackend {
        failing_file: Some("menu_theme.ogg".to_owned()),
        ..Default::default()
    };
    let calls = backend.calls.clone();
    let mut audio = AudioManager::new(
        Box::new(backend),
        AudioSettings::default(),
        PathBuf::from("sounds"),
    );

    audio.sync_bg_music("menu");
    audio.sync_bg_music("menu");
    audio.set_client_volume("a", 0.5);
    // The failed track stays selected so it is not retried every frame.
    assert_eq!(audio.current_track(), Some("menu_theme.ogg"));
    assert!(calls.lock().unwrap().is_empty());

    audio.sync_bg_music("uno");
    assert_eq!(starts(&calls), 1);
}

#[test]
fn test_custom_music_table() {
    let backend = RecordingBackend::default();
    let settings = AudioSettings {
        music: MusicTable::with_overrides([("chess", "chess.ogg")]),
        ..AudioSettings::default()
    };
    let mut audio = AudioManager::new(Box::new(backend), settings, PathBuf::from("sounds"));
    audio.sync_bg_music("Chess");
    assert_eq!(audio.current_track(), Some("chess.ogg"));
}
