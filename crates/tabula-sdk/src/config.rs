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

//! Client configuration, read from a RON file.
//!
//! Every field has a default, so a configuration file only needs to list
//! what it changes:
//!
//! ```ron
//! (
//!     base_volume: 0.5,
//!     music: { "lobby": "calm.mp3" },
//! )
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tabula_agents::audio_agent::{
    AudioSettings, MusicTable, DEFAULT_BASE_VOLUME, DEFAULT_SFX_VOLUME_CEILING,
};

/// Configuration of a [`VisualClient`](crate::VisualClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Directory holding music and effects. Discovered from the executable when unset.
    pub sounds_dir: Option<PathBuf>,
    /// Background volume when no client registered a preference.
    pub base_volume: f32,
    /// Maximum volume of sound effects.
    pub sfx_volume_ceiling: f32,
    /// Emoji typefaces tried before the built-in OS candidates.
    pub emoji_font_paths: Vec<PathBuf>,
    /// The text font. Probed from well-known OS locations when unset.
    pub font_path: Option<PathBuf>,
    /// Game-state to track entries added to, or replacing, the built-in table.
    pub music: BTreeMap<String, String>,
    /// Size of the drawable surface in pixels.
    pub viewport: (u32, u32),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sounds_dir: None,
            base_volume: DEFAULT_BASE_VOLUME,
            sfx_volume_ceiling: DEFAULT_SFX_VOLUME_CEILING,
            emoji_font_paths: Vec::new(),
            font_path: None,
            music: BTreeMap::new(),
            viewport: (1280, 720),
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        let config: Self = ron::de::from_str(text).context("Invalid client configuration")?;
        Ok(config)
    }

    /// Reads the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config =
            Self::from_ron(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded client configuration from {}", path.display());
        Ok(config)
    }

    /// Reads the configuration file at `path`, falling back to defaults when
    /// it is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    log::warn!("{e:#}; using the default configuration");
                } else {
                    log::info!("No configuration at {}, using defaults", path.display());
                }
                Self::default()
            }
        }
    }

    /// Serializes the configuration as pretty-printed RON.
    pub fn to_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty).context("Failed to serialize client configuration")
    }

    /// The audio manager settings described by this configuration.
    ///
    /// Volumes are clamped to `[0, 1]`.
    pub fn audio_settings(&self) -> AudioSettings {
        AudioSettings {
            base_volume: clamp_volume("base_volume", self.base_volume),
            sfx_volume_ceiling: clamp_volume("sfx_volume_ceiling", self.sfx_volume_ceiling),
            music: MusicTable::with_overrides(&self.music),
        }
    }
}

fn clamp_volume(name: &str, value: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    // NaN clamps to silence.
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    log::warn!("{name} {value} is outside [0, 1], using {clamped}");
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_the_default() {
        assert_eq!(ClientConfig::from_ron("()").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = ClientConfig::from_ron(
            r#"(
                base_volume: 0.8,
                viewport: (640, 480),
                music: { "Lobby": "calm.mp3", "tavern": "lute.ogg" },
            )"#,
        )
        .unwrap();
        assert_eq!(config.base_volume, 0.8);
        assert_eq!(config.viewport, (640, 480));
        assert_eq!(config.sfx_volume_ceiling, DEFAULT_SFX_VOLUME_CEILING);
        assert!(config.sounds_dir.is_none());

        let settings = config.audio_settings();
        assert_eq!(settings.music.track_for("lobby"), Some("calm.mp3"));
        assert_eq!(settings.music.track_for("TAVERN"), Some("lute.ogg"));
        assert!(settings.music.track_for("menu").is_some());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(ClientConfig::from_ron("(base_volume: \"loud\")").is_err());
        assert!(ClientConfig::from_ron("(").is_err());
    }

    #[test]
    fn test_out_of_range_volumes_are_clamped() {
        let config = ClientConfig {
            base_volume: 3.0,
            sfx_volume_ceiling: f32::NAN,
            ..Default::default()
        };
        let settings = config.audio_settings();
        assert_eq!(settings.base_volume, 1.0);
        assert_eq!(settings.sfx_volume_ceiling, 0.0);
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let config = ClientConfig {
            font_path: Some(PathBuf::from("/fonts/ui.ttf")),
            emoji_font_paths: vec![PathBuf::from("/fonts/emoji.ttf")],
            ..Default::default()
        };
        let text = config.to_ron().unwrap();
        assert_eq!(ClientConfig::from_ron(&text).unwrap(), config);
    }
}
