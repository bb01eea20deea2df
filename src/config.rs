//! Static Configuration
//!
//! Catalogs and defaults baked in at build time from `assets/oasis.json`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::audio::DEFAULT_VOLUME;
use crate::background::DEFAULT_EMBED_HOST;
use crate::error::OasisError;
use crate::models::{Background, BackgroundMode, SoundMode, SoundTrack, VideoEntry};
use crate::timer::DEFAULT_DURATION_MINUTES;

const EMBEDDED: &str = include_str!("../assets/oasis.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub default_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default)]
    pub mode: SoundMode,
    #[serde(default = "default_volume")]
    pub default_volume: f64,
    pub tracks: Vec<SoundTrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedConfig {
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OasisConfig {
    pub title: String,
    pub timer: TimerConfig,
    pub sounds: SoundConfig,
    pub backgrounds: Vec<Background>,
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    pub embed: EmbedConfig,
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

impl Default for OasisConfig {
    /// Bare fallback: one gradient background, no sounds, no videos
    fn default() -> Self {
        Self {
            title: "Productivity Oasis".to_string(),
            timer: TimerConfig {
                default_minutes: DEFAULT_DURATION_MINUTES,
            },
            sounds: SoundConfig {
                mode: SoundMode::Mixed,
                default_volume: DEFAULT_VOLUME,
                tracks: Vec::new(),
            },
            backgrounds: vec![Background {
                id: "default".to_string(),
                name: "Default".to_string(),
                mode: BackgroundMode::Style {
                    class: "bg-default".to_string(),
                },
            }],
            videos: Vec::new(),
            embed: EmbedConfig {
                host: DEFAULT_EMBED_HOST.to_string(),
            },
        }
    }
}

impl OasisConfig {
    /// The embedded configuration, or the bare fallback if it is invalid
    pub fn load() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(config) => config,
            Err(err) => {
                log::error!("[CONFIG] embedded configuration rejected: {}", err);
                Self::default()
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self, OasisError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), OasisError> {
        if self.timer.default_minutes == 0 {
            return Err(invalid("timer.default_minutes must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.sounds.default_volume) {
            return Err(invalid("sounds.default_volume must be within 0..=1"));
        }
        if self.backgrounds.is_empty() {
            return Err(invalid("at least one background is required"));
        }
        if self.embed.host.trim().is_empty() {
            return Err(invalid("embed.host is empty"));
        }
        if self.sounds.tracks.iter().any(|t| t.source.trim().is_empty()) {
            return Err(invalid("every track needs a source"));
        }
        if self.videos.iter().any(|v| v.id.trim().is_empty()) {
            return Err(invalid("every video needs an id"));
        }
        unique("track", self.sounds.tracks.iter().map(|t| t.id.as_str()))?;
        unique("background", self.backgrounds.iter().map(|b| b.id.as_str()))?;
        unique("video", self.videos.iter().map(|v| v.id.as_str()))?;
        Ok(())
    }
}

fn invalid(message: &str) -> OasisError {
    OasisError::Config(message.to_string())
}

fn unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), OasisError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(OasisError::Config(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = OasisConfig::parse(EMBEDDED).unwrap();
        assert_eq!(config.timer.default_minutes, 25);
        assert_eq!(config.sounds.mode, SoundMode::Mixed);

        let tracks: Vec<&str> = config.sounds.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(tracks, ["rain", "birds", "water", "wind", "nature", "wood"]);

        assert_eq!(config.backgrounds[0].id, "default");
        assert!(!config.backgrounds[0].is_video());
        assert!(config.backgrounds.iter().any(Background::is_video));
        assert_eq!(config.videos.len(), 5);
    }

    #[test]
    fn test_track_sources_are_shipped_by_trunk() {
        let index = include_str!("../index.html");
        assert!(index.contains(r#"<link data-trunk rel="copy-dir" href="public" />"#));

        let config = OasisConfig::parse(EMBEDDED).unwrap();
        for track in &config.sounds.tracks {
            assert_eq!(track.source, format!("public/sounds/{}.mp3", track.id));
        }
    }

    #[test]
    fn test_fallback_is_valid() {
        assert!(OasisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = OasisConfig::default();
        config.timer.default_minutes = 0;
        assert!(config.validate().is_err());

        let mut config = OasisConfig::default();
        config.sounds.default_volume = 1.5;
        assert!(config.validate().is_err());

        let mut config = OasisConfig::default();
        config.backgrounds.clear();
        assert!(config.validate().is_err());

        let mut config = OasisConfig::default();
        let duplicate = config.backgrounds[0].clone();
        config.backgrounds.push(duplicate);
        assert!(matches!(config.validate(), Err(OasisError::Config(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        assert!(matches!(OasisConfig::parse("{"), Err(OasisError::Config(_))));
    }

    #[test]
    fn test_optional_sections_default() {
        let raw = r#"{
            "title": "Oasis",
            "timer": { "default_minutes": 50 },
            "sounds": { "tracks": [] },
            "backgrounds": [{ "id": "youtube", "name": "Video", "mode": { "kind": "embedded_video" } }],
            "embed": { "host": "www.youtube-nocookie.com" }
        }"#;
        let config = OasisConfig::parse(raw).unwrap();
        assert_eq!(config.sounds.mode, SoundMode::Mixed);
        assert_eq!(config.sounds.default_volume, DEFAULT_VOLUME);
        assert!(config.videos.is_empty());
    }
}
