//! Frontend Models
//!
//! Data structures shared by the units, the catalog and the view.

use serde::{Deserialize, Serialize};

/// Task checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

/// How a background is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundMode {
    /// Static visual style token (a CSS class)
    Style { class: String },
    /// Full-bleed embedded video loop
    EmbeddedVideo,
}

/// Background catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub id: String,
    pub name: String,
    pub mode: BackgroundMode,
}

impl Background {
    pub fn is_video(&self) -> bool {
        self.mode == BackgroundMode::EmbeddedVideo
    }

    /// Style token for static backgrounds, None for video
    pub fn style_class(&self) -> Option<&str> {
        match &self.mode {
            BackgroundMode::Style { class } => Some(class),
            BackgroundMode::EmbeddedVideo => None,
        }
    }
}

/// Video catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub thumbnail: String,
}

/// Ambient sound track bound to one static audio resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundTrack {
    pub id: String,
    pub name: String,
    pub source: String,
}

/// Whether several ambient channels may play at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundMode {
    #[default]
    Mixed,
    /// At most one channel plays; starting one pauses the rest
    Single,
}

/// Copy of the timer state pushed to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining_secs: u32,
    pub active: bool,
    pub duration_minutes: u32,
}

/// Copy of one audio channel's state pushed to the view
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSnapshot {
    pub id: String,
    pub name: String,
    pub volume: f64,
    pub playing: bool,
}
