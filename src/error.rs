//! Error Types
//!
//! Nothing here is fatal: every variant describes a mutation that was not
//! applied, leaving the owning unit in its last good state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OasisError {
    /// Task text was empty after trimming
    #[error("task text is blank")]
    BlankTask,

    /// Timer duration input was not a whole number of minutes >= 1
    #[error("invalid timer duration: {0:?}")]
    InvalidDuration(String),

    #[error("unknown background: {0}")]
    UnknownBackground(String),

    #[error("unknown video: {0:?}")]
    UnknownVideo(String),

    /// A video was chosen while the current background is not a video
    #[error("current background does not embed video")]
    VideoModeInactive,

    #[error("unknown sound track: {0}")]
    UnknownTrack(String),

    /// The playback resource for a track could not be created
    #[error("playback unavailable for '{track}'")]
    PlaybackUnavailable { track: String },

    /// The environment refused to start playback (autoplay policy, load failure)
    #[error("playback rejected for '{track}': {reason}")]
    PlaybackRejected { track: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for OasisError {
    fn from(err: serde_json::Error) -> Self {
        OasisError::Config(err.to_string())
    }
}
