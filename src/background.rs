//! Background Selector
//!
//! Tracks which catalog background is current and, while that background
//! embeds video, which video is chosen. Entering the video background
//! always starts with no video chosen.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::OasisError;
use crate::models::{Background, VideoEntry};

pub const DEFAULT_EMBED_HOST: &str = "www.youtube.com";

/// Characters escaped in a video id path segment
const VIDEO_ID: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Build the autoplaying, muted, looping, control-less embed URL
pub fn embed_url(host: &str, video_id: &str) -> String {
    let id = utf8_percent_encode(video_id, VIDEO_ID);
    format!(
        "https://{host}/embed/{id}?autoplay=1&controls=0&showinfo=0&rel=0&loop=1&playlist={id}&mute=1"
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundSelector {
    backgrounds: Vec<Background>,
    videos: Vec<VideoEntry>,
    embed_host: String,
    current: usize,
    /// Empty until a video is picked
    video_id: String,
}

impl BackgroundSelector {
    /// The first background becomes current; an empty catalog is an error.
    pub fn new(
        backgrounds: Vec<Background>,
        videos: Vec<VideoEntry>,
        embed_host: impl Into<String>,
    ) -> Result<Self, OasisError> {
        if backgrounds.is_empty() {
            return Err(OasisError::Config("background catalog is empty".into()));
        }
        Ok(Self {
            backgrounds,
            videos,
            embed_host: embed_host.into(),
            current: 0,
            video_id: String::new(),
        })
    }

    pub fn backgrounds(&self) -> &[Background] {
        &self.backgrounds
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    pub fn current(&self) -> &Background {
        &self.backgrounds[self.current]
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn is_video_mode(&self) -> bool {
        self.current().is_video()
    }

    /// Make the catalog entry `id` current. Unknown ids change nothing.
    pub fn select_background(&mut self, id: &str) -> Result<&Background, OasisError> {
        let index = self
            .backgrounds
            .iter()
            .position(|bg| bg.id == id)
            .ok_or_else(|| OasisError::UnknownBackground(id.to_string()))?;
        self.current = index;
        if self.backgrounds[index].is_video() {
            self.video_id.clear();
        }
        Ok(&self.backgrounds[index])
    }

    /// Choose the video to embed. Only valid in video mode and only for
    /// ids in the video catalog; otherwise nothing changes.
    pub fn select_video(&mut self, video_id: &str) -> Result<(), OasisError> {
        if !self.is_video_mode() {
            return Err(OasisError::VideoModeInactive);
        }
        if video_id.is_empty() || !self.videos.iter().any(|v| v.id == video_id) {
            return Err(OasisError::UnknownVideo(video_id.to_string()));
        }
        self.video_id = video_id.to_string();
        Ok(())
    }

    /// Style token to draw behind the content, None in video mode
    pub fn style_class(&self) -> Option<&str> {
        self.current().style_class()
    }

    /// Embed URL when in video mode with a video chosen
    pub fn embed_url(&self) -> Option<String> {
        (self.is_video_mode() && !self.video_id.is_empty())
            .then(|| embed_url(&self.embed_host, &self.video_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackgroundMode;

    fn selector() -> BackgroundSelector {
        let backgrounds = vec![
            Background {
                id: "default".into(),
                name: "Default".into(),
                mode: BackgroundMode::Style { class: "bg-default".into() },
            },
            Background {
                id: "youtube".into(),
                name: "YouTube Video".into(),
                mode: BackgroundMode::EmbeddedVideo,
            },
        ];
        let videos = ["abc123", "R6MNlWagZhk"]
            .into_iter()
            .map(|id| VideoEntry {
                id: id.into(),
                thumbnail: format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"),
            })
            .collect();
        BackgroundSelector::new(backgrounds, videos, DEFAULT_EMBED_HOST).unwrap()
    }

    #[test]
    fn test_select_video_background_and_video() {
        let mut bg = selector();
        assert_eq!(bg.current().id, "default");
        assert_eq!(bg.style_class(), Some("bg-default"));
        assert_eq!(bg.embed_url(), None);

        bg.select_background("youtube").unwrap();
        assert_eq!(bg.current().id, "youtube");
        assert_eq!(bg.video_id(), "");
        assert_eq!(bg.style_class(), None);
        assert_eq!(bg.embed_url(), None);

        bg.select_video("abc123").unwrap();
        assert_eq!(bg.video_id(), "abc123");
        let url = bg.embed_url().unwrap();
        assert!(url.contains("/embed/abc123?"));
        assert!(url.contains("playlist=abc123"));
    }

    #[test]
    fn test_reentering_video_mode_clears_selection() {
        let mut bg = selector();
        bg.select_background("youtube").unwrap();
        bg.select_video("abc123").unwrap();

        bg.select_background("youtube").unwrap();
        assert_eq!(bg.video_id(), "");
        assert_eq!(bg.embed_url(), None);
    }

    #[test]
    fn test_unknown_ids_change_nothing() {
        let mut bg = selector();
        assert_eq!(
            bg.select_background("volcano"),
            Err(OasisError::UnknownBackground("volcano".into()))
        );
        assert_eq!(bg.current().id, "default");

        assert_eq!(bg.select_video("abc123"), Err(OasisError::VideoModeInactive));

        bg.select_background("youtube").unwrap();
        bg.select_video("abc123").unwrap();
        assert!(bg.select_video("nope").is_err());
        assert!(bg.select_video("").is_err());
        assert_eq!(bg.video_id(), "abc123");
    }

    #[test]
    fn test_embed_url_template() {
        assert_eq!(
            embed_url("www.youtube.com", "IlC45w0-KGM"),
            "https://www.youtube.com/embed/IlC45w0-KGM?autoplay=1&controls=0&showinfo=0&rel=0&loop=1&playlist=IlC45w0-KGM&mute=1"
        );
        assert!(embed_url("www.youtube.com", "a b").contains("/embed/a%20b?"));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(BackgroundSelector::new(Vec::new(), Vec::new(), DEFAULT_EMBED_HOST).is_err());
    }
}
