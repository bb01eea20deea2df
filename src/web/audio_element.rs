//! Audio Element Playback
//!
//! Looping `<audio>` element per ambient track.

use js_sys::Promise;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::audio::Playback;
use crate::error::OasisError;
use crate::models::SoundTrack;

pub struct AudioElementPlayback {
    track_id: String,
    /// None when the element could not be created; play then fails immediately
    element: Option<HtmlAudioElement>,
}

impl AudioElementPlayback {
    pub fn new(track: &SoundTrack) -> Self {
        let element = match HtmlAudioElement::new_with_src(&track.source) {
            Ok(element) => {
                element.set_loop(true);
                Some(element)
            }
            Err(err) => {
                log::error!("[AUDIO] could not create element for {}: {}", track.id, describe(&err));
                None
            }
        };
        Self {
            track_id: track.id.clone(),
            element,
        }
    }
}

impl Playback for AudioElementPlayback {
    fn set_volume(&self, volume: f64) {
        if let Some(element) = &self.element {
            element.set_volume(volume);
        }
    }

    fn play(&self, on_rejected: Box<dyn FnOnce(String)>) -> Result<(), OasisError> {
        let Some(element) = &self.element else {
            return Err(OasisError::PlaybackUnavailable {
                track: self.track_id.clone(),
            });
        };
        let promise: Promise = element.play().map_err(|err| OasisError::PlaybackRejected {
            track: self.track_id.clone(),
            reason: describe(&err),
        })?;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                on_rejected(describe(&err));
            }
        });
        Ok(())
    }

    fn pause(&self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
        }
    }

    fn release(&self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
            let _ = element.remove_attribute("src");
            element.load();
        }
    }
}

/// Readable text for a JS error value (DOMException, string, anything else)
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
