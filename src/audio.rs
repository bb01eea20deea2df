//! Ambient Audio Channels
//!
//! One `AudioChannel` per track, each owning a single looping playback
//! resource behind the `Playback` trait. `Mixer` builds the channels from
//! the track catalog and enforces the sound mode across them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::OasisError;
use crate::models::{ChannelSnapshot, SoundMode, SoundTrack};

pub const DEFAULT_VOLUME: f64 = 0.5;

/// A looping playback resource
pub trait Playback {
    fn set_volume(&self, volume: f64);

    /// Start playback.
    ///
    /// Immediate failures are returned. A rejection discovered later is
    /// reported through `on_rejected` from the event loop, never from
    /// inside this call.
    fn play(&self, on_rejected: Box<dyn FnOnce(String)>) -> Result<(), OasisError>;

    fn pause(&self);

    /// Stop for good and free the underlying resource
    fn release(&self);
}

type Listener = Rc<dyn Fn(ChannelSnapshot)>;

struct ChannelInner<P: Playback> {
    track: SoundTrack,
    volume: f64,
    playing: bool,
    /// Bumped on every play and pause; a rejection only counts for its own attempt
    attempt: u64,
    player: P,
    listener: Option<Listener>,
}

impl<P: Playback> ChannelInner<P> {
    fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            id: self.track.id.clone(),
            name: self.track.name.clone(),
            volume: self.volume,
            playing: self.playing,
        }
    }
}

impl<P: Playback> Drop for ChannelInner<P> {
    fn drop(&mut self) {
        self.player.pause();
        self.player.release();
    }
}

/// Play/pause and volume for one ambient track
pub struct AudioChannel<P: Playback> {
    inner: Rc<RefCell<ChannelInner<P>>>,
}

impl<P: Playback + 'static> AudioChannel<P> {
    pub fn new(track: SoundTrack, volume: f64, player: P) -> Self {
        let volume = clamp_volume(volume).unwrap_or(DEFAULT_VOLUME);
        player.set_volume(volume);
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                track,
                volume,
                playing: false,
                attempt: 0,
                player,
                listener: None,
            })),
        }
    }

    pub fn on_change(&self, listener: impl Fn(ChannelSnapshot) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> ChannelSnapshot {
        self.inner.borrow().snapshot()
    }

    pub fn track_id(&self) -> String {
        self.inner.borrow().track.id.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().playing
    }

    #[cfg(test)]
    pub fn volume(&self) -> f64 {
        self.inner.borrow().volume
    }

    pub fn toggle_play(&self) -> Result<(), OasisError> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    pub fn play(&self) -> Result<(), OasisError> {
        let weak = Rc::downgrade(&self.inner);
        let started = {
            let mut inner = self.inner.borrow_mut();
            if inner.playing {
                return Ok(());
            }
            inner.attempt += 1;
            let attempt = inner.attempt;
            inner.playing = true;
            let started = inner
                .player
                .play(Box::new(move |reason| on_rejected(&weak, attempt, reason)));
            if let Err(err) = &started {
                inner.playing = false;
                log::warn!("[AUDIO] {}", err);
            }
            started
        };
        notify(&self.inner);
        started
    }

    pub fn pause(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.playing {
                return;
            }
            inner.player.pause();
            inner.playing = false;
            inner.attempt += 1;
        }
        notify(&self.inner);
    }

    /// Stop reporting, stop playback and free the resource
    pub fn shutdown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.listener = None;
        inner.playing = false;
        inner.attempt += 1;
        inner.player.pause();
        inner.player.release();
    }

    /// Clamp into [0, 1] and apply immediately, playing or not.
    /// Non-finite input keeps the last volume.
    pub fn set_volume(&self, volume: f64) {
        let Some(volume) = clamp_volume(volume) else { return };
        {
            let mut inner = self.inner.borrow_mut();
            inner.volume = volume;
            inner.player.set_volume(volume);
        }
        notify(&self.inner);
    }
}

fn clamp_volume(volume: f64) -> Option<f64> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}

fn on_rejected<P: Playback>(inner: &Weak<RefCell<ChannelInner<P>>>, attempt: u64, reason: String) {
    let Some(inner) = inner.upgrade() else { return };
    {
        let mut guard = inner.borrow_mut();
        if guard.attempt != attempt || !guard.playing {
            return;
        }
        guard.playing = false;
        let err = OasisError::PlaybackRejected {
            track: guard.track.id.clone(),
            reason,
        };
        log::warn!("[AUDIO] {}", err);
    }
    notify(&inner);
}

fn notify<P: Playback>(inner: &Rc<RefCell<ChannelInner<P>>>) {
    let (listener, snapshot) = {
        let guard = inner.borrow();
        (guard.listener.clone(), guard.snapshot())
    };
    if let Some(listener) = listener {
        listener(snapshot);
    }
}

/// The full set of ambient channels, one per catalog track
pub struct Mixer<P: Playback> {
    channels: Vec<AudioChannel<P>>,
    mode: SoundMode,
}

impl<P: Playback + 'static> Mixer<P> {
    /// Build one channel per track, creating each player with `factory`
    pub fn new(
        tracks: &[SoundTrack],
        mode: SoundMode,
        volume: f64,
        mut factory: impl FnMut(&SoundTrack) -> P,
    ) -> Self {
        let channels = tracks
            .iter()
            .map(|track| AudioChannel::new(track.clone(), volume, factory(track)))
            .collect();
        Self { channels, mode }
    }

    pub fn mode(&self) -> SoundMode {
        self.mode
    }

    #[cfg(test)]
    pub fn channels(&self) -> &[AudioChannel<P>] {
        &self.channels
    }

    pub fn snapshots(&self) -> Vec<ChannelSnapshot> {
        self.channels.iter().map(AudioChannel::snapshot).collect()
    }

    #[cfg(test)]
    pub fn playing_count(&self) -> usize {
        self.channels.iter().filter(|c| c.is_playing()).count()
    }

    /// Observe every channel; the listener gets the channel's position
    pub fn on_change(&self, listener: impl Fn(usize, ChannelSnapshot) + 'static) {
        let listener = Rc::new(listener);
        for (index, channel) in self.channels.iter().enumerate() {
            let listener = Rc::clone(&listener);
            channel.on_change(move |snapshot| listener(index, snapshot));
        }
    }

    /// Toggle one track. In single mode every other channel is paused
    /// before the chosen one starts.
    pub fn toggle(&self, id: &str) -> Result<(), OasisError> {
        let index = self.position(id)?;
        let channel = &self.channels[index];
        if self.mode == SoundMode::Single && !channel.is_playing() {
            self.channels
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .for_each(|(_, other)| other.pause());
        }
        channel.toggle_play()
    }

    pub fn set_volume(&self, id: &str, volume: f64) -> Result<(), OasisError> {
        let index = self.position(id)?;
        self.channels[index].set_volume(volume);
        Ok(())
    }

    pub fn shutdown(&self) {
        self.channels.iter().for_each(AudioChannel::shutdown);
    }

    fn position(&self, id: &str) -> Result<usize, OasisError> {
        self.channels
            .iter()
            .position(|c| c.track_id() == id)
            .ok_or_else(|| OasisError::UnknownTrack(id.to_string()))
    }
}
