//! Application Context
//!
//! Owns the timer unit and the audio mixer for the lifetime of the view.
//! Both are single-threaded (`Rc` inside), so they live in local stored
//! values; the view reads their state through snapshot signals.

use leptos::prelude::*;

use crate::audio::Mixer;
use crate::config::OasisConfig;
use crate::models::{ChannelSnapshot, SoundMode, TimerSnapshot};
use crate::timer::TimerUnit;
use crate::web::{AudioElementPlayback, IntervalScheduler};

/// App-wide units provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    timer: StoredValue<TimerUnit<IntervalScheduler>, LocalStorage>,
    /// Latest timer state - read
    pub timer_state: ReadSignal<TimerSnapshot>,
    mixer: StoredValue<Mixer<AudioElementPlayback>, LocalStorage>,
    /// Latest state of every sound channel, in catalog order - read
    pub channels: ReadSignal<Vec<ChannelSnapshot>>,
    pub sound_mode: SoundMode,
}

impl AppContext {
    pub fn new(config: &OasisConfig) -> Self {
        let timer = TimerUnit::new(IntervalScheduler, config.timer.default_minutes);
        let (timer_state, set_timer_state) = signal(timer.snapshot());
        timer.on_change(move |snapshot| set_timer_state.set(snapshot));

        let mixer = Mixer::new(
            &config.sounds.tracks,
            config.sounds.mode,
            config.sounds.default_volume,
            AudioElementPlayback::new,
        );
        let (channels, set_channels) = signal(mixer.snapshots());
        mixer.on_change(move |index, snapshot| {
            set_channels.update(|all| {
                if let Some(slot) = all.get_mut(index) {
                    *slot = snapshot;
                }
            });
        });

        Self {
            timer: StoredValue::new_local(timer),
            timer_state,
            sound_mode: mixer.mode(),
            mixer: StoredValue::new_local(mixer),
            channels,
        }
    }

    /// Start or pause the countdown
    pub fn toggle_timer(&self) {
        self.timer.with_value(|timer| timer.toggle());
    }

    pub fn reset_timer(&self) {
        self.timer.with_value(|timer| timer.reset());
    }

    /// Apply the minutes input; bad input is ignored
    pub fn set_timer_minutes(&self, raw: &str) {
        if let Err(err) = self.timer.with_value(|timer| timer.set_duration(raw)) {
            log::debug!("[TIMER] {}", err);
        }
    }

    pub fn toggle_sound(&self, id: &str) {
        if let Err(err) = self.mixer.with_value(|mixer| mixer.toggle(id)) {
            log::warn!("[AUDIO] {}", err);
        }
    }

    pub fn set_sound_volume(&self, id: &str, volume: f64) {
        if let Err(err) = self.mixer.with_value(|mixer| mixer.set_volume(id, volume)) {
            log::warn!("[AUDIO] {}", err);
        }
    }

    /// Silence every channel and cancel the pending tick
    pub fn teardown(&self) {
        self.mixer.try_with_value(|mixer| mixer.shutdown());
        self.timer.try_with_value(|timer| timer.shutdown());
        log::debug!("[APP] units shut down");
    }
}

/// Configured minutes; notifies only when the duration changes, not on ticks
pub fn duration_minutes(state: ReadSignal<TimerSnapshot>) -> Memo<u32> {
    Memo::new(move |_| state.with(|snapshot| snapshot.duration_minutes))
}

/// One field of one channel; unaffected by changes to other channels
pub fn channel_field<T>(
    channels: ReadSignal<Vec<ChannelSnapshot>>,
    index: usize,
    field: impl Fn(&ChannelSnapshot) -> T + Send + Sync + 'static,
) -> Memo<T>
where
    T: Clone + Default + PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| channels.with(|all| all.get(index).map(&field).unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn channel(id: &str) -> ChannelSnapshot {
        ChannelSnapshot {
            id: id.to_string(),
            name: id.to_string(),
            volume: 0.5,
            playing: false,
        }
    }

    /// Counts how often a dependent computation re-runs after `source` notifies
    fn counting<T>(source: Memo<T>) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let observer = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            source.get()
        });
        (observer, runs)
    }

    #[test]
    fn test_duration_ignores_ticks() {
        let owner = Owner::new();
        owner.with(|| {
            let (state, set_state) = signal(TimerSnapshot {
                remaining_secs: 1500,
                active: true,
                duration_minutes: 25,
            });
            let (minutes, runs) = counting(duration_minutes(state));
            assert_eq!(minutes.get_untracked(), 25);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            for _ in 0..3 {
                set_state.update(|s| s.remaining_secs -= 1);
                assert_eq!(minutes.get_untracked(), 25);
            }
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            set_state.update(|s| s.duration_minutes = 5);
            assert_eq!(minutes.get_untracked(), 5);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_channel_field_ignores_other_fields_and_channels() {
        let owner = Owner::new();
        owner.with(|| {
            let (channels, set_channels) = signal(vec![channel("rain"), channel("wind")]);
            let (volume, runs) = counting(channel_field(channels, 0, |c| c.volume));
            assert_eq!(volume.get_untracked(), 0.5);

            set_channels.update(|all| all[0].playing = true);
            set_channels.update(|all| all[1].volume = 0.9);
            assert_eq!(volume.get_untracked(), 0.5);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            set_channels.update(|all| all[0].volume = 0.2);
            assert_eq!(volume.get_untracked(), 0.2);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            let missing = channel_field(channels, 7, |c| c.playing);
            assert!(!missing.get_untracked());
        });
    }
}
