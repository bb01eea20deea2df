//! Browser Bindings
//!
//! Event-loop and media implementations of the unit seams.

mod audio_element;
mod interval;

pub use audio_element::AudioElementPlayback;
pub use interval::IntervalScheduler;
