//! UI Components
//!
//! Panels composed by the app view.

mod task_panel;
mod timer_panel;
mod sound_panel;
mod background_panel;
mod video_background;

pub use task_panel::TaskPanel;
pub use timer_panel::TimerPanel;
pub use sound_panel::SoundPanel;
pub use background_panel::BackgroundPanel;
pub use video_background::VideoBackground;
