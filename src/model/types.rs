//! Core type definitions shared by the controller, the view and the player

/// Playback status as reported by the player manager
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    NotStarted,
    Ready,
    Playing,
    Paused,
    Stopped,
    Finished,
}

/// A playable item. The controller only passes these around.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration_secs: f64,
}

/// Identifies the underlying player instance currently loaded with a track
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerHandle(pub u64);

/// Lifecycle events delivered by the player callback registry
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEvent {
    Ready,
    Play(Track),
    Pause,
    Finish,
}

/// Display state mirrored from lifecycle events.
///
/// Never used to decide which command to send; the player manager's
/// status is queried for that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Initializing,
    Ready,
    Playing,
    Paused,
    Finished,
}

impl DisplayState {
    pub fn label(self) -> &'static str {
        match self {
            DisplayState::Initializing => "LOADING",
            DisplayState::Ready => "READY",
            DisplayState::Playing => "PLAYING",
            DisplayState::Paused => "PAUSED",
            DisplayState::Finished => "FINISHED",
        }
    }
}
