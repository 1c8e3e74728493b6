//! Collaborator interfaces consumed by the playback controller
//!
//! All reads are synchronous and assumed to be instantaneous. Commands
//! return nothing: their effect is reported later through [`PlayerEvent`]s.

use tokio::sync::mpsc::UnboundedReceiver;

use super::types::{PlaybackStatus, PlayerEvent, PlayerHandle, Track};

/// Owns the authoritative playback state and the transport commands
pub trait PlayerManager: Send + Sync {
    fn status(&self) -> PlaybackStatus;
    /// Track length in seconds
    fn duration(&self) -> f64;
    /// Playback position in seconds
    fn current_position(&self) -> f64;
    /// Buffered amount in percent, 0..=100
    fn buffer(&self) -> f64;
    fn current_track(&self) -> Option<Track>;
    fn current_player(&self) -> Option<PlayerHandle>;

    fn play(&self, track: Track);
    fn pause(&self);
    fn resume(&self);
    fn seek(&self, position_secs: f64);
}

/// Track ordering plus the shuffle/repeat policy
pub trait PlaylistManager: Send + Sync {
    /// Next track after `current`, or `None` at the end of the playlist
    fn pop_next(&self, current: Option<&Track>) -> Option<Track>;
    fn on_repeat_clicked(&self);
    fn on_shuffle_clicked(&self);
    fn tracks(&self) -> Vec<Track>;
}

/// Registry delivering lifecycle events
pub trait PlayerCallback {
    /// Registers a listener. Events arrive on the returned channel in the
    /// order the player changed state: a `Finish` for one track never
    /// arrives after the `Play` that replaced it.
    fn subscribe(&self) -> UnboundedReceiver<PlayerEvent>;
}
