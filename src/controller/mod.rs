//! Controller module - Playback control and event handling
//!
//! The playback controller owns the controls binding and a single progress
//! tracker. It turns user intents into commands for the player and
//! playlist managers, and reflects lifecycle events back into the UI.
//!
//! - `input`: Key and mouse event routing
//! - `playback`: Button intents (toggle, next, previous, repeat, shuffle)
//! - `player_events`: Lifecycle event handling and display state
//! - `progress`: Progress bar refresh and drag-to-seek
//! - `scheduler`: Clock-driven periodic tasks

mod input;
mod playback;
mod player_events;
mod progress;
mod scheduler;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::model::{
    ControlsBinding, PlayerCallback, PlayerEvent, PlayerManager, PlaylistManager, ProgressBinding,
    ProgressState, Track,
};
use crate::view::ViewLayout;

use progress::ProgressTracker;
use scheduler::IntervalScheduler;

pub use progress::format_time;
pub use scheduler::{Clock, SystemClock};

pub struct PlaybackController {
    player: Arc<dyn PlayerManager>,
    playlist: Arc<dyn PlaylistManager>,
    progress: ProgressTracker,
    controls: ControlsBinding,
    tracks: Vec<Track>,
    subscribed: bool,
    should_quit: bool,
}

impl PlaybackController {
    pub fn new(
        player: Arc<dyn PlayerManager>,
        playlist: Arc<dyn PlaylistManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let progress = ProgressTracker::new(player.clone(), IntervalScheduler::new(clock));
        let tracks = playlist.tracks();
        Self {
            player,
            playlist,
            progress,
            controls: ControlsBinding::default(),
            tracks,
            subscribed: false,
            should_quit: false,
        }
    }

    /// Registers for lifecycle events and enables drag input.
    ///
    /// Returns `None` if already initialized, so a controller never listens
    /// twice.
    pub fn init(&mut self, callbacks: &dyn PlayerCallback) -> Option<UnboundedReceiver<PlayerEvent>> {
        if self.subscribed {
            tracing::warn!("Playback controller already initialized");
            return None;
        }
        self.subscribed = true;
        let events = callbacks.subscribe();
        self.progress.init();
        tracing::info!(tracks = self.tracks.len(), "Playback controller initialized");
        Some(events)
    }

    /// Runs due progress refresh cycles
    pub fn on_timer(&mut self) {
        self.progress.on_timer();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.progress.next_deadline()
    }

    /// Places buttons, playlist and progress bar where the view drew them
    pub fn apply_layout(&mut self, layout: &ViewLayout) {
        self.controls.play_toggle.button.area = layout.play_toggle;
        self.controls.prev.area = layout.prev;
        self.controls.next.area = layout.next;
        self.controls.repeat.area = layout.repeat;
        self.controls.shuffle.area = layout.shuffle;
        self.controls.playlist_area = layout.playlist;
        self.progress.set_bar_area(layout.progress_bar);
    }

    pub fn controls(&self) -> &ControlsBinding {
        &self.controls
    }

    pub fn progress(&self) -> &ProgressBinding {
        self.progress.binding()
    }

    pub fn progress_state(&self) -> ProgressState {
        self.progress.state()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_track(&self) -> Option<Track> {
        self.player.current_track()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::scheduler::ManualClock;
    use crate::controller::testing::{track, FakeCallbacks, FakePlayer, FakePlaylist};
    use crate::model::PlaybackStatus;
    use ratatui::layout::Rect;

    #[test]
    fn init_subscribes_once() {
        let player = Arc::new(FakePlayer::new(PlaybackStatus::NotStarted));
        let playlist = Arc::new(FakePlaylist::new(vec![track("a", "A")]));
        let callbacks = FakeCallbacks::default();
        let mut controller =
            PlaybackController::new(player, playlist, Arc::new(ManualClock::new()));

        assert!(controller.init(&callbacks).is_some());
        assert!(controller.init(&callbacks).is_none());
        assert_eq!(callbacks.listener_count(), 1);
        assert_eq!(controller.tracks().len(), 1);
    }

    #[test]
    fn layout_reaches_both_bindings() {
        let player = Arc::new(FakePlayer::new(PlaybackStatus::NotStarted));
        let playlist = Arc::new(FakePlaylist::new(Vec::new()));
        let mut controller =
            PlaybackController::new(player, playlist, Arc::new(ManualClock::new()));

        let layout = ViewLayout {
            play_toggle: Rect::new(1, 1, 6, 1),
            next: Rect::new(8, 1, 6, 1),
            progress_bar: Rect::new(2, 10, 60, 1),
            ..Default::default()
        };
        controller.apply_layout(&layout);

        assert_eq!(controller.controls().play_toggle.button.area, layout.play_toggle);
        assert_eq!(controller.controls().next.area, layout.next);
        assert_eq!(controller.progress().bar, layout.progress_bar);
    }
}
