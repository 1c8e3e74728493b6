//! Lifecycle event handling
//!
//! Display state only ever changes here, in response to events from the
//! player callback registry.

use crate::model::{DisplayState, PlayerEvent, Track};

use super::PlaybackController;

const READY_TITLE: &str = "CHOOSE TRACK FROM PLAYLIST";

impl PlaybackController {
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Ready => self.on_ready(),
            PlayerEvent::Play(track) => self.on_play(track),
            PlayerEvent::Pause => self.on_pause(),
            PlayerEvent::Finish => self.on_finish(),
        }
    }

    fn on_ready(&mut self) {
        tracing::info!("Player ready");
        self.set_state(DisplayState::Ready);
        self.controls.title = READY_TITLE.to_string();
        self.controls.play_toggle.button.enabled = true;
        self.controls.next.enabled = true;
    }

    fn on_play(&mut self, track: Track) {
        tracing::info!(track = %track.name, "Playing");
        self.controls.title = track.name;
        self.set_state(DisplayState::Playing);
        self.controls.play_toggle.shows_pause = true;
        self.progress.start();
    }

    fn on_pause(&mut self) {
        tracing::info!("Paused");
        self.set_state(DisplayState::Paused);
        self.controls.play_toggle.shows_pause = false;
        self.progress.stop();
    }

    fn on_finish(&mut self) {
        tracing::info!("Finished");
        self.set_state(DisplayState::Finished);
        self.controls.play_toggle.shows_pause = false;
        self.progress.stop();
    }

    fn set_state(&mut self, state: DisplayState) {
        self.controls.state = state;
        self.controls.status = state.label().to_string();
    }
}
