//! Button intents
//!
//! Each intent sends at most one command to one collaborator. The UI is
//! left untouched until the resulting lifecycle event arrives.

use crate::model::PlaybackStatus;

use super::PlaybackController;

impl PlaybackController {
    /// Decides from the player's status at click time, not from the
    /// mirrored display state, which may lag behind delayed events.
    pub fn toggle_playback(&self) {
        if !self.controls.play_toggle.button.enabled {
            return;
        }

        let status = self.player.status();
        tracing::debug!(?status, "Toggling playback");

        match status {
            PlaybackStatus::Playing => self.player.pause(),
            PlaybackStatus::Paused => self.player.resume(),
            _ => {}
        }
    }

    pub fn next_track(&self) {
        if !self.controls.next.enabled {
            return;
        }

        let current = self.player.current_track();
        match self.playlist.pop_next(current.as_ref()) {
            Some(track) => {
                tracing::debug!(track = %track.name, "Skipping to next track");
                self.player.play(track);
            }
            None => tracing::debug!("End of playlist, nothing to skip to"),
        }
    }

    /// Not bound to any behavior yet
    pub fn previous_track(&self) {}

    pub fn toggle_repeat(&self) {
        self.playlist.on_repeat_clicked();
    }

    pub fn toggle_shuffle(&self) {
        self.playlist.on_shuffle_clicked();
    }

    /// Plays the playlist entry at `index`, if there is one
    pub fn play_track_at(&self, index: usize) {
        if let Some(track) = self.tracks.get(index) {
            tracing::debug!(index, track = %track.name, "Playing chosen track");
            self.player.play(track.clone());
        }
    }
}
