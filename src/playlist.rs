//! In-memory playlist with repeat and shuffle play order

use std::sync::Mutex;

use rand::Rng;

use crate::model::{PlaylistManager, Track};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PlayOrder {
    repeat: bool,
    shuffle: bool,
}

pub struct Playlist {
    tracks: Vec<Track>,
    order: Mutex<PlayOrder>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            order: Mutex::new(PlayOrder::default()),
        }
    }

    fn order(&self) -> PlayOrder {
        *self.order.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn update(&self, f: impl FnOnce(&mut PlayOrder)) {
        let mut order = self.order.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut order);
        tracing::info!(repeat = order.repeat, shuffle = order.shuffle, "Play order changed");
    }

    fn position_of(&self, track: &Track) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track.id)
    }
}

impl PlaylistManager for Playlist {
    fn pop_next(&self, current: Option<&Track>) -> Option<Track> {
        if self.tracks.is_empty() {
            return None;
        }

        let order = self.order();
        let current = current.and_then(|t| self.position_of(t));

        let next = if order.shuffle && self.tracks.len() > 1 {
            let mut rng = rand::thread_rng();
            match current {
                // Any track other than the current one
                Some(index) => {
                    let pick = rng.gen_range(0..self.tracks.len() - 1);
                    if pick >= index { pick + 1 } else { pick }
                }
                None => rng.gen_range(0..self.tracks.len()),
            }
        } else {
            match current {
                None => 0,
                Some(index) if index + 1 < self.tracks.len() => index + 1,
                Some(_) if order.repeat => 0,
                Some(_) => return None,
            }
        };

        self.tracks.get(next).cloned()
    }

    fn on_repeat_clicked(&self) {
        self.update(|order| order.repeat = !order.repeat);
    }

    fn on_shuffle_clicked(&self) {
        self.update(|order| order.shuffle = !order.shuffle);
    }

    fn tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}
