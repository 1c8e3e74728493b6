//! Local player backend
//!
//! Stands in for a real media backend: it keeps a playback clock, fills a
//! simulated buffer faster than real time and reports lifecycle events to
//! every subscriber. No audio is decoded.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

use crate::model::{PlaybackStatus, PlayerCallback, PlayerEvent, PlayerHandle, PlayerManager, Track};

const DEVICE_NAME: &str = "Dropbeat";

/// Seconds of media buffered per second of wall time
const BUFFER_RATE: f64 = 8.0;

struct PlayerState {
    status: PlaybackStatus,
    track: Option<Track>,
    handle: Option<PlayerHandle>,
    /// Position when playback last (re)started or stopped moving
    anchor_position: f64,
    /// Set while playing
    resumed_at: Option<Instant>,
    loaded_at: Instant,
    /// Bumped whenever a pending end-of-track check becomes stale
    generation: u64,
    next_handle: u64,
}

impl PlayerState {
    fn duration(&self) -> f64 {
        self.track.as_ref().map(|t| t.duration_secs).unwrap_or(0.0)
    }

    fn position(&self) -> f64 {
        let elapsed = self
            .resumed_at
            .map(|at| at.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        (self.anchor_position + elapsed).min(self.duration())
    }

    /// `None` when the remaining time does not fit a `Duration`
    fn remaining(&self) -> Option<Duration> {
        Duration::try_from_secs_f64((self.duration() - self.position()).max(0.0)).ok()
    }
}

struct Shared {
    state: Mutex<PlayerState>,
    listeners: Mutex<Vec<UnboundedSender<PlayerEvent>>>,
}

#[derive(Clone)]
pub struct LocalPlayer {
    shared: Arc<Shared>,
}

impl LocalPlayer {
    pub fn new() -> Self {
        let state = PlayerState {
            status: PlaybackStatus::NotStarted,
            track: None,
            handle: None,
            anchor_position: 0.0,
            resumed_at: None,
            loaded_at: Instant::now(),
            generation: 0,
            next_handle: 1,
        };
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn get_device_name() -> String {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        format!("{}@{}", DEVICE_NAME, hostname)
    }

    /// Brings the backend up and announces readiness to subscribers
    pub fn start(&self) {
        let mut state = self.lock();
        if state.status != PlaybackStatus::NotStarted {
            return;
        }
        state.status = PlaybackStatus::Ready;
        tracing::info!("Local player ready");
        self.emit(PlayerEvent::Ready);
    }

    fn lock(&self) -> MutexGuard<'_, PlayerState> {
        self.shared.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sends to every listener. Callers hold the state lock so that event
    /// order matches the order of state transitions.
    fn emit(&self, event: PlayerEvent) {
        let mut listeners = self.shared.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn schedule_finish(&self, state: &PlayerState) {
        if state.status != PlaybackStatus::Playing {
            return;
        }
        let Some(remaining) = state.remaining() else {
            tracing::warn!(duration_secs = state.duration(), "Track too long to schedule its end");
            return;
        };
        let generation = state.generation;
        let player = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(remaining).await;
            player.finish_if_current(generation);
        });
    }

    fn finish_if_current(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation || state.status != PlaybackStatus::Playing {
            return;
        }
        state.anchor_position = state.duration();
        state.resumed_at = None;
        state.status = PlaybackStatus::Finished;
        tracing::debug!("Track reached its end");
        self.emit(PlayerEvent::Finish);
    }
}

impl Default for LocalPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerManager for LocalPlayer {
    fn status(&self) -> PlaybackStatus {
        self.lock().status
    }

    fn duration(&self) -> f64 {
        self.lock().duration()
    }

    fn current_position(&self) -> f64 {
        self.lock().position()
    }

    fn buffer(&self) -> f64 {
        let state = self.lock();
        let duration = state.duration();
        if duration <= 0.0 {
            return 0.0;
        }
        let buffered = state.loaded_at.elapsed().as_secs_f64() * BUFFER_RATE;
        (buffered / duration * 100.0).min(100.0)
    }

    fn current_track(&self) -> Option<Track> {
        self.lock().track.clone()
    }

    fn current_player(&self) -> Option<PlayerHandle> {
        self.lock().handle
    }

    fn play(&self, track: Track) {
        let mut state = self.lock();
        state.handle = Some(PlayerHandle(state.next_handle));
        state.next_handle += 1;
        state.track = Some(track.clone());
        state.anchor_position = 0.0;
        state.resumed_at = Some(Instant::now());
        state.loaded_at = Instant::now();
        state.status = PlaybackStatus::Playing;
        state.generation += 1;
        self.schedule_finish(&state);
        tracing::info!(track = %track.name, duration_secs = track.duration_secs, "Loaded track");
        self.emit(PlayerEvent::Play(track));
    }

    fn pause(&self) {
        let mut state = self.lock();
        if state.status != PlaybackStatus::Playing {
            return;
        }
        state.anchor_position = state.position();
        state.resumed_at = None;
        state.status = PlaybackStatus::Paused;
        state.generation += 1;
        self.emit(PlayerEvent::Pause);
    }

    fn resume(&self) {
        let mut state = self.lock();
        if state.status != PlaybackStatus::Paused {
            return;
        }
        let Some(track) = state.track.clone() else {
            return;
        };
        state.resumed_at = Some(Instant::now());
        state.status = PlaybackStatus::Playing;
        state.generation += 1;
        self.schedule_finish(&state);
        self.emit(PlayerEvent::Play(track));
    }

    fn seek(&self, position_secs: f64) {
        let mut state = self.lock();
        if state.track.is_none() {
            return;
        }
        let position = position_secs.clamp(0.0, state.duration());
        tracing::debug!(position, "Seek");
        state.anchor_position = position;
        if state.resumed_at.is_some() {
            state.resumed_at = Some(Instant::now());
        }
        state.generation += 1;
        self.schedule_finish(&state);
    }
}

impl PlayerCallback for LocalPlayer {
    fn subscribe(&self) -> UnboundedReceiver<PlayerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }
}
