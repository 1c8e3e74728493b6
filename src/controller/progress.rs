//! Progress bar tracking and drag-to-seek
//!
//! The tracker keeps the bullet, marker, buffer bar and time labels in step
//! with the player through two refresh cycles, and turns pointer input on
//! the bar into seek commands. While a drag is in progress the pointer is
//! authoritative and the position cycle leaves the bar alone.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::model::{PlaybackStatus, PlayerManager, ProgressBinding, ProgressState};
use super::scheduler::{IntervalScheduler, RefreshTask, TaskHandle};

pub const POSITION_REFRESH_INTERVAL: Duration = Duration::from_millis(100);
pub const BUFFER_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

struct RefreshHandles {
    position: TaskHandle,
    buffer: TaskHandle,
}

pub struct ProgressTracker {
    player: Arc<dyn PlayerManager>,
    scheduler: IntervalScheduler,
    handles: Option<RefreshHandles>,
    binding: ProgressBinding,
    state: ProgressState,
    input_bound: bool,
    pointer_captured: bool,
}

impl ProgressTracker {
    pub fn new(player: Arc<dyn PlayerManager>, scheduler: IntervalScheduler) -> Self {
        Self {
            player,
            scheduler,
            handles: None,
            binding: ProgressBinding::default(),
            state: ProgressState::default(),
            input_bound: false,
            pointer_captured: false,
        }
    }

    /// Enables drag detection on the bar and the marker
    pub fn init(&mut self) {
        if self.input_bound {
            tracing::warn!("Progress tracker initialized twice, ignoring");
            return;
        }
        self.input_bound = true;
        tracing::debug!("Progress tracker input bound");
    }

    /// Starts both refresh cycles, replacing any running pair
    pub fn start(&mut self) {
        self.cancel_cycles();
        let position = self
            .scheduler
            .schedule_repeating(POSITION_REFRESH_INTERVAL, RefreshTask::Position);
        let buffer = self
            .scheduler
            .schedule_repeating(BUFFER_REFRESH_INTERVAL, RefreshTask::Buffer);
        self.handles = Some(RefreshHandles { position, buffer });
        tracing::debug!("Progress refresh started");
    }

    pub fn stop(&mut self) {
        if self.cancel_cycles() {
            tracing::debug!("Progress refresh stopped");
        }
    }

    fn cancel_cycles(&mut self) -> bool {
        match self.handles.take() {
            Some(handles) => {
                self.scheduler.cancel(handles.position);
                self.scheduler.cancel(handles.buffer);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.handles.is_some()
    }

    #[cfg(test)]
    pub fn scheduler_active(&self) -> usize {
        self.scheduler.active()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Runs whichever refresh cycles are due
    pub fn on_timer(&mut self) {
        for task in self.scheduler.take_due() {
            match task {
                RefreshTask::Position => self.refresh_position(),
                RefreshTask::Buffer => self.refresh_buffer(),
            }
        }
    }

    fn refresh_position(&mut self) {
        if self.state.is_dragging {
            return;
        }

        let total = self.player.duration();
        let position = self.player.current_position();
        let fraction = ratio(position, total);

        self.state.position_fraction = fraction;
        let width = fraction * self.binding.bar_width();
        self.binding.bullet_width = width;
        self.binding.marker_left = width;

        self.binding.current_time = format_time(position);
        self.binding.total_time = format_time(total);
    }

    fn refresh_buffer(&mut self) {
        let fraction = ratio(self.player.buffer(), 100.0);
        self.state.buffered_fraction = fraction;
        self.binding.buffer_width = fraction * self.binding.bar_width();
    }

    /// Moves the bar, keeping bullet, marker and buffer at the same fractions
    pub fn set_bar_area(&mut self, bar: Rect) {
        if self.binding.bar == bar {
            return;
        }
        self.binding.bar = bar;
        let width = self.binding.bar_width();
        self.binding.bullet_width = self.state.position_fraction * width;
        self.binding.marker_left = self.binding.bullet_width;
        self.binding.buffer_width = self.state.buffered_fraction * width;
    }

    pub fn binding(&self) -> &ProgressBinding {
        &self.binding
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    #[cfg(test)]
    pub fn is_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Pointer pressed. Returns whether the press landed on the bar or marker.
    pub fn on_pointer_down(&mut self, column: u16, row: u16) -> bool {
        if !self.input_bound || !self.binding.hit(column, row) {
            return false;
        }
        if !self.seek_allowed() {
            tracing::debug!("Ignoring drag, nothing loaded");
            return true;
        }
        self.state.is_dragging = true;
        self.pointer_captured = true;
        true
    }

    pub fn on_pointer_move(&mut self, column: u16) {
        if self.pointer_captured {
            self.resolve_pointer(column);
        }
    }

    /// Ends the drag. The release column becomes the seek target.
    pub fn on_pointer_up(&mut self, column: u16) {
        if !self.pointer_captured {
            return;
        }
        self.state.is_dragging = false;
        self.resolve_pointer(column);
        self.pointer_captured = false;
    }

    fn seek_allowed(&self) -> bool {
        match self.player.status() {
            PlaybackStatus::NotStarted => false,
            PlaybackStatus::Stopped => self.player.current_player().is_some(),
            _ => true,
        }
    }

    fn resolve_pointer(&mut self, column: u16) {
        if !self.seek_allowed() {
            return;
        }

        let width = self.binding.bar_width();
        let offset = (f64::from(column) - f64::from(self.binding.bar.x)).clamp(0.0, width);

        self.binding.bullet_width = offset;
        self.binding.marker_left = offset;

        let fraction = ratio(offset, width);
        self.state.position_fraction = fraction;

        let duration = self.player.duration();
        let position = if duration.is_finite() && duration > 0.0 {
            fraction * duration
        } else {
            0.0
        };
        self.binding.current_time = format_time(position);

        if !self.state.is_dragging {
            tracing::debug!(position, "Seeking");
            self.player.seek(position);
        }
    }
}

/// `part / whole` clamped to [0, 1]; zero when `whole` is not a positive number
fn ratio(part: f64, whole: f64) -> f64 {
    if !(whole.is_finite() && whole > 0.0) || !part.is_finite() {
        return 0.0;
    }
    (part / whole).clamp(0.0, 1.0)
}

/// Formats seconds as `MM:SS`, truncating fractions
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 { seconds } else { 0.0 };
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, secs)
}
