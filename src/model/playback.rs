//! Progress and controls state, plus the UI bindings each component owns

use ratatui::layout::{Position, Rect};

use super::types::DisplayState;

/// Transient progress state owned by the progress tracker
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressState {
    pub is_dragging: bool,
    /// Always within [0, 1]
    pub position_fraction: f64,
    /// Always within [0, 1]
    pub buffered_fraction: f64,
}

/// Visual parts of the progress bar. Only the progress tracker mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBinding {
    /// One-row bar. The drag marker lives on the row just above it.
    pub bar: Rect,
    pub bullet_width: f64,
    pub marker_left: f64,
    pub buffer_width: f64,
    pub current_time: String,
    pub total_time: String,
}

impl Default for ProgressBinding {
    fn default() -> Self {
        Self {
            bar: Rect::default(),
            bullet_width: 0.0,
            marker_left: 0.0,
            buffer_width: 0.0,
            current_time: "00:00".to_string(),
            total_time: "00:00".to_string(),
        }
    }
}

impl ProgressBinding {
    pub fn bar_width(&self) -> f64 {
        f64::from(self.bar.width)
    }

    /// Cell occupied by the drag marker
    pub fn marker_area(&self) -> Rect {
        if self.bar.width == 0 || self.bar.y == 0 {
            return Rect::default();
        }
        let max_offset = self.bar.width - 1;
        let offset = (self.marker_left.max(0.0) as u16).min(max_offset);
        Rect::new(self.bar.x + offset, self.bar.y - 1, 1, 1)
    }

    pub fn hit(&self, column: u16, row: u16) -> bool {
        let at = Position::new(column, row);
        self.bar.contains(at) || self.marker_area().contains(at)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Button {
    pub area: Rect,
    pub enabled: bool,
}

impl Button {
    pub fn enabled() -> Self {
        Self { area: Rect::default(), enabled: true }
    }

    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// Play/pause toggle. `shows_pause` flips the icon to offer pausing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleButton {
    pub button: Button,
    pub shows_pause: bool,
}

/// Buttons, status and title. Only the playback controller mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlsBinding {
    pub play_toggle: ToggleButton,
    pub prev: Button,
    pub next: Button,
    pub repeat: Button,
    pub shuffle: Button,
    pub state: DisplayState,
    pub status: String,
    pub title: String,
    pub playlist_area: Rect,
}

impl Default for ControlsBinding {
    fn default() -> Self {
        let state = DisplayState::default();
        Self {
            // Toggle and next stay disabled until the player reports ready
            play_toggle: ToggleButton::default(),
            prev: Button::enabled(),
            next: Button::default(),
            repeat: Button::enabled(),
            shuffle: Button::enabled(),
            state,
            status: state.label().to_string(),
            title: String::new(),
            playlist_area: Rect::default(),
        }
    }
}

impl ControlsBinding {
    /// Index of the playlist row under the pointer. Rows start one cell
    /// inside the bordered list area.
    pub fn playlist_row(&self, column: u16, row: u16) -> Option<usize> {
        let inner = Rect::new(
            self.playlist_area.x.saturating_add(1),
            self.playlist_area.y.saturating_add(1),
            self.playlist_area.width.saturating_sub(2),
            self.playlist_area.height.saturating_sub(2),
        );
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        Some(usize::from(row - inner.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_sits_above_bar_at_offset() {
        let binding = ProgressBinding {
            bar: Rect::new(10, 5, 40, 1),
            marker_left: 12.7,
            ..Default::default()
        };
        assert_eq!(binding.marker_area(), Rect::new(22, 4, 1, 1));
        assert!(binding.hit(22, 4));
        assert!(!binding.hit(23, 4));
        assert!(binding.hit(49, 5));
        assert!(!binding.hit(50, 5));
    }

    #[test]
    fn marker_is_kept_on_last_cell() {
        let binding = ProgressBinding {
            bar: Rect::new(0, 3, 20, 1),
            marker_left: 20.0,
            ..Default::default()
        };
        assert_eq!(binding.marker_area(), Rect::new(19, 2, 1, 1));
    }

    #[test]
    fn zero_width_bar_has_no_marker() {
        let binding = ProgressBinding::default();
        assert_eq!(binding.marker_area(), Rect::default());
        assert!(!binding.hit(0, 0));
    }

    #[test]
    fn playlist_row_skips_border() {
        let controls = ControlsBinding {
            playlist_area: Rect::new(0, 0, 30, 10),
            ..Default::default()
        };
        assert_eq!(controls.playlist_row(0, 1), None);
        assert_eq!(controls.playlist_row(1, 0), None);
        assert_eq!(controls.playlist_row(1, 1), Some(0));
        assert_eq!(controls.playlist_row(5, 4), Some(3));
        assert_eq!(controls.playlist_row(5, 9), None);
    }

    #[test]
    fn controls_start_disabled_until_ready() {
        let controls = ControlsBinding::default();
        assert!(!controls.play_toggle.button.enabled);
        assert!(!controls.next.enabled);
        assert!(controls.prev.enabled);
        assert_eq!(controls.status, "LOADING");
    }
}
