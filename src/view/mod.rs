//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Rendering only reads the bindings owned by the controller; the layout
//! computed here is handed back to the controller so it can hit-test
//! pointer input against what was drawn.
//!
//! - `utils`: Shared utility functions
//! - `layout`: Top bar and controls row
//! - `playlist`: Playlist panel
//! - `progress`: Progress bar with drag marker and time labels

mod utils;
mod layout;
mod playlist;
mod progress;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    Frame,
};

use crate::controller::PlaybackController;

/// Screen areas of everything the user can click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewLayout {
    pub playlist: Rect,
    pub play_toggle: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub repeat: Rect,
    pub shuffle: Rect,
    pub progress_bar: Rect,
}

struct Regions {
    top_bar: Rect,
    playlist: Rect,
    controls: Rect,
    progress: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status + title + device
            Constraint::Min(0),    // Playlist
            Constraint::Length(3), // Buttons
            Constraint::Length(4), // Marker row + bar row
        ])
        .split(area);

    Regions {
        top_bar: chunks[0],
        playlist: chunks[1],
        controls: chunks[2],
        progress: chunks[3],
    }
}

pub fn compute_layout(area: Rect) -> ViewLayout {
    let regions = regions(area);
    let buttons = layout::button_areas(regions.controls.inner(Margin::new(1, 1)));
    let progress_inner = regions.progress.inner(Margin::new(1, 1));

    ViewLayout {
        playlist: regions.playlist,
        play_toggle: buttons[0],
        prev: buttons[1],
        next: buttons[2],
        repeat: buttons[3],
        shuffle: buttons[4],
        progress_bar: Rect::new(
            progress_inner.x,
            progress_inner.y.saturating_add(1),
            progress_inner.width,
            progress_inner.height.min(1),
        ),
    }
}

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        layout: &ViewLayout,
        controller: &PlaybackController,
        device_name: &str,
    ) {
        let regions = regions(frame.area());
        let controls = controller.controls();

        layout::render_top_bar(frame, regions.top_bar, controls, device_name);

        let current = controller.current_track();
        playlist::render_playlist(
            frame,
            regions.playlist,
            controller.tracks(),
            current.as_ref().map(|t| t.id.as_str()),
        );

        layout::render_controls(frame, regions.controls, layout, controls);

        progress::render_progress_bar(
            frame,
            regions.progress,
            controller.progress(),
            controller.progress_state().is_dragging,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::controller::testing::{track, FakePlayer, FakePlaylist};
    use crate::controller::SystemClock;
    use crate::model::{PlaybackStatus, PlayerEvent};

    #[test]
    fn layout_places_bar_below_marker_row() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        // progress block occupies rows 20..24, inner rows 21 and 22
        assert_eq!(layout.progress_bar, Rect::new(1, 22, 78, 1));
        assert_eq!(layout.playlist, Rect::new(0, 3, 80, 14));
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        let buttons = [
            layout.play_toggle,
            layout.prev,
            layout.next,
            layout.repeat,
            layout.shuffle,
        ];
        for (i, a) in buttons.iter().enumerate() {
            assert_eq!(a.height, 1);
            assert!(a.width > 0);
            for b in &buttons[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let layout = compute_layout(Rect::new(0, 0, 3, 2));
        assert!(layout.progress_bar.width <= 3);
    }

    #[test]
    fn renders_status_title_playlist_and_labels() {
        let player = Arc::new(FakePlayer::new(PlaybackStatus::Ready));
        let playlist = Arc::new(FakePlaylist::new(vec![track("a", "Opening Theme")]));
        let mut controller = PlaybackController::new(player, playlist, Arc::new(SystemClock));
        controller.handle_player_event(PlayerEvent::Ready);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let layout = compute_layout(frame.area());
                controller.apply_layout(&layout);
                AppView::render(frame, &layout, &controller, "test-device");
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("READY"));
        assert!(text.contains("CHOOSE TRACK FROM PLAYLIST"));
        assert!(text.contains("Opening Theme"));
        assert!(text.contains("00:00 / 00:00"));
        assert!(text.contains("test-device"));
        assert_eq!(controller.progress().bar, Rect::new(1, 22, 78, 1));
    }
}
