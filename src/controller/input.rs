//! Key and mouse event routing

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::PlaybackController;

impl PlaybackController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.next_track(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.previous_track(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.toggle_repeat(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_shuffle(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.progress.on_pointer_down(column, row) {
                    self.click(column, row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.progress.on_pointer_move(column);
            }
            MouseEventKind::Up(MouseButton::Left) => self.progress.on_pointer_up(column),
            _ => {}
        }
    }

    fn click(&self, column: u16, row: u16) {
        let controls = &self.controls;
        if controls.play_toggle.button.hit(column, row) {
            self.toggle_playback();
        } else if controls.prev.hit(column, row) {
            self.previous_track();
        } else if controls.next.hit(column, row) {
            self.next_track();
        } else if controls.repeat.hit(column, row) {
            self.toggle_repeat();
        } else if controls.shuffle.hit(column, row) {
            self.toggle_shuffle();
        } else if let Some(index) = controls.playlist_row(column, row) {
            self.play_track_at(index);
        }
    }
}
