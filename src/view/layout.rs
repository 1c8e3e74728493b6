//! Layout rendering (top bar, controls row)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Button, ControlsBinding, DisplayState};
use super::ViewLayout;

const BUTTON_WIDTH: u16 = 12;

pub fn button_areas(area: Rect) -> [Rect; 5] {
    Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 5])
        .spacing(1)
        .areas(area)
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, controls: &ControlsBinding, device_name: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Status + title
            Constraint::Length(25), // Device name
        ])
        .split(area);

    let status_style = match controls.state {
        DisplayState::Playing => Style::default().fg(Color::Green),
        DisplayState::Paused => Style::default().fg(Color::Yellow),
        DisplayState::Finished => Style::default().fg(Color::Magenta),
        DisplayState::Ready | DisplayState::Initializing => Style::default().fg(Color::White),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<9}", controls.status),
            status_style.add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(controls.title.as_str()),
    ]);

    let now_playing = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now Playing ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(now_playing, chunks[0]);

    let device = Paragraph::new(format!("🎵 {}", device_name))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Device "));
    frame.render_widget(device, chunks[1]);
}

pub fn render_controls(frame: &mut Frame, area: Rect, layout: &ViewLayout, controls: &ControlsBinding) {
    frame.render_widget(Block::default().borders(Borders::ALL).title(" Controls "), area);

    let toggle_label = if controls.play_toggle.shows_pause {
        "⏸ Pause"
    } else {
        "▶ Play"
    };

    let buttons = [
        (layout.play_toggle, toggle_label, &controls.play_toggle.button),
        (layout.prev, "⏮ Prev", &controls.prev),
        (layout.next, "⏭ Next", &controls.next),
        (layout.repeat, "🔁 Repeat", &controls.repeat),
        (layout.shuffle, "🔀 Shuffle", &controls.shuffle),
    ];

    for (button_area, label, button) in buttons {
        frame.render_widget(Paragraph::new(label).style(button_style(button)), button_area);
    }
}

fn button_style(button: &Button) -> Style {
    if button.enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
