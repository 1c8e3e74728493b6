//! Playlist panel rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::controller::format_time;
use crate::model::Track;
use super::utils::{calculate_num_width, truncate_string};

pub fn render_playlist(frame: &mut Frame, area: Rect, tracks: &[Track], current_id: Option<&str>) {
    let num_width = calculate_num_width(tracks.len());
    // borders(2) + number + separators(4) + duration(5)
    let title_width = usize::from(area.width).saturating_sub(2 + num_width + 4 + 5);

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_current = current_id == Some(track.id.as_str());
            let style = if is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{:>num_width$}  {}  {}",
                i + 1,
                truncate_string(&track.name, title_width),
                format_time(track.duration_secs),
            ))
            .style(style)
        })
        .collect();

    // Rows are hit-tested from the first inner line, so no padding here
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Playlist "));
    frame.render_widget(list, area);
}
