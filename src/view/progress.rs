//! Progress bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::ProgressBinding;
use super::utils::bar_segments;

pub fn render_progress_bar(frame: &mut Frame, area: Rect, progress: &ProgressBinding, dragging: bool) {
    let time_str = format!(" {} / {} ", progress.current_time, progress.total_time);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Progress ")
        .title_bottom(Line::from(time_str).right_aligned());
    frame.render_widget(block, area);

    let bar = progress.bar;
    if bar.width == 0 || bar.height == 0 {
        return;
    }

    let marker = progress.marker_area();
    if marker.width > 0 {
        let color = if dragging { Color::Yellow } else { Color::Green };
        frame.render_widget(Paragraph::new("●").style(Style::default().fg(color)), marker);
    }

    frame.render_widget(Paragraph::new(bar_line(progress)), bar);
}

fn bar_line(progress: &ProgressBinding) -> Line<'static> {
    let (played, buffered, rest) =
        bar_segments(progress.bar.width, progress.bullet_width, progress.buffer_width);
    Line::from(vec![
        Span::styled("━".repeat(usize::from(played)), Style::default().fg(Color::Green)),
        Span::styled("━".repeat(usize::from(buffered)), Style::default().fg(Color::Gray)),
        Span::styled("─".repeat(usize::from(rest)), Style::default().fg(Color::DarkGray)),
    ])
}
