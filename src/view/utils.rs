//! Utility functions for rendering UI components

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Cell counts for the filled, buffered and empty parts of a bar.
/// Partial cells round down.
pub fn bar_segments(width: u16, bullet_width: f64, buffer_width: f64) -> (u16, u16, u16) {
    let cells = |w: f64| (w.max(0.0) as u16).min(width);
    let played = cells(bullet_width);
    let buffered = cells(buffer_width).saturating_sub(played);
    (played, buffered, width - played - buffered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_width_grows_with_digits() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(10), 3);
        assert_eq!(calculate_num_width(250), 4);
    }

    #[test]
    fn truncate_pads_or_cuts() {
        assert_eq!(truncate_string("abc", 5), "abc  ");
        assert_eq!(truncate_string("abcdefgh", 6), "abc...");
    }

    #[test]
    fn segments_cover_whole_bar() {
        assert_eq!(bar_segments(50, 12.5, 20.0), (12, 8, 30));
        assert_eq!(bar_segments(50, 30.0, 20.0), (30, 0, 20));
        assert_eq!(bar_segments(50, 80.0, -4.0), (50, 0, 0));
        assert_eq!(bar_segments(0, 3.0, 3.0), (0, 0, 0));
    }
}
