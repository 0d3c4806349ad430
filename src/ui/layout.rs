//! Layout management for the TUI.

use crate::config::UiConfig;
use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top). Empty when disabled.
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Comparison panel docked at the bottom. Empty when nothing is selected.
    pub compare_area: Rect,
    /// Key hint line (bottom). Empty when disabled.
    pub hint_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, ui: &UiConfig, compare_height: u16) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(u16::from(ui.show_status_bar)), // Status bar
                Constraint::Length(1),                             // Tab bar
                Constraint::Min(0),                                // Main content
                Constraint::Length(compare_height),                // Compare panel
                Constraint::Length(u16::from(ui.show_help_bar)),   // Key hints
            ])
            .split(area);

        // Notification area is centered in the main area
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + (area.height / 2).saturating_sub(2),
            width: area.width / 2,
            height: 4.min(area.height),
        };

        Self {
            status_area: chunks[0],
            tab_area: chunks[1],
            main_area: chunks[2],
            compare_area: chunks[3],
            hint_area: chunks[4],
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_panel_takes_bottom_rows() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = Layout::new(area, &UiConfig::default(), 10);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.compare_area.height, 10);
        assert_eq!(layout.hint_area.y, 39);
        assert_eq!(layout.compare_area.y, 29);
        assert_eq!(layout.main_area.height, 40 - 1 - 1 - 10 - 1);
    }

    #[test]
    fn test_disabled_bars_take_no_space() {
        let ui = UiConfig {
            show_status_bar: false,
            show_help_bar: false,
            ..Default::default()
        };
        let layout = Layout::new(Rect::new(0, 0, 80, 24), &ui, 0);
        assert_eq!(layout.status_area.height, 0);
        assert_eq!(layout.hint_area.height, 0);
        assert_eq!(layout.main_area.height, 23);
    }
}
