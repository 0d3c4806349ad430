//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let loading = if store.catalog.loading {
            Span::styled(
                " Загрузка... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let items = Span::styled(
            format!(" {} предметов ", store.catalog.items.len()),
            Style::default().fg(Color::Gray),
        );

        let updated = match store.catalog.last_updated {
            Some(at) => Span::styled(
                format!("| обновлено {} UTC ", at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
            None => Span::raw(""),
        };

        // Decoration only; there is no sign-in flow.
        let sign_in = Span::styled(
            " ⏻ Войти через Steam ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        // Create the status line
        let left_content = vec![
            Span::styled(
                " ⚡ SteamTrade ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            items,
            updated,
            loading,
        ];

        let status_line = Line::from(left_content);

        // Calculate padding for the right-aligned button
        let left_width = status_line.width();
        let right_width = sign_in.width();
        let padding = area
            .width
            .saturating_sub((left_width + right_width) as u16);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding as usize)));
        full_line.push(sign_in);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
