//! Profile view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::state::{Store, format_usd};

/// Profile view.
pub struct ProfileView;

impl ProfileView {
    /// Render the profile view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(4), // Stats
                Constraint::Min(0),    // Achievements and settings
            ])
            .split(area);

        let profile = &store.profile;

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("👤 {} ", profile.display_name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {} ", profile.badge),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ),
            ]),
            Line::from(Span::styled(
                format!("Steam ID: {}", profile.steam_id),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(header, chunks[0]);

        let stats = [
            (profile.trade_count.to_string(), "Обменов"),
            (format_usd(profile.turnover), "Оборот"),
            (format!("{}%", profile.rating.normalize()), "Рейтинг"),
        ];
        let stat_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[1]);
        for ((value, label), column) in stats.iter().zip(stat_columns.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    value.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, *column);
        }

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        let achievements: Vec<ListItem> = profile
            .achievements
            .iter()
            .map(|a| ListItem::new(format!(" 🏆 {a}")))
            .collect();
        frame.render_widget(
            List::new(achievements).block(
                Block::default()
                    .title(" Достижения ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            lists[0],
        );

        let settings: Vec<ListItem> = profile
            .settings
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {s}")),
                    Span::styled(" ›", Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(settings).block(
                Block::default()
                    .title(" Настройки ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            lists[1],
        );
    }
}
