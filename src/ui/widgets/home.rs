//! Home view: hero banner, popular items and feature blurbs.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ItemTable;
use crate::state::{Store, View};

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Мгновенный обмен", "Автоматическая обработка через Steam API"),
    ("🛡", "Безопасность", "Защищенные сделки без риска"),
    ("📈", "Лучшие цены", "Актуальные котировки рынка Steam"),
];

const GAMES: [&str; 3] = ["CS2", "Dota 2", "TF2"];

/// Home view.
pub struct HomeView;

impl HomeView {
    /// Render the home view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Hero
                Constraint::Min(6),    // Popular items
                Constraint::Length(4), // Features
            ])
            .split(area);

        render_hero(frame, chunks[0]);

        let items: Vec<_> = store.catalog.items.iter().collect();
        ItemTable::render(
            frame,
            chunks[1],
            "Популярные предметы",
            &items,
            store.catalog.selected_index(View::Home),
            &store.compare,
        );

        render_features(frame, chunks[2]);
    }
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let mut games = vec![Span::raw(" ")];
    for game in GAMES {
        games.push(Span::styled(
            format!(" {game} "),
            Style::default().fg(Color::Cyan).bg(Color::Black),
        ));
        games.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Обменивай предметы Steam ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "быстро и безопасно",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Автоматический обмен через Steam API. Тысячи предметов из CS2, Dota 2, TF2 и других игр.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(games),
    ];

    let hero = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(hero, area);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((icon, title, text), column) in FEATURES.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{icon} {title}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*text, Style::default().fg(Color::Gray))),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *column);
    }
}
