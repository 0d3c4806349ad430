//! Trades view: trade offers and recent history.

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{Store, TradeKind, TradeStatus, format_ago};

/// Trades view.
pub struct TradesView;

impl TradesView {
    /// Render the trades view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        render_offers(frame, chunks[0], store);
        render_history(frame, chunks[1], store);
    }
}

fn render_offers(frame: &mut Frame, area: Rect, store: &Store) {
    let outer = Block::default()
        .title(" Активные обмены ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let offers = &store.trades.offers;
    if offers.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, offers.len() as u32); offers.len()])
        .split(inner);

    for (offer, column) in offers.iter().zip(columns.iter()) {
        let icon = match offer.kind {
            TradeKind::Quick => "⚡",
            TradeKind::PeerToPeer => "👥",
        };

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{icon} {}", offer.title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                offer.description.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "[ Обменять ]",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true });

        frame.render_widget(card, *column);
    }
}

fn render_history(frame: &mut Frame, area: Rect, store: &Store) {
    let now = Utc::now();

    let items: Vec<ListItem> = store
        .trades
        .history
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", record.icon)),
                Span::styled(
                    record.item_name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}  ", format_ago(now, record.completed_at)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(record.status.label(), status_style(record.status)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" История обменов ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}

fn status_style(status: TradeStatus) -> Style {
    match status {
        TradeStatus::Completed => Style::default().fg(Color::Green),
    }
}
