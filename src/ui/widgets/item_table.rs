//! Item list shared by the home and inventory views.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::{format_price, rarity_style, truncate};
use crate::catalog::Item;
use crate::compare::CompareSession;

/// Table of catalog items with comparison markers.
pub struct ItemTable;

impl ItemTable {
    /// Render the table.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        items: &[&Item],
        selected: Option<usize>,
        compare: &CompareSession,
    ) {
        let header_cells = ["", "Предмет", "Редкость", "Категория", "Цена", ""]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = items.iter().map(|item| {
            let in_compare = compare.contains(item.id);
            let marker = if in_compare {
                Cell::from("[✓]").style(Style::default().fg(Color::Green))
            } else {
                Cell::from("[+]").style(Style::default().fg(Color::DarkGray))
            };

            let name_style = if in_compare {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            let cells = vec![
                marker,
                Cell::from(format!("{} {}", item.icon, truncate(&item.name, 40))).style(name_style),
                Cell::from(item.rarity.as_str()).style(rarity_style(item.rarity)),
                Cell::from(item.category.clone()),
                Cell::from(format_price(item.price)).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                // Decoration only; trades are not executed.
                Cell::from("⇄ Обменять").style(Style::default().fg(Color::DarkGray)),
            ];

            Row::new(cells).height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(24),
                Constraint::Length(11),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(11),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" {title} ({}) ", items.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(selected);

        frame.render_stateful_widget(table, area, &mut state);

        if items.is_empty() {
            render_empty(frame, area);
        }
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    if inner.height < 3 {
        return;
    }

    let message = Line::from(vec![Span::styled(
        "Ничего не найдено",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )]);

    let message_area = Rect {
        y: inner.y + 2,
        height: 1,
        ..inner
    };
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), message_area);
}
