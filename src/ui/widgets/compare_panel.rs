//! Comparison panel docked under the main view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{format_price, rarity_style, truncate};
use crate::catalog::Item;
use crate::compare::{ComparisonSummary, CompareSession, MAX_COMPARE_ITEMS};
use crate::config::KeyBindings;

const SLOT_HEIGHT: u16 = 6;
const SUMMARY_HEIGHT: u16 = 4;

/// Comparison panel: one card per slot plus the optional summary.
pub struct ComparePanel;

impl ComparePanel {
    /// Rows the panel needs. Zero while nothing is selected.
    pub fn height(compare: &CompareSession) -> u16 {
        if compare.is_empty() {
            return 0;
        }
        let summary = if compare.summary_visible() && compare.summary().is_some() {
            SUMMARY_HEIGHT
        } else {
            0
        };
        2 + SLOT_HEIGHT + summary
    }

    /// Render the panel.
    pub fn render(frame: &mut Frame, area: Rect, compare: &CompareSession, keys: &KeyBindings) {
        if compare.is_empty() || area.height == 0 {
            return;
        }

        let mut hints = Vec::new();
        if compare.can_toggle_summary() {
            let label = if compare.summary_visible() {
                "Скрыть"
            } else {
                "Показать сравнение"
            };
            hints.push(Span::styled(
                format!(" {} ", keys.toggle_summary),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            hints.push(Span::raw(format!(" {label}  ")));
        }
        hints.push(Span::styled(
            format!(" {} ", keys.clear_compare),
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        ));
        hints.push(Span::raw(" Очистить "));

        let selection = compare.selection();
        let mut title = format!(
            " Сравнение предметов ({}/{}) ",
            selection.len(),
            selection.capacity()
        );
        if !selection.is_full() {
            title.push_str(&format!("· свободно: {} ", selection.remaining()));
        }

        let block = Block::default()
            .title(title)
            .title_top(Line::from(hints).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary = compare.summary().filter(|_| compare.summary_visible());
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SLOT_HEIGHT),
                Constraint::Length(if summary.is_some() { SUMMARY_HEIGHT } else { 0 }),
            ])
            .split(inner);

        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, MAX_COMPARE_ITEMS as u32); MAX_COMPARE_ITEMS])
            .split(rows[0]);

        for (slot, area) in slots.iter().enumerate() {
            match selection.get(slot) {
                Some(item) => render_slot(frame, *area, item, &keys.remove_slot[slot]),
                None => render_empty_slot(frame, *area),
            }
        }

        if let Some(summary) = summary {
            render_summary(frame, rows[1], &summary);
        }
    }
}

fn render_slot(frame: &mut Frame, area: Rect, item: &Item, remove_key: &str) {
    let label = Style::default().fg(Color::DarkGray);
    let width = area.width.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(Span::styled(
            truncate(&format!("{} {}", item.icon, item.name), width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Цена: ", label),
            Span::styled(
                format_price(item.price),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Редкость: ", label),
            Span::styled(item.rarity.as_str(), rarity_style(item.rarity)),
        ]),
        Line::from(vec![
            Span::styled("Категория: ", label),
            Span::raw(item.category.as_str()),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title_bottom(
                Line::from(Span::styled(format!(" {remove_key} ✕ "), label)).right_aligned(),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(card, area);
}

fn render_empty_slot(frame: &mut Frame, area: Rect) {
    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "+ Добавить предмет",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}

fn render_summary(frame: &mut Frame, area: Rect, summary: &ComparisonSummary<'_>) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("Самый дорогой: ", label),
            Span::styled(summary.most_expensive.name.as_str(), value),
            Span::styled(
                format!(" ({})", format_price(summary.most_expensive.price)),
                Style::default().fg(Color::Green),
            ),
            Span::raw("    "),
            Span::styled("Самый дешёвый: ", label),
            Span::styled(summary.cheapest.name.as_str(), value),
            Span::styled(
                format!(" ({})", format_price(summary.cheapest.price)),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::styled("Средняя цена: ", label),
            Span::styled(format_price(summary.average_price), value.fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled("Разница цен: ", label),
            Span::styled(format_price(summary.price_spread), value.fg(Color::Yellow)),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Анализ сравнения ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;
    use ratatui::{Terminal, backend::TestBackend};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(id: u32, name: &str, price: Decimal) -> Item {
        Item::new(id, name, "🎯", Rarity::Rare, price, "Weapon")
    }

    fn draw(compare: &CompareSession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 14)).unwrap();
        let keys = KeyBindings::default();
        terminal
            .draw(|frame| {
                let area = Rect {
                    height: ComparePanel::height(compare),
                    ..frame.area()
                };
                ComparePanel::render(frame, area, compare, &keys);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_height_follows_selection_and_summary() {
        let mut compare = CompareSession::new();
        assert_eq!(ComparePanel::height(&compare), 0);

        compare.toggle(&item(1, "A", dec!(10)));
        let slots_only = ComparePanel::height(&compare);
        assert!(slots_only > 0);

        compare.toggle(&item(2, "B", dec!(20)));
        compare.toggle_summary();
        assert_eq!(ComparePanel::height(&compare), slots_only + SUMMARY_HEIGHT);
    }

    #[test]
    fn test_summary_drawn_only_when_visible() {
        let mut compare = CompareSession::new();
        compare.toggle(&item(1, "Alpha", dec!(100)));
        compare.toggle(&item(2, "Beta", dec!(300)));

        let hidden = draw(&compare);
        assert!(!hidden.contains("Анализ сравнения"));
        assert!(hidden.contains("Показать сравнение"));

        compare.toggle_summary();
        let shown = draw(&compare);
        assert!(shown.contains("Анализ сравнения"));
        assert!(shown.contains("$200"));
    }

    #[test]
    fn test_summary_disappears_after_partial_removal() {
        let mut compare = CompareSession::new();
        compare.toggle(&item(1, "Alpha", dec!(100)));
        compare.toggle(&item(2, "Beta", dec!(300)));
        compare.toggle_summary();

        compare.remove(1);
        let screen = draw(&compare);
        assert!(!screen.contains("Анализ сравнения"));
        assert!(!screen.contains("Показать сравнение"));
        assert!(screen.contains("Beta"));
        assert!(screen.contains("+ Добавить предмет"));
    }

    #[test]
    fn test_unsummable_prices_draw_slots_only() {
        let mut compare = CompareSession::new();
        compare.toggle(&item(1, "Alpha", Decimal::MAX));
        compare.toggle(&item(2, "Beta", Decimal::MAX));
        compare.toggle_summary();

        assert_eq!(ComparePanel::height(&compare), 2 + SLOT_HEIGHT);
        let screen = draw(&compare);
        assert!(screen.contains("Beta"));
        assert!(!screen.contains("Анализ сравнения"));
    }

    #[test]
    fn test_empty_panel_draws_nothing() {
        let screen = draw(&CompareSession::new());
        assert!(screen.trim().is_empty());
    }
}
