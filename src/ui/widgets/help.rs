//! Help popup and the bottom key hint line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use super::rarity_style;
use crate::catalog::Rarity;
use crate::config::KeyBindings;
use crate::state::{Store, View};

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}

/// Help popup listing the active key bindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let views = format!(
            "{}/{}/{}/{}",
            keys.home, keys.inventory, keys.trades, keys.profile
        );
        let slots = keys.remove_slot.join(" ");

        let mut help_text = vec![
            section("Навигация"),
            entry(&format!("{}/↓", keys.down), "Вниз"),
            entry(&format!("{}/↑", keys.up), "Вверх"),
            entry("Home/End", "В начало / в конец"),
            entry(&keys.next_tab, "Следующая вкладка"),
            entry(&views, "Главная / Инвентарь / Обмены / Профиль"),
            Line::from(""),
            section("Инвентарь"),
            entry(&keys.search, "Поиск по названию"),
            entry(&keys.next_filter, "Сменить категорию"),
            entry(&keys.back, "Отменить поиск"),
            Line::from(""),
            section("Сравнение"),
            entry(&keys.toggle_compare, "Добавить / убрать предмет"),
            entry(&slots, "Убрать предмет из слота"),
            entry(&keys.toggle_summary, "Показать / скрыть анализ"),
            entry(&keys.clear_compare, "Очистить сравнение"),
            Line::from(""),
            section("Общее"),
            entry(&keys.refresh, "Обновить каталог"),
            entry(&keys.help, "Справка"),
            entry(&keys.quit, "Выход"),
            Line::from(""),
            section("Редкость"),
        ];

        let mut legend = vec![Span::raw("  ")];
        for rarity in Rarity::ALL {
            legend.push(Span::styled(rarity.as_str(), rarity_style(rarity)));
            legend.push(Span::raw("  "));
        }
        help_text.push(Line::from(legend));

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Справка ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

/// Single line of context-sensitive key hints.
pub struct KeyHints;

impl KeyHints {
    /// Render the hint line.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let mut hints: Vec<(&str, &str)> = Vec::new();

        if store.app.is_editing() {
            hints.push(("Enter", "готово"));
            hints.push((keys.back.as_str(), "отмена"));
        } else {
            if store.app.current_view.has_item_list() {
                hints.push((keys.toggle_compare.as_str(), "сравнить"));
            }
            if store.app.current_view == View::Inventory {
                hints.push((keys.next_filter.as_str(), "категория"));
            }
            hints.push((keys.search.as_str(), "поиск"));
            if store.compare.can_toggle_summary() {
                let label = if store.compare.summary_visible() {
                    "скрыть анализ"
                } else {
                    "анализ"
                };
                hints.push((keys.toggle_summary.as_str(), label));
            }
            if !store.compare.is_empty() {
                hints.push((keys.clear_compare.as_str(), "очистить"));
            }
            hints.push((keys.help.as_str(), "справка"));
            hints.push((keys.quit.as_str(), "выход"));
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(
                key.to_string(),
                Style::default().fg(Color::Black).bg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
