//! Inventory view: search box, category tabs and the filtered item list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::ItemTable;
use crate::catalog::InventoryFilter;
use crate::config::KeyBindings;
use crate::state::{Store, View};

/// Inventory view.
pub struct InventoryView;

impl InventoryView {
    /// Render the inventory view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Length(1), // Category tabs
                Constraint::Min(0),    // Items
            ])
            .split(area);

        render_search(frame, chunks[0], store, keys);
        render_filters(frame, chunks[1], store, keys);

        let items = store.catalog.inventory_items();
        ItemTable::render(
            frame,
            chunks[2],
            "Мой инвентарь",
            &items,
            store.catalog.selected_index(View::Inventory),
            &store.compare,
        );
    }
}

fn render_search(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
    let editing = store.app.is_editing();
    let query = &store.app.input_buffer;

    let content = if query.is_empty() && !editing {
        Line::from(Span::styled(
            format!("Поиск предметов... ({})", keys.search),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![Span::raw("🔍 "), Span::raw(query.as_str())])
    };

    let border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(content).block(block), area);

    if editing {
        // "🔍 " is three cells wide.
        let before_cursor = &query[..store.app.cursor_position];
        let offset = 3 + Line::from(before_cursor).width() as u16;
        frame.set_cursor_position((inner.x + offset.min(inner.width.saturating_sub(1)), inner.y));
    }
}

fn render_filters(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
    let mut spans = vec![Span::raw(" ")];

    for filter in InventoryFilter::ALL {
        let label = match filter {
            InventoryFilter::All => {
                format!("{} ({})", filter.label(), store.catalog.search_results().len())
            }
            _ => filter.label().to_string(),
        };

        let style = if store.catalog.filter == filter {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    }
    spans.pop();
    spans.push(Span::styled(
        format!("   [{}] сменить", keys.next_filter),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
