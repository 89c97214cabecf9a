//! Search results table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::model::ResultsTable;

/// Column widths, one per results column.
const WIDTHS: [Constraint; 10] = [
    Constraint::Length(6),
    Constraint::Min(12),
    Constraint::Length(9),
    Constraint::Length(12),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(12),
    Constraint::Length(13),
    Constraint::Length(5),
    Constraint::Length(7),
];

/// Renders the last search results, or a placeholder when there are none.
///
/// Row `selected` is highlighted and kept in view.
#[mutants::skip]
pub fn draw_results(table: Option<&ResultsTable>, selected: usize, frame: &mut Frame, area: Rect) {
    let title = match table {
        Some(t) => format!(" Search results ({}) ", t.len()),
        None => " Search results ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(table) = table else {
        let hint = Paragraph::new("Press Alt+s to search").alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    };
    if table.is_empty() {
        let empty = Paragraph::new("No products found").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let header = Row::new(ResultsTable::headers().to_vec())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .map(|cells| Row::new(cells.iter().map(String::as_str).collect::<Vec<_>>()))
        .collect();

    let widget = Table::new(rows, WIDTHS)
        .header(header)
        .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow));
    let mut state = TableState::default().with_selected(Some(selected.min(table.len() - 1)));
    frame.render_stateful_widget(widget, inner, &mut state);
}
