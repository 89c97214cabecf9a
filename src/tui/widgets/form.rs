//! Form widget: focus tracking and rendering of labelled inputs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Width reserved for labels, in columns.
const LABEL_WIDTH: usize = 15;

/// Which of a fixed number of inputs has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    index: usize,
    len: usize,
}

impl Focus {
    /// Creates focus over `len` inputs, starting on the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Returns the index of the focused input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves focus to the next input, wrapping around.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Moves focus to the previous input, wrapping around.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Focuses `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// One labelled input to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRow<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

/// Renders one input per line inside a bordered block titled `title`.
///
/// The focused row gets a yellow label and a block cursor.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(title: &str, rows: &[FormRow<'_>], focus: usize, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = rows.iter().map(|_| Constraint::Length(1)).collect();
    let lines = Layout::vertical(constraints).split(inner);

    for (i, row) in rows.iter().enumerate() {
        let is_focused = i == focus;
        let label_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", row.label), label_style),
            Span::raw(row.value),
        ];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), lines[i]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        assert_eq!(Focus::new(3).index(), 0);
    }

    #[test]
    fn next_advances_and_wraps() {
        let mut focus = Focus::new(3);
        focus.next();
        assert_eq!(focus.index(), 1);
        focus.next();
        focus.next();
        assert_eq!(focus.index(), 0);
    }

    #[test]
    fn prev_wraps() {
        let mut focus = Focus::new(3);
        focus.prev();
        assert_eq!(focus.index(), 2);
        focus.prev();
        assert_eq!(focus.index(), 1);
    }

    #[test]
    fn empty_focus_is_noop() {
        let mut focus = Focus::new(0);
        focus.next();
        focus.prev();
        assert_eq!(focus.index(), 0);
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut focus = Focus::new(3);
        focus.set(2);
        assert_eq!(focus.index(), 2);
        focus.set(3);
        assert_eq!(focus.index(), 2);
    }

    // --- Rendering ---

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn renders_labels_and_values() {
        let rows = [
            FormRow {
                label: "ID",
                value: "17",
            },
            FormRow {
                label: "Name",
                value: "Kettle",
            },
        ];
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| draw_form("Product", &rows, 1, frame, frame.area()))
            .unwrap();
        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("Product"), "should show title");
        assert!(output.contains("ID"));
        assert!(output.contains("17"));
        assert!(output.contains("Kettle"));
        assert!(output.contains('\u{2588}'), "focused row shows a cursor");
    }
}
