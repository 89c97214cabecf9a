//! Product form screen: the form, its buttons, the flash line and the
//! search results.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::Operation;
use crate::model::{Field, ViewState};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{Focus, FormRow, draw_flash, draw_form, draw_results};

/// State for the product form screen.
#[derive(Debug, Clone)]
pub struct ProductFormState {
    view: ViewState,
    focus: Focus,
    selected: usize,
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductFormState {
    /// Creates the screen with an empty form, focus on the id field.
    pub fn new() -> Self {
        Self {
            view: ViewState::new(),
            focus: Focus::new(Field::COUNT),
            selected: 0,
        }
    }

    /// Returns the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the view state for the controller to update.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Returns the focused field.
    pub fn focused(&self) -> Field {
        Field::from_index(self.focus.index()).unwrap_or(Field::Id)
    }

    /// Moves focus to `field`.
    pub fn focus(&mut self, field: Field) {
        self.focus.set(field.index());
    }

    /// Returns the selected search results row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the results selection back to the first row.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    fn result_count(&self) -> usize {
        self.view.results().map_or(0, |table| table.len())
    }
}

impl ScreenState for ProductFormState {
    /// Alt+letter presses a button, PageUp/PageDown/Home/End move through
    /// the search results, everything else edits the form.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(ch) = key.code
                && let Some(op) = Operation::from_shortcut(ch.to_ascii_lowercase())
            {
                return Action::Submit(op);
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev();
                Action::None
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::PageDown => {
                let count = self.result_count();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = self.result_count().saturating_sub(1);
                Action::None
            }
            KeyCode::Backspace => {
                let field = self.focused();
                self.view.form.pop_char(field);
                Action::None
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let field = self.focused();
                self.view.form.push_char(field, ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// One-line button bar, e.g. `Alt+c Create  Alt+u Update …`.
fn button_bar() -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let label_style = Style::default().fg(Color::White);
    let mut spans = Vec::new();
    for op in Operation::ALL {
        spans.push(Span::styled(format!("Alt+{}", op.shortcut()), key_style));
        spans.push(Span::styled(format!(" {}  ", op.label()), label_style));
    }
    Line::from(spans)
}

/// Renders the product form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_product_form(state: &ProductFormState, pending: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" productdesk ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, buttons_area, flash_area, results_area, footer_area] = Layout::vertical([
        Constraint::Length(Field::COUNT as u16 + 2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let form = &state.view().form;
    let rows: Vec<FormRow> = Field::ALL
        .iter()
        .map(|&field| FormRow {
            label: field.label(),
            value: form.value(field),
        })
        .collect();
    draw_form("Product", &rows, state.focus.index(), frame, form_area);

    frame.render_widget(Paragraph::new(button_bar()), buttons_area);
    draw_flash(state.view().flash(), pending, frame, flash_area);
    draw_results(state.view().results(), state.selected(), frame, results_area);

    let footer = Paragraph::new(
        "Tab/↓: next field  Shift-Tab/↑: prev  PgUp/PgDn/Home/End: results  F1: help  Esc: quit",
    )
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE)
    }

    fn alt(ch: char) -> KeyEvent {
        key(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    fn type_string(state: &mut ProductFormState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_empty_on_id() {
            let state = ProductFormState::new();
            assert_eq!(state.focused(), Field::Id);
            assert!(state.view().form.is_cleared());
        }

        #[test]
        fn default_trait() {
            let state = ProductFormState::default();
            assert_eq!(state.focused(), Field::Id);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = ProductFormState::new();
            type_string(&mut state, "12");
            assert_eq!(state.view().form.value(Field::Id), "12");
        }

        #[test]
        fn tab_moves_to_next_field() {
            let mut state = ProductFormState::new();
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "Mug");
            assert_eq!(state.view().form.value(Field::Name), "Mug");
            assert_eq!(state.view().form.value(Field::Id), "");
        }

        #[test]
        fn backtab_wraps_to_last_field() {
            let mut state = ProductFormState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focused(), Field::Disable);
        }

        #[test]
        fn enter_and_arrows_move_focus() {
            let mut state = ProductFormState::new();
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.focused(), Field::Price);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.focused(), Field::Name);
        }

        #[test]
        fn backspace_deletes_char() {
            let mut state = ProductFormState::new();
            type_string(&mut state, "123");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.view().form.value(Field::Id), "12");
        }

        #[test]
        fn shifted_chars_are_typed() {
            let mut state = ProductFormState::new();
            state.focus(Field::Name);
            state.handle_key(key(KeyCode::Char('M'), KeyModifiers::SHIFT));
            assert_eq!(state.view().form.value(Field::Name), "M");
        }

        #[test]
        fn control_chars_are_ignored() {
            let mut state = ProductFormState::new();
            let action = state.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
            assert_eq!(action, Action::None);
            assert!(state.view().form.is_cleared());
        }
    }

    mod buttons {
        use super::*;

        #[test]
        fn alt_shortcuts_submit_operations() {
            let mut state = ProductFormState::new();
            for op in Operation::ALL {
                assert_eq!(state.handle_key(alt(op.shortcut())), Action::Submit(op));
            }
            assert!(state.view().form.is_cleared(), "shortcuts never type");
        }

        #[test]
        fn uppercase_alt_shortcut_still_submits() {
            let mut state = ProductFormState::new();
            assert_eq!(
                state.handle_key(alt('S')),
                Action::Submit(Operation::Search)
            );
        }

        #[test]
        fn alt_shift_shortcut_submits_without_typing() {
            let mut state = ProductFormState::new();
            let action = state.handle_key(key(
                KeyCode::Char('X'),
                KeyModifiers::ALT | KeyModifiers::SHIFT,
            ));
            assert_eq!(action, Action::Submit(Operation::Delete));
            assert!(state.view().form.is_cleared());
        }

        #[test]
        fn unbound_alt_shift_key_does_nothing() {
            let mut state = ProductFormState::new();
            let action = state.handle_key(key(
                KeyCode::Char('Z'),
                KeyModifiers::ALT | KeyModifiers::SHIFT,
            ));
            assert_eq!(action, Action::None);
            assert!(state.view().form.is_cleared());
        }

        #[test]
        fn unbound_alt_key_does_nothing() {
            let mut state = ProductFormState::new();
            assert_eq!(state.handle_key(alt('z')), Action::None);
            assert!(state.view().form.is_cleared());
        }
    }

    mod results_selection {
        use serde_json::json;

        use super::*;
        use crate::model::{ProductRecord, ResultsTable};

        pub(super) fn with_results(count: u32) -> ProductFormState {
            let records: Vec<ProductRecord> = (0..count)
                .map(|i| {
                    serde_json::from_value(json!({ "id": i, "name": format!("Item{i}") })).unwrap()
                })
                .collect();
            let mut state = ProductFormState::new();
            state
                .view_mut()
                .show_results(ResultsTable::from_records(&records));
            state
        }

        #[test]
        fn page_down_moves_and_clamps() {
            let mut state = with_results(3);
            for _ in 0..5 {
                state.handle_key(press(KeyCode::PageDown));
            }
            assert_eq!(state.selected(), 2);
        }

        #[test]
        fn page_up_saturates() {
            let mut state = with_results(3);
            state.handle_key(press(KeyCode::PageDown));
            state.handle_key(press(KeyCode::PageUp));
            state.handle_key(press(KeyCode::PageUp));
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn home_and_end_jump() {
            let mut state = with_results(20);
            state.handle_key(press(KeyCode::End));
            assert_eq!(state.selected(), 19);
            state.handle_key(press(KeyCode::Home));
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn no_results_keeps_selection_at_zero() {
            let mut state = ProductFormState::new();
            state.handle_key(press(KeyCode::PageDown));
            state.handle_key(press(KeyCode::End));
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn selection_keys_never_edit_form() {
            let mut state = with_results(2);
            state.handle_key(press(KeyCode::End));
            assert!(state.view().form.is_cleared());
            assert_eq!(state.focused(), Field::Id);
        }

        #[test]
        fn reset_returns_to_first_row() {
            let mut state = with_results(4);
            state.handle_key(press(KeyCode::End));
            state.reset_selection();
            assert_eq!(state.selected(), 0);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn f1_opens_help() {
            let mut state = ProductFormState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::F(1))),
                Action::Navigate(Screen::Help)
            );
        }

        #[test]
        fn esc_quits() {
            let mut state = ProductFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;
        use serde_json::json;

        use super::*;
        use crate::model::{ProductRecord, ResultsTable};

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

        fn render(state: &ProductFormState, pending: bool) -> String {
            let mut terminal = Terminal::new(TestBackend::new(130, 30)).unwrap();
            terminal
                .draw(|frame| draw_product_form(state, pending, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_every_field_label() {
            let output = render(&ProductFormState::new(), false);
            for field in Field::ALL {
                assert!(output.contains(field.label()), "missing {field:?}");
            }
        }

        #[test]
        fn renders_buttons_and_footer() {
            let output = render(&ProductFormState::new(), false);
            assert!(output.contains("Alt+c Create"));
            assert!(output.contains("Alt+s Search"));
            assert!(output.contains("F1: help"));
        }

        #[test]
        fn renders_flash_and_results() {
            let mut state = ProductFormState::new();
            let record: ProductRecord =
                serde_json::from_value(json!({ "id": 8, "name": "Teapot" })).unwrap();
            state.view_mut().populate(&record);
            state
                .view_mut()
                .show_results(ResultsTable::from_records(&[record]));
            state.view_mut().set_flash("Success list all products");
            let output = render(&state, false);
            assert!(output.contains("Success list all products"));
            assert!(output.contains("Search results (1)"));
            assert!(output.contains("Teapot"));
        }

        #[test]
        fn end_scrolls_last_result_into_view() {
            let mut state = super::results_selection::with_results(20);
            let before = render(&state, false);
            assert!(before.contains("Item0"));
            assert!(!before.contains("Item19"));

            state.handle_key(press(KeyCode::End));
            let after = render(&state, false);
            assert!(after.contains("Item19"));
        }

        #[test]
        fn renders_pending_marker() {
            let output = render(&ProductFormState::new(), true);
            assert!(output.contains("[working"));
        }
    }
}
