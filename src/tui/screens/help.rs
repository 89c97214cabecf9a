//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::Operation;
use crate::model::Field;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static EDITING_KEYS: &[(&str, &str)] = &[
    ("Tab / ↓ / Enter", "next field"),
    ("Shift-Tab / ↑", "previous field"),
    ("Backspace", "delete last character"),
    ("PgUp / PgDn", "previous / next result row"),
    ("Home / End", "first / last result row"),
    ("F1", "help"),
    ("Esc", "quit"),
];

/// What each button does, shown under its shortcut.
fn describe(op: Operation) -> &'static str {
    match op {
        Operation::Create => "create a product from the form (id ignored)",
        Operation::Update => "save the form to the product with this id",
        Operation::Like => "like the product with this id",
        Operation::Disable => "disable the product with this id",
        Operation::Retrieve => "load the product with this id",
        Operation::Delete => "delete the product with this id",
        Operation::Clear => "clear the form and message",
        Operation::Search => "list products matching name, category, available",
    }
}

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Screen::ProductForm`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::ProductForm,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the origin screen to return to when help is dismissed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(String, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn owned(keys: &[(&str, &'static str)]) -> Vec<(String, &'static str)> {
    keys.iter().map(|(k, d)| (k.to_string(), *d)).collect()
}

/// Buttons with their shortcut and id, the editing keys, then each
/// field's input id.
fn help_content() -> Vec<Line<'static>> {
    let buttons: Vec<(String, &'static str)> = Operation::ALL
        .iter()
        .map(|&op| {
            (
                format!("Alt+{}  {}", op.shortcut(), op.button_id()),
                describe(op),
            )
        })
        .collect();
    let fields: Vec<(String, &'static str)> = Field::ALL
        .iter()
        .map(|&field| (field.label().to_string(), field.element_id()))
        .collect();

    let mut lines = build_section("Buttons", &buttons);
    lines.extend(build_section("Editing", &owned(EDITING_KEYS)));
    lines.extend(build_section("Fields", &fields));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", state.origin().label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content();
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn new_initializes_scroll_and_origin() {
            let state = HelpState::new();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::ProductForm);
        }

        #[test]
        fn default_works() {
            let state = HelpState::default();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::ProductForm);
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_decrements_scroll() {
            let mut state = HelpState::new();
            state.scroll = 5;
            let action = state.handle_key(press(KeyCode::Up));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 4);
        }

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_increments_scroll() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn q_and_esc_return_to_origin() {
            let mut state = HelpState::new();
            state.set_origin(Screen::ProductForm);
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::ProductForm)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::ProductForm)
            );
        }

        #[test]
        fn reset_scrolls_to_top() {
            let mut state = HelpState::new();
            state.scroll = 3;
            state.reset();
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn other_keys_do_nothing() {
            let mut state = HelpState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
        }
    }

    mod content {
        use super::*;

        fn text(lines: &[Line<'_>]) -> String {
            lines
                .iter()
                .map(|l| {
                    l.spans
                        .iter()
                        .map(|s| s.content.as_ref())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        }

        #[test]
        fn lists_every_button_with_its_id() {
            let content = text(&help_content());
            for op in Operation::ALL {
                assert!(
                    content.contains(&format!("Alt+{}  {}", op.shortcut(), op.button_id())),
                    "missing {op:?}"
                );
            }
            assert!(content.contains("Editing"));
        }

        #[test]
        fn lists_every_field_input_id() {
            let content = text(&help_content());
            assert!(content.contains("Fields"));
            for field in Field::ALL {
                assert!(content.contains(field.element_id()), "missing {field:?}");
            }
        }
    }
}
