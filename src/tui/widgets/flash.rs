//! Flash widget: the one-line status message shown after each operation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// How a flash message should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// Nothing to show.
    Empty,
    /// The operation succeeded.
    Success,
    /// Anything else: local or server-reported failure.
    Failure,
}

impl FlashKind {
    /// Classifies a message. Success messages all start with `Success`.
    pub fn of(message: &str) -> Self {
        if message.is_empty() {
            Self::Empty
        } else if message.starts_with("Success") {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Renders the flash message, prefixed by a working marker while a
/// request is outstanding.
///
/// Display format:
/// - Idle:     `Success retrieve the product` (Green) or the error (Red)
/// - Pending:  `[working…]` (Yellow) followed by the message, if any
#[mutants::skip]
pub fn draw_flash(message: &str, pending: bool, frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    if pending {
        spans.push(Span::styled("[working…] ", Style::default().fg(Color::Yellow)));
    }

    let style = match FlashKind::of(message) {
        FlashKind::Empty => Style::default(),
        FlashKind::Success => Style::default().fg(Color::Green),
        FlashKind::Failure => Style::default().fg(Color::Red),
    };
    spans.push(Span::styled(message.to_string(), style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
