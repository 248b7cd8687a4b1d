//! Field rendering utilities for forms

use crate::state::{FieldValue, FormInput};
use crate::validation::FieldError;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a multiline input (borders included)
pub const MULTILINE_HEIGHT: u16 = 6;
/// Rows taken by any other input
pub const SINGLE_LINE_HEIGHT: u16 = 3;

/// Rows needed to draw `input`
pub fn input_height(input: &FormInput) -> u16 {
    if input.spec.is_multiline() {
        MULTILINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

/// What to draw for one input
pub struct InputView<'a> {
    pub input: &'a FormInput,
    pub value: Option<&'a FieldValue>,
    /// Path being typed into an active file input
    pub pending: &'a str,
    pub error: Option<&'a FieldError>,
    pub is_active: bool,
}

impl InputView<'_> {
    fn display_value(&self) -> String {
        let value = self.value.map(FieldValue::display_value).unwrap_or_default();
        let spec = self.input.spec;
        if !spec.options().is_empty() {
            return format!("◀ {value} ▶");
        }
        if spec.is_file() {
            return match (value.is_empty(), self.is_active) {
                (true, false) => "(no file)".to_string(),
                (true, true) => format!("path: {}", self.pending),
                (false, false) => value,
                (false, true) => format!("{value}  + path: {}", self.pending),
            };
        }
        if value.is_empty() && !self.is_active {
            "(empty)".to_string()
        } else {
            value
        }
    }

    fn title(&self) -> String {
        let marker = if self.input.is_required() { " *" } else { "" };
        format!(" {}{} ", self.input.label, marker)
    }
}

/// Draw one form input with its inline validation message
pub fn draw_input(frame: &mut Frame, area: Rect, view: &InputView) {
    let accent = match (view.error.is_some(), view.is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let value_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_str = view.display_value();
    let cursor = if view.is_active && view.input.spec.options().is_empty() {
        "▌"
    } else {
        ""
    };

    let mut lines: Vec<Line> = display_str
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .title(view.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    // Keep the cursor line in view for long multiline text
    let inner_height = area.height.saturating_sub(2) as usize;
    let overflow = display_str.split('\n').count().saturating_sub(inner_height);
    frame.render_widget(paragraph.scroll((overflow as u16, 0)).block(block), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
