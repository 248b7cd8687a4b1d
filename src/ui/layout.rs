//! Layout components (category sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{CATEGORY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::schema::Category;
use crate::state::{Focus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Sidebar width, wide enough for the longest category label
const SIDEBAR_WIDTH: u16 = 22;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the category list with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.current_view == View::Form && app.state.focus == Focus::Categories;
    let block = Block::default()
        .title(" Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT); Category::ALL.len()];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let active = app.state.form.category();
    for (idx, category) in Category::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx],
            &(idx + 1).to_string(),
            category.label(),
            *category == active,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" ● {} ", app.sink_name()),
        Style::default().fg(Color::Green),
    )];

    // View-specific hints
    let hints = get_view_hints(app.state.current_view, app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, focus: Focus) -> String {
    match (view, focus) {
        (View::Form, Focus::Form) => format!(
            "Tab:next  ←/→:option  Enter:attach  {SUBMIT_SHORTCUT}:submit  {CATEGORY_SHORTCUT}/F2:category  Esc:categories"
        ),
        (View::Form, Focus::Categories) => "j/k:category  1-5:pick  Enter:form  q:quit".to_string(),
        (View::Receipt, _) => "n:new form  y:copy JSON  j/k:scroll  q:quit".to_string(),
    }
}
