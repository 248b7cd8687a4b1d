//! Registration form rendering

use super::field_renderer::{draw_help_text, draw_input, input_height, InputView};
use crate::app::App;
use crate::state::{Focus, Form, FormButton, RegistrationForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::ops::Range;

/// Draw the registration form with the action panel on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_inputs(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Inputs `[start, end)` to draw so that `active` is on screen.
///
/// Inputs above the active one are kept while they fit, then the
/// remaining space is filled below it.
pub fn visible_window(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.min(heights.len() - 1);
    let mut used = heights[active];
    let mut start = active;
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    let mut end = active + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    start..end
}

fn draw_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let form_focused = app.state.focus == Focus::Form && !form.is_action_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} Registration ", form.category().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Inputs
            Constraint::Length(1), // Position / error summary
        ])
        .split(inner);

    let inputs = form.inputs();
    let heights: Vec<u16> = inputs.iter().map(input_height).collect();
    let window = visible_window(&heights, form.active_field(), chunks[0].height);

    let mut y = chunks[0].y;
    for (index, input) in inputs.iter().enumerate().take(window.end).skip(window.start) {
        let height = heights[index].min(chunks[0].bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let is_active = form_focused && index == form.active_field();
        let view = InputView {
            input,
            value: form.value(&input.path),
            pending: if is_active { form.pending_path() } else { "" },
            error: form.error_for(&input.path),
            is_active,
        };
        let input_area = Rect {
            x: chunks[0].x,
            y,
            width: chunks[0].width,
            height,
        };
        draw_input(frame, input_area, &view);
        y += height;
    }

    let position = form.active_field().min(inputs.len().saturating_sub(1)) + 1;
    let mut summary = format!(" {position}/{} ", inputs.len());
    let attention = fields_needing_attention(form);
    if !attention.is_empty() {
        summary.push_str(&format!(" ·  Check: {}", attention.join(", ")));
    }
    draw_help_text(frame, chunks[1], &summary);
}

/// Labels of fields with errors; compound fields show how many sub-fields failed
fn fields_needing_attention(form: &RegistrationForm) -> Vec<String> {
    let errors = form.errors();
    form.visible_fields()
        .iter()
        .filter(|spec| !errors.is_field_valid(spec.name))
        .map(|spec| match errors.errors_under(spec.name).count() {
            n if spec.is_compound() && n > 1 => format!("{} ({n})", spec.label),
            _ => spec.label.to_string(),
        })
        .collect()
}

/// Draw the Submit/Reset panel
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = app.state.focus == Focus::Form && form.is_action_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (button, accent, area) in [
        (FormButton::Submit, Color::Green, button_chunks[0]),
        (FormButton::Reset, Color::Gray, button_chunks[1]),
    ] {
        render_action_button(
            frame,
            area,
            button.label(),
            is_focused && form.selected_button == button,
            accent,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Category;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_window(&[3, 3, 6], 1, 20), 0..3);
    }

    #[test]
    fn test_active_at_bottom_when_scrolled() {
        let heights = [3; 10];
        // 4 inputs fit; the active one is the last visible
        assert_eq!(visible_window(&heights, 7, 12), 4..8);
    }

    #[test]
    fn test_fills_below_near_top() {
        let heights = [3; 10];
        assert_eq!(visible_window(&heights, 0, 12), 0..4);
        assert_eq!(visible_window(&heights, 2, 12), 0..4);
    }

    #[test]
    fn test_action_row_clamps_to_last_input() {
        let heights = [3, 3, 3];
        assert_eq!(visible_window(&heights, 3, 6), 1..3);
    }

    #[test]
    fn test_active_input_taller_than_area() {
        assert_eq!(visible_window(&[3, 6, 3], 1, 4), 1..2);
    }

    #[test]
    fn test_attention_summary_counts_sub_fields() {
        let mut form = RegistrationForm::new(Category::PercussionBand);
        form.set_field("contact1.contactName", "Ann Jones");
        assert!(form.submit().is_err());
        assert_eq!(
            fields_needing_attention(&form),
            ["Band Name", "Correspondent Contact 1 (2)"]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(visible_window(&[], 0, 10), 0..0);
    }
}
