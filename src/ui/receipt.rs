//! Receipt view shown after a successful submission

use crate::app::App;
use crate::state::LastSubmission;
use crate::submission::Submission;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Registration Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = match &app.state.last_submission {
        Some(last) => receipt_lines(last),
        None => vec![Line::from("Nothing submitted yet")],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(app.state.scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

fn receipt_lines(last: &LastSubmission) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let row = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<14}"), label),
            Span::raw(value),
        ])
    };

    let submission = &last.submission;
    let mut lines = vec![
        Line::from(Span::styled(
            "Thank you, your registration has been received.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Category", submission.category.label().to_string()),
        row("Name", registrant_name(submission).to_string()),
        row("Reference", submission.id.to_string()),
        row(
            "Submitted",
            submission
                .submitted_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        ),
        row("Delivered to", last.receipt.destination.clone()),
        Line::from(""),
    ];

    match submission.to_json_pretty() {
        Ok(json) => lines.extend(
            json.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Gray)))),
        ),
        Err(e) => lines.push(Line::from(Span::styled(
            format!("Payload unavailable: {e}"),
            Style::default().fg(Color::Red),
        ))),
    }
    lines
}

/// Band, sound system or company name, whichever the category has
fn registrant_name(submission: &Submission) -> &str {
    ["bandName", "soundSystemName", "companyName"]
        .iter()
        .find_map(|name| submission.field(name).and_then(Value::as_str))
        .unwrap_or("-")
}
