//! Application state definitions

use super::forms::RegistrationForm;
use crate::schema::Category;
use crate::submission::{Receipt, Submission};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Confirmation shown after a successful submit
    Receipt,
}

/// Which pane receives keys on the form view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Category list on the left
    Categories,
    #[default]
    Form,
}

/// Outcome of the last accepted submission
#[derive(Debug, Clone)]
pub struct LastSubmission {
    pub submission: Submission,
    pub receipt: Receipt,
}

impl LastSubmission {
    /// Lines in the pretty-printed payload shown on the receipt
    pub fn payload_line_count(&self) -> usize {
        self.submission
            .to_json_pretty()
            .map_or(0, |json| json.lines().count())
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub focus: Focus,
    pub form: RegistrationForm,
    pub last_submission: Option<LastSubmission>,

    // UI state
    pub scroll_offset: usize,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

impl AppState {
    pub fn new(category: Category) -> Self {
        Self {
            current_view: View::default(),
            focus: Focus::default(),
            form: RegistrationForm::new(category),
            last_submission: None,
            scroll_offset: 0,
            error_queue: VecDeque::new(),
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "Showing error");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Number of errors still waiting behind the current one
    pub fn queued_errors(&self) -> usize {
        self.error_queue.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Record an accepted submission and show its receipt
    pub fn show_receipt(&mut self, submission: Submission, receipt: Receipt) {
        self.last_submission = Some(LastSubmission {
            submission,
            receipt,
        });
        self.current_view = View::Receipt;
        self.scroll_offset = 0;
    }

    /// Leave the receipt view with a blank form in the same category
    pub fn start_new_form(&mut self) {
        self.form.reset();
        self.current_view = View::Form;
        self.focus = Focus::Form;
        self.scroll_offset = 0;
    }

    /// Scroll down, stopping once the last payload line reaches the top
    pub fn scroll_down(&mut self) {
        let max = self
            .last_submission
            .as_ref()
            .map_or(0, LastSubmission::payload_line_count);
        if self.scroll_offset < max {
            self.scroll_offset += 1;
        }
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
