//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::platform::COPY_MODIFIER;
use crate::schema::Category;
use crate::state::{AppState, Focus, Form, FormButton, View};
use crate::submission::SubmissionSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where accepted submissions go
    sink: Box<dyn SubmissionSink>,
    config: RegistrationConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: RegistrationConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let state = AppState::new(config.category());
        tracing::info!(
            category = %state.form.category(),
            sink = sink.name(),
            "Starting registration form"
        );
        Self {
            state,
            sink,
            config,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Config to persist on exit, remembering the last category used
    pub fn updated_config(&self) -> RegistrationConfig {
        RegistrationConfig {
            default_category: Some(self.state.form.category()),
            ..self.config.clone()
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Form => match self.state.focus {
                Focus::Categories => self.handle_categories_key(key),
                Focus::Form => self.handle_form_key(key).await,
            },
            View::Receipt => self.handle_receipt_key(key),
        }
        Ok(())
    }

    fn switch_category(&mut self, category: Category) {
        self.state.form.set_category(category);
        self.state.scroll_offset = 0;
        self.status_message = Some(format!(
            "Registering: {} ({} fields)",
            category.label(),
            self.state.form.visible_fields().len()
        ));
    }

    /// Handle keys while the category list is focused
    fn handle_categories_key(&mut self, key: KeyEvent) {
        let current = self.state.form.category();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.switch_category(current.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.switch_category(current.next()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.switch_category(Category::ALL[index]);
                self.state.focus = Focus::Form;
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right | KeyCode::Esc => {
                self.state.focus = Focus::Form;
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Handle keys in the form
    async fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(COPY_MODIFIER);

        // Keyboard shortcuts (work from anywhere)
        match key.code {
            KeyCode::Char('s') if ctrl => return self.submit_form().await,
            KeyCode::Left if ctrl => {
                return self.switch_category(self.state.form.category().prev());
            }
            KeyCode::Right if ctrl => {
                return self.switch_category(self.state.form.category().next());
            }
            KeyCode::F(2) => return self.switch_category(self.state.form.category().next()),
            _ => {}
        }

        if self.state.form.is_action_row_active() {
            return self.handle_action_row_key(key).await;
        }

        let form = &mut self.state.form;
        let (is_choice, is_file, is_multiline) = form
            .active_input()
            .map(|input| {
                (
                    !input.spec.options().is_empty(),
                    input.spec.is_file(),
                    input.spec.is_multiline(),
                )
            })
            .unwrap_or_default();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Esc => self.state.focus = Focus::Categories,
            KeyCode::Left if is_choice => form.cycle_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if is_choice => form.cycle_choice(true),
            KeyCode::Enter if is_file => {
                if let Err(e) = form.attach_pending() {
                    self.push_error(e.to_string());
                }
            }
            // Enter in multiline fields adds a newline, elsewhere moves on
            KeyCode::Enter if is_multiline => form.newline(),
            KeyCode::Enter => form.next_field(),
            KeyCode::Delete if is_file => form.clear_files(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Handle keys on the Submit/Reset row
    async fn handle_action_row_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter => {
                let button = form.selected_button;
                match button {
                    FormButton::Submit => self.submit_form().await,
                    FormButton::Reset => {
                        self.state.form.reset();
                        self.status_message = Some("Form cleared".to_string());
                    }
                }
            }
            KeyCode::Esc => self.state.focus = Focus::Categories,
            _ => {}
        }
    }

    /// Handle keys on the receipt view
    fn handle_receipt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.state.start_new_form(),
            KeyCode::Char('y') => self.copy_last_submission(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Validate the form and hand the submission to the sink
    async fn submit_form(&mut self) {
        let submission = match self.state.form.submit() {
            Ok(submission) => submission,
            Err(errors) => {
                self.state.form.focus_first_error();
                self.status_message = Some(format!(
                    "{} field(s) need attention before submitting",
                    errors.len()
                ));
                return;
            }
        };

        match self.sink.dispatch(&submission).await {
            Ok(receipt) => {
                tracing::info!(
                    id = %receipt.submission_id,
                    destination = %receipt.destination,
                    "Registration submitted"
                );
                self.state.show_receipt(submission, receipt);
                if self.config.copy_receipt() {
                    self.copy_last_submission();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Submission failed");
                self.push_error(format!("Failed to submit registration:\n{e}"));
            }
        }
    }

    fn copy_last_submission(&mut self) {
        let Some(last) = &self.state.last_submission else {
            return;
        };
        let result = last
            .submission
            .to_json_pretty()
            .map_err(anyhow::Error::from)
            .and_then(|json| self.copy_to_clipboard(&json));
        match result {
            Ok(()) => self.status_message = Some("Copied submission JSON".to_string()),
            Err(e) => self.push_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmissionError;
    use crate::submission::{MockSubmissionSink, Receipt};
    use pretty_assertions::assert_eq;
    use std::io;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn accepting_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_name().return_const("mock");
        sink.expect_dispatch().times(1).returning(|submission| {
            Ok(Receipt {
                submission_id: submission.id,
                destination: "mock".to_string(),
            })
        });
        sink
    }

    fn app_with(category: Category, sink: MockSubmissionSink) -> App {
        let config = RegistrationConfig {
            default_category: Some(category),
            ..Default::default()
        };
        App::new(config, Box::new(sink))
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn idle_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_name().return_const("mock");
        sink.expect_dispatch().never();
        sink
    }

    #[tokio::test]
    async fn test_starts_in_configured_category() {
        let app = app_with(Category::SoundSystem, idle_sink());
        assert_eq!(app.state.form.category(), Category::SoundSystem);
        assert_eq!(app.sink_name(), "mock");
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_fills_active_field() {
        let mut app = app_with(Category::VehicleContractor, idle_sink());
        type_text(&mut app, "Route Logistics").await;
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.state.form.values().text("companyName"), "Route Logistic");
    }

    #[tokio::test]
    async fn test_invalid_submit_does_not_dispatch() {
        let mut app = app_with(Category::VehicleContractor, idle_sink());
        app.handle_key(ctrl(KeyCode::Char('s'))).await.unwrap();

        assert_eq!(app.state.current_view, View::Form);
        assert!(app.state.form.error_for("companyName").is_some());
        assert!(app.status_message.is_some());
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_valid_submit_shows_receipt() {
        let mut app = app_with(Category::VehicleContractor, accepting_sink());
        type_text(&mut app, "Route Logistics Ltd").await;
        app.handle_key(ctrl(KeyCode::Char('s'))).await.unwrap();

        assert_eq!(app.state.current_view, View::Receipt);
        let last = app.state.last_submission.as_ref().unwrap();
        assert_eq!(last.receipt.submission_id, last.submission.id);
        assert_eq!(
            last.submission.field("companyName"),
            Some(&serde_json::json!("Route Logistics Ltd"))
        );
    }

    #[tokio::test]
    async fn test_submit_button_on_action_row() {
        let mut app = app_with(Category::VehicleContractor, accepting_sink());
        type_text(&mut app, "Route Logistics Ltd").await;
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        assert!(app.state.form.is_action_row_active());

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.current_view, View::Receipt);
    }

    #[tokio::test]
    async fn test_reset_button_clears_form() {
        let mut app = app_with(Category::VehicleContractor, idle_sink());
        type_text(&mut app, "Route").await;
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.state.form.selected_button, FormButton::Reset);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.form.values().text("companyName"), "");
        assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
    }

    #[tokio::test]
    async fn test_dispatch_failure_keeps_form() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_name().return_const("mock");
        sink.expect_dispatch().times(1).returning(|_| {
            Err(SubmissionError::Write {
                path: "/outbox".into(),
                source: io::Error::other("disk full"),
            })
        });
        let mut app = app_with(Category::VehicleContractor, sink);
        type_text(&mut app, "Route Logistics Ltd").await;
        app.handle_key(ctrl(KeyCode::Char('s'))).await.unwrap();

        assert_eq!(app.state.current_view, View::Form);
        assert!(app.state.has_errors());
        assert!(app.state.current_error().unwrap().contains("disk full"));
        assert_eq!(
            app.state.form.values().text("companyName"),
            "Route Logistics Ltd"
        );
    }

    #[tokio::test]
    async fn test_error_dialog_is_modal() {
        let mut app = app_with(Category::VehicleContractor, idle_sink());
        app.push_error("boom");
        type_text(&mut app, "abc").await;
        assert_eq!(app.state.form.values().text("companyName"), "");

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.has_errors());
        type_text(&mut app, "abc").await;
        assert_eq!(app.state.form.values().text("companyName"), "abc");
    }

    #[tokio::test]
    async fn test_category_shortcuts_keep_values() {
        let mut app = app_with(Category::PrimaryPerformanceGroup, idle_sink());
        type_text(&mut app, "Carnival Crew").await;

        app.handle_key(ctrl(KeyCode::Right)).await.unwrap();
        assert_eq!(app.state.form.category(), Category::SoundSystem);
        app.handle_key(ctrl(KeyCode::Left)).await.unwrap();
        assert_eq!(app.state.form.category(), Category::PrimaryPerformanceGroup);
        assert_eq!(app.state.form.values().text("bandName"), "Carnival Crew");

        app.handle_key(key(KeyCode::F(2))).await.unwrap();
        assert_eq!(app.state.form.category(), Category::SoundSystem);
    }

    #[tokio::test]
    async fn test_category_list_selection() {
        let mut app = app_with(Category::PrimaryPerformanceGroup, idle_sink());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.state.focus, Focus::Categories);

        app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
        assert_eq!(app.state.form.category(), Category::SoundSystem);

        app.handle_key(key(KeyCode::Char('3'))).await.unwrap();
        assert_eq!(app.state.form.category(), Category::PercussionBand);
        assert_eq!(app.state.focus, Focus::Form);
    }

    #[tokio::test]
    async fn test_quit_from_category_list() {
        let mut app = app_with(Category::PrimaryPerformanceGroup, idle_sink());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_choice_and_file_inputs() {
        let mut app = app_with(Category::VehicleContractor, idle_sink());
        // companyName, then the consent form upload
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "/docs/consent.pdf").await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(
            app.state
                .form
                .values()
                .get("informationSharingConsentForm")
                .unwrap()
                .files()
                .len(),
            1
        );

        let mut app = app_with(Category::PercussionBand, idle_sink());
        while app.state.form.active_input().map(|i| i.path.as_str()) != Some("applyingFor") {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.state.form.values().text("applyingFor"), "Monday Only");
    }

    #[tokio::test]
    async fn test_receipt_keys() {
        let mut app = app_with(Category::VehicleContractor, accepting_sink());
        type_text(&mut app, "Route Logistics Ltd").await;
        app.handle_key(ctrl(KeyCode::Char('s'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Receipt);

        app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
        assert_eq!(app.state.scroll_offset, 1);

        app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Form);
        assert_eq!(app.state.form.values().text("companyName"), "");

        app.state.current_view = View::Receipt;
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_updated_config_remembers_category() {
        let mut app = app_with(Category::PrimaryPerformanceGroup, idle_sink());
        app.handle_key(key(KeyCode::F(2))).await.unwrap();
        let config = app.updated_config();
        assert_eq!(config.default_category, Some(Category::SoundSystem));
        assert!(config.outbox_dir.is_none());
    }
}
