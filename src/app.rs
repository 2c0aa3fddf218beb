//! Application state and core logic

use crate::auth::AuthBackend;
use crate::config::AppConfig;
use crate::state::{
    AppState, DashboardTab, FlowKind, Focus, Form, FormAction, Screen, ScreenEntry, SplashState,
    SubmitAck, SubmitError, SubmitSuccess, Theme,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: AppConfig,
    /// Backend shared by every form screen
    backend: Arc<dyn AuthBackend>,
    /// Whether the app should quit
    quit: bool,
    /// Write preference changes back to the config file
    persist_config: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance starting on the splash screen
    pub fn new(config: AppConfig, backend: Arc<dyn AuthBackend>) -> Self {
        let theme = Theme::from_dark_mode(config.dark_mode());
        let root = ScreenEntry::new(Screen::Login, &backend);
        let splash_state = Some(SplashState::new(config.splash_duration()));

        Self {
            state: AppState::new(root, theme),
            config,
            backend,
            quit: false,
            persist_config: false,
            splash_state,
        }
    }

    /// Save theme changes to the config file
    pub fn with_persistence(mut self) -> Self {
        self.persist_config = true;
        self
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        self.splash_state.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something on screen is animating and needs fast redraws
    pub fn is_animating(&self) -> bool {
        let busy = self
            .state
            .current_form()
            .is_some_and(|form| form.controller.is_busy());
        let progress = self.state.current_screen() == Screen::Dashboard
            && self.state.progress.is_started()
            && self.state.progress.ratio() < 1.0;
        self.in_splash() || busy || progress
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Periodic work between frames: pick up finished submissions and
    /// expire the status line.
    pub fn tick(&mut self) {
        self.process_form_outcome();

        if self
            .state
            .status_message
            .as_ref()
            .is_some_and(|status| status.is_expired())
        {
            self.state.status_message = None;
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
            self.splash_state = None;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
            self.toggle_theme();
            return Ok(());
        }

        match self.state.current_screen() {
            Screen::Login | Screen::Register | Screen::Recover => self.handle_form_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.current_form_mut() else {
            return;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') {
                if let Some(field) = form.active_form_field_mut() {
                    field.toggle_visibility();
                }
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Esc => {
                if form.controller.cancel() {
                    self.state.set_status("Request cancelled");
                } else {
                    self.state.back();
                }
            }
            KeyCode::Enter => match form.focus() {
                Focus::Field(_) => form.next_field(),
                Focus::Action(action) => self.perform_action(action),
            },
            KeyCode::Backspace => {
                if let Some(field) = form.active_form_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = form.active_form_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn perform_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit => self.submit_current_form(),
            FormAction::OpenRegister => self.navigate_push(Screen::Register),
            FormAction::OpenRecover => self.navigate_push(Screen::Recover),
            FormAction::BackToLogin => {
                self.state.back();
            }
        }
    }

    fn submit_current_form(&mut self) {
        let Some(form) = self.state.current_form_mut() else {
            return;
        };
        match form.controller.submit() {
            SubmitAck::Invalid => self.process_form_outcome(),
            SubmitAck::Pending(_) | SubmitAck::Ignored => {}
        }
    }

    /// Consume a terminal result of the visible form, if there is one
    fn process_form_outcome(&mut self) {
        let Some(form) = self.state.current_form_mut() else {
            return;
        };
        form.controller.poll_completion();
        let Some(outcome) = form.controller.consume() else {
            return;
        };

        match outcome {
            Ok(success) => self.on_submit_success(success),
            Err(SubmitError::ValidationFailed { errors }) => {
                form.focus_first_error();
                let details: Vec<&str> = errors.values().map(String::as_str).collect();
                self.push_error(format!(
                    "Please fix the highlighted fields:\n{}",
                    details.join("\n")
                ));
            }
            Err(err @ SubmitError::RemoteRejected { .. }) => self.push_error(err.to_string()),
        }
    }

    fn on_submit_success(&mut self, success: SubmitSuccess) {
        tracing::debug!("{} attempt {} consumed", success.flow, success.attempt);
        self.state.set_status(success.message);
        match success.flow {
            FlowKind::Login => {
                self.state.profile.signed_in_at = Some(success.completed_at);
                self.state.dashboard_tab = DashboardTab::default();
                self.navigate_replace(Screen::Dashboard);
            }
            FlowKind::Register | FlowKind::Recover => {
                self.state.back();
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Tab => {
                self.state.dashboard_tab = self.state.dashboard_tab.next();
                return;
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.state.dashboard_tab = self.state.dashboard_tab.prev();
                return;
            }
            KeyCode::Char('1') => {
                self.state.dashboard_tab = DashboardTab::Home;
                return;
            }
            KeyCode::Char('2') => {
                self.state.dashboard_tab = DashboardTab::Profile;
                return;
            }
            KeyCode::Char('3') => {
                self.state.dashboard_tab = DashboardTab::Settings;
                return;
            }
            KeyCode::Char('q') => {
                self.quit = true;
                return;
            }
            _ => {}
        }

        match (self.state.dashboard_tab, key.code) {
            (DashboardTab::Home, KeyCode::Enter | KeyCode::Char('s')) => {
                self.state.progress.start();
            }
            (DashboardTab::Profile, KeyCode::Char('n')) => {
                let profile = &mut self.state.profile;
                profile.notifications = !profile.notifications;
            }
            (DashboardTab::Profile, KeyCode::Char('s')) => {
                self.state.profile.status = self.state.profile.status.next();
            }
            (DashboardTab::Profile, KeyCode::Char('o')) => self.sign_out(),
            (DashboardTab::Settings, KeyCode::Char('d')) => self.toggle_theme(),
            _ => {}
        }
    }

    fn sign_out(&mut self) {
        tracing::debug!("Signing out");
        self.state.profile.signed_in_at = None;
        self.state.set_status("Signed out");
        self.navigate_replace(Screen::Login);
    }

    fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.config.dark_mode = Some(self.state.theme.is_dark());
        tracing::debug!("Theme switched to {:?}", self.state.theme);

        if self.persist_config {
            if let Err(err) = self.config.save() {
                tracing::debug!("Failed to save theme preference: {err:#}");
                self.state.set_status("Could not save theme preference");
            }
        }
    }

    fn navigate_push(&mut self, screen: Screen) {
        let entry = ScreenEntry::new(screen, &self.backend);
        self.state.push(entry);
    }

    fn navigate_replace(&mut self, screen: Screen) {
        let entry = ScreenEntry::new(screen, &self.backend);
        self.state.replace(entry);
    }
}
