//! Application state definitions

use super::forms::{FlowKind, FormScreen};
use super::theme::Theme;
use crate::auth::AuthBackend;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Recover,
    Dashboard,
}

impl Screen {
    /// The form flow hosted by this screen, if any
    pub fn flow(&self) -> Option<FlowKind> {
        match self {
            Self::Login => Some(FlowKind::Login),
            Self::Register => Some(FlowKind::Register),
            Self::Recover => Some(FlowKind::Recover),
            Self::Dashboard => None,
        }
    }
}

/// Tabs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Home,
    Profile,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [Self::Home, Self::Profile, Self::Settings];

    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Profile,
            Self::Profile => Self::Settings,
            Self::Settings => Self::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Home => Self::Settings,
            Self::Profile => Self::Home,
            Self::Settings => Self::Profile,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }
}

/// Presence shown on the profile tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceStatus {
    #[default]
    Online,
    Busy,
    Offline,
}

impl PresenceStatus {
    pub fn next(&self) -> Self {
        match self {
            Self::Online => Self::Busy,
            Self::Busy => Self::Offline,
            Self::Offline => Self::Online,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Active",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }
}

/// Profile tab toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub notifications: bool,
    pub status: PresenceStatus,
    /// When the current session's login completed
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            notifications: true,
            status: PresenceStatus::Online,
            signed_in_at: None,
        }
    }
}

/// Home tab progress bar filling up once started
#[derive(Debug, Clone, Default)]
pub struct ProgressAnimation {
    started: Option<Instant>,
}

impl ProgressAnimation {
    const DURATION: Duration = Duration::from_millis(1000);

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Fill ratio in `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        match self.started {
            Some(start) => Self::ratio_at(start.elapsed()),
            None => 0.0,
        }
    }

    fn ratio_at(elapsed: Duration) -> f64 {
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        f64::from(simple_easing::cubic_in_out(progress))
    }
}

/// Transient status line message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

impl StatusMessage {
    const TTL: Duration = Duration::from_secs(3);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::TTL
    }
}

/// One level of the navigation stack.
///
/// Form screens own their form state; popping the entry tears it down.
#[derive(Debug)]
pub struct ScreenEntry {
    pub screen: Screen,
    pub form: Option<FormScreen>,
}

impl ScreenEntry {
    pub fn new(screen: Screen, backend: &Arc<dyn AuthBackend>) -> Self {
        let form = screen.flow().map(|flow| {
            let mut form = FormScreen::new(flow, Arc::clone(backend));
            form.controller
                .set_observer(move |event| tracing::debug!(%flow, ?event, "form event"));
            form
        });
        Self { screen, form }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    stack: Vec<ScreenEntry>,
    pub dashboard_tab: DashboardTab,
    pub theme: Theme,
    pub profile: ProfileState,
    pub progress: ProgressAnimation,
    /// Alerts waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(root: ScreenEntry, theme: Theme) -> Self {
        Self {
            stack: vec![root],
            dashboard_tab: DashboardTab::default(),
            theme,
            profile: ProfileState::default(),
            progress: ProgressAnimation::default(),
            error_queue: VecDeque::new(),
            status_message: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.stack
            .last()
            .map(|entry| entry.screen)
            .unwrap_or_default()
    }

    pub fn current_form(&self) -> Option<&FormScreen> {
        self.stack.last().and_then(|entry| entry.form.as_ref())
    }

    pub fn current_form_mut(&mut self) -> Option<&mut FormScreen> {
        self.stack.last_mut().and_then(|entry| entry.form.as_mut())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, entry: ScreenEntry) {
        tracing::debug!("Navigating to {:?}", entry.screen);
        self.stack.push(entry);
    }

    /// Replace the whole stack with a single screen
    pub fn replace(&mut self, entry: ScreenEntry) {
        tracing::debug!("Replacing navigation stack with {:?}", entry.screen);
        self.stack.clear();
        self.stack.push(entry);
    }

    /// Pop the current screen. The root screen is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(entry) = self.stack.pop() {
            tracing::debug!("Leaving {:?}", entry.screen);
        }
        true
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SimulatedBackend;

    fn backend() -> Arc<dyn AuthBackend> {
        Arc::new(SimulatedBackend::default())
    }

    fn state() -> AppState {
        AppState::new(ScreenEntry::new(Screen::Login, &backend()), Theme::Light)
    }

    mod screen {
        use super::*;

        #[test]
        fn test_form_screens_have_flows() {
            assert_eq!(Screen::Login.flow(), Some(FlowKind::Login));
            assert_eq!(Screen::Register.flow(), Some(FlowKind::Register));
            assert_eq!(Screen::Recover.flow(), Some(FlowKind::Recover));
            assert_eq!(Screen::Dashboard.flow(), None);
        }

        #[test]
        fn test_entry_builds_form_only_for_form_screens() {
            let backend = backend();
            assert!(ScreenEntry::new(Screen::Register, &backend).form.is_some());
            assert!(ScreenEntry::new(Screen::Dashboard, &backend).form.is_none());
        }
    }

    mod dashboard_tab {
        use super::*;

        #[test]
        fn test_next_cycles() {
            assert_eq!(DashboardTab::Home.next(), DashboardTab::Profile);
            assert_eq!(DashboardTab::Settings.next(), DashboardTab::Home);
        }

        #[test]
        fn test_prev_cycles() {
            assert_eq!(DashboardTab::Home.prev(), DashboardTab::Settings);
            assert_eq!(DashboardTab::Profile.prev(), DashboardTab::Home);
        }
    }

    mod profile {
        use super::*;

        #[test]
        fn test_status_cycles_online_busy_offline() {
            let status = PresenceStatus::default();
            assert_eq!(status.label(), "Active");
            assert_eq!(status.next(), PresenceStatus::Busy);
            assert_eq!(status.next().next(), PresenceStatus::Offline);
            assert_eq!(status.next().next().next(), PresenceStatus::Online);
        }

        #[test]
        fn test_notifications_default_on() {
            assert!(ProfileState::default().notifications);
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn test_not_started_is_empty() {
            let progress = ProgressAnimation::default();
            assert!(!progress.is_started());
            assert_eq!(progress.ratio(), 0.0);
        }

        #[test]
        fn test_ratio_clamps_at_full() {
            assert_eq!(ProgressAnimation::ratio_at(Duration::from_secs(5)), 1.0);
            let half = ProgressAnimation::ratio_at(Duration::from_millis(500));
            assert!(half > 0.0 && half < 1.0);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_push_and_back() {
            let mut state = state();
            state.push(ScreenEntry::new(Screen::Register, &backend()));
            assert_eq!(state.current_screen(), Screen::Register);
            assert_eq!(
                state.current_form().map(|f| f.flow()),
                Some(FlowKind::Register)
            );

            assert!(state.back());
            assert_eq!(state.current_screen(), Screen::Login);
        }

        #[test]
        fn test_back_never_pops_root() {
            let mut state = state();
            assert!(!state.back());
            assert_eq!(state.depth(), 1);
        }

        #[test]
        fn test_replace_clears_stack() {
            let mut state = state();
            state.push(ScreenEntry::new(Screen::Recover, &backend()));
            state.replace(ScreenEntry::new(Screen::Dashboard, &backend()));
            assert_eq!(state.depth(), 1);
            assert_eq!(state.current_screen(), Screen::Dashboard);
            assert!(state.current_form().is_none());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = state();
            assert!(state.current_error().is_none());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(state.current_error().is_none());
        }

        #[test]
        fn test_status_message() {
            let mut state = state();
            state.set_status("Saved");
            let status = state.status_message.as_ref().unwrap();
            assert_eq!(status.text, "Saved");
            assert!(!status.is_expired());
        }
    }
}
