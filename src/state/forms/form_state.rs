//! Per-screen form state: a controller plus keyboard focus

use super::controller::FormSubmissionController;
use super::field::FormField;
use super::FlowKind;
use crate::auth::AuthBackend;
use std::sync::Arc;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons shown under the fields of an auth screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    OpenRegister,
    OpenRecover,
    BackToLogin,
}

impl FormAction {
    /// Actions for a flow, submit first
    pub fn for_flow(flow: FlowKind) -> &'static [FormAction] {
        match flow {
            FlowKind::Login => &[Self::Submit, Self::OpenRegister, Self::OpenRecover],
            FlowKind::Register | FlowKind::Recover => &[Self::Submit, Self::BackToLogin],
        }
    }

    pub fn label(&self, flow: FlowKind) -> &'static str {
        match self {
            Self::Submit => flow.submit_label(),
            Self::OpenRegister => "Register Here",
            Self::OpenRecover => "Forgot Password?",
            Self::BackToLogin => "Login Here",
        }
    }

    /// Prompt rendered above the action, if any
    pub fn prompt(&self, flow: FlowKind) -> Option<&'static str> {
        match (self, flow) {
            (Self::OpenRegister, _) => Some("Don't have an account yet?"),
            (Self::BackToLogin, FlowKind::Register) => Some("Already have an account?"),
            (Self::BackToLogin, _) => Some("Remembered your password?"),
            _ => None,
        }
    }
}

/// Focus target inside a form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Action(FormAction),
}

/// State of one login/register/recover screen.
///
/// Dropping it tears down the controller along with any in-flight request.
#[derive(Debug)]
pub struct FormScreen {
    pub controller: FormSubmissionController,
    pub active_index: usize,
}

impl FormScreen {
    pub fn new(flow: FlowKind, backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            controller: FormSubmissionController::new(flow, backend),
            active_index: 0,
        }
    }

    pub fn flow(&self) -> FlowKind {
        self.controller.flow()
    }

    pub fn actions(&self) -> &'static [FormAction] {
        FormAction::for_flow(self.flow())
    }

    pub fn focus(&self) -> Focus {
        let fields = self.controller.fields().len();
        if self.active_index < fields {
            Focus::Field(self.active_index)
        } else {
            Focus::Action(self.actions()[self.active_index - fields])
        }
    }

    pub fn active_form_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            Focus::Field(index) => self.controller.field_mut(index),
            Focus::Action(_) => None,
        }
    }

    /// Move focus to the first field with a validation error
    pub fn focus_first_error(&mut self) -> bool {
        let errors = self.controller.errors();
        let first = self
            .controller
            .fields()
            .iter()
            .position(|f| errors.contains_key(f.name()));
        match first {
            Some(index) => {
                self.active_index = index;
                true
            }
            None => false,
        }
    }
}

impl Form for FormScreen {
    fn field_count(&self) -> usize {
        self.controller.fields().len() + self.actions().len()
    }
    fn active_field(&self) -> usize {
        self.active_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_index = index.min(self.field_count() - 1);
    }
}
