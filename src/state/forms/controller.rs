//! Form submission controller shared by the login, register and recover screens
//!
//! The controller owns the field values, validates them on submit and runs
//! the request on a tokio task. The task reports back over a channel which the
//! event loop drains with [`FormSubmissionController::poll_completion`], so all
//! state changes happen on the thread that owns the controller.

use super::field::{FieldSpec, FormField};
use super::submission::{
    ControllerEvent, SubmissionState, SubmitAck, SubmitError, SubmitOutcome, SubmitSuccess,
};
use super::validation::{self, FieldValues, ValidationErrors};
use super::FlowKind;
use crate::auth::AuthBackend;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Callback receiving state changes and terminal notifications
pub type EventObserver = Box<dyn FnMut(&ControllerEvent) + Send>;

struct InFlight {
    attempt: Uuid,
    task: JoinHandle<()>,
}

struct Completion {
    attempt: Uuid,
    result: Result<String, SubmitError>,
}

pub struct FormSubmissionController {
    flow: FlowKind,
    specs: Vec<FieldSpec>,
    fields: Vec<FormField>,
    backend: Arc<dyn AuthBackend>,
    state: SubmissionState,
    errors: ValidationErrors,
    outcome: Option<SubmitOutcome>,
    in_flight: Option<InFlight>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    observer: Option<EventObserver>,
}

impl FormSubmissionController {
    pub fn new(flow: FlowKind, backend: Arc<dyn AuthBackend>) -> Self {
        let specs = flow.fields();
        let fields = specs.iter().cloned().map(FormField::new).collect();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            flow,
            specs,
            fields,
            backend,
            state: SubmissionState::Idle,
            errors: ValidationErrors::new(),
            outcome: None,
            in_flight: None,
            completions_tx,
            completions_rx,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: impl FnMut(&ControllerEvent) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn flow(&self) -> FlowKind {
        self.flow
    }

    /// True while a request is in flight; the submit control is disabled
    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Errors from the most recent validation
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    /// Snapshot of the current field values
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.as_text().to_string()))
            .collect()
    }

    /// Start a submit attempt.
    ///
    /// Values are snapshotted before validation; edits made while the request
    /// is in flight do not affect it. Calling this while `Submitting` is a
    /// no-op.
    pub fn submit(&mut self) -> SubmitAck {
        if self.is_busy() {
            tracing::debug!("{} submit ignored, attempt already in flight", self.flow);
            return SubmitAck::Ignored;
        }
        if self.state.is_terminal() {
            tracing::debug!(
                "{} starting a new attempt over an unconsumed {} result",
                self.flow,
                self.state.label()
            );
            self.outcome = None;
        }

        let snapshot = self.values();
        self.transition(SubmissionState::Validating);
        self.errors = validation::validate(&self.specs, &snapshot);
        if !self.errors.is_empty() {
            tracing::debug!("{} validation failed: {:?}", self.flow, self.errors);
            let errors = self.errors.clone();
            self.finish(Err(SubmitError::ValidationFailed { errors }));
            return SubmitAck::Invalid;
        }

        self.transition(SubmissionState::Submitting);
        let attempt = Uuid::new_v4();
        let flow = self.flow;
        let backend = Arc::clone(&self.backend);
        let tx = self.completions_tx.clone();
        let task = tokio::spawn(async move {
            let result = backend.submit(flow, snapshot).await;
            // The receiver is gone once the controller has been torn down
            let _ = tx.send(Completion { attempt, result });
        });
        self.in_flight = Some(InFlight { attempt, task });
        tracing::debug!("{flow} submission {attempt} in flight");
        SubmitAck::Pending(attempt)
    }

    /// Apply any finished request. Returns true if a terminal state was reached.
    pub fn poll_completion(&mut self) -> bool {
        let mut finished = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            finished |= self.apply_completion(completion);
        }
        finished
    }

    /// Take the terminal outcome and return to `Idle`
    pub fn consume(&mut self) -> Option<SubmitOutcome> {
        if !self.state.is_terminal() {
            return None;
        }
        let outcome = self.outcome.take();
        self.transition(SubmissionState::Idle);
        outcome
    }

    /// Abandon the in-flight attempt. Its terminal notification is never sent.
    pub fn cancel(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        in_flight.task.abort();
        tracing::debug!("{} submission {} cancelled", self.flow, in_flight.attempt);
        self.transition(SubmissionState::Idle);
        true
    }

    fn apply_completion(&mut self, completion: Completion) -> bool {
        let current = self.in_flight.as_ref().map(|f| f.attempt);
        if current != Some(completion.attempt) {
            tracing::debug!("Discarding stale completion {}", completion.attempt);
            return false;
        }
        self.in_flight = None;

        let flow = self.flow;
        let attempt = completion.attempt;
        let outcome = completion.result.map(|message| SubmitSuccess {
            flow,
            attempt,
            message,
            completed_at: Utc::now(),
        });
        match &outcome {
            Ok(_) => tracing::debug!("{flow} submission {attempt} succeeded"),
            Err(err) => tracing::debug!("{flow} submission {attempt} rejected: {err}"),
        }
        self.finish(outcome);
        true
    }

    fn finish(&mut self, outcome: SubmitOutcome) {
        let next = if outcome.is_ok() {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
        self.transition(next);
        self.outcome = Some(outcome.clone());
        self.notify(&ControllerEvent::Finished(outcome));
    }

    fn transition(&mut self, next: SubmissionState) {
        let from = self.state;
        if !from.can_transition_to(next) {
            tracing::error!("{} refused transition {from:?} -> {next:?}", self.flow);
            return;
        }
        self.state = next;
        tracing::debug!("{} {from:?} -> {next:?}", self.flow);
        self.notify(&ControllerEvent::StateChanged { from, to: next });
    }

    fn notify(&mut self, event: &ControllerEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}

impl Drop for FormSubmissionController {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(
                "{} torn down with submission {} in flight",
                self.flow,
                in_flight.attempt
            );
            in_flight.task.abort();
        }
    }
}

impl std::fmt::Debug for FormSubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSubmissionController")
            .field("flow", &self.flow)
            .field("state", &self.state)
            .field("errors", &self.errors)
            .field("in_flight", &self.in_flight.as_ref().map(|f| f.attempt))
            .finish()
    }
}

#[cfg(test)]
impl FormSubmissionController {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Terminal outcome not yet consumed by the caller
    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    /// Replace a field's value by name. Returns false for an unknown field.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name() == name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Wait until the in-flight attempt (if any) reports back
    pub async fn settle(&mut self) -> bool {
        while self.in_flight.is_some() {
            match self.completions_rx.recv().await {
                Some(completion) => {
                    if self.apply_completion(completion) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }
}
