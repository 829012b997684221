//! Order form controller
//!
//! Owns the [`FormState`] and is the only place it is mutated. Field checks,
//! whole-form validity and the order submission run as tokio tasks that
//! report back through a channel; [`FormController::poll_events`] applies
//! whatever has settled.
//!
//! Every spawned validation is tagged with a sequence number and a result
//! is only applied while it is still the latest request for its target, so
//! a slow check for an old value can never overwrite a newer one.

use crate::order::{OrderApi, SubmissionError};
use crate::state::{
    FieldName, FieldValidationError, FormState, InputKind, SubmitPhase, ValidationSchema,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Result of a background task
#[derive(Debug)]
pub enum ControllerEvent {
    FieldValidated {
        field: FieldName,
        seq: u64,
        result: Result<(), FieldValidationError>,
    },
    ValidityComputed {
        seq: u64,
        valid: bool,
    },
    SubmissionSettled(Result<String, SubmissionError>),
}

/// What happened to a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// The order is on its way
    Dispatched,
    /// The latest validity says the form is invalid
    Disabled,
    /// Validity was stale; the submit-time check failed
    Invalid,
    /// A previous submission has not settled yet
    AlreadySubmitting,
}

/// Sequence numbers of the most recent validation requests
#[derive(Debug, Default)]
struct ValidationSequence {
    next: u64,
    latest_field: HashMap<FieldName, u64>,
    latest_validity: u64,
}

impl ValidationSequence {
    fn issue_field(&mut self, field: FieldName) -> u64 {
        self.next += 1;
        self.latest_field.insert(field, self.next);
        self.next
    }

    fn issue_validity(&mut self) -> u64 {
        self.next += 1;
        self.latest_validity = self.next;
        self.next
    }

    fn is_latest_field(&self, field: FieldName, seq: u64) -> bool {
        self.latest_field.get(&field) == Some(&seq)
    }

    fn is_latest_validity(&self, seq: u64) -> bool {
        self.latest_validity == seq
    }
}

/// Drives the order form: input changes, validation and submission
pub struct FormController {
    state: FormState,
    schema: ValidationSchema,
    api: Arc<dyn OrderApi>,
    sequence: ValidationSequence,
    events_tx: mpsc::UnboundedSender<ControllerEvent>,
    events_rx: mpsc::UnboundedReceiver<ControllerEvent>,
    /// Spawned tasks whose event has not been applied yet
    pending: usize,
}

impl FormController {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: FormState::new(),
            schema: ValidationSchema::new(),
            api,
            sequence: ValidationSequence::default(),
            events_tx,
            events_rx,
            pending: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether any background task has yet to report
    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }

    /// Apply an input change, then re-check that field and the whole form
    pub fn on_field_change(&mut self, name: FieldName, raw_value: &str, kind: InputKind) {
        self.state.values.apply(name, raw_value, kind);
        if matches!(self.state.phase, SubmitPhase::Succeeded | SubmitPhase::Failed) {
            self.state.phase = SubmitPhase::Editing;
        }
        self.spawn_field_validation(name);
        self.spawn_validity_check();
    }

    /// Try to submit the current values
    pub fn on_submit(&mut self) -> SubmitDecision {
        if self.state.is_submitting() {
            tracing::debug!("Submit ignored: submission in flight");
            return SubmitDecision::AlreadySubmitting;
        }
        if !self.state.enabled {
            tracing::debug!("Submit ignored: form is invalid");
            return SubmitDecision::Disabled;
        }
        // `enabled` may lag behind the latest change
        let failures = self.schema.validate_all(&self.state.values);
        if !failures.is_empty() {
            tracing::debug!("Submit blocked by submit-time validation: {failures:?}");
            self.state.enabled = false;
            return SubmitDecision::Invalid;
        }

        self.state.phase = SubmitPhase::Submitting;
        self.spawn_submission();
        SubmitDecision::Dispatched
    }

    /// Apply every settled background result without waiting; returns how many were applied
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait until every spawned task has reported and been applied
    pub async fn settle(&mut self) {
        while self.pending > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.apply_event(event),
                None => break,
            }
        }
    }

    /// Like [`Self::settle`], but give up after `limit`.
    ///
    /// Returns false when tasks were still outstanding at the deadline.
    pub async fn settle_within(&mut self, limit: Duration) -> bool {
        tokio::time::timeout(limit, self.settle()).await.is_ok()
    }

    fn spawn_field_validation(&mut self, field: FieldName) {
        let seq = self.sequence.issue_field(field);
        let value = self.state.values.owned_field_value(field);
        let schema = self.schema;
        let tx = self.events_tx.clone();
        self.pending += 1;

        tokio::spawn(async move {
            let result = schema.validate_field(field, value.as_value());
            let _ = tx.send(ControllerEvent::FieldValidated { field, seq, result });
        });
    }

    fn spawn_validity_check(&mut self) {
        let seq = self.sequence.issue_validity();
        let values = self.state.values.clone();
        let schema = self.schema;
        let tx = self.events_tx.clone();
        self.pending += 1;

        tokio::spawn(async move {
            let valid = schema.is_valid(&values);
            let _ = tx.send(ControllerEvent::ValidityComputed { seq, valid });
        });
    }

    fn spawn_submission(&mut self) {
        let order = self.state.values.clone();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        self.pending += 1;

        tracing::info!(
            "Submitting order: size={} toppings={:?}",
            order.size,
            order.toppings
        );
        tokio::spawn(async move {
            let result = api.submit_order(&order).await;
            let _ = tx.send(ControllerEvent::SubmissionSettled(result));
        });
    }

    fn apply_event(&mut self, event: ControllerEvent) {
        self.pending = self.pending.saturating_sub(1);

        match event {
            ControllerEvent::FieldValidated { field, seq, result } => {
                if !self.sequence.is_latest_field(field, seq) {
                    tracing::debug!("Discarding stale validation #{seq} for {field}");
                    return;
                }
                match result {
                    Ok(()) => self.state.errors.clear(field),
                    Err(err) => {
                        tracing::debug!("{field} invalid: {err}");
                        self.state.errors.set(field, err.to_string());
                    }
                }
            }
            ControllerEvent::ValidityComputed { seq, valid } => {
                if !self.sequence.is_latest_validity(seq) {
                    tracing::debug!("Discarding stale validity #{seq}");
                    return;
                }
                self.state.enabled = valid;
            }
            ControllerEvent::SubmissionSettled(Ok(message)) => {
                tracing::info!("Order placed: {message}");
                self.state.record_success(message);
                self.spawn_validity_check();
            }
            ControllerEvent::SubmissionSettled(Err(err)) => {
                match &err {
                    SubmissionError::Rejected { status, message } => {
                        tracing::warn!("Order rejected with HTTP {status}: {message}");
                    }
                    SubmissionError::Transport(detail) => {
                        tracing::warn!("Order not delivered: {detail}");
                    }
                }
                self.state.record_failure(err.banner_message());
            }
        }
    }
}
