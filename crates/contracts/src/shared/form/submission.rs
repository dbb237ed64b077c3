//! Submission lifecycle of a record form
//!
//! ```text
//! Idle -> Validating -> Invalid (back to Idle, field hints shown)
//!                    -> Submitting -> Succeeded (dialog, then navigate to the list)
//!                                  -> Failed    (dialog, stay on the form)
//! ```
//!
//! The controller is plain data so a view can keep it in a signal: `begin`
//! produces the request to send, the caller performs it, and `finish`
//! applies the result. Results carry the ticket issued by `begin`; tickets
//! invalidated by `cancel` are ignored.

use super::{validate, FieldSpec, FormDraft, ValidationReport};
use crate::domain::common::Entity;
use crate::shared::api::{ApiClient, ApiError, HttpMethod, HttpTransport};
use crate::shared::dialog::Dialog;
use chrono::NaiveDate;
use serde::Serialize;
use std::marker::PhantomData;

/// Identifier type of the record edited by form `F`
pub type IdOf<F> = <<F as EntityForm>::Entity as Entity>::Id;

/// Whether the form creates a new record or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> FormMode<Id> {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// Schema of a record form: rule tables, draft conversions and messages
pub trait EntityForm {
    type Entity: Entity;
    /// Full-record body sent on create and update
    type Payload: Serialize;

    fn rules(mode: &FormMode<IdOf<Self>>) -> &'static [FieldSpec];

    /// Draft of a blank "new record" form
    fn empty_draft() -> FormDraft;

    /// Draft pre-filled from a stored record (edit form)
    fn draft_from(record: &Self::Entity) -> FormDraft;

    /// Build the payload from a draft that passed validation
    fn payload(draft: &FormDraft) -> Option<Self::Payload>;

    fn created_message() -> &'static str;

    fn updated_message() -> &'static str;

    fn create_error_message() -> &'static str {
        "Error interno"
    }

    fn update_error_message() -> String {
        format!(
            "Error al actualizar {}",
            <Self::Entity as Entity>::definite_name()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Token tying a result to the submission that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Request a validated submission must perform
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest<P> {
    pub method: HttpMethod,
    pub path: String,
    pub payload: P,
}

/// Outcome of [`SubmissionController::begin`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart<P> {
    /// A submission is already in flight
    Suppressed,
    /// Validation failed; see [`SubmissionController::report`]
    Invalid,
    Ready {
        ticket: SubmissionTicket,
        request: SubmitRequest<P>,
    },
}

#[derive(Debug, Clone)]
pub struct SubmissionController<F: EntityForm> {
    mode: FormMode<IdOf<F>>,
    state: SubmissionState,
    report: ValidationReport,
    dialog: Option<Dialog>,
    generation: u64,
    _form: PhantomData<fn() -> F>,
}

impl<F: EntityForm> SubmissionController<F> {
    pub fn new(mode: FormMode<IdOf<F>>) -> Self {
        Self {
            report: ValidationReport::pristine(F::rules(&mode)),
            mode,
            state: SubmissionState::Idle,
            dialog: None,
            generation: 0,
            _form: PhantomData,
        }
    }

    pub fn mode(&self) -> FormMode<IdOf<F>> {
        self.mode
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn rules(&self) -> &'static [FieldSpec] {
        F::rules(&self.mode)
    }

    /// Inline hint for an invalid field
    pub fn hint(&self, field: &str) -> Option<&'static str> {
        self.report.hint(F::rules(&self.mode), field)
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validate `draft` and, if it passes, enter `Submitting`
    pub fn begin(&mut self, draft: &FormDraft, today: NaiveDate) -> SubmitStart<F::Payload> {
        if self.is_in_flight() {
            log::debug!(
                "{}: submission suppressed, one already in flight",
                F::Entity::collection_name()
            );
            return SubmitStart::Suppressed;
        }

        self.state = SubmissionState::Validating;
        self.report = validate(draft, F::rules(&self.mode), today);
        let payload = if self.report.is_valid() {
            F::payload(draft)
        } else {
            None
        };

        let Some(payload) = payload else {
            log::debug!(
                "{}: validation failed for {:?}",
                F::Entity::collection_name(),
                self.report.invalid_fields()
            );
            self.state = SubmissionState::Idle;
            return SubmitStart::Invalid;
        };

        let (method, path) = match self.mode {
            FormMode::Create => (HttpMethod::Post, F::Entity::create_path()),
            FormMode::Edit(id) => (HttpMethod::Put, F::Entity::item_path(id)),
        };

        self.generation += 1;
        self.state = SubmissionState::Submitting;
        self.dialog = None;

        SubmitStart::Ready {
            ticket: SubmissionTicket(self.generation),
            request: SubmitRequest {
                method,
                path,
                payload,
            },
        }
    }

    /// Apply the server result; returns `false` if the ticket is stale
    pub fn finish(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<Option<String>, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation || !self.is_in_flight() {
            log::debug!(
                "{}: dropping result of a cancelled submission",
                F::Entity::collection_name()
            );
            return false;
        }

        match result {
            Ok(mensaje) => {
                let default = if self.mode.is_edit() {
                    F::updated_message()
                } else {
                    F::created_message()
                };
                let message = mensaje
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| default.to_string());
                self.state = SubmissionState::Succeeded;
                self.dialog = Some(Dialog::success(message));
            }
            Err(err) => {
                let fallback = if self.mode.is_edit() {
                    F::update_error_message()
                } else {
                    F::create_error_message().to_string()
                };
                log::warn!("{}: submission failed: {}", F::Entity::collection_name(), err);
                self.state = SubmissionState::Failed;
                self.dialog = Some(Dialog::error(err.user_message(&fallback)));
            }
        }
        true
    }

    /// Report a failure to fetch the record being edited
    pub fn load_failed(&mut self, err: &ApiError) {
        log::warn!("{}: fetch for edit failed: {}", F::Entity::collection_name(), err);
        self.dialog = Some(Dialog::error(
            err.user_message(&F::Entity::fetch_error_message()),
        ));
    }

    /// Close the dialog; returns the route to navigate to after a success
    pub fn dismiss_dialog(&mut self) -> Option<String> {
        self.dialog.take()?;
        match self.state {
            SubmissionState::Succeeded => {
                self.state = SubmissionState::Idle;
                Some(F::Entity::list_route())
            }
            SubmissionState::Failed => {
                self.state = SubmissionState::Idle;
                None
            }
            _ => None,
        }
    }

    /// Abandon any in-flight submission (the screen is going away)
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.is_in_flight() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Load the draft of the record being edited; `None` on create or failure
    pub async fn fetch_draft<T: HttpTransport>(
        &mut self,
        client: &ApiClient<T>,
    ) -> Option<FormDraft> {
        let FormMode::Edit(id) = self.mode else {
            return None;
        };
        match client.fetch::<F::Entity>(id).await {
            Ok(record) => Some(F::draft_from(&record)),
            Err(err) => {
                self.load_failed(&err);
                None
            }
        }
    }

    /// Run one full validate/submit cycle against `client`
    pub async fn submit<T: HttpTransport>(
        &mut self,
        client: &ApiClient<T>,
        draft: &FormDraft,
        today: NaiveDate,
    ) -> SubmissionState {
        if let SubmitStart::Ready { ticket, request } = self.begin(draft, today) {
            let result = client
                .write(request.method, &request.path, &request.payload)
                .await;
            self.finish(ticket, result);
        }
        self.state
    }
}
