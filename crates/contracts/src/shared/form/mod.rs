//! Generic record form: draft state, declarative field rules, validator and
//! submission controller
//!
//! Each record kind supplies an [`EntityForm`] implementation (rule tables,
//! payload mapping, messages); everything else is shared.

mod draft;
mod rules;
mod submission;
mod validator;

pub use draft::{flag_text, parse_date, parse_number, FormDraft, DATE_FORMAT};
pub use rules::{DateBound, FieldRule, FieldSpec};
pub use submission::{
    EntityForm, FormMode, IdOf, SubmissionController, SubmissionState, SubmissionTicket,
    SubmitRequest, SubmitStart,
};
pub use validator::{validate, ValidationReport};
