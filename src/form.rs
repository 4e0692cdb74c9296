//! Contact form: field specs, validation, simulated submission.
//!
//! There is no backend. Submission acknowledges immediately and resets after
//! a fixed delay, which is exactly what the state machine below models. The
//! renderer and the validator share one field list so the markup's `required`
//! attributes and the validation rules cannot disagree.

use crate::clock::Timer;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How long the "message sent" acknowledgement shows before the form resets.
pub const ACK_RESET: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

/// One form field. `label_key` indexes the form labels in the site copy.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// The contact form's fields, in display order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label_key: "name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "email",
        label_key: "email",
        required: true,
        kind: FieldKind::Email,
    },
    FieldSpec {
        name: "company",
        label_key: "company",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "message",
        label_key: "message",
        required: true,
        kind: FieldKind::Textarea,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFormData {
    fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "company" => &self.company,
            "message" => &self.message,
            _ => "",
        }
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "company" => self.company = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    fn clear(&mut self) {
        *self = ContactFormData::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<&'static str, String>,
}

/// Check the data against [`FIELDS`]: required fields present, email shaped
/// like an email.
pub fn validate(data: &ContactFormData) -> FormValidation {
    let mut errors = BTreeMap::new();
    for spec in FIELDS {
        let value = data.field(spec.name).trim();
        if spec.required && value.is_empty() {
            errors.insert(spec.name, format!("{} is required", spec.label_key));
        } else if spec.kind == FieldKind::Email && !value.is_empty() && !looks_like_email(value) {
            errors.insert(spec.name, "enter a valid email address".to_string());
        }
    }
    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Minimal shape check: something before the @, a dot inside the domain.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Acknowledgement showing; resets to `Editing` after [`ACK_RESET`].
    Submitted,
}

/// The contact form state machine.
#[derive(Debug, Clone)]
pub struct ContactForm {
    data: ContactFormData,
    phase: FormPhase,
    errors: BTreeMap<&'static str, String>,
    reset: Timer,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            data: ContactFormData::default(),
            phase: FormPhase::Editing,
            errors: BTreeMap::new(),
            reset: Timer::idle(),
        }
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Update a field. Ignored while the acknowledgement is showing (the
    /// form is about to be cleared anyway).
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if self.phase == FormPhase::Editing {
            self.data.set(name, value.into());
        }
    }

    /// Attempt submission. Valid data moves to `Submitted` and arms the
    /// reset deadline; invalid data stays editable with errors populated.
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.phase == FormPhase::Submitted {
            return false;
        }
        let validation = validate(&self.data);
        if !validation.is_valid {
            self.errors = validation.errors;
            return false;
        }
        self.errors.clear();
        self.phase = FormPhase::Submitted;
        self.reset.arm(now, ACK_RESET);
        true
    }

    /// Drive the reset timer. When the acknowledgement period ends the form
    /// returns to `Editing` with everything cleared.
    pub fn tick(&mut self, now: Instant) {
        if self.reset.fire(now) {
            self.phase = FormPhase::Editing;
            self.data.clear();
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
