use crate::domain_model::*;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("invalid field: {name:?}")]
    InvalidField { name: String },
    #[error("field {field} expects a {expected} value")]
    FieldType { field: Field, expected: FieldKind },
}

impl From<UnknownField> for FormError {
    fn from(err: UnknownField) -> Self {
        FormError::InvalidField { name: err.0 }
    }
}

/// Field values plus the submission phase. Never talks to the network.
#[derive(Debug, Default)]
pub struct FormState {
    credentials: Credentials,
    phase: SubmissionPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Updates a field addressed by its form name (`email`, `password`, `rememberMe`).
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set(field, value)
    }

    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::Email, FieldValue::Text(text)) => self.credentials.email = text,
            (Field::Password, FieldValue::Text(text)) => self.credentials.password = text,
            (Field::RememberMe, FieldValue::Flag(flag)) => self.credentials.remember_me = flag,
            (field, _) => {
                return Err(FormError::FieldType {
                    field,
                    expected: field.kind(),
                });
            }
        }
        Ok(())
    }

    /// Moves to `InFlight` and returns the payload for this attempt, or `None`
    /// if an attempt is already running.
    pub fn begin_submission(&mut self) -> Option<Credentials> {
        if self.phase.is_in_flight() {
            return None;
        }
        self.phase = SubmissionPhase::InFlight;
        Some(self.credentials.clone())
    }

    pub fn finish_submission(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }
}
