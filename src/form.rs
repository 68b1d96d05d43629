//! Modal Form State
//!
//! Open/submitting/error bookkeeping shared by the booking and intake
//! modals, and the error type their drafts produce.

use std::fmt;
use thiserror::Error;

use crate::client::ClientError;

/// Draft validation failures, worded for the inline banner
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{0} zorunludur")]
    Required(&'static str),

    #[error("Geçersiz saat: {0}")]
    InvalidTime(String),

    #[error("Geçersiz tarih: {0}")]
    InvalidDate(String),

    #[error("Geçersiz kan grubu: {0} (A+, A-, B+, B-, AB+, AB-, 0+, 0-, unknown)")]
    InvalidBloodType(String),

    #[error("Seçilen saat yerel saat diliminde mevcut değil: {0}")]
    NonexistentLocalTime(String),

    #[error("Kayıt için önce tüm adımları tamamlayın")]
    IncompleteSteps,
}

/// Why a submission did not go through
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Lifecycle of a modal form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalForm {
    pub open: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ModalForm {
    pub fn opened() -> Self {
        Self {
            open: true,
            ..Default::default()
        }
    }

    pub fn open(&mut self) {
        *self = Self::opened();
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Enter the submitting state; refuses a second concurrent submit
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Record the outcome; a success closes the modal and hands back the
    /// value, a failure keeps it open with the message in the banner
    pub fn settle<R, E: fmt::Display>(&mut self, result: Result<R, E>) -> Option<R> {
        self.submitting = false;
        match result {
            Ok(value) => {
                self.close();
                Some(value)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// `settle`, then run `on_success` only when the submission succeeded
    pub fn finish<R, E: fmt::Display>(&mut self, result: Result<R, E>, on_success: impl FnOnce(R)) {
        if let Some(value) = self.settle(result) {
            on_success(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_modal_open() {
        let mut form = ModalForm::opened();
        assert!(form.begin());
        assert!(!form.begin());

        let mut called = false;
        let result: Result<(), SubmitError> = Err(ClientError::Api {
            status: 400,
            message: "X".to_string(),
        }
        .into());
        form.finish(result, |_| called = true);

        assert!(!called);
        assert!(form.open);
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("X"));
    }

    #[test]
    fn test_success_closes_and_calls_back() {
        let mut form = ModalForm::opened();
        form.error = Some("old".to_string());
        assert!(form.begin());
        assert!(form.error.is_none());

        let mut received = None;
        form.finish(Ok::<_, SubmitError>(7), |v| received = Some(v));
        assert_eq!(received, Some(7));
        assert_eq!(form, ModalForm::default());
    }

    #[test]
    fn test_form_error_messages() {
        let err: SubmitError = FormError::Required("Hasta").into();
        assert_eq!(err.to_string(), "Hasta zorunludur");
    }
}
