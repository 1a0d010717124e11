//! Contact-form submission routing.
//!
//! The form-processing endpoint is an external collaborator reached through
//! [`SubmissionEndpoint`]; this module only cares whether a submission
//! succeeded and which toast to raise for it. No automatic retry: a failed
//! submission asks the user to resubmit.

pub mod http;

pub use http::HttpEndpoint;

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::settings;
use crate::toast::{ToastKind, ToastNotifier};

/// One contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Name used in notification copy, with a fallback for blank input.
    pub(crate) fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            settings::CONTACT_FALLBACK_NAME
        } else {
            trimmed
        }
    }
}

/// An opaque form-processing endpoint.
#[async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Submit `form` and surface the outcome as a toast.
///
/// The toast is raised before this returns; the result is for hosts that
/// also want to update their own submit-button state.
pub async fn submit_contact_form(
    endpoint: &dyn SubmissionEndpoint,
    notifier: &mut ToastNotifier,
    form: &ContactForm,
) -> Result<(), SubmitError> {
    match endpoint.submit(form).await {
        Ok(()) => {
            notifier.notify(
                &settings::contact_success_message(form.display_name()),
                ToastKind::Success,
            );
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "contact form submission failed");
            notifier.notify(
                &settings::contact_failure_message(form.display_name()),
                ToastKind::Error,
            );
            Err(err)
        }
    }
}
