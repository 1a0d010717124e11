//! HTTPS form-processing endpoint.

use async_trait::async_trait;

use crate::error::SubmitError;

use super::{ContactForm, SubmissionEndpoint};

/// Form-processing service reached over an HTTPS POST.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Target URL of the endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionEndpoint for HttpEndpoint {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("name", form.name.as_str()),
                ("email", form.email.as_str()),
                ("message", form.message.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status(status.as_u16(), body));
        }
        Ok(())
    }
}
