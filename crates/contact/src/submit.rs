//! Delivery of a validated form to the email provider (EmailJS REST API).

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::FormFields;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Provider identifiers supplied by the hosting environment.
///
/// Any of them may be missing; that only surfaces when a message is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionCredentials {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl SubmissionCredentials {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
        }
    }

    fn require(value: &Option<String>, name: &'static str) -> Result<String, SubmitError> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_owned()),
            _ => Err(SubmitError::MissingCredential(name)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("missing provider credential: {0}")]
    MissingCredential(&'static str),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<SubmitError> for SubmissionResult {
    fn from(value: SubmitError) -> Self {
        SubmissionResult::Failure(value.to_string())
    }
}

/// Performs one delivery attempt for a validated form.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, fields: &FormFields) -> SubmissionResult;
}

/// Template variables, mapped one-to-one from the form fields.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl From<&FormFields> for TemplateParams {
    fn from(fields: &FormFields) -> Self {
        Self {
            from_name: fields.name.to_owned(),
            from_email: fields.email.to_owned(),
            subject: fields.subject.to_owned(),
            message: fields.message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    endpoint: String,
    credentials: SubmissionCredentials,
    http_client: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(credentials: SubmissionCredentials) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_owned();
        self
    }

    /// Builds the HTTP client with a transport timeout; the controller adds none.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, SubmitError> {
        self.http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn url(&self) -> String {
        format!("{}{}", self.endpoint, SEND_PATH)
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn send(&self, fields: &FormFields) -> Result<(), SubmitError> {
        let request = SendRequest {
            service_id: SubmissionCredentials::require(&self.credentials.service_id, "service_id")?,
            template_id: SubmissionCredentials::require(
                &self.credentials.template_id,
                "template_id",
            )?,
            user_id: SubmissionCredentials::require(&self.credentials.public_key, "public_key")?,
            template_params: TemplateParams::from(fields),
        };

        tracing::info!("Sending contact message");

        let response = self
            .http_client
            .post(self.url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Submitter for EmailJsClient {
    async fn submit(&self, fields: &FormFields) -> SubmissionResult {
        match self.send(fields).await {
            Ok(()) => SubmissionResult::Success,
            Err(err) => err.into(),
        }
    }
}
