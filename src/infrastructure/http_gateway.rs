use crate::domain::payload::OrderPayload;
use crate::domain::ports::{SubmissionGateway, SubmissionOutcome};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

/// Posts order payloads as a form-encoded body to the order-intake endpoint.
///
/// The endpoint's reply is never read. Any request that completes, whatever
/// its status, is reported as `Sent`; only errors raised while sending
/// (connect, DNS, TLS, I/O) become `TransportError`.
#[derive(Debug, Clone)]
pub struct HttpSubmissionGateway {
    client: Client,
    endpoint: Url,
}

impl HttpSubmissionGateway {
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| OrderError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, payload: &OrderPayload) -> SubmissionOutcome {
        debug!(endpoint = %self.endpoint, "posting order payload");
        match self
            .client
            .post(self.endpoint.clone())
            .form(payload.form_pairs())
            .send()
            .await
        {
            Ok(_) => SubmissionOutcome::Sent,
            Err(e) => SubmissionOutcome::TransportError(e.to_string()),
        }
    }
}
