// File: src/gateway.rs
// Purpose: Submission gateway - one network call per submit, no retries

use crate::config::FormConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use signup_core::{FieldError, Partner, PartnerSubmission};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a submission did not reach the sink or was refused by it
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("could not reach the registration service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The sink ran its own validation and refused the record
    #[error("registration rejected ({} field errors)", .details.len())]
    Rejected { details: Vec<FieldError> },

    #[error("registration service answered with status {0}")]
    Status(u16),

    #[error("unexpected response from the registration service: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Sends a validated registration to the submission sink
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// The stored record on acknowledgement, never before
    async fn submit(&self, submission: &PartnerSubmission) -> Result<Partner, GatewayError>;
}

#[derive(Deserialize)]
struct CreatedBody {
    partner: Partner,
}

#[derive(Deserialize, Default)]
struct RejectedBody {
    #[serde(default)]
    details: Vec<FieldError>,
}

#[derive(Deserialize)]
struct CollectionBody {
    partners: Vec<Partner>,
}

/// Gateway to the sink's HTTP API (`POST /partners`, `GET /partners`)
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &FormConfig) -> Result<Self, GatewayError> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Stored registrations, optionally filtered by company substring
    pub async fn list(&self, company: Option<&str>) -> Result<Vec<Partner>, GatewayError> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(company) = company {
            request = request.query(&[("company", company)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body: CollectionBody = response.json().await.map_err(GatewayError::Decode)?;
        Ok(body.partners)
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, submission: &PartnerSubmission) -> Result<Partner, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(submission).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: CreatedBody = response.json().await.map_err(GatewayError::Decode)?;
            return Ok(body.partner);
        }

        if status == StatusCode::BAD_REQUEST {
            let body: RejectedBody = response.json().await.unwrap_or_default();
            warn!("Sink rejected registration: {:?}", body.details);
            return Err(GatewayError::Rejected { details: body.details });
        }

        warn!("Sink answered {}", status);
        Err(GatewayError::Status(status.as_u16()))
    }
}
