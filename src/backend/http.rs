//! HTTP implementation of [`ContactBackend`].
//!
//! Every operation is a `POST` of a JSON body to the same endpoint.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{BackendError, ContactBackend, ContactUpdate, Operation, StatusResponse};
use crate::config::BackendConfig;
use crate::entities::{Contact, Group, RecordId, User};

const USER_AGENT: &str = concat!("contactdash/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt quoted in an error.
const BODY_EXCERPT_LEN: usize = 120;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Create a backend for `endpoint` with no request timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, BackendError> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        Self::with_timeout(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<T: DeserializeOwned>(&self, operation: &Operation) -> Result<T, BackendError> {
        log::debug!("POST {} operation={}", self.endpoint, operation.name());

        let response = self.client.post(&self.endpoint).json(operation).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(BackendError::Network(format!(
                "{} returned HTTP {}: {}",
                operation.name(),
                status,
                excerpt(&body)
            ))),
            Err(e) => Err(BackendError::InvalidData(format!(
                "{} response could not be parsed ({}): {}",
                operation.name(),
                e,
                excerpt(&body)
            ))),
        }
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.chars().count() > BODY_EXCERPT_LEN {
        let cut: String = trimmed.chars().take(BODY_EXCERPT_LEN).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl ContactBackend for HttpBackend {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, BackendError> {
        self.call(&Operation::GetContacts).await
    }

    async fn fetch_groups(&self) -> Result<Vec<Group>, BackendError> {
        self.call(&Operation::GetGroups).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, BackendError> {
        self.call(&Operation::GetUsers).await
    }

    async fn update_contact(&self, update: ContactUpdate) -> Result<(), BackendError> {
        let response: StatusResponse = self.call(&Operation::UpdateContact(update)).await?;
        response.into_result()
    }

    async fn delete_contact(&self, contact_id: RecordId) -> Result<(), BackendError> {
        let response: StatusResponse = self.call(&Operation::DeleteContact { contact_id }).await?;
        response.into_result()
    }
}
