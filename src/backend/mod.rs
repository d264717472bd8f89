//! Backend abstraction for the contacts endpoint.
//!
//! This module defines the interface the dashboard uses to reach the remote
//! contacts service, the request bodies it sends, and the two classes of
//! failure a call can end with.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ERROR_REJECTED_WITHOUT_MESSAGE;
use crate::entities::{Contact, ContactDraft, Group, RecordId, User};

pub mod http;

pub use http::HttpBackend;

/// Errors returned by backend operations.
///
/// `Network` and `InvalidData` are transport failures: logged, never shown as
/// an alert. `Rejected` is a domain failure carrying the server's message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("{0}")]
    Rejected(String),
}

impl BackendError {
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, BackendError::Rejected(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::InvalidData(err.to_string())
    }
}

/// Fields sent with `updateContact`. The whole draft is always sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub contact_id: RecordId,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub contact_address: String,
    pub contact_group: String,
    pub contact_image: String,
}

impl ContactUpdate {
    pub fn new(contact_id: RecordId, draft: &ContactDraft) -> Self {
        Self {
            contact_id,
            contact_name: draft.name.clone(),
            contact_phone: draft.phone.clone(),
            contact_email: draft.email.clone(),
            contact_address: draft.address.clone(),
            contact_group: draft.group.clone(),
            contact_image: draft.image.clone(),
        }
    }
}

/// JSON request body: `{"operation": <name>, ...params}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation")]
pub enum Operation {
    #[serde(rename = "getContacts")]
    GetContacts,
    #[serde(rename = "getGroups")]
    GetGroups,
    #[serde(rename = "getUsers")]
    GetUsers,
    #[serde(rename = "updateContact")]
    UpdateContact(ContactUpdate),
    #[serde(rename = "deleteContact")]
    DeleteContact { contact_id: RecordId },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetContacts => "getContacts",
            Operation::GetGroups => "getGroups",
            Operation::GetUsers => "getUsers",
            Operation::UpdateContact(_) => "updateContact",
            Operation::DeleteContact { .. } => "deleteContact",
        }
    }
}

/// Response body of the mutating operations.
#[derive(Clone, Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub message: Option<Value>,
}

impl StatusResponse {
    /// Only the JSON number `1` (or `1.0`) counts as success.
    pub fn into_result(self) -> Result<(), BackendError> {
        if self.status.as_f64() == Some(1.0) {
            return Ok(());
        }
        let message = match self.message {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => ERROR_REJECTED_WITHOUT_MESSAGE.to_string(),
            Some(other) => other.to_string(),
        };
        Err(BackendError::Rejected(message))
    }
}

/// Operations the dashboard needs from the contacts service.
#[async_trait]
pub trait ContactBackend: Send + Sync {
    /// Human-readable location of the backend, for logs.
    fn describe(&self) -> String;

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, BackendError>;
    async fn fetch_groups(&self) -> Result<Vec<Group>, BackendError>;
    async fn fetch_users(&self) -> Result<Vec<User>, BackendError>;

    async fn update_contact(&self, update: ContactUpdate) -> Result<(), BackendError>;
    async fn delete_contact(&self, contact_id: RecordId) -> Result<(), BackendError>;
}
