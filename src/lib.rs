//! contactdash - a terminal dashboard for a JSON contacts endpoint
//!
//! Lists contacts, and views, edits and deletes them through modal dialogs.
//! Every operation is one `POST` of `{"operation": ...}` to a single endpoint.
//!
//! # Modules
//!
//! * [`backend`] - the contacts endpoint: request bodies, errors, HTTP client
//! * [`config`] - application configuration management
//! * [`dashboard`] - view-state and its transitions
//! * [`entities`] - contact, group and user records
//! * [`ui`] - terminal user interface components

/// Backend abstraction and the HTTP implementation
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Dashboard view-state
pub mod dashboard;

/// Records exchanged with the contacts endpoint
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging into the in-memory buffer and log file
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use backend::{BackendError, ContactBackend, HttpBackend};
pub use dashboard::{Command, DashboardState, Modal};
