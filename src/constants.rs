//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend defaults
pub const DEFAULT_ENDPOINT: &str = "http://localhost/api/quiz2/contacts.php";
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost/contacts/images";
pub const ENDPOINT_ENV_VAR: &str = "CONTACTDASH_ENDPOINT";
/// Upper bound accepted for `backend.request_timeout_secs`
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

// Config and log file locations
pub const LOCAL_CONFIG_FILE_NAME: &str = "contactdash.toml";
pub const CONFIG_DIR_NAME: &str = "contactdash";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "contactdash.log";
/// Number of log lines kept in memory for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 500;

// Screen titles
pub const TITLE_APP: &str = "Contact Manager";
pub const TITLE_CONTACT_RECORDS: &str = "Contact Records";
pub const TITLE_VIEW_CONTACT: &str = "View Contact";
pub const TITLE_EDIT_CONTACT: &str = "Edit Contact";
pub const TITLE_DELETE_CONTACT: &str = "Delete Contact";
pub const TITLE_ALERT: &str = "Alert";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc', '?' or 'h' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Table
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_PHONE: &str = "Phone";
pub const COLUMN_ACTIONS: &str = "Actions";
pub const ROW_ACTIONS_HINT: &str = "[v]iew [e]dit [d]elete";
pub const EMPTY_TABLE: &str = "No contacts";

// Dialog text
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";
pub const NOT_AVAILABLE: &str = "N/A";
pub const SELECT_GROUP: &str = "Select Group";
pub const HINT_REQUIRED_FIELDS: &str = "Name and Phone are required";

// Status notices
pub const NOTICE_CONTACT_UPDATED: &str = "Contact updated";
pub const NOTICE_CONTACT_DELETED: &str = "Contact deleted";
pub const NOTICE_LOAD_FAILED: &str = "Could not load";
pub const NOTICE_UPDATE_FAILED: &str = "Could not reach the server to update the contact";
pub const NOTICE_DELETE_FAILED: &str = "Could not reach the server to delete the contact";

// Errors
pub const ERROR_REJECTED_WITHOUT_MESSAGE: &str = "The server rejected the request";

// Messages printed outside the terminal UI
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
