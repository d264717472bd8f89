use crate::backend::BackendError;
use crate::entities::{Contact, Group, RecordId, User};

#[derive(Debug, Clone)]
pub enum Action {
    // Table navigation
    NextContact,
    PreviousContact,
    FirstContact,
    LastContact,

    // Row actions, by table row
    ViewContact(usize),
    EditContact(usize),
    DeleteContact(usize),
    Refresh,

    // Edit form
    InsertChar(char),
    Backspace,
    DeleteChar,
    CursorLeft,
    CursorRight,
    NextField,
    PreviousField,
    CycleGroup { forward: bool },
    SubmitEdit,

    // Delete confirmation
    ConfirmDelete,

    // Closes whichever contact modal is open
    CancelModal,
    DismissAlert,

    // Background results
    ContactsLoaded(Result<Vec<Contact>, BackendError>),
    GroupsLoaded(Result<Vec<Group>, BackendError>),
    UsersLoaded(Result<Vec<User>, BackendError>),
    ContactUpdated {
        contact_id: RecordId,
        result: Result<(), BackendError>,
    },
    ContactDeleted {
        contact_id: RecordId,
        result: Result<(), BackendError>,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

/// Overlays that are not tied to a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
