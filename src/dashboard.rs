//! Dashboard view-state and its transitions.
//!
//! [`DashboardState`] holds everything the dashboard shows: the three
//! collections loaded from the backend, the selected table row, the open modal,
//! and any pending alert or status notice. Transitions are plain methods with
//! no I/O. Operations that need the network return a [`Command`]; the caller
//! executes it and feeds the outcome back through the matching `apply_*`
//! method.
//!
//! The contact list only ever changes by being replaced with the result of a
//! `getContacts` fetch.

use serde::{Deserialize, Serialize};

use crate::backend::{BackendError, ContactUpdate};
use crate::constants::{
    HINT_REQUIRED_FIELDS, NOTICE_CONTACT_DELETED, NOTICE_CONTACT_UPDATED, NOTICE_DELETE_FAILED, NOTICE_LOAD_FAILED,
    NOTICE_UPDATE_FAILED, SELECT_GROUP,
};
use crate::entities::{Contact, ContactDraft, DraftField, Group, RecordId, User};

/// Network work requested by a transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    FetchContacts,
    FetchGroups,
    FetchUsers,
    UpdateContact(ContactUpdate),
    DeleteContact(RecordId),
}

/// State of the edit form while it is open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditSession {
    /// Table row the edit was started from
    pub row: usize,
    /// Contact as it was when editing started; its id is what gets submitted
    pub contact: Contact,
    pub draft: ContactDraft,
    pub focus: DraftField,
    /// Cursor position, in characters, within the focused text field
    pub cursor: usize,
    /// Inline message shown under the form
    pub hint: Option<String>,
}

impl EditSession {
    fn new(row: usize, contact: Contact) -> Self {
        let draft = ContactDraft::from_contact(&contact);
        let cursor = draft.name.chars().count();
        Self {
            row,
            contact,
            draft,
            focus: DraftField::Name,
            cursor,
            hint: None,
        }
    }

    fn focus(&mut self, field: DraftField) {
        self.focus = field;
        self.cursor = self.draft.field(field).chars().count();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.draft
            .field(self.focus)
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or_else(|| self.draft.field(self.focus).len())
    }
}

/// The one modal that can be open at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Modal {
    #[default]
    Closed,
    Viewing(Contact),
    Editing(EditSession),
    ConfirmingDelete(Contact),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Non-blocking message shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardState {
    pub contacts: Vec<Contact>,
    pub groups: Vec<Group>,
    pub users: Vec<User>,
    /// Highlighted table row
    pub selected: usize,
    pub modal: Modal,
    /// Blocking alert carrying a server message, drawn above any modal
    pub alert: Option<String>,
    pub notice: Option<Notice>,
    /// Mirror transport failures into `notice` as well as the log
    pub surface_transport_errors: bool,
}

impl DashboardState {
    pub fn new(surface_transport_errors: bool) -> Self {
        Self {
            surface_transport_errors,
            ..Default::default()
        }
    }

    /// Commands issued when the dashboard first appears.
    pub fn mount(&self) -> Vec<Command> {
        vec![Command::FetchContacts, Command::FetchGroups, Command::FetchUsers]
    }

    pub fn refresh(&self) -> Command {
        Command::FetchContacts
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.contacts.get(self.selected)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match &self.modal {
            Modal::Editing(session) => Some(session),
            _ => None,
        }
    }

    fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.modal {
            Modal::Editing(session) => Some(session),
            _ => None,
        }
    }

    // Table navigation

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.contacts.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.contacts.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.contacts.len() {
            self.selected = self.contacts.len().saturating_sub(1);
        }
    }

    // Row actions

    /// Open the view modal for `row`. Returns false when `row` is out of range.
    pub fn view(&mut self, row: usize) -> bool {
        let Some(contact) = self.contacts.get(row).cloned() else {
            return false;
        };
        self.selected = row;
        self.modal = Modal::Viewing(contact);
        true
    }

    /// Open the edit form for `row`, seeded from the contact's current fields.
    pub fn start_edit(&mut self, row: usize) -> bool {
        let Some(contact) = self.contacts.get(row).cloned() else {
            return false;
        };
        self.selected = row;
        self.modal = Modal::Editing(EditSession::new(row, contact));
        true
    }

    /// Open the delete confirmation for `row`.
    pub fn start_delete(&mut self, row: usize) -> bool {
        let Some(contact) = self.contacts.get(row).cloned() else {
            return false;
        };
        self.selected = row;
        self.modal = Modal::ConfirmingDelete(contact);
        true
    }

    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// A successful load supersedes an earlier transport error.
    fn clear_error_notice(&mut self) {
        if matches!(&self.notice, Some(notice) if notice.kind == NoticeKind::Error) {
            self.dismiss_notice();
        }
    }

    // Edit form

    pub fn focus_next_field(&mut self) {
        if let Some(session) = self.edit_session_mut() {
            let next = session.focus.next();
            session.focus(next);
        }
    }

    pub fn focus_previous_field(&mut self) {
        if let Some(session) = self.edit_session_mut() {
            let previous = session.focus.previous();
            session.focus(previous);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(session) = self.edit_session_mut() {
            if !session.focus.is_text() {
                return;
            }
            let offset = session.byte_offset(session.cursor);
            let focus = session.focus;
            session.draft.field_mut(focus).insert(offset, c);
            session.cursor += 1;
            session.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = self.edit_session_mut() {
            if !session.focus.is_text() || session.cursor == 0 {
                return;
            }
            let offset = session.byte_offset(session.cursor - 1);
            let focus = session.focus;
            session.draft.field_mut(focus).remove(offset);
            session.cursor -= 1;
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(session) = self.edit_session_mut() {
            if !session.focus.is_text() || session.cursor >= session.draft.field(session.focus).chars().count() {
                return;
            }
            let offset = session.byte_offset(session.cursor);
            let focus = session.focus;
            session.draft.field_mut(focus).remove(offset);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(session) = self.edit_session_mut() {
            session.cursor = session.cursor.saturating_sub(1);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(session) = self.edit_session_mut() {
            let len = session.draft.field(session.focus).chars().count();
            if session.cursor < len {
                session.cursor += 1;
            }
        }
    }

    /// Choices for the group selector: "no group" first, then every loaded group.
    pub fn group_options(&self) -> Vec<(String, String)> {
        std::iter::once((String::new(), SELECT_GROUP.to_string()))
            .chain(self.groups.iter().map(|g| (g.grp_id.to_string(), g.grp_name.clone())))
            .collect()
    }

    /// Display name for a draft group value.
    pub fn group_label(&self, group: &str) -> String {
        if group.is_empty() {
            return SELECT_GROUP.to_string();
        }
        self.groups
            .iter()
            .find(|g| g.grp_id.to_string() == group)
            .map(|g| g.grp_name.clone())
            .unwrap_or_else(|| group.to_string())
    }

    /// Step the draft's group through [`Self::group_options`].
    pub fn cycle_group(&mut self, forward: bool) {
        let options = self.group_options();
        let Some(session) = self.edit_session_mut() else {
            return;
        };
        // A group id the list doesn't know about counts as the empty choice.
        let current = options
            .iter()
            .position(|(id, _)| *id == session.draft.group)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        session.draft.group = options[next].0.clone();
    }

    /// Build the update for the open edit form.
    ///
    /// The request always carries the id of the contact the form was opened
    /// for, together with every draft field.
    pub fn submit_edit(&mut self) -> Option<Command> {
        let session = self.edit_session_mut()?;

        let missing = session.draft.missing_required();
        if let Some(first) = missing.first() {
            session.hint = Some(HINT_REQUIRED_FIELDS.to_string());
            session.focus(*first);
            return None;
        }
        session.hint = None;

        let update = ContactUpdate::new(session.contact.contact_id.clone(), &session.draft);
        log::info!("Submitting update for contact {}", update.contact_id);
        Some(Command::UpdateContact(update))
    }

    /// Build the delete request for the contact the confirmation was opened for.
    pub fn confirm_delete(&self) -> Option<Command> {
        match &self.modal {
            Modal::ConfirmingDelete(contact) => {
                log::info!("Submitting delete for contact {}", contact.contact_id);
                Some(Command::DeleteContact(contact.contact_id.clone()))
            }
            _ => None,
        }
    }

    // Results

    pub fn apply_contacts(&mut self, result: Result<Vec<Contact>, BackendError>) {
        match result {
            Ok(contacts) => {
                log::info!("Loaded {} contacts", contacts.len());
                self.contacts = contacts;
                self.clamp_selection();
                self.clear_error_notice();
            }
            Err(e) => self.record_failure(&format!("{} contacts", NOTICE_LOAD_FAILED), &e),
        }
    }

    pub fn apply_groups(&mut self, result: Result<Vec<Group>, BackendError>) {
        match result {
            Ok(groups) => {
                log::info!("Loaded {} groups", groups.len());
                self.groups = groups;
                self.clear_error_notice();
            }
            Err(e) => self.record_failure(&format!("{} groups", NOTICE_LOAD_FAILED), &e),
        }
    }

    pub fn apply_users(&mut self, result: Result<Vec<User>, BackendError>) {
        match result {
            Ok(users) => {
                log::info!("Loaded {} users", users.len());
                self.users = users;
                self.clear_error_notice();
            }
            Err(e) => self.record_failure(&format!("{} users", NOTICE_LOAD_FAILED), &e),
        }
    }

    /// Apply the outcome of an `updateContact` for `contact_id`.
    ///
    /// On success the edit form for that contact closes and a single contact
    /// re-fetch is returned. A rejection raises the alert and leaves the form
    /// and draft as they are.
    pub fn apply_update_result(&mut self, contact_id: &RecordId, result: Result<(), BackendError>) -> Option<Command> {
        match result {
            Ok(()) => {
                log::info!("Contact {} updated", contact_id);
                if matches!(&self.modal, Modal::Editing(session) if session.contact.contact_id == *contact_id) {
                    self.modal = Modal::Closed;
                }
                self.notice = Some(Notice::info(NOTICE_CONTACT_UPDATED));
                Some(Command::FetchContacts)
            }
            Err(e) => {
                self.record_failure(NOTICE_UPDATE_FAILED, &e);
                None
            }
        }
    }

    /// Apply the outcome of a `deleteContact` for `contact_id`.
    pub fn apply_delete_result(&mut self, contact_id: &RecordId, result: Result<(), BackendError>) -> Option<Command> {
        match result {
            Ok(()) => {
                log::info!("Contact {} deleted", contact_id);
                if matches!(&self.modal, Modal::ConfirmingDelete(contact) if contact.contact_id == *contact_id) {
                    self.modal = Modal::Closed;
                }
                self.notice = Some(Notice::info(NOTICE_CONTACT_DELETED));
                Some(Command::FetchContacts)
            }
            Err(e) => {
                self.record_failure(NOTICE_DELETE_FAILED, &e);
                None
            }
        }
    }

    /// Domain failures become the alert; transport failures are logged and,
    /// if enabled, mirrored into the status notice.
    fn record_failure(&mut self, context: &str, error: &BackendError) {
        match error {
            BackendError::Rejected(message) => {
                log::warn!("{}: server rejected the request: {}", context, message);
                self.alert = Some(message.clone());
            }
            other => {
                log::error!("{}: {}", context, other);
                if self.surface_transport_errors {
                    self.notice = Some(Notice::error(format!("{}: {}", context, other)));
                }
            }
        }
    }
}
