use crate::dashboard::{DashboardState, Modal};
use crate::entities::DraftField;
use crate::icons::IconService;
use crate::ui::components::dialogs::contact_dialogs;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Key handling and drawing for the view, edit and delete modals.
#[derive(Default)]
pub struct ContactModalComponent {
    pub modal: Modal,
    /// Table row of the open contact in the current list, if it is still there
    pub row: Option<usize>,
    /// Display name of the draft's group
    pub group_label: String,
    pub image_base_url: String,
    pub icons: IconService,
}

impl ContactModalComponent {
    pub fn new(image_base_url: String) -> Self {
        Self {
            image_base_url,
            ..Default::default()
        }
    }

    pub fn update_data(&mut self, state: &DashboardState) {
        self.modal = state.modal.clone();
        let open_id = match &self.modal {
            Modal::Viewing(contact) | Modal::ConfirmingDelete(contact) => Some(&contact.contact_id),
            Modal::Editing(session) => Some(&session.contact.contact_id),
            Modal::Closed => None,
        };
        self.row = open_id.and_then(|id| state.contacts.iter().position(|c| c.contact_id == *id));
        self.group_label = state
            .edit_session()
            .map(|session| state.group_label(&session.draft.group))
            .unwrap_or_default();
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.modal, Modal::Closed)
    }

    fn handle_edit_key(focus: DraftField, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CancelModal,
            KeyCode::Enter => Action::SubmitEdit,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PreviousField,
            KeyCode::Left if focus == DraftField::Group => Action::CycleGroup { forward: false },
            KeyCode::Right if focus == DraftField::Group => Action::CycleGroup { forward: true },
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Delete => Action::DeleteChar,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::InsertChar(c),
            _ => Action::None,
        }
    }
}

impl Component for ContactModalComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.modal {
            Modal::Closed => Action::None,
            Modal::Viewing(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v') => Action::CancelModal,
                KeyCode::Char('e') => self.row.map(Action::EditContact).unwrap_or(Action::None),
                _ => Action::None,
            },
            Modal::Editing(session) => Self::handle_edit_key(session.focus, key),
            Modal::ConfirmingDelete(_) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::ConfirmDelete,
                KeyCode::Esc | KeyCode::Char('n') => Action::CancelModal,
                _ => Action::None,
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.modal {
            Modal::Closed => {}
            Modal::Viewing(contact) => {
                contact_dialogs::render_view_contact_dialog(f, rect, &self.icons, contact, &self.image_base_url)
            }
            Modal::Editing(session) => {
                contact_dialogs::render_edit_contact_dialog(f, rect, &self.icons, session, &self.group_label)
            }
            Modal::ConfirmingDelete(contact) => {
                contact_dialogs::render_delete_contact_dialog(f, rect, &self.icons, contact, &self.image_base_url)
            }
        }
    }
}
