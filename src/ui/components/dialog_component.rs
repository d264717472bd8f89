//! Help and logs overlays.
//!
//! These dialogs sit above everything except the alert and are independent of
//! the contact modals, which live in the dashboard state.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{scroll_behavior::ScrollState, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub logger: Option<Logger>,
    pub scroll: ScrollState,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }

    /// Scrolling keys shared by both overlays
    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.scroll_to_top(),
            KeyCode::End => self.scroll.scroll_to_bottom(),
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &self.icons, &mut self.scroll),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &self.icons, &logs, &mut self.scroll);
            }
            None => {}
        }
    }
}
