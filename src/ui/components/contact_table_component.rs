use crate::constants::{COLUMN_ACTIONS, COLUMN_NAME, COLUMN_PHONE, EMPTY_TABLE, ROW_ACTIONS_HINT, TITLE_CONTACT_RECORDS};
use crate::entities::Contact;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// The "Contact Records" table: one row per contact from the last fetch.
#[derive(Default)]
pub struct ContactTableComponent {
    pub contacts: Vec<Contact>,
    pub selected_index: usize,
    pub table_state: TableState,
    pub icons: IconService,
}

impl ContactTableComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, contacts: &[Contact], selected_index: usize) {
        self.contacts = contacts.to_vec();
        self.selected_index = selected_index;
        if self.contacts.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(selected_index.min(self.contacts.len() - 1)));
        }
    }

    /// Fires `make` with the selected row, if there is one
    fn on_selected(&self, make: fn(usize) -> Action) -> Action {
        if self.selected_index < self.contacts.len() {
            make(self.selected_index)
        } else {
            Action::None
        }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " {} {} ({}) ",
                self.icons.contacts_title(),
                TITLE_CONTACT_RECORDS,
                self.contacts.len()
            ))
    }
}

impl Component for ContactTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextContact,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousContact,
            KeyCode::Home | KeyCode::Char('g') => Action::FirstContact,
            KeyCode::End => Action::LastContact,
            KeyCode::Enter | KeyCode::Char('v') => self.on_selected(Action::ViewContact),
            KeyCode::Char('e') => self.on_selected(Action::EditContact),
            KeyCode::Char('d') => self.on_selected(Action::DeleteContact),
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.contacts.is_empty() {
            let empty = Paragraph::new(Line::from(EMPTY_TABLE))
                .style(Style::default().fg(Color::Gray))
                .block(self.block());
            f.render_widget(empty, rect);
            return;
        }

        let header = Row::new([COLUMN_NAME, COLUMN_PHONE, COLUMN_ACTIONS])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let rows = self.contacts.iter().map(|contact| {
            Row::new([
                Cell::from(contact.contact_name.clone()),
                Cell::from(contact.contact_phone.clone()),
                Cell::from(ROW_ACTIONS_HINT).style(Style::default().fg(Color::DarkGray)),
            ])
        });

        let table = Table::new(rows, LayoutManager::table_column_widths(rect.width))
            .header(header)
            .block(self.block())
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}
