use crate::backend::ContactBackend;
use crate::config::Config;
use crate::constants::TITLE_APP;
use crate::dashboard::{Command, DashboardState};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::components::{ContactModalComponent, ContactTableComponent, DialogComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the dashboard state and is the only place it is mutated.
pub struct AppComponent {
    // Component composition
    table: ContactTableComponent,
    modal: ContactModalComponent,
    dialog: DialogComponent,

    // Application state
    state: DashboardState,

    // Services
    backend: Arc<dyn ContactBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    icons: IconService,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn ContactBackend>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger);

        let mut app = Self {
            table: ContactTableComponent::new(),
            modal: ContactModalComponent::new(config.backend.image_base_url.clone()),
            dialog,
            state: DashboardState::new(config.ui.surface_transport_errors),
            backend,
            task_manager,
            background_action_rx,
            icons: IconService::new(config.ui.icon_theme),
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.active_task_count() > 0
    }

    /// Issue the initial loads
    pub fn mount(&mut self) {
        log::info!("Dashboard: loading from {}", self.backend.describe());
        for command in self.state.mount() {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        self.task_manager.spawn_command(Arc::clone(&self.backend), command);
    }

    /// Push current state and theme into the child components
    fn sync_component_data(&mut self) {
        self.table.update_data(&self.state.contacts, self.state.selected);
        self.table.icons = self.icons.clone();
        self.modal.update_data(&self.state);
        self.modal.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                log::debug!("Global key: {:?} - quitting application", key.code);
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Route a key to whatever is on top: alert, overlay, modal, then the table
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.state.alert.is_some() {
            return Action::DismissAlert;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.modal.is_visible() {
            return self.modal.handle_key_events(key);
        }

        match self.table.handle_key_events(key) {
            Action::None => self.handle_global_key(key),
            action => action,
        }
    }

    /// Apply a key press end to end
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.route_key(key);
        self.dispatch(action);
    }

    /// Run an action through the components, then the app
    pub fn dispatch(&mut self, action: Action) {
        let action = self.dialog.update(action);
        let action = self.table.update(action);
        let action = self.modal.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
    }

    fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::NextContact => self.state.select_next(),
            Action::PreviousContact => self.state.select_previous(),
            Action::FirstContact => self.state.select_first(),
            Action::LastContact => self.state.select_last(),

            Action::ViewContact(row) => {
                self.state.view(row);
            }
            Action::EditContact(row) => {
                self.state.start_edit(row);
            }
            Action::DeleteContact(row) => {
                self.state.start_delete(row);
            }
            Action::Refresh => {
                log::info!("Dashboard: manual refresh");
                let command = self.state.refresh();
                self.execute(command);
            }

            Action::InsertChar(c) => self.state.insert_char(c),
            Action::Backspace => self.state.backspace(),
            Action::DeleteChar => self.state.delete_char(),
            Action::CursorLeft => self.state.move_cursor_left(),
            Action::CursorRight => self.state.move_cursor_right(),
            Action::NextField => self.state.focus_next_field(),
            Action::PreviousField => self.state.focus_previous_field(),
            Action::CycleGroup { forward } => self.state.cycle_group(forward),
            Action::SubmitEdit => {
                if let Some(command) = self.state.submit_edit() {
                    self.execute(command);
                }
            }
            Action::ConfirmDelete => {
                if let Some(command) = self.state.confirm_delete() {
                    self.execute(command);
                }
            }
            Action::CancelModal => self.state.cancel(),
            Action::DismissAlert => self.state.dismiss_alert(),

            Action::ContactsLoaded(result) => self.state.apply_contacts(result),
            Action::GroupsLoaded(result) => self.state.apply_groups(result),
            Action::UsersLoaded(result) => self.state.apply_users(result),
            Action::ContactUpdated { contact_id, result } => {
                if let Some(command) = self.state.apply_update_result(&contact_id, result) {
                    self.execute(command);
                }
            }
            Action::ContactDeleted { contact_id, result } => {
                if let Some(command) = self.state.apply_delete_result(&contact_id, result) {
                    self.execute(command);
                }
            }

            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::debug!("Icon theme: {:?}", self.icons.theme());
            }
            Action::Quit => {
                log::info!("Quitting");
                self.should_quit = true;
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
    }

    /// Drain results reported by background tasks
    pub fn process_background_actions(&mut self) -> usize {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let count = actions.len();
        for action in actions {
            self.dispatch(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        count
    }

    /// Wait for the next background result and apply it. Returns false when
    /// no more results can arrive.
    pub async fn apply_next_background_action(&mut self) -> bool {
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Process a terminal event; returns whether a redraw is needed
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        match event_type {
            EventType::Key(key) => {
                self.handle_key(key);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.process_background_actions() > 0 || self.is_busy(),
            EventType::Other => false,
        }
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let header = Paragraph::new(TITLE_APP)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(header, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.render_header(f, areas.header);
        self.table.render(f, areas.table);
        StatusBar::render(
            f,
            areas.status,
            self.state.notice.as_ref(),
            self.active_task_count(),
            &self.icons,
        );

        if self.modal.is_visible() {
            self.modal.render(f, rect);
        }
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
        if let Some(message) = &self.state.alert {
            system_dialogs::render_alert_dialog(f, rect, &self.icons, message);
        }
    }
}
