use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that turns keys into [`Action`]s and draws itself.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume the actions this component owns and pass the rest through.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
