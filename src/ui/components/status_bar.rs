//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::dashboard::{Notice, NoticeKind};
use crate::icons::IconService;

const KEY_HINTS: &str = "v: view • e: edit • d: delete • r: refresh • ?: help • q: quit";

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown in the status bar, without styling
    pub fn status_text(notice: Option<&Notice>, in_flight: usize, icons: &IconService) -> String {
        let mut parts = Vec::new();
        if in_flight > 0 {
            parts.push(format!("{} {} request(s) in flight", icons.request_in_flight(), in_flight));
        }
        if let Some(notice) = notice {
            let icon = match notice.kind {
                NoticeKind::Info => icons.success(),
                NoticeKind::Error => icons.error(),
            };
            parts.push(format!("{} {}", icon, notice.message));
        }
        parts.push(KEY_HINTS.to_string());
        parts.join(" │ ")
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, notice: Option<&Notice>, in_flight: usize, icons: &IconService) {
        let status_color = match notice.map(|n| n.kind) {
            Some(NoticeKind::Error) => Color::Red,
            _ if in_flight > 0 => Color::Yellow,
            _ => Color::Gray,
        };

        let status_bar = Paragraph::new(Line::from(Span::raw(Self::status_text(notice, in_flight, icons))))
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
