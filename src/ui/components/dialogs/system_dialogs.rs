use super::scroll_behavior::ScrollState;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS, TITLE_ALERT};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
CONTACTDASH - Contact Manager
=============================

CONTACT TABLE
-------------
j/k, ↓/↑    Move selection down/up
g, Home     Jump to first contact
End         Jump to last contact
v, Enter    View selected contact
e           Edit selected contact
d           Delete selected contact (with confirmation)
r           Reload contacts from the server

EDIT FORM
---------
Tab, ↓      Next field
Shift+Tab, ↑ Previous field
←/→         Move the cursor (change group on the Group field)
Enter       Save changes
Esc         Cancel without saving

DELETE CONFIRMATION
-------------------
Enter, y    Yes, delete
Esc, n      Cancel

GENERAL CONTROLS
----------------
?, h        Toggle this help panel
G           Show logs
i           Change icon theme
Esc         Close the current dialog, or quit
q, Ctrl+C   Quit application

HELP PANEL SCROLLING
--------------------
j/k, ↓/↑    Scroll down/up
PageUp/Down Page through content
Home/End    Jump to top/bottom

NOTES
-----
Server messages are shown in an alert; press any key to dismiss it.
Connection problems are written to the log and shown in the status bar.

Press 'Esc', '?' or 'h' to close this help panel
";

/// Server message dialog; any key dismisses it
pub fn render_alert_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("{} {}", icons.error(), TITLE_ALERT);
    let instructions = "Press any key to continue";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, icons: &IconService, scroll: &mut ScrollState) {
    let title = format!("{} {}", icons.info(), DIALOG_TITLE_HELP);
    render_scrollable_text(f, area, &title, HELP_CONTENT, scroll);
}

/// `logs` is newest first
pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    logs: &[String],
    scroll: &mut ScrollState,
) {
    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    let title = format!("{} {}", icons.warning(), DIALOG_TITLE_LOGS);
    render_scrollable_text(f, area, &title, &logs_content, scroll);
}

fn render_scrollable_text(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut ScrollState) {
    let overlay_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, overlay_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        overlay_area.x + margin_x,
        overlay_area.y + margin_y,
        overlay_area.width.saturating_sub(margin_x * 2),
        overlay_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll.offset.min(max_scroll);

    scroll.offset = clamped_offset;
    scroll.scrollbar = scroll
        .scrollbar
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar);
    }
}
