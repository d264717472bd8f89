use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let (border, title) = if focused {
        (Style::default().fg(Color::Cyan), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    } else {
        (Style::default().fg(Color::Gray), Style::default().fg(Color::White))
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(title)
        .style(border)
}

/// Creates an input field block; the focused field shows a cursor at `cursor`
/// (a character index).
pub fn create_input_paragraph(value: &str, cursor: usize, field_title: &str, focused: bool) -> Paragraph<'static> {
    let text = if focused {
        let split = value.char_indices().nth(cursor).map(|(i, _)| i).unwrap_or(value.len());
        let (before, after) = value.split_at(split);
        let mut rest = after.chars();
        let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(under_cursor, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(rest.as_str().to_string()),
        ])
    } else {
        Line::from(value.to_string())
    };

    Paragraph::new(text)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph(value: String, field_title: &str, focused: bool) -> Paragraph<'static> {
    let text = if focused { format!("< {} >", value) } else { value };
    Paragraph::new(text)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// One `Label: value` line of a detail view
pub fn detail_line(icon: &str, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} {}: ", icon, label), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph(instructions: &[InstructionShortcut]) -> Paragraph<'static> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save Changes");
    pub const ENTER_DELETE: InstructionShortcut = ("Enter", Color::Red, " Yes, Delete");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next Field");
    pub const ARROWS_GROUP: InstructionShortcut = ("←/→", Color::Cyan, " Change Group");
    pub const EDIT: InstructionShortcut = ("e", Color::Yellow, " Edit");
}
