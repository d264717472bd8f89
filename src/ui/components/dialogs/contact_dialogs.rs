use super::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph,
    detail_line, shortcuts,
};
use crate::constants::{DELETE_PROMPT, NOT_AVAILABLE, TITLE_DELETE_CONTACT, TITLE_EDIT_CONTACT, TITLE_VIEW_CONTACT};
use crate::dashboard::EditSession;
use crate::entities::{non_empty, Contact, DraftField};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Detail lines for a contact; `absent` stands in for missing values.
fn contact_lines(icons: &IconService, contact: &Contact, image_base_url: &str, absent: &str) -> Vec<Line<'static>> {
    let fields = icons.fields();
    let or_absent = |value: &Option<String>| non_empty(value).unwrap_or(absent).to_string();
    let text_or_absent = |value: &str| if value.is_empty() { absent.to_string() } else { value.to_string() };

    let mut lines = vec![
        detail_line(fields.name, "Name", &text_or_absent(&contact.contact_name)),
        detail_line(fields.phone, "Phone", &text_or_absent(&contact.contact_phone)),
        detail_line(fields.email, "Email", &or_absent(&contact.contact_email)),
        detail_line(fields.address, "Address", &or_absent(&contact.contact_address)),
        detail_line(fields.group, "Group", &or_absent(&contact.grp_name)),
        detail_line(fields.user, "User", &or_absent(&contact.usr_fullname)),
    ];
    if let Some(url) = contact.image_url(image_base_url) {
        lines.push(detail_line(fields.image, "Image", &url));
    }
    lines
}

pub fn render_view_contact_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    contact: &Contact,
    image_base_url: &str,
) {
    let lines = contact_lines(icons, contact, image_base_url, "");
    let dialog_area = LayoutManager::centered_rect_lines(60, lines.len() as u16 + 6, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!("{} {}", icons.info(), TITLE_VIEW_CONTACT), Color::Cyan);
    let inner = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let details = Paragraph::new(lines).wrap(Wrap { trim: false });
    let instructions = create_instructions_paragraph(&[shortcuts::EDIT, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]);

    f.render_widget(block, dialog_area);
    f.render_widget(details, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

/// Edit form. `group_label` resolves the draft's group id to a display name.
pub fn render_edit_contact_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    session: &EditSession,
    group_label: &str,
) {
    let hint_height = u16::from(session.hint.is_some());
    let dialog_area = LayoutManager::centered_rect_lines(70, 24 + hint_height, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!("{} {}", icons.edit(), TITLE_EDIT_CONTACT), Color::Cyan);
    let inner = block.inner(dialog_area);

    let mut constraints: Vec<Constraint> = DraftField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(hint_height));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    f.render_widget(block, dialog_area);

    for (index, field) in DraftField::ALL.iter().enumerate() {
        let focused = session.focus == *field;
        let widget = match field {
            DraftField::Group => create_selection_paragraph(group_label.to_string(), field.label(), focused),
            _ => create_input_paragraph(session.draft.field(*field), session.cursor, field.label(), focused),
        };
        f.render_widget(widget, chunks[index]);
    }

    if let Some(hint) = &session.hint {
        let hint_paragraph = Paragraph::new(format!("{} {}", icons.warning(), hint))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(hint_paragraph, chunks[DraftField::ALL.len()]);
    }

    let mut instructions = vec![shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::TAB_NEXT];
    if session.focus == DraftField::Group {
        instructions.extend([shortcuts::SEPARATOR, shortcuts::ARROWS_GROUP]);
    }
    instructions.extend([shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
    f.render_widget(
        create_instructions_paragraph(&instructions),
        chunks[DraftField::ALL.len() + 1],
    );
}

pub fn render_delete_contact_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    contact: &Contact,
    image_base_url: &str,
) {
    let lines = contact_lines(icons, contact, image_base_url, NOT_AVAILABLE);
    let dialog_area = LayoutManager::centered_rect_lines(60, lines.len() as u16 + 8, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!("{} {}", icons.warning(), TITLE_DELETE_CONTACT), Color::Red);
    let inner = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let prompt = Paragraph::new(DELETE_PROMPT)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let details = Paragraph::new(lines).wrap(Wrap { trim: false });
    let instructions =
        create_instructions_paragraph(&[shortcuts::ENTER_DELETE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);

    f.render_widget(block, dialog_area);
    f.render_widget(prompt, chunks[0]);
    f.render_widget(details, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}
