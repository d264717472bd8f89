mod common;

use common::{sample_contacts, FakeBackend};
use contactdash::backend::BackendError;
use contactdash::config::Config;
use contactdash::constants::{EMPTY_TABLE, HINT_REQUIRED_FIELDS, NOT_AVAILABLE, SELECT_GROUP};
use contactdash::dashboard::Notice;
use contactdash::icons::{IconService, IconTheme};
use contactdash::logger::Logger;
use contactdash::ui::components::StatusBar;
use contactdash::ui::core::{Action, Component};
use contactdash::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn ascii_app() -> AppComponent {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;
    let backend = Arc::new(FakeBackend::default());
    AppComponent::new(backend, &config, Logger::new())
}

fn loaded_app() -> AppComponent {
    let mut app = ascii_app();
    app.dispatch(Action::ContactsLoaded(Ok(sample_contacts())));
    app
}

/// Draw one frame and return the screen as text, one line per row.
fn render(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_table_has_one_row_per_contact() {
    let mut app = loaded_app();
    let screen = render(&mut app);

    assert!(screen.contains("Contact Manager"));
    assert!(screen.contains("Contact Records (3)"));
    for name in ["Alice", "Bob", "Carol"] {
        assert_eq!(screen.matches(name).count(), 1, "{name} should appear once");
    }
    assert_eq!(screen.matches("[v]iew [e]dit [d]elete").count(), 3);
}

#[test]
fn test_empty_table_message() {
    let mut app = ascii_app();
    let screen = render(&mut app);

    assert!(screen.contains(EMPTY_TABLE));
    assert!(screen.contains("Contact Records (0)"));
}

#[test]
fn test_delete_modal_marks_absent_values() {
    let mut app = loaded_app();
    app.dispatch(Action::DeleteContact(1));
    let screen = render(&mut app);

    assert!(screen.contains("Delete Contact"));
    assert!(screen.contains("Bob"));
    assert!(screen.contains(NOT_AVAILABLE));
}

#[test]
fn test_view_modal_leaves_absent_values_blank() {
    let mut app = loaded_app();
    app.dispatch(Action::ViewContact(1));
    let screen = render(&mut app);

    assert!(screen.contains("View Contact"));
    assert!(!screen.contains(NOT_AVAILABLE));
}

#[test]
fn test_edit_form_shows_seeded_draft_and_hint() {
    let mut app = loaded_app();
    app.dispatch(Action::EditContact(0));
    let screen = render(&mut app);
    assert!(screen.contains("Edit Contact"));
    assert!(screen.contains("alice@example.com"));

    app.dispatch(Action::EditContact(1));
    for _ in 0..3 {
        app.dispatch(Action::Backspace);
    }
    app.dispatch(Action::SubmitEdit);
    let screen = render(&mut app);
    assert!(screen.contains(HINT_REQUIRED_FIELDS));
    assert!(screen.contains(SELECT_GROUP));
}

#[test]
fn test_modals_show_image_url() {
    let mut contacts = sample_contacts();
    contacts[1].contact_image = Some("bob.png".to_string());

    let mut app = ascii_app();
    app.dispatch(Action::ContactsLoaded(Ok(contacts)));

    app.dispatch(Action::ViewContact(1));
    let screen = render(&mut app);
    assert!(screen.contains("http://localhost/contacts/images/bob.png"));

    app.dispatch(Action::CancelModal);
    app.dispatch(Action::DeleteContact(1));
    let screen = render(&mut app);
    assert!(screen.contains("http://localhost/contacts/images/bob.png"));

    app.dispatch(Action::CancelModal);
    app.dispatch(Action::ViewContact(0));
    let screen = render(&mut app);
    assert!(!screen.contains("/contacts/images/"));
}

#[test]
fn test_alert_is_drawn_over_the_modal() {
    let mut app = loaded_app();
    app.dispatch(Action::DeleteContact(0));
    app.dispatch(Action::ContactDeleted {
        contact_id: 1.into(),
        result: Err(BackendError::Rejected("Contact has linked records".to_string())),
    });
    let screen = render(&mut app);

    assert!(screen.contains("Alert"));
    assert!(screen.contains("Contact has linked records"));
}

#[test]
fn test_status_text() {
    let icons = IconService::new(IconTheme::Ascii);

    let idle = StatusBar::status_text(None, 0, &icons);
    assert!(!idle.contains("in flight"));
    assert!(idle.contains("q: quit"));

    let busy = StatusBar::status_text(Some(&Notice::error("Could not load contacts")), 2, &icons);
    assert!(busy.contains("2 request(s) in flight"));
    assert!(busy.contains("Could not load contacts"));
}
