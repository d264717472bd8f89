use contactdash::backend::{BackendError, ContactUpdate};
use contactdash::constants::{HINT_REQUIRED_FIELDS, NOTICE_CONTACT_UPDATED, SELECT_GROUP};
use contactdash::dashboard::{Command, DashboardState, Modal, NoticeKind};
use contactdash::entities::{Contact, DraftField, Group, RecordId};

fn contact(id: i64, name: &str, phone: &str) -> Contact {
    Contact::new(id, name, phone)
}

fn loaded_state() -> DashboardState {
    let mut state = DashboardState::new(true);
    state.apply_contacts(Ok(vec![
        contact(1, "Alice", "111"),
        contact(2, "Bob", "222"),
        contact(3, "Carol", "333"),
    ]));
    state.apply_groups(Ok(vec![Group::new(10, "Family"), Group::new(20, "Work")]));
    state
}

/// Replace the focused text field's contents through the editing transitions
fn retype(state: &mut DashboardState, text: &str) {
    let len = state.edit_session().map(|s| s.draft.field(s.focus).chars().count()).unwrap_or(0);
    for _ in 0..len {
        state.backspace();
    }
    for c in text.chars() {
        state.insert_char(c);
    }
}

#[test]
fn test_mount_issues_three_independent_fetches() {
    let state = DashboardState::new(true);
    assert_eq!(
        state.mount(),
        vec![Command::FetchContacts, Command::FetchGroups, Command::FetchUsers]
    );
}

#[test]
fn test_view_shows_the_requested_row() {
    let mut state = loaded_state();

    assert!(state.view(0));
    assert!(matches!(&state.modal, Modal::Viewing(c) if c.contact_name == "Alice"));

    state.cancel();
    assert_eq!(state.modal, Modal::Closed);

    assert!(state.view(2));
    assert!(matches!(&state.modal, Modal::Viewing(c) if c.contact_name == "Carol"));
    assert_eq!(state.selected, 2);
}

#[test]
fn test_view_reflects_latest_fetch() {
    let mut state = loaded_state();
    state.apply_contacts(Ok(vec![contact(1, "Alice Renamed", "111")]));

    assert!(state.view(0));
    assert!(matches!(&state.modal, Modal::Viewing(c) if c.contact_name == "Alice Renamed"));
}

#[test]
fn test_out_of_range_rows_are_ignored() {
    let mut state = loaded_state();

    assert!(!state.view(3));
    assert!(!state.start_edit(99));
    assert!(!state.start_delete(3));
    assert_eq!(state.modal, Modal::Closed);
    assert_eq!(state.selected, 0);
}

#[test]
fn test_start_edit_seeds_draft_with_blanks_for_absent_fields() {
    let mut state = loaded_state();
    state.contacts[1].grp_id = Some(RecordId::from("20"));
    state.contacts[1].contact_email = Some("bob@example.com".to_string());

    assert!(state.start_edit(1));
    let session = state.edit_session().expect("edit form open");
    assert_eq!(session.row, 1);
    assert_eq!(session.draft.name, "Bob");
    assert_eq!(session.draft.phone, "222");
    assert_eq!(session.draft.email, "bob@example.com");
    assert_eq!(session.draft.address, "");
    assert_eq!(session.draft.image, "");
    assert_eq!(session.draft.group, "20");
    assert_eq!(session.focus, DraftField::Name);
    assert_eq!(session.cursor, 3);
}

#[test]
fn test_submit_edit_sends_full_draft_with_original_identity() {
    let mut state = loaded_state();
    state.start_edit(0);
    state.focus_next_field();
    retype(&mut state, "999");

    // A refresh lands while the form is open and reorders the list.
    state.apply_contacts(Ok(vec![contact(2, "Bob", "222"), contact(1, "Alice", "111")]));

    let command = state.submit_edit().expect("valid draft produces a command");
    let Command::UpdateContact(update) = command else {
        panic!("expected an update, got {:?}", command);
    };
    assert_eq!(
        update,
        ContactUpdate {
            contact_id: RecordId::Number(1),
            contact_name: "Alice".to_string(),
            contact_phone: "999".to_string(),
            contact_email: String::new(),
            contact_address: String::new(),
            contact_group: String::new(),
            contact_image: String::new(),
        }
    );
}

#[test]
fn test_submit_edit_requires_name_and_phone() {
    let mut state = loaded_state();
    state.start_edit(0);
    state.focus_next_field();
    retype(&mut state, "   ");

    assert_eq!(state.submit_edit(), None);
    let session = state.edit_session().expect("form stays open");
    assert_eq!(session.hint.as_deref(), Some(HINT_REQUIRED_FIELDS));
    assert_eq!(session.focus, DraftField::Phone);

    // Typing clears the hint
    state.insert_char('5');
    assert_eq!(state.edit_session().and_then(|s| s.hint.clone()), None);
    assert!(state.submit_edit().is_some());
}

#[test]
fn test_update_success_refetches_once_and_closes_editor() {
    let mut state = loaded_state();
    state.start_edit(0);
    state.focus_next_field();
    retype(&mut state, "222");
    state.submit_edit().expect("command");

    let before = state.contacts.clone();
    let follow_up = state.apply_update_result(&RecordId::Number(1), Ok(()));

    assert_eq!(follow_up, Some(Command::FetchContacts));
    assert_eq!(state.modal, Modal::Closed);
    // No client-side row mutation before the re-fetch
    assert_eq!(state.contacts, before);
    assert_eq!(state.contacts[0].contact_phone, "111");
    assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some(NOTICE_CONTACT_UPDATED));
}

#[test]
fn test_update_rejection_keeps_form_and_list() {
    let mut state = loaded_state();
    state.start_edit(0);
    retype(&mut state, "Alicia");
    state.submit_edit().expect("command");
    let modal_before = state.modal.clone();
    let contacts_before = state.contacts.clone();

    let follow_up = state.apply_update_result(
        &RecordId::Number(1),
        Err(BackendError::Rejected("Phone already in use".to_string())),
    );

    assert_eq!(follow_up, None);
    assert_eq!(state.alert.as_deref(), Some("Phone already in use"));
    assert_eq!(state.modal, modal_before);
    assert_eq!(state.contacts, contacts_before);
    assert_eq!(state.edit_session().map(|s| s.draft.name.as_str()), Some("Alicia"));

    state.dismiss_alert();
    assert_eq!(state.alert, None);
    assert_eq!(state.modal, modal_before);
}

#[test]
fn test_transport_failure_only_sets_notice() {
    let mut state = loaded_state();
    state.start_edit(0);
    state.submit_edit().expect("command");
    let modal_before = state.modal.clone();

    let follow_up = state.apply_update_result(
        &RecordId::Number(1),
        Err(BackendError::Network("connection refused".to_string())),
    );

    assert_eq!(follow_up, None);
    assert_eq!(state.alert, None);
    assert_eq!(state.modal, modal_before);
    let notice = state.notice.clone().expect("transport failures are surfaced");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("connection refused"));
}

#[test]
fn test_transport_failure_can_stay_silent() {
    let mut state = DashboardState::new(false);
    state.apply_contacts(Err(BackendError::InvalidData("not json".to_string())));

    assert_eq!(state.notice, None);
    assert_eq!(state.alert, None);
    assert!(state.contacts.is_empty());
}

#[test]
fn test_failed_fetch_keeps_previous_snapshot() {
    let mut state = loaded_state();
    state.apply_contacts(Err(BackendError::Network("timed out".to_string())));
    state.apply_groups(Err(BackendError::Network("timed out".to_string())));

    assert_eq!(state.contacts.len(), 3);
    assert_eq!(state.groups.len(), 2);
}

#[test]
fn test_successful_reload_clears_transport_error() {
    let mut state = DashboardState::new(true);
    state.apply_contacts(Err(BackendError::Network("connection refused".to_string())));
    assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));

    state.apply_contacts(Ok(vec![contact(1, "Alice", "111")]));

    assert_eq!(state.contacts.len(), 1);
    assert!(state.notice.is_none());
}

#[test]
fn test_successful_load_keeps_info_notice() {
    let mut state = loaded_state();
    state.start_edit(0);
    state.submit_edit();
    state.apply_update_result(&RecordId::Number(1), Ok(()));

    state.apply_groups(Ok(vec![Group::new(10, "Family")]));
    state.apply_contacts(Ok(vec![contact(1, "Alice", "111")]));

    assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some(NOTICE_CONTACT_UPDATED));

    state.apply_users(Err(BackendError::Network("timed out".to_string())));
    state.apply_users(Ok(Vec::new()));
    assert!(state.notice.is_none());
}

#[test]
fn test_confirm_delete_uses_contact_captured_on_open() {
    let mut state = loaded_state();
    assert!(state.start_delete(1));

    // The list is refreshed in between and row 1 is now someone else.
    state.apply_contacts(Ok(vec![contact(1, "Alice", "111"), contact(3, "Carol", "333")]));

    assert_eq!(state.confirm_delete(), Some(Command::DeleteContact(RecordId::Number(2))));
}

#[test]
fn test_delete_results() {
    let mut state = loaded_state();
    state.start_delete(2);

    let rejected = state.apply_delete_result(
        &RecordId::Number(3),
        Err(BackendError::Rejected("Contact is locked".to_string())),
    );
    assert_eq!(rejected, None);
    assert!(matches!(state.modal, Modal::ConfirmingDelete(_)));
    assert_eq!(state.alert.as_deref(), Some("Contact is locked"));

    state.dismiss_alert();
    let accepted = state.apply_delete_result(&RecordId::Number(3), Ok(()));
    assert_eq!(accepted, Some(Command::FetchContacts));
    assert_eq!(state.modal, Modal::Closed);
}

#[test]
fn test_late_result_does_not_close_a_different_modal() {
    let mut state = loaded_state();
    state.start_edit(0);
    state.submit_edit().expect("command");

    // User cancels and opens another contact before the response arrives.
    state.cancel();
    state.view(1);

    let follow_up = state.apply_update_result(&RecordId::Number(1), Ok(()));
    assert_eq!(follow_up, Some(Command::FetchContacts));
    assert!(matches!(&state.modal, Modal::Viewing(c) if c.contact_name == "Bob"));
}

#[test]
fn test_confirm_delete_without_modal_is_noop() {
    let mut state = loaded_state();
    assert_eq!(state.confirm_delete(), None);
    state.view(0);
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state.submit_edit(), None);
}

#[test]
fn test_group_selector_cycles_through_empty_choice() {
    let mut state = loaded_state();
    state.start_edit(0);
    for _ in 0..4 {
        state.focus_next_field();
    }
    assert_eq!(state.edit_session().map(|s| s.focus), Some(DraftField::Group));

    let group = |state: &DashboardState| state.edit_session().map(|s| s.draft.group.clone()).unwrap_or_default();

    assert_eq!(group(&state), "");
    assert_eq!(state.group_label(""), SELECT_GROUP);
    state.cycle_group(true);
    assert_eq!(group(&state), "10");
    state.cycle_group(true);
    assert_eq!(group(&state), "20");
    assert_eq!(state.group_label("20"), "Work");
    state.cycle_group(true);
    assert_eq!(group(&state), "");
    state.cycle_group(false);
    assert_eq!(group(&state), "20");

    // Text input does not touch the selector
    state.insert_char('x');
    assert_eq!(group(&state), "20");
}

#[test]
fn test_cursor_editing_in_the_middle_of_a_field() {
    let mut state = loaded_state();
    state.start_edit(0);

    state.move_cursor_left();
    state.move_cursor_left();
    state.insert_char('é');
    assert_eq!(state.edit_session().map(|s| s.draft.name.clone()).as_deref(), Some("Aliéce"));

    state.delete_char();
    assert_eq!(state.edit_session().map(|s| s.draft.name.clone()).as_deref(), Some("Aliée"));

    state.backspace();
    state.backspace();
    assert_eq!(state.edit_session().map(|s| s.draft.name.clone()).as_deref(), Some("Ale"));
    assert_eq!(state.edit_session().map(|s| s.cursor), Some(2));

    for _ in 0..10 {
        state.move_cursor_right();
    }
    assert_eq!(state.edit_session().map(|s| s.cursor), Some(3));
}

#[test]
fn test_field_focus_wraps() {
    let mut state = loaded_state();
    state.start_edit(0);

    state.focus_previous_field();
    assert_eq!(state.edit_session().map(|s| s.focus), Some(DraftField::Image));
    state.focus_next_field();
    assert_eq!(state.edit_session().map(|s| s.focus), Some(DraftField::Name));
}

#[test]
fn test_selection_navigation_and_clamping() {
    let mut state = loaded_state();

    state.select_previous();
    assert_eq!(state.selected, 0);
    state.select_next();
    state.select_next();
    state.select_next();
    assert_eq!(state.selected, 2);
    state.select_first();
    assert_eq!(state.selected, 0);
    state.select_last();
    assert_eq!(state.selected, 2);

    state.apply_contacts(Ok(vec![contact(1, "Alice", "111")]));
    assert_eq!(state.selected, 0);
    assert_eq!(state.selected_contact().map(|c| c.contact_name.as_str()), Some("Alice"));

    state.apply_contacts(Ok(Vec::new()));
    assert_eq!(state.selected, 0);
    assert!(state.selected_contact().is_none());
}

#[test]
fn test_refresh_requests_contacts() {
    assert_eq!(loaded_state().refresh(), Command::FetchContacts);
}

#[test]
fn test_state_round_trips_through_json() {
    let mut state = loaded_state();
    state.start_edit(1);
    state.insert_char('!');

    let json = serde_json::to_string(&state).unwrap();
    let restored: DashboardState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}
