//! Contact form: validation outcomes and the full submit flow.

use crossterm::event::KeyCode;

use folio::form::{valid_email, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS, MSG_SENT};
use folio::notify::ToastKind;
use folio::{update, Mode};

use crate::fixtures::{key, page, type_str};

#[test]
fn email_shape_check() {
    assert!(valid_email("a@b.co"));
    assert!(!valid_email("a@b"), "no dot after the @");
    assert!(!valid_email("a b@c.com"), "embedded space");
    assert!(!valid_email(""));
}

#[test]
fn submit_success_end_to_end() {
    let mut p = page();

    update(&mut p, key(KeyCode::Char('f')));
    assert_eq!(p.mode, Mode::Form);

    type_str(&mut p, "Alice");
    update(&mut p, key(KeyCode::Tab));
    type_str(&mut p, "alice@example.com");
    update(&mut p, key(KeyCode::Tab));
    type_str(&mut p, "Hi");
    update(&mut p, key(KeyCode::Enter));

    // Exactly one success notification...
    assert_eq!(p.toasts.len(), 1);
    let toast = &p.toasts.items()[0];
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, MSG_SENT);

    // ...and all three fields reset to empty.
    assert!(p.form.name.is_empty());
    assert!(p.form.email.is_empty());
    assert!(p.form.message.is_empty());
    assert_eq!(p.mode, Mode::Browse);
}

#[test]
fn empty_fields_rejected_with_error_toast() {
    let mut p = page();
    update(&mut p, key(KeyCode::Char('f')));
    update(&mut p, key(KeyCode::Enter));

    assert_eq!(p.toasts.len(), 1);
    let toast = &p.toasts.items()[0];
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, MSG_MISSING_FIELDS);
    assert_eq!(p.mode, Mode::Form, "rejection keeps the user in the form");
}

#[test]
fn whitespace_only_field_counts_as_empty() {
    let mut p = page();
    update(&mut p, key(KeyCode::Char('f')));
    type_str(&mut p, "   ");
    update(&mut p, key(KeyCode::Tab));
    type_str(&mut p, "a@b.co");
    update(&mut p, key(KeyCode::Tab));
    type_str(&mut p, "Hi");
    update(&mut p, key(KeyCode::Enter));

    assert_eq!(p.toasts.items()[0].message, MSG_MISSING_FIELDS);
}

#[test]
fn bad_email_rejected_and_values_retained() {
    let mut p = page();
    update(&mut p, key(KeyCode::Char('f')));
    type_str(&mut p, "Alice");
    update(&mut p, key(KeyCode::Tab));
    type_str(&mut p, "alice@example");
    update(&mut p, key(KeyCode::Tab));
    type_str(&mut p, "Hi");
    update(&mut p, key(KeyCode::Enter));

    assert_eq!(p.toasts.len(), 1);
    assert_eq!(p.toasts.items()[0].message, MSG_INVALID_EMAIL);

    // The draft survives rejection for the user to fix.
    assert_eq!(p.form.name, "Alice");
    assert_eq!(p.form.email, "alice@example");
    assert_eq!(p.form.message, "Hi");
}

#[test]
fn each_rejection_raises_its_own_toast() {
    let mut p = page();
    update(&mut p, key(KeyCode::Char('f')));
    update(&mut p, key(KeyCode::Enter));
    update(&mut p, key(KeyCode::Enter));

    // No deduplication: two identical failures, two toasts.
    assert_eq!(p.toasts.len(), 2);
    assert_ne!(p.toasts.items()[0].id, p.toasts.items()[1].id);
}
