//! Toast lifecycle: per-toast timers, stacking, independent removal.

use folio::notify::{ToastKind, ToastPhase, TOAST_EXIT, TOAST_VISIBLE};
use folio::{update, Command, Message};

use crate::fixtures::page;

#[test]
fn dismissal_delays_match_contract() {
    assert_eq!(TOAST_VISIBLE.as_millis(), 3000);
    assert_eq!(TOAST_EXIT.as_millis(), 300);
}

#[test]
fn notify_schedules_one_exit_timer_per_toast() {
    let mut p = page();
    let mut cmds = Vec::new();
    p.notify("first", ToastKind::Info, &mut cmds);
    p.notify("second", ToastKind::Error, &mut cmds);

    let ids: Vec<_> = p.toasts.items().iter().map(|t| t.id).collect();
    assert_eq!(
        cmds,
        vec![
            Command::ScheduleToastExit {
                id: ids[0],
                delay: TOAST_VISIBLE
            },
            Command::ScheduleToastExit {
                id: ids[1],
                delay: TOAST_VISIBLE
            },
        ]
    );
}

#[test]
fn two_toasts_live_and_die_independently() {
    let mut p = page();
    let mut cmds = Vec::new();
    p.notify("first", ToastKind::Info, &mut cmds);
    p.notify("second", ToastKind::Success, &mut cmds);
    let first = p.toasts.items()[0].id;
    let second = p.toasts.items()[1].id;

    // First expires: only it starts exiting.
    let cmds = update(&mut p, Message::ToastExpired(first));
    assert_eq!(
        cmds,
        vec![Command::ScheduleToastRemoval {
            id: first,
            delay: TOAST_EXIT
        }]
    );
    assert_eq!(p.toasts.items()[0].phase, ToastPhase::Exiting);
    assert_eq!(p.toasts.items()[1].phase, ToastPhase::Entering);

    // First is removed; second is untouched.
    update(&mut p, Message::ToastRemoved(first));
    assert_eq!(p.toasts.len(), 1);
    assert_eq!(p.toasts.items()[0].id, second);
    assert_eq!(p.toasts.items()[0].phase, ToastPhase::Entering);

    // Second follows its own schedule to the end.
    let cmds = update(&mut p, Message::ToastExpired(second));
    assert_eq!(
        cmds,
        vec![Command::ScheduleToastRemoval {
            id: second,
            delay: TOAST_EXIT
        }]
    );
    update(&mut p, Message::ToastRemoved(second));
    assert!(p.toasts.is_empty());
}

#[test]
fn expiry_for_dead_toast_schedules_nothing() {
    let mut p = page();
    let mut cmds = Vec::new();
    p.notify("gone", ToastKind::Info, &mut cmds);
    let id = p.toasts.items()[0].id;

    update(&mut p, Message::ToastExpired(id));
    update(&mut p, Message::ToastRemoved(id));

    // Late timers for a removed toast fall through silently.
    assert!(update(&mut p, Message::ToastExpired(id)).is_empty());
    assert!(update(&mut p, Message::ToastRemoved(id)).is_empty());
}
