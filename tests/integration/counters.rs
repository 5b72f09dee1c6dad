//! Counter animation: starts at half visibility, runs 50 ticks,
//! ends on the exact original text.

use folio::document::ElementId;
use folio::{startup, update, Command, Message};

use crate::fixtures::page;

fn started_counters(cmds: &[Command]) -> Vec<ElementId> {
    cmds.iter()
        .filter_map(|cmd| match cmd {
            Command::StartCounter { element } => Some(*element),
            _ => None,
        })
        .collect()
}

#[test]
fn counters_start_zeroed_with_suffix_preserved() {
    let mut p = page();
    let cmds = startup(&mut p);

    let started = started_counters(&cmds);
    // Sample content has three numeric stats: "25+", "8", "98%".
    assert_eq!(started.len(), 3);

    let texts: Vec<String> = started
        .iter()
        .map(|&e| p.doc.get(e).unwrap().text.clone())
        .collect();
    assert!(texts.contains(&"0+".to_string()), "texts: {:?}", texts);
    assert!(texts.contains(&"0".to_string()));
    assert!(texts.contains(&"0%".to_string()));
}

#[test]
fn counter_finishes_in_fifty_ticks_with_exact_text() {
    let mut p = page();
    let cmds = startup(&mut p);

    // The "25+" stat resets to "0+" on start.
    let element = *started_counters(&cmds)
        .iter()
        .find(|&&e| p.doc.get(e).unwrap().text == "0+")
        .expect("25+ counter running");

    let mut ticks = 0;
    let mut last_value = 0i64;
    loop {
        let cmds = update(&mut p, Message::CounterTick(element));
        ticks += 1;
        assert!(ticks <= 50, "counter overran its 50-tick budget");

        let text = p.doc.get(element).unwrap().text.clone();
        if cmds.contains(&Command::StopCounter { element }) {
            assert_eq!(text, "25+", "final display snaps to the source text");
            break;
        }
        let value: i64 = text.trim_end_matches('+').parse().unwrap();
        assert!(value >= last_value, "display must be non-decreasing");
        assert!(text.ends_with('+'), "suffix preserved mid-animation");
        last_value = value;
    }
    assert_eq!(ticks, 50);
}

#[test]
fn stray_tick_after_completion_stops_ticker() {
    let mut p = page();
    let cmds = startup(&mut p);
    let element = started_counters(&cmds)[0];

    loop {
        let cmds = update(&mut p, Message::CounterTick(element));
        if cmds.contains(&Command::StopCounter { element }) {
            break;
        }
    }

    // A tick that raced the cancellation re-requests the stop and leaves
    // the text alone.
    let before = p.doc.get(element).unwrap().text.clone();
    let cmds = update(&mut p, Message::CounterTick(element));
    assert_eq!(cmds, vec![Command::StopCounter { element }]);
    assert_eq!(p.doc.get(element).unwrap().text, before);
}

#[test]
fn counters_never_restart_after_revisit() {
    let mut p = page();
    let cmds = startup(&mut p);
    assert!(!started_counters(&cmds).is_empty());

    // Scroll far away and back over the stats.
    let max = p.max_scroll();
    let away = crate::fixtures::scroll_to(&mut p, max);
    assert!(started_counters(&away).is_empty());
    let back = crate::fixtures::scroll_to(&mut p, 0);
    assert!(
        started_counters(&back).is_empty(),
        "stat numbers animate at most once"
    );
}
