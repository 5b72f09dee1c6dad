//! Scroll-linked effects: active-section tracking, progress, parallax.

use folio::{startup, update, Message};

use crate::fixtures::{page, scroll_to, synthetic_page};

#[test]
fn tracker_picks_last_section_past_margin() {
    let mut p = synthetic_page(&[("s1", 0, 800), ("s2", 1000, 800), ("s3", 2000, 800)]);

    // 850 ≥ 1000 − 200 qualifies s2 but not s3.
    scroll_to(&mut p, 850);
    assert_eq!(p.active_section.as_deref(), Some("s2"));

    // 1950 ≥ 2000 − 200 flips to the lowest qualifying section.
    scroll_to(&mut p, 1950);
    assert_eq!(p.active_section.as_deref(), Some("s3"));
}

#[test]
fn tracker_moves_active_class_between_nav_links() {
    let mut p = synthetic_page(&[("s1", 0, 800), ("s2", 1000, 800), ("s3", 2000, 800)]);
    scroll_to(&mut p, 850);

    let active: Vec<_> = p
        .doc
        .nav_links()
        .into_iter()
        .filter(|&link| p.doc.has_class(link, "active"))
        .collect();
    assert_eq!(active.len(), 1, "exactly one link is active");
    let target = p.doc.get(active[0]).unwrap().target_id().unwrap().to_string();
    assert_eq!(target, "s2");

    // Moving on strips the old link.
    scroll_to(&mut p, 1950);
    assert!(!p.doc.has_class(active[0], "active"));
}

#[test]
fn no_section_active_before_first_threshold() {
    let mut p = synthetic_page(&[("s1", 300, 800)]);
    scroll_to(&mut p, 0);

    assert_eq!(p.active_section, None);
    assert!(p
        .doc
        .nav_links()
        .into_iter()
        .all(|link| !p.doc.has_class(link, "active")));
}

#[test]
fn progress_is_zero_when_page_fits_viewport() {
    // 100 units of content against a 300-unit viewport: no overflow, and
    // the division-by-zero case reads 0% instead of NaN.
    let mut p = synthetic_page(&[("s1", 0, 100)]);
    scroll_to(&mut p, 50);
    assert_eq!(p.scroll_y, 0, "scroll clamps on a non-scrolling page");
    assert_eq!(p.progress, 0.0);
}

#[test]
fn progress_tracks_scroll_fraction() {
    // 1300 units of content, 300-unit viewport: 1000 scrollable.
    let mut p = synthetic_page(&[("s1", 0, 1300)]);

    scroll_to(&mut p, 250);
    assert!((p.progress - 25.0).abs() < 1e-9, "got {}", p.progress);

    scroll_to(&mut p, 1000);
    assert!((p.progress - 100.0).abs() < 1e-9, "got {}", p.progress);
}

#[test]
fn parallax_blobs_translate_linearly_with_scroll() {
    let mut p = page();
    startup(&mut p);
    scroll_to(&mut p, 200);

    let blobs = p.doc.query_class_contains("blob");
    assert_eq!(blobs.len(), 3);
    for (index, &id) in blobs.iter().enumerate() {
        let expected = 200.0 * (0.5 + 0.1 * index as f64);
        let got = p.doc.get(id).unwrap().translate_y;
        assert!((got - expected).abs() < 1e-6, "blob {}: {}", index, got);
    }

    // Straight back to zero at the top; no easing, no residue.
    scroll_to(&mut p, 0);
    for &id in &blobs {
        assert_eq!(p.doc.get(id).unwrap().translate_y, 0.0);
    }
}

#[test]
fn every_scroll_event_recomputes_effects() {
    let mut p = synthetic_page(&[("s1", 0, 1300)]);
    scroll_to(&mut p, 100);
    let first = p.progress;

    // Wheel events run the same pipeline as programmatic scrolls.
    update(&mut p, Message::Wheel(3));
    assert!(p.progress > first);
    assert_eq!(p.scroll_y, 130);
}
