// End-to-end scripted sessions through all four phases.

mod test_helpers;

use test_helpers::*;
use videosetter::session::{Phase, SessionOutcome};
use videosetter::state::NAME_CYCLE;
use videosetter::transform::Point;

#[test]
fn full_session_exports_two_digits() {
    let mut session = new_session(640, 480, 25.0);

    let mut events = Vec::new();
    // Crop down to the display area.
    events.extend(drag(10, 10, 600, 400));
    events.push(confirm());
    // Two rotation steps (180 degrees).
    events.push(rotate());
    events.push(rotate());
    events.push(confirm());
    // Fourteen segments across two digits.
    let d0 = seven_positions(100, 100);
    let d1 = seven_positions(300, 100);
    for &(x, y) in d0.iter().chain(&d1) {
        events.push(press(x, y));
    }
    events.push(confirm());
    // Name every segment by clicking it again in placement order.
    for &(x, y) in d0.iter().chain(&d1) {
        events.push(press(x, y));
    }
    events.push(confirm());

    let outcome = run_script(&mut session, events);
    let SessionOutcome::Completed(export) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(session.phase(), Phase::Done);
    assert_eq!(export.start_frame, 0);
    assert_eq!(export.step, 25);
    assert_eq!(export.digits.len(), 2);
    for digit in &export.digits {
        assert_eq!(digit.segments.len(), 7);
        // Names land in cycle order per digit because the clicks retrace
        // the placements; the cycle wraps cleanly into the second digit.
        let names: Vec<_> = digit.segments.iter().map(|s| s.name.unwrap()).collect();
        assert_eq!(names, NAME_CYCLE.to_vec());
    }

    // Screen position -> canonical: crop offset added, then the 180-degree
    // rotation undone against the original 640x480 frame.
    let (x, y) = d0[0];
    assert_eq!(
        export.digits[0].segments[0].position,
        Point::new(640 - (x + 10), 480 - (y + 10))
    );
}

#[test]
fn abort_when_events_run_out() {
    let mut session = new_session(320, 240, 30.0);
    let outcome = run_script(&mut session, Vec::new());
    assert_eq!(outcome, SessionOutcome::Aborted);
    assert_eq!(session.phase(), Phase::Aborted);
}

#[test]
fn abort_mid_placement_exports_nothing() {
    let mut session = new_session(320, 240, 30.0);
    let mut events = vec![confirm(), confirm()];
    events.push(press(50, 50));
    events.push(press(60, 60));
    let outcome = run_script(&mut session, events);
    assert_eq!(outcome, SessionOutcome::Aborted);
    // State is retained for inspection but nothing was exported.
    assert_eq!(session.model().segment_count(), 2);
}

#[test]
fn unknown_events_are_ignored_in_every_phase() {
    let mut session = new_session(320, 240, 30.0);
    let positions = seven_positions(100, 100);

    let mut events = vec![key(999), middle(5, 5), release(9, 9), confirm()];
    events.push(key(-42));
    events.push(confirm());
    for &(x, y) in &positions {
        events.push(press(x, y));
        events.push(middle(x, y)); // older delete gesture, ignored
    }
    events.push(key(777));
    events.push(confirm());
    for &(x, y) in &positions {
        events.push(press(x, y));
    }
    events.push(key(0));
    events.push(confirm());

    let outcome = run_script(&mut session, events);
    assert!(matches!(outcome, SessionOutcome::Completed(_)));
    assert_eq!(session.model().digit_count(), 1);
}

#[test]
fn rotation_key_only_works_in_rotating_phase() {
    let mut session = new_session(320, 240, 30.0);
    let events = vec![
        rotate(), // ignored while cropping
        confirm(),
        rotate(),
        rotate(),
        rotate(),
        confirm(),
        rotate(), // ignored while placing
    ];
    let outcome = run_script(&mut session, events);
    assert_eq!(outcome, SessionOutcome::Aborted);
    assert_eq!(session.pipeline().quadrant(), 3);
}

#[test]
fn placement_click_converts_through_crop() {
    let mut session = new_session(640, 480, 30.0);
    let mut events = drag(100, 100, 400, 400);
    events.push(confirm());
    events.push(confirm());
    events.push(press(10, 10));
    run_script(&mut session, events);

    let digits = session.model().digits();
    assert_eq!(digits.len(), 1);
    assert_eq!(digits[0].segments[0].pos, Point::new(110, 110));
}

#[test]
fn second_crop_is_relative_to_the_first() {
    let mut session = new_session(640, 480, 25.0);
    let mut events = drag(100, 100, 400, 400);
    // The second drag happens on the already-cropped display; its corners
    // are recorded as seen, without the first region's offset.
    events.extend(drag(50, 50, 150, 150));
    run_script(&mut session, events);

    let crops = session.pipeline().crops();
    assert_eq!(crops.len(), 2);
    assert_eq!(crops[0].top_left, Point::new(100, 100));
    assert_eq!(crops[1].top_left, Point::new(50, 50));
    assert_eq!(crops[1].bottom_right, Point::new(150, 150));
    assert_eq!(session.pipeline().cropped_size(), (100, 100));
}

#[test]
fn crop_corners_divide_out_the_display_scale() {
    let mut session = new_session(1920, 1080, 25.0);
    // Scale is 900/1080 when the drag lands.
    run_script(&mut session, drag(100, 100, 850, 850));
    let crops = session.pipeline().crops();
    assert_eq!(crops[0].top_left, Point::new(120, 120));
    assert_eq!(crops[0].bottom_right, Point::new(1020, 1020));
}

#[test]
fn zero_area_crop_drags_are_dropped() {
    let mut session = new_session(640, 480, 25.0);
    // A stray click-release at one point, then a zero-height drag.
    let mut events = vec![press(200, 200), release(200, 200)];
    events.extend(drag(100, 150, 300, 150));
    run_script(&mut session, events);
    assert!(session.pipeline().crops().is_empty());
}

#[test]
fn oversized_frame_scales_pointer_input() {
    let mut session = new_session(1920, 1080, 30.0);
    // No crop, no rotation; scale is 900/1080.
    let events = vec![confirm(), confirm(), press(100, 100)];
    run_script(&mut session, events);
    assert_eq!(
        session.model().digits()[0].segments[0].pos,
        Point::new(120, 120)
    );
}

#[test]
fn empty_layout_can_still_confirm_through() {
    // With nothing placed, the completion gate holds vacuously.
    let mut session = new_session(320, 240, 24.0);
    let events = vec![confirm(), confirm(), confirm(), confirm()];
    let outcome = run_script(&mut session, events);
    let SessionOutcome::Completed(export) = outcome else {
        panic!("expected completion");
    };
    assert!(export.digits.is_empty());
    assert_eq!(export.step, 24);
}
