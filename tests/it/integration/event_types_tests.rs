//! Event-type showcase: arrows, dots and native scrolling across seven
//! event categories.

use crate::helpers::{HarnessBuilder, assert_index};
use carousel::surface::settled_index;
use carousel::{CarouselSettings, NavigationCause};

const EVENT_TYPES: usize = 7;
const WIDTH: f32 = 1024.0;

fn showcase() -> crate::helpers::Harness {
    HarnessBuilder::new(EVENT_TYPES)
        .with_settings(CarouselSettings::event_types())
        .build()
}

#[test]
fn test_arrows_wrap_both_ways() {
    let mut h = showcase();
    assert_eq!(h.carousel.previous(), 6);
    assert_eq!(h.carousel.next(), 0);
    assert_eq!(h.carousel.next(), 1);
    assert_eq!(
        h.causes(),
        vec![NavigationCause::Previous, NavigationCause::Next, NavigationCause::Next]
    );
}

#[test]
fn test_scroll_settle_keeps_existing_cadence() {
    let mut h = showcase();
    h.clock.advance_ms(4_000);
    h.carousel.on_manual_scroll_settled(settled_index(3.0 * WIDTH, WIDTH));
    assert_index(&h, 3);

    // The timer armed at construction still fires at five seconds
    assert_eq!(h.advance_ms(1_000), Some(4));
}

#[test]
fn test_hover_pauses_and_leave_resumes() {
    let mut h = showcase();
    h.clock.advance_ms(4_000);

    h.carousel.on_gesture_start();
    assert_eq!(h.advance_ms(10_000), None);

    h.carousel.on_gesture_end(0.0, WIDTH);
    assert_eq!(h.advance_ms(4_999), None);
    assert_eq!(h.advance_ms(1), Some(1));
}

#[test]
fn test_full_rotation_returns_to_first() {
    let mut h = showcase();
    for _ in 0..EVENT_TYPES {
        h.advance_ms(5_000);
    }
    assert_index(&h, 0);
    assert_eq!(h.visited(), vec![1, 2, 3, 4, 5, 6, 0]);
}
