use std::time::Duration;

use app::catalog::{PROJECTS, TESTIMONIALS};
use app::state::carousel::{Carousel, AUTOPLAY_INTERVAL, RESUME_DELAY};
use app::state::display::{ProjectDisplay, Toggle, COLLAPSE_DELAY};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn toggling_round_trips_between_featured_and_full_views() {
    setup();

    let mut display = ProjectDisplay::new(PROJECTS);
    assert_eq!(3, display.visible().len());

    // Expand: the whole catalog becomes visible with the filter reset.
    assert_eq!(Some(Toggle::Expanded), display.toggle());
    display.settle();
    assert_eq!(9, display.visible().len());
    assert_eq!("All", display.filter().label());

    // Collapse: the commit runs off a 300 ms timer, after which the
    // featured subset is back and the transition window has closed.
    assert_eq!(Duration::from_millis(300), COLLAPSE_DELAY);
    assert_eq!(Some(Toggle::Collapsing), display.toggle());
    display.commit_collapse();
    assert_eq!(3, display.visible().len());
    assert!(!display.is_transitioning());
}

#[test]
fn autoplay_advances_exactly_twice_in_twelve_seconds() {
    setup();

    assert_eq!(5, TESTIMONIALS.len());
    let mut carousel = Carousel::new(TESTIMONIALS.len()).unwrap();

    // Two interval ticks fit in 12 s of inactivity (at 5 s and 10 s); the
    // third would only fire at 15 s.
    let elapsed = Duration::from_millis(12_000);
    let ticks = elapsed.as_millis() / AUTOPLAY_INTERVAL.as_millis();
    assert_eq!(2, ticks);
    for _ in 0..ticks {
        carousel.advance();
    }
    assert_eq!(2, carousel.current());
}

#[test]
fn manual_navigation_suspends_autoplay_until_the_resume_delay() {
    setup();

    let mut carousel = Carousel::new(TESTIMONIALS.len()).unwrap();
    assert!(carousel.is_autoplaying());

    // Manual navigation pauses immediately; the resume arrives later,
    // through a 10 s one-shot timer.
    carousel.pause();
    carousel.advance();
    assert!(!carousel.is_autoplaying());
    assert_eq!(Duration::from_millis(10_000), RESUME_DELAY);

    // A second navigation before the resume fires supersedes it: the view
    // clears the pending timer and schedules a fresh one, so the state
    // stays paused for the full delay after the newest interaction.
    carousel.pause();
    carousel.retreat();
    assert!(!carousel.is_autoplaying());

    // The (latest) resume timer fires uninterrupted.
    carousel.resume();
    assert!(carousel.is_autoplaying());
}
