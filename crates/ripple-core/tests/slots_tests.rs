// Host-side tests for the fixed 4-slot ripple ring.

use glam::{Vec2, Vec4};
use ripple_core::*;

#[test]
fn new_ring_is_idle() {
    let slots = RippleSlots::new();
    assert_eq!(slots.next_index(), 0);
    assert_eq!(slots.centers(), &[Vec4::new(0.5, 0.5, 0.0, 0.0); RIPPLE_SLOTS]);
    assert_eq!(slots.start_times(), &[INACTIVE_START_TIME; RIPPLE_SLOTS]);
    assert!(slots.iter().all(|s| !s.is_active()));
    assert_eq!(slots.iter().count(), RIPPLE_SLOTS);
}

#[test]
fn write_advances_and_wraps() {
    let mut slots = RippleSlots::new();
    let written: Vec<usize> = (0..9)
        .map(|i| slots.write(Vec2::splat(0.1), i as f32))
        .collect();
    assert_eq!(written, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    assert_eq!(slots.next_index(), 1);
    // slot 0 holds the 9th write, slot 1 still the 6th
    assert_eq!(slots.start_times(), &[8.0, 5.0, 6.0, 7.0]);
}

#[test]
fn write_stores_origin_with_zero_padding() {
    let mut slots = RippleSlots::new();
    slots.write(Vec2::new(0.3, 0.7), 1.5);
    assert_eq!(slots.centers()[0], Vec4::new(0.3, 0.7, 0.0, 0.0));
    let s = slots.get(0).unwrap();
    assert_eq!(s.origin, Vec2::new(0.3, 0.7));
    assert_eq!(s.start_time, 1.5);
    assert!(s.is_active());
}

#[test]
fn get_out_of_range_is_none() {
    let slots = RippleSlots::new();
    assert!(slots.get(RIPPLE_SLOTS).is_none());
}

#[test]
fn slot_age_only_for_active() {
    let mut slots = RippleSlots::new();
    slots.write(Vec2::ZERO, 2.0);
    assert_eq!(slots.get(0).unwrap().age(5.0), Some(3.0));
    assert_eq!(slots.get(1).unwrap().age(5.0), None);
}

#[test]
fn active_count_respects_lifetime() {
    let mut slots = RippleSlots::new();
    slots.write(Vec2::ZERO, 0.0);
    slots.write(Vec2::ZERO, 1.0);
    slots.write(Vec2::ZERO, 2.5);

    assert_eq!(slots.active_count(3.0, 10.0), 3);
    assert_eq!(slots.active_count(3.0, 1.0), 1);
    // a click stamped after "now" is not counted yet
    assert_eq!(slots.active_count(2.0, 10.0), 2);
}

#[test]
fn lifetime_follows_decay() {
    let wave = WaveParams {
        decay: 2.0,
        ..WaveParams::default()
    };
    let life = wave.lifetime_secs(0.01);
    assert!((life - 0.01f32.ln().abs() / 2.0).abs() < 1e-5);

    let flat = WaveParams {
        decay: 0.0,
        ..WaveParams::default()
    };
    assert!(flat.lifetime_secs(0.01).is_infinite());
}
