// Host-side tests for the ripple tracker: ring order, normalization, publish
// sequencing and degenerate geometry.

use glam::{Vec2, Vec4};
use ripple_core::*;

/// Surface that records every write in order.
#[derive(Default)]
struct RecordingSurface {
    writes: Vec<String>,
    centers: Vec<Vec4>,
    start_times: Vec<f32>,
    aspect: Option<f32>,
}

impl RippleSurface for RecordingSurface {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) -> Result<(), RippleError> {
        self.writes.push(name.to_string());
        self.centers = values.to_vec();
        Ok(())
    }

    fn set_float_array(&mut self, name: &str, values: &[f32]) -> Result<(), RippleError> {
        self.writes.push(name.to_string());
        self.start_times = values.to_vec();
        Ok(())
    }

    fn set_float(&mut self, name: &str, value: f32) -> Result<(), RippleError> {
        self.writes.push(name.to_string());
        self.aspect = Some(value);
        Ok(())
    }
}

fn identity() -> ScreenProjection {
    ScreenProjection::identity()
}

fn tracker_200x100() -> RippleTracker<RecordingSurface> {
    RippleTracker::new(
        RecordingSurface::default(),
        Rect::from_size(200.0, 100.0),
        RippleParams::default(),
    )
    .unwrap()
}

#[test]
fn construction_publishes_idle_arrays_once() {
    let t = tracker_200x100();
    let s = t.surface();
    assert_eq!(
        s.writes,
        vec![UNIFORM_RIPPLE_CENTERS.to_string(), UNIFORM_RIPPLE_START_TIMES.to_string()]
    );
    assert_eq!(s.centers, vec![Vec4::new(0.5, 0.5, 0.0, 0.0); 4]);
    assert_eq!(s.start_times, vec![INACTIVE_START_TIME; 4]);
    // aspect ratio is only written by clicks and explicit publishes
    assert_eq!(s.aspect, None);
    assert_eq!(t.slots().next_index(), 0);
}

#[test]
fn click_normalizes_against_rect() {
    let mut t = tracker_200x100();
    let hit = t
        .register_click(Vec2::new(50.0, 25.0), &identity(), 3.0)
        .unwrap();
    assert_eq!(hit.slot, 0);
    assert_eq!(hit.uv, Vec2::new(0.25, 0.25));
    assert_eq!(hit.aspect_ratio, 2.0);

    let s = t.surface();
    assert_eq!(s.centers[0], Vec4::new(0.25, 0.25, 0.0, 0.0));
    assert_eq!(s.start_times[0], 3.0);
    assert_eq!(s.aspect, Some(2.0));
}

#[test]
fn click_republishes_everything() {
    let mut t = tracker_200x100();
    t.register_click(Vec2::new(10.0, 10.0), &identity(), 1.0)
        .unwrap();
    let writes = &t.surface().writes;
    assert_eq!(writes.len(), 5);
    assert_eq!(
        &writes[2..],
        &[
            UNIFORM_RIPPLE_CENTERS.to_string(),
            UNIFORM_RIPPLE_START_TIMES.to_string(),
            UNIFORM_ASPECT_RATIO.to_string(),
        ]
    );
}

#[test]
fn kth_click_writes_slot_k_mod_4() {
    let mut t = tracker_200x100();
    for k in 0..11 {
        let hit = t
            .register_click(Vec2::new(k as f32, 0.0), &identity(), k as f32)
            .unwrap();
        assert_eq!(hit.slot, k % RIPPLE_SLOTS);
        assert_eq!(t.slots().next_index(), (k + 1) % RIPPLE_SLOTS);
    }
}

#[test]
fn four_clicks_fill_slots_in_order() {
    let mut t = tracker_200x100();
    for k in 0..4 {
        t.register_click(Vec2::new(20.0 * (k + 1) as f32, 50.0), &identity(), 10.0 + k as f32)
            .unwrap();
    }
    let s = t.surface();
    assert_eq!(s.start_times, vec![10.0, 11.0, 12.0, 13.0]);
    assert_eq!(s.centers[0].x, 0.1);
    assert_eq!(s.centers[1].x, 0.2);
    assert_eq!(s.centers[2].x, 0.3);
    assert_eq!(s.centers[3].x, 0.4);
    assert!(t.slots().iter().all(|slot| slot.is_active()));
}

#[test]
fn fifth_click_overwrites_slot_zero_entirely() {
    let mut t = tracker_200x100();
    for k in 0..4 {
        t.register_click(Vec2::new(100.0, 50.0), &identity(), k as f32)
            .unwrap();
    }
    let hit = t
        .register_click(Vec2::new(0.0, 100.0), &identity(), 42.0)
        .unwrap();
    assert_eq!(hit.slot, 0);

    let slot0 = t.slots().get(0).unwrap();
    assert_eq!(slot0.origin, Vec2::new(0.0, 1.0));
    assert_eq!(slot0.start_time, 42.0);
    // the other slots keep their data
    assert_eq!(t.slots().get(1).unwrap().origin, Vec2::new(0.5, 0.5));
    assert_eq!(t.slots().get(1).unwrap().start_time, 1.0);
}

#[test]
fn edges_map_to_exact_unit_bounds() {
    let rect = Rect::new(-100.0, -50.0, 200.0, 100.0);
    let mut t = RippleTracker::new(RecordingSurface::default(), rect, RippleParams::default())
        .unwrap();

    let left = t
        .register_click(Vec2::new(-100.0, -50.0), &identity(), 0.0)
        .unwrap();
    assert_eq!(left.uv, Vec2::new(0.0, 0.0));

    let right = t
        .register_click(Vec2::new(100.0, 50.0), &identity(), 0.0)
        .unwrap();
    assert_eq!(right.uv, Vec2::new(1.0, 1.0));
}

#[test]
fn screen_projection_feeds_local_point() {
    // 400x200 on-screen element at (10, 20), local rect centred on its pivot
    let local = Rect::new(-100.0, -50.0, 200.0, 100.0);
    let screen = Rect::new(10.0, 20.0, 400.0, 200.0);
    let camera = ScreenProjection::from_bounds(screen, local, ScreenYAxis::Down).unwrap();
    let mut t = RippleTracker::new(RecordingSurface::default(), local, RippleParams::default())
        .unwrap();

    // screen centre -> local origin -> uv centre
    let hit = t.register_click(Vec2::new(210.0, 120.0), &camera, 1.0).unwrap();
    assert!(hit.uv.abs_diff_eq(Vec2::new(0.5, 0.5), 1e-6));

    // top-left on a Y-down screen is the top of the Y-up element
    let hit = t.register_click(Vec2::new(10.0, 20.0), &camera, 1.0).unwrap();
    assert!(hit.uv.abs_diff_eq(Vec2::new(0.0, 1.0), 1e-6));
}

#[test]
fn zero_height_rect_is_skipped_by_default() {
    let mut t = RippleTracker::new(
        RecordingSurface::default(),
        Rect::from_size(200.0, 0.0),
        RippleParams::default(),
    )
    .unwrap();
    let before = t.surface().writes.len();

    let err = t
        .register_click(Vec2::new(10.0, 0.0), &identity(), 1.0)
        .unwrap_err();
    assert_eq!(
        err,
        RippleError::DegenerateRect {
            width: 200.0,
            height: 0.0
        }
    );
    assert_eq!(t.slots().next_index(), 0);
    assert_eq!(t.slots().start_times(), &[INACTIVE_START_TIME; 4]);
    assert_eq!(t.surface().writes.len(), before);
}

#[test]
fn zero_height_rect_is_clamped_when_asked() {
    let params = RippleParams {
        degenerate_rect: DegenerateRectPolicy::clamp(),
        ..RippleParams::default()
    };
    let mut t = RippleTracker::new(
        RecordingSurface::default(),
        Rect::from_size(200.0, 0.0),
        params,
    )
    .unwrap();

    let hit = t
        .register_click(Vec2::new(50.0, 0.5), &identity(), 1.0)
        .unwrap();
    assert_eq!(hit.aspect_ratio, 200.0 / MIN_RECT_EXTENT);
    assert!(hit.aspect_ratio.is_finite());
    assert_eq!(hit.uv, Vec2::new(0.25, 0.5));
    assert_eq!(t.surface().aspect, Some(200.0));
}

#[test]
fn non_finite_time_is_rejected_without_mutation() {
    let mut t = tracker_200x100();
    let err = t
        .register_click(Vec2::new(10.0, 10.0), &identity(), f32::NAN)
        .unwrap_err();
    assert!(matches!(err, RippleError::NonFiniteTime(_)));
    assert_eq!(t.slots().next_index(), 0);
}

#[test]
fn unmappable_point_is_rejected_without_mutation() {
    let mut t = tracker_200x100();
    let nowhere = |_: Vec2| -> Option<Vec2> { None };
    let err = t
        .register_click(Vec2::new(3.0, 4.0), &nowhere, 1.0)
        .unwrap_err();
    assert_eq!(err, RippleError::Unmappable { x: 3.0, y: 4.0 });
    assert_eq!(t.slots().next_index(), 0);
    assert_eq!(t.surface().writes.len(), 2);
}

#[test]
fn set_rect_changes_following_clicks() {
    let mut t = tracker_200x100();
    t.set_rect(Rect::from_size(100.0, 100.0));
    let hit = t
        .register_click(Vec2::new(50.0, 25.0), &identity(), 0.0)
        .unwrap();
    assert_eq!(hit.uv, Vec2::new(0.5, 0.25));
    assert_eq!(hit.aspect_ratio, 1.0);
}

#[test]
fn explicit_publish_is_idempotent() {
    let mut t = RippleTracker::new(
        RippleMaterial::ripple(&WaveParams::default()).instantiate(),
        Rect::from_size(200.0, 100.0),
        RippleParams::default(),
    )
    .unwrap();
    t.register_click(Vec2::new(50.0, 25.0), &identity(), 2.0)
        .unwrap();
    t.publish().unwrap();
    t.surface_mut().take_dirty();
    let first = RippleUniforms::pack(t.surface(), 5.0, [200.0, 100.0]);

    t.publish().unwrap();
    assert!(!t.surface_mut().take_dirty());
    let second = RippleUniforms::pack(t.surface(), 5.0, [200.0, 100.0]);
    assert_eq!(first, second);
}

/// Accepts the slot arrays but refuses every scalar write.
#[derive(Default)]
struct NoScalarSurface {
    inner: RecordingSurface,
}

impl RippleSurface for NoScalarSurface {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) -> Result<(), RippleError> {
        self.inner.set_vector_array(name, values)
    }

    fn set_float_array(&mut self, name: &str, values: &[f32]) -> Result<(), RippleError> {
        self.inner.set_float_array(name, values)
    }

    fn set_float(&mut self, name: &str, _value: f32) -> Result<(), RippleError> {
        Err(RippleError::UnknownUniform(name.to_string()))
    }
}

#[test]
fn material_without_aspect_uniform_is_rejected_up_front() {
    let partial = RippleMaterial::new("partial", "")
        .with_uniform(
            UNIFORM_RIPPLE_CENTERS,
            UniformValue::VectorArray(vec![Vec4::new(0.5, 0.5, 0.0, 0.0); RIPPLE_SLOTS]),
        )
        .with_uniform(
            UNIFORM_RIPPLE_START_TIMES,
            UniformValue::FloatArray(vec![INACTIVE_START_TIME; RIPPLE_SLOTS]),
        )
        .instantiate();
    let err = RippleTracker::new(partial, Rect::from_size(200.0, 100.0), RippleParams::default())
        .err()
        .unwrap();
    assert_eq!(err, RippleError::UnknownUniform(UNIFORM_ASPECT_RATIO.to_string()));
}

#[test]
fn material_with_short_arrays_is_rejected_up_front() {
    let short = RippleMaterial::new("short", "")
        .with_uniform(
            UNIFORM_RIPPLE_CENTERS,
            UniformValue::VectorArray(vec![Vec4::ZERO; 2]),
        )
        .with_uniform(
            UNIFORM_RIPPLE_START_TIMES,
            UniformValue::FloatArray(vec![INACTIVE_START_TIME; RIPPLE_SLOTS]),
        )
        .with_uniform(UNIFORM_ASPECT_RATIO, UniformValue::Float(1.0))
        .instantiate();
    let err = RippleTracker::new(short, Rect::from_size(200.0, 100.0), RippleParams::default())
        .err()
        .unwrap();
    assert_eq!(
        err,
        RippleError::UniformLengthMismatch {
            name: UNIFORM_RIPPLE_CENTERS.to_string(),
            expected: 2,
            got: RIPPLE_SLOTS
        }
    );
}

#[test]
fn failed_publish_leaves_slots_and_surface_as_before() {
    let mut t = RippleTracker::new(
        NoScalarSurface::default(),
        Rect::from_size(200.0, 100.0),
        RippleParams::default(),
    )
    .unwrap();

    let err = t
        .register_click(Vec2::new(50.0, 25.0), &identity(), 3.0)
        .unwrap_err();
    assert_eq!(err, RippleError::UnknownUniform(UNIFORM_ASPECT_RATIO.to_string()));

    // ring not advanced, slot 0 still idle
    assert_eq!(t.slots().next_index(), 0);
    assert_eq!(t.slots().start_times(), &[INACTIVE_START_TIME; 4]);
    // the staged arrays were written back to the idle ones
    let s = &t.surface().inner;
    assert_eq!(s.centers, vec![Vec4::new(0.5, 0.5, 0.0, 0.0); 4]);
    assert_eq!(s.start_times, vec![INACTIVE_START_TIME; 4]);
}

#[test]
fn clamp_with_unusable_minimum_still_rejects() {
    for min_extent in [0.0, -5.0, f32::NAN] {
        let params = RippleParams {
            degenerate_rect: DegenerateRectPolicy::Clamp { min_extent },
            ..RippleParams::default()
        };
        let mut t = RippleTracker::new(
            RecordingSurface::default(),
            Rect::from_size(200.0, 0.0),
            params,
        )
        .unwrap();

        let err = t
            .register_click(Vec2::new(50.0, 0.0), &identity(), 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            RippleError::DegenerateRect {
                width: 200.0,
                height: 0.0
            }
        );
        assert_eq!(t.slots().next_index(), 0);
        assert_eq!(t.surface().aspect, None);
    }
}
