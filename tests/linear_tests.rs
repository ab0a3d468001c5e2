// Host-side tests for the straight-line layout.

use carousel3d::{Carousel, ContainerTransform, HandleId, LinearLayout, LinearParams};
use glam::Vec3;

fn ids(n: u64) -> Vec<HandleId> {
    (0..n).map(HandleId).collect()
}

fn line(n: u64) -> LinearLayout {
    LinearLayout::new(LinearParams::default(), &ids(n))
}

#[test]
fn sort_places_slots_at_steps() {
    let l = line(8);
    for (slot, h) in l.handles().iter().enumerate() {
        assert_eq!(h.position, Vec3::new(200.0 * slot as f32, 0.0, 0.0));
    }
    assert_eq!(l.sum_distance(), Vec3::new(1600.0, 0.0, 0.0));
}

#[test]
fn closest_follows_the_container() {
    let mut l = line(8);
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(0));

    l.move_relative(Vec3::new(-400.0, 0.0, 0.0));
    assert_eq!(l.container().translation, Vec3::new(-400.0, 0.0, 0.0));
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(2));

    // slot 3 is now 90 units past the center, slot 2 110 units before it
    l.move_relative(Vec3::new(-110.0, 0.0, 0.0));
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(3));
}

#[test]
fn closest_clamps_to_both_ends() {
    let mut l = line(8);
    l.move_relative(Vec3::new(300.0, 0.0, 0.0));
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(0));

    l.move_relative(Vec3::new(-10_000.0, 0.0, 0.0));
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(7));
}

#[test]
fn center_offset_shifts_the_reference() {
    let l = line(8);
    assert_eq!(l.closest_to_center_index(Vec3::new(390.0, 0.0, 0.0)), Some(2));
    assert_eq!(l.closest_to_center_index(Vec3::new(-390.0, 0.0, 0.0)), Some(0));
}

#[test]
fn bounds_midpoint_is_the_center() {
    let mut l = line(8);
    l.set_bounds(Some((Vec3::ZERO, Vec3::new(800.0, 0.0, 0.0))));
    assert_eq!(l.center_point(), Vec3::new(400.0, 0.0, 0.0));
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(2));

    l.set_bounds(None);
    assert_eq!(l.center_point(), Vec3::ZERO);
}

#[test]
fn distance_brings_slot_to_center() {
    let mut l = line(8);
    l.move_relative(Vec3::new(-400.0, 0.0, 0.0));
    assert!((l.distance_for_centering_index(5) - Vec3::new(-600.0, 0.0, 0.0)).length() < 1e-3);

    for index in 0..8 {
        let d = l.distance_for_centering_index(index);
        l.move_relative(d);
        assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(index));
        assert!(l.distance_for_centering_index(index).length() < 1e-3);
    }
}

#[test]
fn distance_out_of_range_is_zero() {
    let l = line(3);
    assert_eq!(l.distance_for_centering_index(3), Vec3::ZERO);
}

#[test]
fn scaled_container_works_in_local_units() {
    let container = ContainerTransform {
        scale: Vec3::splat(2.0),
        ..ContainerTransform::IDENTITY
    };
    let mut l = line(4).with_container(container);

    l.move_relative(Vec3::new(100.0, 0.0, 0.0));
    assert_eq!(l.container().translation, Vec3::new(200.0, 0.0, 0.0));

    // slot 1 sits at world 200 + 2 * 200 = 600
    let d = l.distance_for_centering_index(1);
    assert!((d - Vec3::new(-300.0, 0.0, 0.0)).length() < 1e-3);
    l.move_relative(d);
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), Some(1));
}

#[test]
fn move_absolute_converts_world_deltas() {
    let container = ContainerTransform {
        scale: Vec3::splat(4.0),
        ..ContainerTransform::IDENTITY
    };
    let mut l = line(4).with_container(container);
    l.move_absolute(Vec3::new(-80.0, 0.0, 0.0));
    assert!((l.container().translation - Vec3::new(-80.0, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn empty_line_has_no_center() {
    let l = line(0);
    assert_eq!(l.closest_to_center_index(Vec3::ZERO), None);
    assert_eq!(l.sum_distance(), Vec3::ZERO);
}
