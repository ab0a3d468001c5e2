// Host-side tests for configuration defaults, validation and tuning constants.

use carousel3d::constants::*;
use carousel3d::{CarouselConfig, CarouselError, DragEffect, Movement};
use glam::Vec2;

#[test]
fn defaults_validate() {
    let config = CarouselConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.radius, 330.0);
    assert!(config.clockwise_order);
    assert_eq!(config.spring_strength, 8.0);
    assert_eq!(config.momentum_amount, 35.0);
    assert_eq!(config.movement, Movement::Horizontal);
    assert_eq!(config.drag_effect, DragEffect::MomentumAndSpring);
    assert!(config.smooth_drag_start);
}

#[test]
fn invalid_values_are_rejected() {
    let bad = [
        CarouselConfig {
            radius: 0.0,
            ..CarouselConfig::default()
        },
        CarouselConfig {
            radius: f32::NAN,
            ..CarouselConfig::default()
        },
        CarouselConfig {
            spring_strength: -1.0,
            ..CarouselConfig::default()
        },
        CarouselConfig {
            momentum_amount: -0.5,
            ..CarouselConfig::default()
        },
        CarouselConfig {
            custom_movement: Vec2::new(f32::INFINITY, 0.0),
            ..CarouselConfig::default()
        },
        CarouselConfig {
            scroll_wheel_factor: f32::NAN,
            ..CarouselConfig::default()
        },
    ];
    for config in bad {
        match config.validate() {
            Err(CarouselError::InvalidConfig(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}

#[test]
fn zero_momentum_is_allowed() {
    let config = CarouselConfig {
        momentum_amount: 0.0,
        ..CarouselConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn params_are_derived_from_config() {
    let config = CarouselConfig {
        radius: 120.0,
        clockwise_order: false,
        spring_strength: 12.0,
        movement: Movement::Custom,
        custom_movement: Vec2::new(0.5, 0.25),
        smooth_drag_start: false,
        ..CarouselConfig::default()
    };
    let cyclic = config.cyclic_params();
    assert_eq!(cyclic.radius, 120.0);
    assert!(!cyclic.clockwise_order);
    assert_eq!(cyclic.odd_far_arc_coef, ODD_FAR_ARC_COEF);
    assert_eq!(cyclic.degenerate_rail_fraction, DEGENERATE_RAIL_FRACTION);

    let motor = config.motor_params();
    assert_eq!(motor.movement, Movement::Custom);
    assert_eq!(motor.custom_movement, Vec2::new(0.5, 0.25));
    assert!(!motor.smooth_drag_start);
    assert_eq!(motor.momentum_amount, DEFAULT_MOMENTUM_AMOUNT);

    assert_eq!(config.centering_params().spring_strength, 12.0);
}

#[test]
fn custom_movement_masks_by_scale() {
    let motor = CarouselConfig {
        movement: Movement::Custom,
        custom_movement: Vec2::new(0.5, 2.0),
        ..CarouselConfig::default()
    }
    .motor_params();
    let masked = motor.mask(glam::Vec3::new(10.0, 10.0, 10.0));
    assert_eq!(masked, glam::Vec3::new(5.0, 20.0, 0.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // spring rates are per-millisecond fractions of 1000
    assert!(DEFAULT_SPRING_STRENGTH > 0.0 && DEFAULT_SPRING_STRENGTH < 1000.0);
    assert!(MOMENTUM_DAMPING > 0.0 && MOMENTUM_DAMPING < 1000.0);
    assert!(SCROLL_SPRING > 0.0 && SCROLL_SPRING < 1000.0);

    // blend factors
    assert!(MOMENTUM_BLEND > 0.0 && MOMENTUM_BLEND <= 1.0);
    assert!(MOMENTUM_INPUT_SCALE > 0.0);

    // thresholds
    assert!(MOMENTUM_STOP_THRESHOLD > 0.0);
    assert!(SCROLL_SNAP > 0.0 && SCROLL_SNAP < MOMENTUM_STOP_THRESHOLD);
    assert!(VECTOR_SETTLE_EPSILON_SQ > 0.0);
    assert!(CYCLIC_SETTLE_EPSILON * CYCLIC_SETTLE_EPSILON > 0.0);

    // frame clamps
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= MAX_SPRING_STEP_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn track_constants_are_consistent() {
    assert!(DEFAULT_RADIUS > 0.0);
    // a stub rail, far longer than arc-end rounding yet invisible in the spacing
    assert!(DEGENERATE_RAIL_FRACTION > 1e-6 && DEGENERATE_RAIL_FRACTION < 1e-3);
    // odd counts need 1.5 extra quarter arcs on the far side
    assert_eq!(ODD_FAR_ARC_COEF, 1.5);
    assert_eq!(default_linear_step(), glam::Vec3::new(200.0, 0.0, 0.0));
}

#[test]
fn frame_clock_clamps_deltas() {
    let mut clock = carousel3d::FrameClock::new();
    let dt = clock.tick();
    assert!((0.0..=MAX_FRAME_DT_SEC).contains(&dt));
    assert!(clock.elapsed_sec() >= 0.0);
}
