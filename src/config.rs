use crate::centering::CenteringParams;
use crate::constants::{
    DEFAULT_MOMENTUM_AMOUNT, DEFAULT_RADIUS, DEFAULT_SCROLL_WHEEL_FACTOR,
    DEFAULT_SPRING_STRENGTH, DEGENERATE_RAIL_FRACTION, ODD_FAR_ARC_COEF,
};
use crate::cyclic::CyclicParams;
use crate::error::CarouselError;
use crate::motor::{DragEffect, MotorParams, Movement};
use glam::Vec2;

/// Per-widget settings; fixed before the first sort.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub radius: f32,
    pub clockwise_order: bool,
    pub spring_strength: f32,
    pub momentum_amount: f32,
    pub movement: Movement,
    pub custom_movement: Vec2,
    pub drag_effect: DragEffect,
    pub smooth_drag_start: bool,
    pub scroll_wheel_factor: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            clockwise_order: true,
            spring_strength: DEFAULT_SPRING_STRENGTH,
            momentum_amount: DEFAULT_MOMENTUM_AMOUNT,
            movement: Movement::Horizontal,
            custom_movement: Vec2::new(1.0, 0.0),
            drag_effect: DragEffect::MomentumAndSpring,
            smooth_drag_start: true,
            scroll_wheel_factor: DEFAULT_SCROLL_WHEEL_FACTOR,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.spring_strength.is_finite() || self.spring_strength <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "spring_strength must be positive, got {}",
                self.spring_strength
            )));
        }
        if !self.momentum_amount.is_finite() || self.momentum_amount < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "momentum_amount must be non-negative, got {}",
                self.momentum_amount
            )));
        }
        if !self.custom_movement.is_finite() || !self.scroll_wheel_factor.is_finite() {
            return Err(CarouselError::InvalidConfig(
                "custom_movement and scroll_wheel_factor must be finite".into(),
            ));
        }
        Ok(())
    }

    pub fn cyclic_params(&self) -> CyclicParams {
        CyclicParams {
            radius: self.radius,
            clockwise_order: self.clockwise_order,
            odd_far_arc_coef: ODD_FAR_ARC_COEF,
            degenerate_rail_fraction: DEGENERATE_RAIL_FRACTION,
        }
    }

    pub fn motor_params(&self) -> MotorParams {
        MotorParams {
            movement: self.movement,
            custom_movement: self.custom_movement,
            drag_effect: self.drag_effect,
            smooth_drag_start: self.smooth_drag_start,
            momentum_amount: self.momentum_amount,
            scroll_wheel_factor: self.scroll_wheel_factor,
        }
    }

    pub fn centering_params(&self) -> CenteringParams {
        CenteringParams {
            spring_strength: self.spring_strength,
        }
    }
}
