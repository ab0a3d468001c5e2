//! Pointer drag -> carousel motion, with momentum after release.
//!
//! The motor turns world-space pointer rays into displacements on a drag
//! plane, masks them to the allowed axes and forwards them to the carousel.
//! Every drag sample also feeds a momentum vector that keeps the carousel
//! coasting after release and is damped each frame. When it comes to rest the
//! centering controller takes over.

use crate::carousel::Carousel;
use crate::centering::CenteringController;
use crate::constants::{
    DEFAULT_MOMENTUM_AMOUNT, DEFAULT_SCROLL_WHEEL_FACTOR, MOMENTUM_BLEND, MOMENTUM_DAMPING,
    MOMENTUM_INPUT_SCALE, MOMENTUM_STOP_THRESHOLD, SCROLL_MOMENTUM_FACTOR, SCROLL_SNAP,
    SCROLL_SPRING,
};
use crate::events::CarouselEvent;
use crate::spring::{spring_dampen, spring_lerp};
use crate::transform::{Plane, Ray};
use glam::{Vec2, Vec3};

/// Axes along which a drag may move the carousel, in container-local space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Movement {
    #[default]
    Horizontal,
    Vertical,
    Unrestricted,
    /// Local x/y scaled by `MotorParams::custom_movement`.
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragEffect {
    /// No momentum; releasing the pointer recenters immediately.
    None,
    Momentum,
    #[default]
    MomentumAndSpring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotorPhase {
    Idle,
    /// Pointer down, drag not started yet (smooth drag start).
    Pressed,
    Dragging,
    Coasting,
    /// The centering spring is moving the carousel.
    Settling,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotorParams {
    pub movement: Movement,
    pub custom_movement: Vec2,
    pub drag_effect: DragEffect,
    /// Swallow the pointer travel before the first drag sample instead of jumping.
    pub smooth_drag_start: bool,
    pub momentum_amount: f32,
    pub scroll_wheel_factor: f32,
}

impl Default for MotorParams {
    fn default() -> Self {
        Self {
            movement: Movement::Horizontal,
            custom_movement: Vec2::new(1.0, 0.0),
            drag_effect: DragEffect::MomentumAndSpring,
            smooth_drag_start: true,
            momentum_amount: DEFAULT_MOMENTUM_AMOUNT,
            scroll_wheel_factor: DEFAULT_SCROLL_WHEEL_FACTOR,
        }
    }
}

impl MotorParams {
    /// Zeroes the components `movement` does not allow; `local` is container-local.
    pub fn mask(&self, local: Vec3) -> Vec3 {
        match self.movement {
            Movement::Horizontal => Vec3::new(local.x, 0.0, 0.0),
            Movement::Vertical => Vec3::new(0.0, local.y, 0.0),
            Movement::Unrestricted => Vec3::new(local.x, local.y, 0.0),
            Movement::Custom => local * self.custom_movement.extend(0.0),
        }
    }

    /// Local momentum correction produced by residual wheel scroll.
    fn scroll_axes(&self, scroll: f32) -> Vec3 {
        let s = scroll * SCROLL_MOMENTUM_FACTOR;
        match self.movement {
            Movement::Horizontal => Vec3::new(s, 0.0, 0.0),
            Movement::Vertical => Vec3::new(0.0, s, 0.0),
            Movement::Unrestricted => Vec3::new(s, s, 0.0),
            Movement::Custom => Vec3::new(
                s * self.custom_movement.x,
                s * self.custom_movement.y,
                0.0,
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct InertialMotor {
    params: MotorParams,
    enabled: bool,
    pressed: bool,
    drag_started: bool,
    drag_start_offset: Vec3,
    drag_pointer: Option<PointerId>,
    plane: Option<Plane>,
    last_pos: Vec3,
    momentum: Vec3,
    scroll: f32,
    should_move: bool,
}

impl Default for InertialMotor {
    fn default() -> Self {
        Self::new(MotorParams::default())
    }
}

impl InertialMotor {
    pub fn new(params: MotorParams) -> Self {
        Self {
            params,
            enabled: true,
            pressed: false,
            drag_started: false,
            drag_start_offset: Vec3::ZERO,
            drag_pointer: None,
            plane: None,
            last_pos: Vec3::ZERO,
            momentum: Vec3::ZERO,
            scroll: 0.0,
            should_move: false,
        }
    }

    #[inline]
    pub fn params(&self) -> &MotorParams {
        &self.params
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.pressed && self.drag_started
    }

    #[inline]
    pub fn momentum(&self) -> Vec3 {
        self.momentum
    }

    #[inline]
    pub fn scroll_residual(&self) -> f32 {
        self.scroll
    }

    /// Whether the momentum loop still owns the released carousel. Stays set
    /// until the tick that hands over to centering.
    pub fn is_coasting(&self) -> bool {
        self.enabled && !self.pressed && self.should_move
    }

    /// Replaces the momentum, e.g. for a programmatic fling.
    pub fn set_momentum(&mut self, momentum: Vec3) {
        self.momentum = momentum;
        self.should_move = true;
    }

    /// Pointer down at `hit_point` (world space) on the carousel.
    ///
    /// Kills momentum and the centering spring so the pointer owns the carousel.
    pub fn press(
        &mut self,
        pointer: PointerId,
        hit_point: Vec3,
        carousel: &dyn Carousel,
        centering: &mut CenteringController,
        out: &mut Vec<CarouselEvent>,
    ) {
        if self.params.smooth_drag_start {
            self.drag_started = false;
            self.drag_start_offset = Vec3::ZERO;
        }
        if !self.enabled {
            return;
        }
        self.should_move = true;
        self.pressed = true;
        self.drag_pointer = None;
        self.momentum = Vec3::ZERO;
        self.scroll = 0.0;
        centering.disable();

        self.last_pos = hit_point;
        self.plane = Some(Plane::from_normal_and_point(
            carousel.container().back(),
            hit_point,
        ));
        log::debug!("[motor] press pointer={:?} at {:?}", pointer, hit_point);

        if !self.params.smooth_drag_start {
            self.drag_started = true;
            self.drag_start_offset = Vec3::ZERO;
            log::info!("[motor] drag started");
            out.push(CarouselEvent::DragStarted);
        }
    }

    /// Pointer up. Without momentum the carousel recenters right away.
    pub fn release(
        &mut self,
        pointer: PointerId,
        carousel: &dyn Carousel,
        centering: &mut CenteringController,
        out: &mut Vec<CarouselEvent>,
    ) {
        if !self.enabled || !self.pressed {
            return;
        }
        if self.drag_pointer == Some(pointer) {
            self.drag_pointer = None;
        }
        self.should_move = true;
        self.pressed = false;
        self.plane = None;
        log::debug!(
            "[motor] release pointer={:?} momentum={:.3}",
            pointer,
            self.momentum.length()
        );
        if self.drag_started {
            out.push(CarouselEvent::DragFinished);
        }

        if self.params.drag_effect == DragEffect::None {
            // nothing to coast on; the spring takes over directly
            centering.recenter(carousel, self.momentum, self.params.momentum_amount, out);
            self.should_move = false;
        }
    }

    /// Follows the pointer ray across the drag plane. Returns whether the carousel moved.
    pub fn drag(
        &mut self,
        pointer: PointerId,
        ray: &Ray,
        carousel: &mut dyn Carousel,
        out: &mut Vec<CarouselEvent>,
    ) -> bool {
        if !self.enabled || !self.should_move || !self.pressed {
            return false;
        }
        match self.drag_pointer {
            None => self.drag_pointer = Some(pointer),
            Some(owner) if owner != pointer => return false,
            Some(_) => {}
        }
        let Some(plane) = self.plane else {
            return false;
        };
        let Some(t) = plane.raycast(ray) else {
            return false;
        };
        let hit = ray.point_at(t);

        if self.params.smooth_drag_start && !self.drag_started {
            // drop the travel needed to cross the drag threshold
            self.drag_started = true;
            self.drag_start_offset = hit - self.last_pos;
            log::info!("[motor] drag started");
            out.push(CarouselEvent::DragStarted);
        }

        let current = hit - self.drag_start_offset;
        let mut offset = current - self.last_pos;
        self.last_pos = current;

        if offset != Vec3::ZERO {
            let container = carousel.container();
            let local = self.params.mask(container.inverse_transform_direction(offset));
            offset = container.transform_direction(local);
        }

        self.momentum = match self.params.drag_effect {
            DragEffect::None => Vec3::ZERO,
            _ => self.momentum.lerp(
                self.momentum
                    + offset * (MOMENTUM_INPUT_SCALE * self.params.momentum_amount),
                MOMENTUM_BLEND,
            ),
        };

        log::trace!("[motor] drag offset={:?}", offset);
        carousel.move_absolute(offset);
        true
    }

    /// Hands the released carousel over to another driver: drops momentum and
    /// residual scroll without recentering. A held pointer keeps its drag.
    pub fn stop(&mut self) {
        self.momentum = Vec3::ZERO;
        self.scroll = 0.0;
        if !self.pressed {
            self.should_move = false;
        }
    }

    /// Mouse-wheel input; flipping direction discards the residual scroll.
    ///
    /// Like a press, scrolling takes the carousel back from the centering spring.
    pub fn scroll(&mut self, delta: f32, centering: &mut CenteringController) {
        if !self.enabled {
            return;
        }
        centering.disable();
        if (self.scroll >= 0.0) != (delta >= 0.0) {
            self.scroll = 0.0;
        }
        self.scroll += delta * self.params.scroll_wheel_factor;
        self.should_move = true;
    }

    /// Late-frame step: coast on momentum, then hand over to centering once at rest.
    pub fn tick(
        &mut self,
        dt_sec: f32,
        carousel: &mut dyn Carousel,
        centering: &mut CenteringController,
        out: &mut Vec<CarouselEvent>,
    ) {
        if !self.enabled || !self.should_move {
            return;
        }

        if self.pressed {
            // keep decaying so a still pointer releases without a fling
            self.scroll = 0.0;
            spring_dampen(&mut self.momentum, MOMENTUM_DAMPING, dt_sec);
            return;
        }

        if self.momentum.length() > MOMENTUM_STOP_THRESHOLD || self.scroll != 0.0 {
            let correction = self.params.scroll_axes(self.scroll);
            self.momentum -= carousel.container().transform_direction(correction);
            self.scroll = spring_lerp(self.scroll, 0.0, SCROLL_SPRING, dt_sec);
            if self.scroll.abs() < SCROLL_SNAP {
                self.scroll = 0.0;
            }

            let offset = spring_dampen(&mut self.momentum, MOMENTUM_DAMPING, dt_sec);
            carousel.move_absolute(offset);
            out.push(CarouselEvent::MomentumMove);
            return;
        }

        self.scroll = 0.0;
        self.momentum = Vec3::ZERO;
        if centering.is_active() {
            return;
        }
        centering.recenter(carousel, self.momentum, self.params.momentum_amount, out);
        self.should_move = false;
        log::info!("[motor] stopped moving");
        out.push(CarouselEvent::StoppedMoving);
    }
}
