//! One carousel plus the drivers that move it.
//!
//! Input handlers (`press`, `drag`, `release`, `scroll`) run as events
//! arrive; `tick` runs once per frame and steps the motor before the
//! centering spring, so a press that disarmed the spring takes effect before
//! any spring motion in the same frame. Notifications are delivered to the
//! subscribed observers at the end of each call.

use crate::carousel::Carousel;
use crate::centering::CenteringController;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::events::{CarouselEvent, Observers};
use crate::handle::HandleId;
use crate::instances::{build_instances, HandleInstance};
use crate::motor::{InertialMotor, MotorPhase, PointerId};
use crate::transform::Ray;
use glam::Vec3;

#[derive(Debug)]
pub struct CarouselWidget<C: Carousel> {
    carousel: C,
    motor: InertialMotor,
    centering: CenteringController,
    observers: Observers,
    pending: Vec<CarouselEvent>,
}

impl<C: Carousel> CarouselWidget<C> {
    pub fn new(carousel: C, config: &CarouselConfig) -> Self {
        Self {
            carousel,
            motor: InertialMotor::new(config.motor_params()),
            centering: CenteringController::new(config.centering_params()),
            observers: Observers::default(),
            pending: Vec::new(),
        }
    }

    #[inline]
    pub fn carousel(&self) -> &C {
        &self.carousel
    }

    /// Direct access for structural changes (`init`, `sort`); avoid moving
    /// the carousel here while a driver is active.
    #[inline]
    pub fn carousel_mut(&mut self) -> &mut C {
        &mut self.carousel
    }

    #[inline]
    pub fn motor(&self) -> &InertialMotor {
        &self.motor
    }

    #[inline]
    pub fn motor_mut(&mut self) -> &mut InertialMotor {
        &mut self.motor
    }

    #[inline]
    pub fn centering(&self) -> &CenteringController {
        &self.centering
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Re-reads the children and lays them out again.
    pub fn reload(&mut self, children: &[HandleId]) {
        self.centering.disable();
        self.carousel.init(children, true);
        self.carousel.sort();
    }

    pub fn press(&mut self, pointer: PointerId, hit_point: Vec3) {
        self.motor.press(
            pointer,
            hit_point,
            &self.carousel,
            &mut self.centering,
            &mut self.pending,
        );
        self.flush();
    }

    pub fn release(&mut self, pointer: PointerId) {
        self.motor
            .release(pointer, &self.carousel, &mut self.centering, &mut self.pending);
        self.flush();
    }

    pub fn drag(&mut self, pointer: PointerId, ray: &Ray) -> bool {
        let moved = self
            .motor
            .drag(pointer, ray, &mut self.carousel, &mut self.pending);
        self.flush();
        moved
    }

    pub fn scroll(&mut self, delta: f32) {
        self.motor.scroll(delta, &mut self.centering);
    }

    /// Starts a coast as if the pointer had been released at this velocity.
    pub fn fling(&mut self, momentum: Vec3) {
        self.centering.disable();
        self.motor.set_momentum(momentum);
    }

    /// Advances momentum, then the centering spring, by `dt_sec`.
    pub fn tick(&mut self, dt_sec: f32) {
        self.motor.tick(
            dt_sec,
            &mut self.carousel,
            &mut self.centering,
            &mut self.pending,
        );
        self.centering
            .tick(&mut self.carousel, dt_sec, &mut self.pending);
        self.flush();
    }

    pub fn recenter(&mut self) {
        self.centering.recenter(
            &self.carousel,
            self.motor.momentum(),
            self.motor.params().momentum_amount,
            &mut self.pending,
        );
        self.motor.stop();
        self.flush();
    }

    /// Springs `handle` to the center. Any coast in progress is dropped so the
    /// spring is the only thing moving the carousel.
    pub fn center_on(&mut self, handle: HandleId) -> Result<(), CarouselError> {
        let result = self
            .centering
            .center_on(&self.carousel, handle, &mut self.pending);
        if result.is_ok() {
            self.motor.stop();
        }
        self.flush();
        result
    }

    pub fn center_on_index(&mut self, index: usize) -> Result<(), CarouselError> {
        if !self.carousel.is_initialized() {
            return Err(CarouselError::NotInitialized);
        }
        let handle =
            self.carousel
                .object_by_index(index)
                .ok_or(CarouselError::IndexOutOfRange {
                    index,
                    count: self.carousel.handles().len(),
                })?;
        self.center_on(handle)
    }

    #[inline]
    pub fn centered_object(&self) -> Option<HandleId> {
        self.centering.centered_object()
    }

    pub fn phase(&self) -> MotorPhase {
        if self.motor.is_pressed() {
            if self.motor.is_dragging() {
                MotorPhase::Dragging
            } else {
                MotorPhase::Pressed
            }
        } else if self.motor.is_coasting() {
            MotorPhase::Coasting
        } else if self.centering.is_active() {
            MotorPhase::Settling
        } else {
            MotorPhase::Idle
        }
    }

    pub fn instances(&self) -> Vec<HandleInstance> {
        build_instances(&self.carousel)
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.pending);
        self.observers.emit_all(&events);
        // keep the allocation
        self.pending = events;
        self.pending.clear();
    }
}
