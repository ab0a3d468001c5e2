//! Spring that pulls the carousel onto a target slot.

use crate::carousel::Carousel;
use crate::constants::{
    DEFAULT_SPRING_STRENGTH, MOMENTUM_DAMPING, RECENTER_LOOKAHEAD_SCALE,
    RECENTER_LOOKAHEAD_SECONDS,
};
use crate::error::CarouselError;
use crate::events::CarouselEvent;
use crate::handle::HandleId;
use crate::spring::{spring_dampen, spring_fraction, spring_lerp_vec3};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct CenteringParams {
    pub spring_strength: f32,
}

impl Default for CenteringParams {
    fn default() -> Self {
        Self {
            spring_strength: DEFAULT_SPRING_STRENGTH,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CenteringController {
    params: CenteringParams,
    target_index: Option<usize>,
    centered: Option<HandleId>,
    active: bool,
}

impl CenteringController {
    pub fn new(params: CenteringParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle the carousel is (or is becoming) centered on.
    #[inline]
    pub fn centered_object(&self) -> Option<HandleId> {
        self.centered
    }

    #[inline]
    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    #[inline]
    pub fn params(&self) -> &CenteringParams {
        &self.params
    }

    /// Stops the spring without touching the target.
    pub fn disable(&mut self) {
        if self.active {
            log::debug!("[centering] disabled");
        }
        self.active = false;
    }

    /// Targets the slot nearest the center, looking ahead along `momentum`.
    pub fn recenter(
        &mut self,
        carousel: &dyn Carousel,
        momentum: Vec3,
        momentum_amount: f32,
        out: &mut Vec<CarouselEvent>,
    ) {
        let mut projected = momentum * momentum_amount;
        let travel = spring_dampen(&mut projected, MOMENTUM_DAMPING, RECENTER_LOOKAHEAD_SECONDS);
        let center_offset = -travel * RECENTER_LOOKAHEAD_SCALE;

        self.target_index = carousel.closest_to_center_index(center_offset);
        self.centered = self
            .target_index
            .and_then(|index| carousel.object_by_index(index));
        self.active = self.target_index.is_some();
        log::debug!(
            "[centering] recenter target={:?} handle={:?}",
            self.target_index,
            self.centered
        );
        out.push(CarouselEvent::CenterChanged(self.centered));
    }

    /// Targets `handle`; unknown handles are reported and leave the controller as it was.
    pub fn center_on(
        &mut self,
        carousel: &dyn Carousel,
        handle: HandleId,
        out: &mut Vec<CarouselEvent>,
    ) -> Result<(), CarouselError> {
        let Some(index) = carousel.index_by_object(handle) else {
            log::error!("[centering] can't center on {}", handle);
            return Err(CarouselError::HandleNotFound(handle));
        };
        self.target_index = Some(index);
        self.centered = Some(handle);
        self.active = true;
        log::debug!("[centering] center on {} (slot {})", handle, index);
        out.push(CarouselEvent::CenterChanged(self.centered));
        Ok(())
    }

    /// One spring step toward the target; disarms once the step becomes negligible.
    pub fn tick(&mut self, carousel: &mut dyn Carousel, dt_sec: f32, out: &mut Vec<CarouselEvent>) {
        if !self.active {
            return;
        }
        let Some(target) = self.target_index else {
            self.active = false;
            return;
        };
        if spring_fraction(self.params.spring_strength, dt_sec) <= 0.0 {
            // sub-millisecond frame: nothing to integrate
            return;
        }

        let before = carousel.distance_for_centering_index(target);
        let mut after = spring_lerp_vec3(Vec3::ZERO, before, self.params.spring_strength, dt_sec);
        let finished = after.length_squared() < carousel.settle_epsilon_sq();
        if finished {
            after = Vec3::ZERO;
            self.active = false;
        }
        carousel.move_relative(after);

        if finished {
            log::info!("[centering] finished on {:?}", self.centered);
            out.push(CarouselEvent::CenteringFinished);
        }
    }
}
