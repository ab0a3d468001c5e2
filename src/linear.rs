//! Straight-line carousel: slots at fixed steps, the container slides.

use crate::carousel::Carousel;
use crate::constants::default_linear_step;
use crate::handle::{HandleId, HandleSet};
use crate::transform::ContainerTransform;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct LinearParams {
    /// Local offset between slot `i` and slot `i + 1`.
    pub step: Vec3,
    /// World-space point slots are centered on; ignored when `bounds` is set.
    pub center_point: Vec3,
    /// World-space start/end of the visible track; the center is their midpoint.
    pub bounds: Option<(Vec3, Vec3)>,
}

impl Default for LinearParams {
    fn default() -> Self {
        Self {
            step: default_linear_step(),
            center_point: Vec3::ZERO,
            bounds: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LinearLayout {
    params: LinearParams,
    container: ContainerTransform,
    handles: HandleSet,
    sum_distance: Vec3,
}

impl LinearLayout {
    pub fn new(params: LinearParams, children: &[HandleId]) -> Self {
        let mut layout = Self {
            params,
            container: ContainerTransform::IDENTITY,
            handles: HandleSet::default(),
            sum_distance: Vec3::ZERO,
        };
        layout.handles.init(children, false);
        layout.sort();
        layout
    }

    pub fn with_container(mut self, container: ContainerTransform) -> Self {
        self.container = container;
        self
    }

    #[inline]
    pub fn params(&self) -> &LinearParams {
        &self.params
    }

    pub fn set_bounds(&mut self, bounds: Option<(Vec3, Vec3)>) {
        self.params.bounds = bounds;
    }

    pub fn center_point(&self) -> Vec3 {
        match self.params.bounds {
            Some((start, end)) => (start + end) * 0.5,
            None => self.params.center_point,
        }
    }

    /// Local length of the whole line of slots.
    #[inline]
    pub fn sum_distance(&self) -> Vec3 {
        self.sum_distance
    }
}

impl Carousel for LinearLayout {
    fn handle_set(&self) -> &HandleSet {
        &self.handles
    }

    fn container(&self) -> &ContainerTransform {
        &self.container
    }

    fn init(&mut self, children: &[HandleId], force: bool) -> bool {
        self.handles.init(children, force)
    }

    fn sort(&mut self) {
        let count = self.handles.len();
        for slot in 0..count {
            self.handles
                .set_position(slot, self.params.step * slot as f32);
        }
        self.sum_distance = self.params.step * count as f32;
        log::debug!(
            "[linear] sort count={} step=({:.1},{:.1},{:.1})",
            count,
            self.params.step.x,
            self.params.step.y,
            self.params.step.z
        );
    }

    fn move_relative(&mut self, relative: Vec3) {
        self.container.translation += self.container.to_affine().transform_vector3(relative);
    }

    fn closest_to_center_index(&self, center_offset: Vec3) -> Option<usize> {
        if !self.handles.is_initialized() || self.handles.is_empty() {
            return None;
        }
        let step = self.container.to_affine().transform_vector3(self.params.step);
        let step_sq = step.length_squared();
        let delta = self.center_point() + center_offset - self.container.translation;
        if step_sq <= f32::EPSILON || step.dot(delta) < 0.0 {
            return Some(0);
        }
        let pos = (delta.length_squared() / step_sq).sqrt();
        let last = self.handles.len() - 1;
        Some((pos.round() as usize).min(last))
    }

    fn distance_for_centering_index(&self, index: usize) -> Vec3 {
        if index >= self.handles.len() {
            return Vec3::ZERO;
        }
        let world = self.container.transform_point(self.handles.position(index));
        self.container
            .inverse_transform_vector(self.center_point() - world)
    }
}
