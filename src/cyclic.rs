//! Closed-loop carousel track.
//!
//! The loop is two straight rails at local `x = ±radius`, running from
//! `first_plane_z` to `last_plane_z`, joined by a near semicircle (`z <=
//! first_plane_z`) and a far semicircle (`z >= last_plane_z`). Positive
//! motion runs around the near arc from `+x` to `-x`, up the far rail, around
//! the far arc and back down the near rail.
//!
//! No per-handle track parameter is stored: each step re-derives the segment
//! from the handle's `(x, z)`, so the rendered position is the state.

use crate::carousel::Carousel;
use crate::constants::{
    CYCLIC_SETTLE_EPSILON, DEFAULT_RADIUS, DEGENERATE_RAIL_FRACTION, ODD_FAR_ARC_COEF,
};
use crate::handle::{HandleId, HandleSet};
use crate::transform::ContainerTransform;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Debug, PartialEq)]
pub struct CyclicParams {
    pub radius: f32,
    /// `true` places slot `i + 1` one spacing ahead of slot `i` in the positive direction.
    pub clockwise_order: bool,
    /// Far-arc stretch for odd handle counts; keeps the loop length equal to `count * offset`.
    pub odd_far_arc_coef: f32,
    /// Rail length, as a fraction of the spacing, when the handle count is too
    /// small to fill a rail. Must stay positive: a zero-length rail leaves
    /// nothing to step across at the arc joins.
    pub degenerate_rail_fraction: f32,
}

impl Default for CyclicParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            clockwise_order: true,
            odd_far_arc_coef: ODD_FAR_ARC_COEF,
            degenerate_rail_fraction: DEGENERATE_RAIL_FRACTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Rail at `x = -radius`, traversed toward `last_plane_z` by positive motion.
    FarRail,
    /// Rail at `x = +radius`, traversed toward `first_plane_z` by positive motion.
    NearRail,
    NearArc,
    FarArc,
}

/// Result of advancing one position along the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance {
    pub position: Vec3,
    /// Motion dropped by the segment-repeat guard; zero on a clean step.
    pub truncated: f32,
}

/// Pure geometry of the closed track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub radius: f32,
    pub first_plane_z: f32,
    pub last_plane_z: f32,
    /// Arc-length multiplier on the far arc (1.0, or the odd-count stretch).
    pub far_arc_coef: f32,
}

#[inline]
fn sign(v: f32) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Floored modulo into `[0, length)`.
#[inline]
pub(crate) fn wrap(value: f32, length: f32) -> f32 {
    let w = value.rem_euclid(length);
    // rem_euclid can round up to `length` for tiny negative inputs
    if w >= length {
        0.0
    } else {
        w
    }
}

impl Track {
    #[inline]
    pub fn rail_length(&self) -> f32 {
        self.last_plane_z - self.first_plane_z
    }

    /// Total distance, in motion units, of one lap.
    pub fn loop_length(&self) -> f32 {
        2.0 * self.rail_length() + PI * self.radius * (1.0 + self.far_arc_coef)
    }

    /// Which piece of the track `position` is on when moving by `delta`.
    ///
    /// A handle sitting exactly on a plane counts as on the rail only when the
    /// motion points into the rail; otherwise it belongs to the adjoining arc.
    pub fn classify(&self, position: Vec3, delta: f32) -> Segment {
        let delta_sign = sign(delta);
        let x_sign = sign(position.x);
        let z = position.z;
        let on_rail = (z > self.first_plane_z && z < self.last_plane_z)
            || (z == self.first_plane_z && x_sign != delta_sign)
            || (z == self.last_plane_z && x_sign == delta_sign);
        if on_rail {
            if position.x <= 0.0 {
                Segment::FarRail
            } else {
                Segment::NearRail
            }
        } else if z <= self.first_plane_z {
            Segment::NearArc
        } else {
            Segment::FarArc
        }
    }

    /// Moves `position` by `delta` along the track, crossing segments as needed.
    ///
    /// Each sub-step consumes what fits in the current segment and the rest
    /// is carried into the next one. Picking the same segment twice in a row
    /// means the geometry could not place the remainder (rounding at a join,
    /// a zero-length rail); the remainder is then dropped and reported in
    /// [`Advance::truncated`] instead of looping.
    ///
    /// Whole laps are removed from `delta` first; for very large deltas the f32
    /// remainder of a segment can round back to `delta` itself.
    pub fn advance(&self, mut position: Vec3, mut delta: f32) -> Advance {
        let lap = self.loop_length();
        if lap > 0.0 && delta.abs() >= lap {
            delta %= lap;
        }
        let mut prev: Option<Segment> = None;
        while delta.abs() >= f32::EPSILON {
            let segment = self.classify(position, delta);
            if prev == Some(segment) {
                return Advance {
                    position,
                    truncated: delta,
                };
            }
            prev = Some(segment);
            delta = match segment {
                Segment::FarRail => self.move_straight(&mut position, delta),
                Segment::NearRail => -self.move_straight(&mut position, -delta),
                Segment::NearArc => self.move_circle(&mut position, delta, true),
                Segment::FarArc => self.move_circle(&mut position, delta, false),
            };
        }
        Advance {
            position,
            truncated: 0.0,
        }
    }

    /// Returns the part of `delta` that did not fit before a plane.
    fn move_straight(&self, position: &mut Vec3, delta: f32) -> f32 {
        let current = position.z;
        let dest = (current + delta).clamp(self.first_plane_z, self.last_plane_z);
        position.z = dest;
        delta - (dest - current)
    }

    /// `delta` is arc length; returns the arc length left past the arc's end.
    fn move_circle(&self, position: &mut Vec3, delta: f32, first_plane: bool) -> f32 {
        let r = self.radius;
        let coef = if first_plane {
            r
        } else {
            r * self.far_arc_coef
        };
        if coef <= f32::EPSILON {
            return 0.0;
        }
        let delta_angle = delta / coef;

        let mut current = (position.x / r).clamp(-1.0, 1.0).acos();
        if !first_plane {
            current = -current;
        }
        let dest = if first_plane {
            (current + delta_angle).clamp(0.0, PI)
        } else {
            (current + delta_angle).clamp(-PI, 0.0)
        };
        let plane = if first_plane {
            self.first_plane_z
        } else {
            self.last_plane_z
        };
        position.x = (r * dest.cos()).clamp(-r, r);
        position.z = plane - r * dest.sin();

        (delta_angle - (dest - current)) * coef
    }

    /// Arc-length coordinate of `position` in `[0, loop_length)`, measured in
    /// the positive direction from `(radius, _, first_plane_z)`.
    pub fn parameter(&self, position: Vec3) -> f32 {
        let r = self.radius;
        let rail = self.rail_length();
        let near_arc = PI * r;
        let far_arc = PI * r * self.far_arc_coef;
        let z = position.z;
        let raw = if z < self.first_plane_z {
            let angle = (self.first_plane_z - z).atan2(position.x);
            angle * r
        } else if z > self.last_plane_z {
            // angle in [-PI, 0], increasing toward the near rail
            let angle = (self.last_plane_z - z).atan2(position.x);
            near_arc + rail + (angle + PI) * r * self.far_arc_coef
        } else if position.x <= 0.0 {
            near_arc + (z - self.first_plane_z)
        } else {
            near_arc + rail + far_arc + (self.last_plane_z - z)
        };
        wrap(raw, self.loop_length())
    }
}

/// Carousel laid out on the closed track.
#[derive(Clone, Debug)]
pub struct CyclicLayout {
    params: CyclicParams,
    container: ContainerTransform,
    handles: HandleSet,
    first_plane_z: f32,
    last_plane_z: f32,
    offset: f32,
    sum_length: f32,
    first_object_shift: f32,
}

impl CyclicLayout {
    /// Builds, initializes and sorts a layout over `children`.
    pub fn new(params: CyclicParams, children: &[HandleId]) -> Self {
        let mut layout = Self {
            params,
            container: ContainerTransform::IDENTITY,
            handles: HandleSet::default(),
            first_plane_z: 0.0,
            last_plane_z: 0.0,
            offset: 0.0,
            sum_length: 0.0,
            first_object_shift: 0.0,
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
    pub fn params(&self) -> &CyclicParams {
        &self.params
    }

    /// Spacing between neighbouring slots: a quarter turnaround.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn sum_length(&self) -> f32 {
        self.sum_length
    }

    #[inline]
    pub fn first_object_shift(&self) -> f32 {
        self.first_object_shift
    }

    #[inline]
    pub fn rail_length(&self) -> f32 {
        self.last_plane_z - self.first_plane_z
    }

    #[inline]
    fn order_sign(&self) -> f32 {
        if self.params.clockwise_order {
            1.0
        } else {
            -1.0
        }
    }

    pub fn track(&self) -> Track {
        let far_arc_coef = if self.handles.len() % 2 != 0 {
            self.params.odd_far_arc_coef
        } else {
            1.0
        };
        Track {
            radius: self.params.radius,
            first_plane_z: self.first_plane_z,
            last_plane_z: self.last_plane_z,
            far_arc_coef,
        }
    }

    /// Track coordinate of a local position; see [`Track::parameter`].
    pub fn track_parameter(&self, position: Vec3) -> f32 {
        self.track().parameter(position)
    }

    /// Re-sorts, optionally switching to a new radius first.
    pub fn sort_with_radius(&mut self, radius: Option<f32>) {
        if let Some(r) = radius {
            self.params.radius = r;
        }
        let count = self.handles.len();
        let radius = self.params.radius;
        self.offset = radius * FRAC_PI_2;
        self.sum_length = self.offset * count as f32;

        // each rail holds ((count - 2) / 2 - 1) spacings
        let spans = (count as i64 - 2) / 2 - 1;
        let mut last = self.offset * spans as f32;
        if last <= 0.0 {
            last = self.offset * self.params.degenerate_rail_fraction;
        }
        self.last_plane_z = self.first_plane_z + last;
        self.first_object_shift = 0.0;

        let start = Vec3::new(radius, 0.0, self.first_plane_z);
        for slot in 0..count {
            self.handles.set_position(slot, start);
        }
        self.sort_by_first();
        log::debug!(
            "[cyclic] sort count={} radius={:.1} offset={:.2} rail={:.2} sum={:.2}",
            count,
            radius,
            self.offset,
            last,
            self.sum_length
        );
    }

    /// Shifts the whole arrangement by `delta` along the track.
    pub fn move_along(&mut self, delta: f32) {
        if self.handles.is_empty() || self.sum_length <= 0.0 || !delta.is_finite() {
            return;
        }
        if delta.abs() >= self.offset.abs() {
            // a jump can put neighbours on different segments; rebuild spacing from slot 0
            log::debug!("[cyclic] jump delta={:.2}, re-syncing from slot 0", delta);
            self.move_object(0, delta);
            self.sort_by_first();
        } else {
            for slot in 0..self.handles.len() {
                self.move_object(slot, delta);
            }
        }
        let within_lap = delta % self.sum_length;
        self.first_object_shift = wrap(self.first_object_shift + within_lap, self.sum_length);
        log::trace!(
            "[cyclic] move delta={:.4} shift={:.4}",
            delta,
            self.first_object_shift
        );
    }

    fn sort_by_first(&mut self) {
        let step = self.order_sign() * self.offset;
        for slot in 1..self.handles.len() {
            let prev = self.handles.position(slot - 1);
            self.handles.set_position(slot, prev);
            self.move_object(slot, step);
        }
    }

    fn move_object(&mut self, slot: usize, delta: f32) {
        let step = self.track().advance(self.handles.position(slot), delta);
        if step.truncated.abs() > 1e-3 {
            log::warn!(
                "[cyclic] segment cycle on slot {}, dropped {:.4} of {:.4}",
                slot,
                step.truncated,
                delta
            );
        } else if step.truncated != 0.0 {
            log::trace!("[cyclic] slot {} rounding remainder {:e}", slot, step.truncated);
        }
        self.handles.set_position(slot, step.position);
    }
}

impl Carousel for CyclicLayout {
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
        self.sort_with_radius(None);
    }

    /// Only the local `x` component drives the track.
    fn move_relative(&mut self, relative: Vec3) {
        self.move_along(relative.x);
    }

    fn closest_to_center_index(&self, center_offset: Vec3) -> Option<usize> {
        if !self.handles.is_initialized() || self.handles.is_empty() || self.offset <= 0.0 {
            return None;
        }
        let count = self.handles.len();
        let local = self.container.inverse_transform_vector(center_offset);
        let center_shift = wrap(
            self.offset - self.first_object_shift + local.x,
            self.sum_length,
        );
        let number = ((center_shift / self.offset).round() as usize) % count;
        if self.params.clockwise_order {
            Some(number)
        } else {
            Some((count - number) % count)
        }
    }

    fn distance_for_centering_index(&self, index: usize) -> Vec3 {
        if self.handles.is_empty() || self.sum_length <= 0.0 {
            return Vec3::ZERO;
        }
        let object_shift = self.first_object_shift + self.order_sign() * self.offset * index as f32;
        // the two ways around the loop; take the shorter
        let forward = wrap(self.offset - object_shift, self.sum_length);
        let backward = forward - self.sum_length;
        let shortest = if forward.abs() <= backward.abs() {
            forward
        } else {
            backward
        };
        Vec3::new(shortest, 0.0, 0.0)
    }

    fn settle_epsilon_sq(&self) -> f32 {
        CYCLIC_SETTLE_EPSILON * CYCLIC_SETTLE_EPSILON
    }
}
