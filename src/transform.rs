//! Container transform plus the ray/plane helpers the drag input needs.

use glam::{Affine3A, Quat, Vec3};

/// Placement of a carousel container in world space.
///
/// Handle positions are local to this transform. Linear layouts move the
/// container itself; cyclic layouts keep it fixed and move the handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for ContainerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ContainerTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    #[inline]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// World-space displacement -> container-local displacement (scale included).
    #[inline]
    pub fn inverse_transform_vector(&self, world: Vec3) -> Vec3 {
        self.to_affine().inverse().transform_vector3(world)
    }

    /// Container-local point -> world-space point.
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.to_affine().transform_point3(local)
    }

    /// World direction -> local axes, rotation only.
    #[inline]
    pub fn inverse_transform_direction(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * world
    }

    /// Local direction -> world axes, rotation only.
    #[inline]
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// The container's back vector in world space; drag planes face along it.
    #[inline]
    pub fn back(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Distance along `ray` to the plane, `None` for parallel rays or hits behind the origin.
    #[inline]
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() <= 1e-6 {
            return None;
        }
        let t = -(ray.origin.dot(self.normal) + self.distance) / denom;
        (t > 0.0).then_some(t)
    }
}
