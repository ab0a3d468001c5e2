use crate::carousel::Carousel;
use glam::{Mat4, Vec3};

/// Per-handle record for an instanced renderer; layout matches a
/// `mat4x4<f32>` followed by a `u32` slot index (padded to 16 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HandleInstance {
    pub model: [[f32; 4]; 4],
    pub slot: u32,
    pub _pad: [u32; 3],
}

impl HandleInstance {
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

/// World transforms of every handle, in slot order.
pub fn build_instances(carousel: &dyn Carousel) -> Vec<HandleInstance> {
    let container = Mat4::from(carousel.container().to_affine());
    carousel
        .handles()
        .iter()
        .enumerate()
        .map(|(slot, handle)| HandleInstance {
            model: (container * Mat4::from_translation(handle.position)).to_cols_array_2d(),
            slot: slot as u32,
            _pad: [0; 3],
        })
        .collect()
}
