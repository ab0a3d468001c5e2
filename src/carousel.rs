use crate::constants::VECTOR_SETTLE_EPSILON_SQ;
use crate::handle::{ContentHandle, HandleId, HandleSet};
use crate::transform::ContainerTransform;
use glam::Vec3;

/// Capability set shared by every carousel layout.
///
/// Layouts own the handle positions; hosts read them back through
/// [`Carousel::handles`] and never write them directly.
pub trait Carousel {
    fn handle_set(&self) -> &HandleSet;

    fn container(&self) -> &ContainerTransform;

    /// Reads the child order once, or again when `force` is set.
    fn init(&mut self, children: &[HandleId], force: bool) -> bool;

    /// Lays every handle out from scratch with the current geometry.
    fn sort(&mut self);

    /// Moves the arrangement by a displacement in container-local axes.
    fn move_relative(&mut self, relative: Vec3);

    /// Index of the slot nearest to the center reference, shifted by `center_offset`.
    /// `None` until the carousel has been initialized.
    fn closest_to_center_index(&self, center_offset: Vec3) -> Option<usize>;

    /// Local displacement that would bring slot `index` exactly onto the center.
    fn distance_for_centering_index(&self, index: usize) -> Vec3;

    /// Squared distance under which centering snaps and stops.
    fn settle_epsilon_sq(&self) -> f32 {
        VECTOR_SETTLE_EPSILON_SQ
    }

    /// Moves the arrangement by a world-space displacement.
    fn move_absolute(&mut self, world_delta: Vec3) {
        let local = self.container().inverse_transform_vector(world_delta);
        self.move_relative(local);
    }

    fn object_by_index(&self, index: usize) -> Option<HandleId> {
        self.handle_set().object_by_index(index)
    }

    fn index_by_object(&self, id: HandleId) -> Option<usize> {
        self.handle_set().index_by_object(id)
    }

    fn handles(&self) -> &[ContentHandle] {
        self.handle_set().as_slice()
    }

    fn is_initialized(&self) -> bool {
        self.handle_set().is_initialized()
    }
}
