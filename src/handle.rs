use fnv::FnvHashMap;
use glam::Vec3;
use std::fmt;

/// Opaque identity of a host object placed on the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentHandle {
    pub id: HandleId,
    /// Container-local position; the only state the layouts keep per handle.
    pub position: Vec3,
}

/// Ordered handles plus the lookup tables every layout shares.
///
/// Slot order is the child order passed to [`HandleSet::init`] and does not
/// change until the set is re-initialized with `force`.
#[derive(Clone, Debug, Default)]
pub struct HandleSet {
    handles: Vec<ContentHandle>,
    index: FnvHashMap<HandleId, usize>,
    initialized: bool,
}

impl HandleSet {
    /// Reads `children` once; later calls are ignored unless `force` is set.
    /// Returns whether the set was (re)built.
    pub fn init(&mut self, children: &[HandleId], force: bool) -> bool {
        if self.initialized && !force {
            return false;
        }
        self.initialized = true;
        self.handles = children
            .iter()
            .map(|&id| ContentHandle {
                id,
                position: Vec3::ZERO,
            })
            .collect();
        self.index.clear();
        for (slot, &id) in children.iter().enumerate() {
            // first matching slot wins for duplicated ids
            self.index.entry(id).or_insert(slot);
        }
        log::debug!("[handles] init count={} force={}", self.handles.len(), force);
        true
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ContentHandle] {
        &self.handles
    }

    #[inline]
    pub fn position(&self, slot: usize) -> Vec3 {
        self.handles[slot].position
    }

    #[inline]
    pub fn set_position(&mut self, slot: usize, position: Vec3) {
        self.handles[slot].position = position;
    }

    pub fn object_by_index(&self, slot: usize) -> Option<HandleId> {
        self.handles.get(slot).map(|h| h.id)
    }

    pub fn index_by_object(&self, id: HandleId) -> Option<usize> {
        self.index.get(&id).copied()
    }
}
