use crate::handle::HandleId;
use smallvec::SmallVec;
use std::fmt;

/// Notifications a carousel widget emits while it is driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    DragStarted,
    /// The pointer was released after a drag had started.
    DragFinished,
    /// Momentum moved the carousel this frame.
    MomentumMove,
    /// Momentum came to rest; fires once per coast.
    StoppedMoving,
    /// Centering picked a new target (`None` when the carousel is empty).
    CenterChanged(Option<HandleId>),
    /// The spring reached its target; fires once per centering run.
    CenteringFinished,
}

type Listener = Box<dyn FnMut(&CarouselEvent)>;

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub struct Observers {
    listeners: SmallVec<[Listener; 4]>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Observers {
    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, event: CarouselEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    pub fn emit_all(&mut self, events: &[CarouselEvent]) {
        for event in events {
            self.emit(*event);
        }
    }
}
