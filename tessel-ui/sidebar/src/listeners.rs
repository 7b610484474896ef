use std::cell::Cell;
use std::rc::Rc;

/// Global event sources a provider may hold a listener on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    Keyboard,
    Viewport,
}

#[derive(Debug, Default)]
struct Counters {
    keyboard: Cell<usize>,
    viewport: Cell<usize>,
}

impl Counters {
    fn slot(&self, kind: ListenerKind) -> &Cell<usize> {
        match kind {
            ListenerKind::Keyboard => &self.keyboard,
            ListenerKind::Viewport => &self.viewport,
        }
    }
}

/// Bookkeeping for global listeners held by mounted providers.
///
/// Every registration hands out a [`ListenerGuard`]; the listener stays
/// counted until the guard is dropped.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    counters: Rc<Counters>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener of `kind` and return its release guard.
    pub fn register(&self, kind: ListenerKind) -> ListenerGuard {
        let slot = self.counters.slot(kind);
        slot.set(slot.get() + 1);
        log::debug!("{kind:?} listener bound ({} active)", slot.get());

        ListenerGuard {
            counters: Rc::clone(&self.counters),
            kind,
        }
    }

    /// Number of live listeners of `kind`.
    pub fn active(&self, kind: ListenerKind) -> usize {
        self.counters.slot(kind).get()
    }

    /// Number of live listeners of any kind.
    pub fn total_active(&self) -> usize {
        self.active(ListenerKind::Keyboard)
            + self.active(ListenerKind::Viewport)
    }
}

/// Scoped registration released on drop.
#[derive(Debug)]
#[must_use = "dropping the guard releases the listener immediately"]
pub struct ListenerGuard {
    counters: Rc<Counters>,
    kind: ListenerKind,
}

impl ListenerGuard {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let slot = self.counters.slot(self.kind);
        slot.set(slot.get().saturating_sub(1));
        log::debug!(
            "{:?} listener released ({} active)",
            self.kind,
            slot.get()
        );
    }
}
