use std::fmt;

/// Callback receiving the requested open value when state is delegated.
pub type OnOpenChange = Box<dyn FnMut(bool)>;

/// Result of a set request against an [`OpenState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenChange {
    /// Owned state now holds the contained value.
    Applied(bool),
    /// Delegated state forwarded the contained value to its owner.
    Requested(bool),
}

impl OpenChange {
    /// Return the value carried by the change.
    pub fn value(self) -> bool {
        match self {
            OpenChange::Applied(value) | OpenChange::Requested(value) => value,
        }
    }
}

/// Open/closed state that is either owned locally or delegated to a caller.
///
/// Owned state mutates in place. Delegated state mirrors the caller's value
/// and routes every set request through `on_change`; the mirrored value only
/// moves when the caller pushes it back with [`OpenState::sync`].
pub enum OpenState {
    Owned(bool),
    Delegated { value: bool, on_change: OnOpenChange },
}

impl OpenState {
    /// Build locally owned state starting at `default`.
    pub fn uncontrolled(default: bool) -> Self {
        OpenState::Owned(default)
    }

    /// Build state owned by the caller.
    pub fn controlled(
        value: bool,
        on_change: impl FnMut(bool) + 'static,
    ) -> Self {
        OpenState::Delegated {
            value,
            on_change: Box::new(on_change),
        }
    }

    /// Return the current open value.
    pub fn open(&self) -> bool {
        match self {
            OpenState::Owned(value) => *value,
            OpenState::Delegated { value, .. } => *value,
        }
    }

    /// Return whether the value is owned by the caller.
    pub fn is_controlled(&self) -> bool {
        matches!(self, OpenState::Delegated { .. })
    }

    /// Request `next` as the new open value.
    pub fn set_open(&mut self, next: bool) -> OpenChange {
        self.update_open(|_| next)
    }

    /// Request a new open value computed from the current one.
    pub fn update_open(
        &mut self,
        next: impl FnOnce(bool) -> bool,
    ) -> OpenChange {
        match self {
            OpenState::Owned(value) => {
                *value = next(*value);
                OpenChange::Applied(*value)
            },
            OpenState::Delegated { value, on_change } => {
                let requested = next(*value);
                on_change(requested);
                OpenChange::Requested(requested)
            },
        }
    }

    /// Flip the open value.
    pub fn toggle(&mut self) -> OpenChange {
        self.update_open(|open| !open)
    }

    /// Accept a value pushed by the owning caller.
    ///
    /// Returns `false` for owned state, which has no external owner.
    pub fn sync(&mut self, next: bool) -> bool {
        match self {
            OpenState::Owned(_) => false,
            OpenState::Delegated { value, .. } => {
                *value = next;
                true
            },
        }
    }
}

impl Default for OpenState {
    fn default() -> Self {
        OpenState::Owned(true)
    }
}

impl fmt::Debug for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenState::Owned(value) => {
                f.debug_tuple("Owned").field(value).finish()
            },
            OpenState::Delegated { value, .. } => f
                .debug_struct("Delegated")
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}
