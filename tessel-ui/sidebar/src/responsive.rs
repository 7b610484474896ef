use crate::listeners::{ListenerGuard, ListenerKind, ListenerRegistry};

/// Viewport width below which the sidebar switches to the mobile sheet.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Tracks whether the viewport is narrower than a breakpoint.
#[derive(Debug)]
pub struct ResponsiveDetector {
    breakpoint: f32,
    width: Option<f32>,
    is_mobile: bool,
    subscription: Option<ListenerGuard>,
}

impl ResponsiveDetector {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            width: None,
            is_mobile: false,
            subscription: None,
        }
    }

    /// Start observing viewport changes. Repeated calls keep one listener.
    pub fn activate(&mut self, registry: &ListenerRegistry) {
        if self.subscription.is_none() {
            self.subscription = Some(registry.register(ListenerKind::Viewport));
        }
    }

    /// Stop observing viewport changes.
    pub fn deactivate(&mut self) {
        self.subscription = None;
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Return the mobile flag. Reads `false` until the first measurement.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Return whether a viewport width has been observed yet.
    pub fn is_measured(&self) -> bool {
        self.width.is_some()
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    /// Record a viewport width and report whether the mobile flag changed.
    ///
    /// Widths reported while inactive are dropped.
    pub fn observe(&mut self, width: f32) -> bool {
        if !self.is_active() {
            return false;
        }

        self.width = Some(width);
        let is_mobile = width < self.breakpoint;
        if is_mobile == self.is_mobile {
            return false;
        }

        self.is_mobile = is_mobile;
        log::debug!(
            "viewport {width}px crossed {}px breakpoint (mobile: {is_mobile})",
            self.breakpoint
        );
        true
    }
}

impl Default for ResponsiveDetector {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT)
    }
}
