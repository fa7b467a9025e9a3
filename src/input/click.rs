//! Edge-triggered click detection from polled button state.

use serde::{Deserialize, Serialize};

/// Turns per-frame button levels into discrete primary clicks.
///
/// A click completes when the primary button is pressed and then released.
/// Pressing the secondary button cancels a pending click, and no new click
/// can start until the primary button has been released.
///
/// ```
/// use p2life::input::ClickTracker;
///
/// let mut tracker = ClickTracker::new();
/// assert!(!tracker.update(true, false)); // pressed
/// assert!(tracker.update(false, false)); // released: click
/// assert!(!tracker.update(false, false));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTracker {
    armed: bool,
    cancelled: bool,
}

impl ClickTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            armed: false,
            cancelled: false,
        }
    }

    /// Feed one poll of the button levels. Returns `true` once per completed click.
    pub fn update(&mut self, primary: bool, secondary: bool) -> bool {
        if !self.cancelled && primary {
            self.armed = true;
        } else if self.cancelled && !primary {
            self.cancelled = false;
        }

        if secondary {
            self.armed = false;
            self.cancelled = true;
        }

        if self.armed && !primary {
            self.armed = false;
            return true;
        }
        false
    }

    /// A primary press is in progress and would complete on release.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.armed
    }

    /// Clicks are suppressed until the primary button is released.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Drop any pending or cancelled state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
