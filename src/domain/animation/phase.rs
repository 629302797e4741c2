// SPDX-License-Identifier: MPL-2.0
//! Frame cycler lifecycle.
//!
//! A cycler starts `Idle`, enters `Running` when a timer is started, and
//! returns to `Idle` on pause. Teardown is terminal.

use super::TimerId;

/// Lifecycle state of one frame cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No timer is active (not mounted yet, or paused).
    #[default]
    Idle,
    /// A single timer, identified by its id, is ticking.
    Running(TimerId),
    /// The owner went away. No timer will ever run again.
    TornDown,
}

impl Phase {
    /// Returns true if a timer is active.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// Returns true if no timer is active, including after teardown.
    #[must_use]
    pub fn is_idle(self) -> bool {
        !self.is_running()
    }

    /// Returns true after teardown.
    #[must_use]
    pub fn is_torn_down(self) -> bool {
        matches!(self, Self::TornDown)
    }

    /// Returns the id of the active timer, if any.
    #[must_use]
    pub fn timer(self) -> Option<TimerId> {
        match self {
            Self::Running(id) => Some(id),
            Self::Idle | Self::TornDown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_state_checks() {
        let running = Phase::Running(TimerId::new(3));
        assert!(running.is_running());
        assert!(!running.is_idle());
        assert_eq!(running.timer(), Some(TimerId::new(3)));

        assert!(Phase::Idle.is_idle());
        assert!(Phase::Idle.timer().is_none());

        assert!(Phase::TornDown.is_idle());
        assert!(Phase::TornDown.is_torn_down());
        assert!(Phase::TornDown.timer().is_none());
    }
}
