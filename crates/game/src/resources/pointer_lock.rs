use crate::prelude::*;

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerLock {
    Locked,
    #[default]
    Unlocked,
}

/// Decides when the pointer is captured while exploring on desktop.
///
/// An active marker releases the pointer at once so the phone UI can be used.
/// Losing the marker re-captures after a debounce, which is cancelled if a
/// marker becomes active again first.
#[derive(Resource, Debug)]
pub struct PointerLockArbiter {
    state: PointerLock,
    relock_delay: Duration,
    pending_relock: Option<Duration>,
    /// Last (exploring, active marker) pair seen
    observed: Option<(bool, Option<String>)>,
}

impl Default for PointerLockArbiter {
    fn default() -> Self {
        Self::new(PointerLockSettings::default().relock_delay)
    }
}

impl PointerLockArbiter {
    pub fn new(relock_delay: Duration) -> Self {
        Self {
            state: PointerLock::Unlocked,
            relock_delay,
            pending_relock: None,
            observed: None,
        }
    }

    pub fn state(&self) -> PointerLock {
        self.state
    }

    pub fn has_pending_relock(&self) -> bool {
        self.pending_relock.is_some()
    }

    /// React to the phase and active marker; only changes matter.
    /// Returns true when the situation changed.
    pub fn observe(&mut self, exploring: bool, active: Option<&str>) -> bool {
        let current = (exploring, active.map(str::to_string));
        if self.observed.as_ref() == Some(&current) {
            return false;
        }
        self.observed = Some(current);

        // Whatever was scheduled belonged to the previous situation
        self.pending_relock = None;

        if !exploring {
            self.state = PointerLock::Unlocked;
            return true;
        }

        match active {
            Some(id) => {
                log::debug!("Releasing pointer for marker {}", id);
                self.state = PointerLock::Unlocked;
            }
            None => self.pending_relock = Some(self.relock_delay),
        }
        true
    }

    /// Count down a pending relock by the frame time
    pub fn tick(&mut self, dt: Duration) {
        let Some(remaining) = self.pending_relock else {
            return;
        };

        match remaining.checked_sub(dt) {
            Some(left) if !left.is_zero() => self.pending_relock = Some(left),
            _ => {
                self.pending_relock = None;
                self.state = PointerLock::Locked;
            }
        }
    }

    /// User asked to capture the pointer (click into the view)
    pub fn request_lock(&mut self) {
        let exploring = self.observed.as_ref().is_some_and(|(exploring, _)| *exploring);
        let no_marker = self
            .observed
            .as_ref()
            .is_some_and(|(_, active)| active.is_none());
        if exploring && no_marker {
            self.pending_relock = None;
            self.state = PointerLock::Locked;
        }
    }

    /// User released the pointer (escape)
    pub fn release(&mut self) {
        self.pending_relock = None;
        self.state = PointerLock::Unlocked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_entering_explore_locks_after_debounce() {
        let mut arbiter = PointerLockArbiter::default();
        arbiter.observe(true, None);
        assert_eq!(arbiter.state(), PointerLock::Unlocked);

        arbiter.tick(Duration::from_millis(299));
        assert_eq!(arbiter.state(), PointerLock::Unlocked);
        arbiter.tick(Duration::from_millis(1));
        assert_eq!(arbiter.state(), PointerLock::Locked);
    }

    #[test]
    fn test_active_marker_unlocks_immediately() {
        let mut arbiter = PointerLockArbiter::default();
        arbiter.observe(true, None);
        arbiter.tick(Duration::from_millis(300));
        assert_eq!(arbiter.state(), PointerLock::Locked);

        arbiter.observe(true, Some("light_main_1"));
        assert_eq!(arbiter.state(), PointerLock::Unlocked);
    }

    #[test]
    fn test_reactivation_cancels_relock() {
        let mut arbiter = PointerLockArbiter::default();
        arbiter.observe(true, Some("light_main_1"));

        arbiter.observe(true, None);
        assert!(arbiter.has_pending_relock());
        for _ in 0..10 {
            arbiter.tick(FRAME);
        }

        arbiter.observe(true, Some("light_main_1"));
        assert!(!arbiter.has_pending_relock());
        for _ in 0..100 {
            arbiter.tick(FRAME);
            assert_eq!(arbiter.state(), PointerLock::Unlocked);
        }
    }

    #[test]
    fn test_repeated_observation_does_not_restart_timer() {
        let mut arbiter = PointerLockArbiter::default();
        assert!(arbiter.observe(true, None));
        for _ in 0..20 {
            assert!(!arbiter.observe(true, None));
            arbiter.tick(FRAME);
        }
        assert_eq!(arbiter.state(), PointerLock::Locked);
    }

    #[test]
    fn test_leaving_explore_unlocks_and_cancels() {
        let mut arbiter = PointerLockArbiter::default();
        arbiter.observe(true, None);
        arbiter.observe(false, None);
        arbiter.tick(Duration::from_secs(1));
        assert_eq!(arbiter.state(), PointerLock::Unlocked);
    }

    #[test]
    fn test_click_locks_only_without_marker() {
        let mut arbiter = PointerLockArbiter::default();
        arbiter.observe(true, Some("light_main_1"));
        arbiter.request_lock();
        assert_eq!(arbiter.state(), PointerLock::Unlocked);

        arbiter.observe(true, None);
        arbiter.release();
        assert!(!arbiter.has_pending_relock());
        arbiter.request_lock();
        assert_eq!(arbiter.state(), PointerLock::Locked);
    }
}
