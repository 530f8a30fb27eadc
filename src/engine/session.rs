//! Session state: the user-facing on/off switch and the busy flag that keeps
//! the engine from reacting to its own edits.
//!
//! Both flags are `Cell`s. Change notifications arrive one at a time on the
//! host's thread, and the engine is re-entered synchronously (through the
//! host) while it applies an edit, so the flags must be readable and writable
//! through a shared reference.

use std::cell::Cell;

#[derive(Debug)]
pub struct SessionState {
    enabled: Cell<bool>,
    busy: Cell<bool>,
}

impl SessionState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Cell::new(enabled),
            busy: Cell::new(false),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Flip the enabled flag, returning the new value
    pub fn toggle(&self) -> bool {
        let enabled = !self.enabled.get();
        self.enabled.set(enabled);
        enabled
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Mark the session busy for the lifetime of the returned guard
    ///
    /// Returns `None` if an edit is already in flight.
    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        if self.busy.replace(true) {
            return None;
        }
        Some(BusyGuard { session: self })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Clears the busy flag when dropped, on every exit path
#[derive(Debug)]
pub struct BusyGuard<'a> {
    session: &'a SessionState,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.session.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = SessionState::default();
        assert!(session.is_enabled());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_toggle() {
        let session = SessionState::new(true);
        assert!(!session.toggle());
        assert!(!session.is_enabled());
        assert!(session.toggle());
        assert!(session.is_enabled());
    }

    #[test]
    fn test_guard_sets_and_clears_busy() {
        let session = SessionState::new(true);
        {
            let _guard = session.try_acquire().expect("first acquire");
            assert!(session.is_busy());
            assert!(session.try_acquire().is_none());
        }
        assert!(!session.is_busy());
        assert!(session.try_acquire().is_some());
    }

    #[test]
    fn test_guard_released_on_panic() {
        let session = SessionState::new(true);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = session.try_acquire().expect("acquire");
            panic!("edit blew up");
        }));
        assert!(result.is_err());
        assert!(!session.is_busy());
    }
}
