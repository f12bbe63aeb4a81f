// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: track the active key across a gesture's lifecycle.
//!
//! ## Usage
//!
//! 1) Start a session by calling [`DragSession::start`] with the dragged key.
//! 2) While the session is active, query [`DragSession::active`] or
//!    [`DragSession::matches`] to relate incoming events to the drag.
//! 3) End the session with [`DragSession::end`], which always returns to idle
//!    and yields the key that was active, if any.
//!
//! ## Minimal example
//!
//! ```
//! use trellis_drag::session::DragSession;
//!
//! let mut session = DragSession::default();
//!
//! session.start("card-3");
//! assert!(session.is_dragging());
//! assert!(session.matches(&"card-3"));
//!
//! assert_eq!(session.end(), Some("card-3"));
//! assert!(!session.is_dragging());
//! ```

/// Tracks which key, if any, is currently being dragged.
///
/// Two states: idle (`active` is `None`) and dragging. The session is pure
/// bookkeeping; it never touches the data the keys refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession<K> {
    active: Option<K>,
}

// Not derived: the derive would require `K: Default`, and an idle session
// needs no key at all.
impl<K> Default for DragSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DragSession<K> {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Starts a drag with the given key.
    ///
    /// Starting while already dragging adopts the new key; the previous
    /// gesture is considered abandoned.
    pub fn start(&mut self, key: K) {
        self.active = Some(key);
    }

    /// Returns the key being dragged, if any.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Ends the drag, returning the key that was active, if any.
    ///
    /// Always returns the session to idle; ending an idle session is safe and
    /// yields `None`.
    pub fn end(&mut self) -> Option<K> {
        self.active.take()
    }
}

impl<K: PartialEq> DragSession<K> {
    /// Returns `true` if `key` is the one currently being dragged.
    #[must_use]
    pub fn matches(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = DragSession::<u32>::new();
        assert!(!session.is_dragging());
        assert_eq!(session.active(), None);
    }

    #[test]
    fn start_records_the_active_key() {
        let mut session = DragSession::new();
        session.start(7_u32);

        assert!(session.is_dragging());
        assert_eq!(session.active(), Some(&7));
        assert!(session.matches(&7));
        assert!(!session.matches(&8));
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut session = DragSession::new();
        session.start(1_u32);
        session.start(2);

        assert_eq!(session.active(), Some(&2));
        assert!(!session.matches(&1));
    }

    #[test]
    fn end_yields_the_key_and_returns_to_idle() {
        let mut session = DragSession::new();
        session.start(5_u32);

        assert_eq!(session.end(), Some(5));
        assert!(!session.is_dragging());
        assert_eq!(session.active(), None);
    }

    #[test]
    fn end_on_idle_session_is_safe() {
        let mut session = DragSession::<u32>::new();
        assert_eq!(session.end(), None);
        assert!(!session.is_dragging());
    }
}
