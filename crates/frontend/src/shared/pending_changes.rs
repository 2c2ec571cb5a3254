//! Unsaved-changes guard for navigation inside a screen.
//!
//! ```text
//! Clean --edit--> Dirty --navigate--> Confirming{target}
//!   ^               ^                    |  |
//!   |               +------cancel--------+  |
//!   +------------save / confirm-------------+
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingState<T> {
    Clean,
    Dirty,
    Confirming { target: T },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChanges<T> {
    state: PendingState<T>,
}

impl<T> Default for PendingChanges<T> {
    fn default() -> Self {
        Self {
            state: PendingState::Clean,
        }
    }
}

impl<T: Clone> PendingChanges<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PendingState<T> {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        !matches!(self.state, PendingState::Clean)
    }

    /// Target waiting for the user's answer, if a confirmation is open.
    pub fn pending_target(&self) -> Option<&T> {
        match &self.state {
            PendingState::Confirming { target } => Some(target),
            _ => None,
        }
    }

    pub fn mark_dirty(&mut self) {
        if matches!(self.state, PendingState::Clean) {
            self.state = PendingState::Dirty;
        }
    }

    /// Changes were saved (or reverted to the saved state).
    pub fn mark_saved(&mut self) {
        self.state = PendingState::Clean;
    }

    /// Returns the target when navigation may proceed right away. With
    /// unsaved changes the target is parked until `confirm` or `cancel`.
    pub fn request_navigation(&mut self, target: T) -> Option<T> {
        match self.state {
            PendingState::Clean => Some(target),
            PendingState::Dirty | PendingState::Confirming { .. } => {
                self.state = PendingState::Confirming { target };
                None
            }
        }
    }

    /// User accepted losing the changes: returns the parked target.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, PendingState::Clean) {
            PendingState::Confirming { target } => Some(target),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// User chose to stay: changes are kept.
    pub fn cancel(&mut self) {
        if matches!(self.state, PendingState::Confirming { .. }) {
            self.state = PendingState::Dirty;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_navigation_proceeds() {
        let mut p = PendingChanges::new();
        assert_eq!(p.request_navigation("tabs"), Some("tabs"));
        assert_eq!(p.state(), &PendingState::Clean);
    }

    #[test]
    fn test_dirty_navigation_needs_confirmation() {
        let mut p = PendingChanges::new();
        p.mark_dirty();
        assert!(p.is_dirty());
        assert_eq!(p.request_navigation("tabs"), None);
        assert_eq!(p.pending_target(), Some(&"tabs"));

        assert_eq!(p.confirm(), Some("tabs"));
        assert_eq!(p.state(), &PendingState::Clean);
        assert!(!p.is_dirty());
    }

    #[test]
    fn test_cancel_keeps_changes() {
        let mut p = PendingChanges::new();
        p.mark_dirty();
        p.request_navigation("widgets");
        p.cancel();
        assert_eq!(p.state(), &PendingState::Dirty);
        assert_eq!(p.confirm(), None);
        assert_eq!(p.state(), &PendingState::Dirty);
    }

    #[test]
    fn test_save_clears_dirty() {
        let mut p: PendingChanges<&str> = PendingChanges::new();
        p.mark_dirty();
        p.mark_saved();
        assert_eq!(p.state(), &PendingState::Clean);
        assert_eq!(p.request_navigation("general"), Some("general"));
    }

    #[test]
    fn test_second_request_replaces_target() {
        let mut p = PendingChanges::new();
        p.mark_dirty();
        p.request_navigation(1);
        p.request_navigation(2);
        assert_eq!(p.confirm(), Some(2));
    }

    #[test]
    fn test_edit_while_confirming_keeps_target() {
        let mut p = PendingChanges::new();
        p.mark_dirty();
        p.request_navigation(1);
        p.mark_dirty();
        assert_eq!(p.pending_target(), Some(&1));
    }
}
