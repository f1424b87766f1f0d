//! Application state for the leave entitlement API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::LeavePolicy;
use crate::notification::{NotificationDrafter, TemplateDrafter};

/// Shared application state.
///
/// Contains the immutable policy every calculation runs against and the
/// drafter used for employee notices.
#[derive(Clone)]
pub struct AppState {
    /// The active leave policy.
    policy: Arc<LeavePolicy>,
    /// The notification drafter.
    drafter: Arc<dyn NotificationDrafter>,
}

impl AppState {
    /// Creates a new application state using the template drafter.
    pub fn new(policy: LeavePolicy) -> Self {
        Self::with_drafter(policy, Arc::new(TemplateDrafter))
    }

    /// Creates a new application state with a specific drafter.
    pub fn with_drafter(policy: LeavePolicy, drafter: Arc<dyn NotificationDrafter>) -> Self {
        Self {
            policy: Arc::new(policy),
            drafter,
        }
    }

    /// Returns a reference to the active policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns a reference to the notification drafter.
    pub fn drafter(&self) -> &dyn NotificationDrafter {
        self.drafter.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_policy() {
        let state = AppState::new(LeavePolicy::statutory());
        let clone = state.clone();
        assert!(std::ptr::eq(state.policy(), clone.policy()));
    }
}
