//! Recording view for controller tests.

use crate::task::ports::{Notification, RenderRequest, TaskView};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// View that records every render and notification request.
///
/// The notification slot holds only the latest notification, as a real view
/// would show it; the full history is kept separately for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingTaskView {
    state: Arc<Mutex<RecordedState>>,
}

#[derive(Debug, Default)]
struct RecordedState {
    renders: Vec<RenderRequest>,
    current_notification: Option<Notification>,
    notifications: Vec<Notification>,
}

impl RecordingTaskView {
    /// Creates a view with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, RecordedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns every render request, oldest first.
    #[must_use]
    pub fn renders(&self) -> Vec<RenderRequest> {
        self.state().renders.clone()
    }

    /// Returns the most recent render request.
    #[must_use]
    pub fn last_render(&self) -> Option<RenderRequest> {
        self.state().renders.last().cloned()
    }

    /// Returns the notification currently in the slot.
    #[must_use]
    pub fn current_notification(&self) -> Option<Notification> {
        self.state().current_notification.clone()
    }

    /// Returns every notification, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.state().notifications.clone()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        let mut state = self.state();
        state.renders.clear();
        state.current_notification = None;
        state.notifications.clear();
    }
}

impl TaskView for RecordingTaskView {
    fn render(&self, request: RenderRequest) {
        self.state().renders.push(request);
    }

    fn notify(&self, notification: Notification) {
        let mut state = self.state();
        state.notifications.push(notification.clone());
        state.current_notification = Some(notification);
    }
}
