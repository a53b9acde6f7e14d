//! Process-wide UI state: one resource store and one feedback slot,
//! shared by every page of the session and provided via context at app
//! start.

use leptos::prelude::*;

use crate::shared::feedback::{FeedbackKind, FeedbackState};
use crate::shared::store::ResourceStore;

#[derive(Clone, Copy)]
pub struct Session {
    pub store: RwSignal<ResourceStore>,
    pub feedback: RwSignal<FeedbackState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(ResourceStore::default()),
            feedback: RwSignal::new(FeedbackState::default()),
        }
    }

    pub fn use_session() -> Session {
        use_context::<Session>().expect("Session not found in context")
    }

    pub fn report_success(&self, text: impl Into<String>) {
        self.feedback
            .update(|f| f.report(FeedbackKind::Success, text.into()));
    }

    pub fn report_error(&self, text: impl Into<String>) {
        self.feedback
            .update(|f| f.report(FeedbackKind::Error, text.into()));
    }

    pub fn clear_feedback(&self) {
        self.feedback.update(|f| f.clear());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
