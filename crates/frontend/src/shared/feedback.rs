//! Page-scoped transient status messages.

/// Kind of feedback shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

/// At most one message is visible at a time. A new action clears the
/// previous message before reporting its own outcome, so a stale error
/// never lingers after a later success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackState {
    current: Option<Feedback>,
}

impl FeedbackState {
    pub fn report(&mut self, kind: FeedbackKind, text: impl Into<String>) {
        self.current = Some(Feedback {
            kind,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }
}
