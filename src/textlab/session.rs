//! # Session State
//!
//! A session holds exactly two pieces of state:
//!
//! - `current_text`: the input every transform reads from.
//! - `pending_transform`: the latest transform result, not yet applied.
//!
//! Transforms never overwrite the input directly. They *stage* their result, and
//! the user explicitly *promotes* it to become the new input. This two-step
//! "compute, then apply" protocol means the original text is never lost by
//! accident, and a failed transform (bad regex, bad Base64) stages nothing.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_text: String,
    pending_transform: Option<String>,
}

impl Session {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            current_text: text.into(),
            pending_transform: None,
        }
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending_transform.as_deref()
    }

    /// Replaces the input and drops any pending transform computed from the old one.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.current_text = text.into();
        self.pending_transform = None;
    }

    pub fn stage(&mut self, result: String) {
        self.pending_transform = Some(result);
    }

    /// Moves the pending transform into the current text. Returns false when
    /// nothing was pending.
    pub fn promote(&mut self) -> bool {
        match self.pending_transform.take() {
            Some(pending) => {
                self.current_text = pending;
                true
            }
            None => false,
        }
    }

    pub fn discard(&mut self) -> bool {
        self.pending_transform.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_does_not_touch_current_text() {
        let mut session = Session::new("original");
        session.stage("changed".to_string());
        assert_eq!(session.current_text(), "original");
        assert_eq!(session.pending(), Some("changed"));
    }

    #[test]
    fn promote_moves_pending_into_current() {
        let mut session = Session::new("original");
        session.stage("changed".to_string());
        assert!(session.promote());
        assert_eq!(session.current_text(), "changed");
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn promote_without_pending_is_a_no_op() {
        let mut session = Session::new("original");
        assert!(!session.promote());
        assert_eq!(session.current_text(), "original");
    }

    #[test]
    fn restaging_replaces_previous_pending() {
        let mut session = Session::new("a");
        session.stage("b".to_string());
        session.stage("c".to_string());
        session.promote();
        assert_eq!(session.current_text(), "c");
    }

    #[test]
    fn set_text_clears_pending() {
        let mut session = Session::new("a");
        session.stage("b".to_string());
        session.set_text("fresh");
        assert_eq!(session.pending(), None);
        assert!(!session.promote());
        assert_eq!(session.current_text(), "fresh");
    }

    #[test]
    fn discard_drops_pending() {
        let mut session = Session::new("a");
        session.stage("b".to_string());
        assert!(session.discard());
        assert!(!session.discard());
        assert_eq!(session.current_text(), "a");
    }
}
