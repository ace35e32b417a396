// ABOUTME: Wizard session value object and the linear step navigator
// One onboarding attempt; created on flow entry, discarded on exit or completion

use super::fields::{FieldKey, FormFieldStore};
use super::selection::SelectionSet;
use super::step::WizardStep;
use super::uploads::DraftUploadQueue;
use crate::media::ImageRef;
use tracing::debug;

/// Signal produced by [`WizardSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next step.
    Advanced,
    /// Current step's predicate failed; the session is unchanged. The UI is
    /// expected to disable the control rather than surface an error.
    Blocked,
    /// Advanced past the final step. The session is unchanged; the caller
    /// owns the hand-off to the session/auth collaborator.
    Complete,
}

/// Signal produced by [`WizardSession::retreat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    /// Moved to the previous step.
    Retreated,
    /// Retreated from the first step. The session is unchanged; the caller
    /// navigates back to the previous screen.
    ExitFlow,
}

/// In-memory aggregate of all onboarding state for one pass through the
/// wizard. The presentation layer owns the single instance; every transition
/// is a method on the value, with no I/O anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    /// Current step; always a member of the fixed three-step sequence.
    pub step: WizardStep,
    /// Account-details text fields.
    pub fields: FormFieldStore,
    /// Style tags; seeded with "Casual".
    pub styles: SelectionSet<String>,
    /// Colour tags; starts empty.
    pub colors: SelectionSet<String>,
    /// Staged wardrobe images, in display order.
    pub uploads: DraftUploadQueue,
    /// Field focused on the account step.
    pub focused_field: FieldKey,
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            step: WizardStep::AccountDetails,
            fields: FormFieldStore::new(),
            styles: SelectionSet::with_seed(["Casual".to_string()]),
            colors: SelectionSet::new(),
            uploads: DraftUploadQueue::new(),
            focused_field: FieldKey::Name,
        }
    }

    /// Whether the current step's validity predicate passes.
    pub fn can_advance(&self) -> bool {
        self.step.is_satisfied_by(self)
    }

    /// Try to move forward one step.
    ///
    /// On the final step this reports [`AdvanceOutcome::Complete`] without
    /// mutating anything; an unsatisfied predicate reports
    /// [`AdvanceOutcome::Blocked`], also a strict no-op.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.can_advance() {
            return AdvanceOutcome::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                debug!(from = ?self.step, to = ?next, "wizard advanced");
                self.step = next;
                AdvanceOutcome::Advanced
            }
            None => AdvanceOutcome::Complete,
        }
    }

    /// Move back one step. Never re-checks validity; a user may always go
    /// back. From the first step this reports [`RetreatOutcome::ExitFlow`]
    /// without mutating anything.
    pub fn retreat(&mut self) -> RetreatOutcome {
        match self.step.previous() {
            Some(prev) => {
                debug!(from = ?self.step, to = ?prev, "wizard retreated");
                self.step = prev;
                RetreatOutcome::Retreated
            }
            None => RetreatOutcome::ExitFlow,
        }
    }

    /// Toggle a style tag on the preferences step.
    pub fn toggle_style(&mut self, tag: &str) {
        self.styles.toggle(tag.to_string());
    }

    /// Toggle a colour tag on the preferences step.
    pub fn toggle_color(&mut self, tag: &str) {
        self.colors.toggle(tag.to_string());
    }

    /// Stage an image produced by a capture or gallery pick.
    pub fn stage_upload(&mut self, reference: ImageRef) {
        self.uploads.append(reference);
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.fields.set(FieldKey::Name, "Ann");
        session.fields.set(FieldKey::Email, "a@b.com");
        session.fields.set(FieldKey::Password, "x");
        session
    }

    #[test]
    fn test_new_session_defaults() {
        let session = WizardSession::new();
        assert_eq!(session.step, WizardStep::AccountDetails);
        assert!(session.styles.contains(&"Casual".to_string()));
        assert_eq!(session.styles.len(), 1);
        assert!(session.colors.is_empty());
        assert!(session.uploads.is_empty());
    }

    #[test]
    fn test_advance_blocked_on_empty_fields() {
        let mut session = WizardSession::new();
        assert_eq!(session.advance(), AdvanceOutcome::Blocked);
        assert_eq!(session.step, WizardStep::AccountDetails);
    }

    #[test]
    fn test_blocked_advance_is_strict_noop() {
        let mut session = WizardSession::new();
        session.fields.set(FieldKey::Name, "Ann");
        session.fields.set(FieldKey::Email, "a@b.com");
        // password still empty
        let before = session.clone();
        assert_eq!(session.advance(), AdvanceOutcome::Blocked);
        assert_eq!(session, before);
    }

    #[test]
    fn test_valid_advance_moves_one_step() {
        let mut session = filled_session();
        assert_eq!(session.advance(), AdvanceOutcome::Advanced);
        assert_eq!(session.step, WizardStep::StylePreferences);
    }

    #[test]
    fn test_advance_past_final_step_signals_complete() {
        let mut session = filled_session();
        session.advance();
        session.advance();
        assert_eq!(session.step, WizardStep::WardrobeUpload);

        let before = session.clone();
        assert_eq!(session.advance(), AdvanceOutcome::Complete);
        assert_eq!(session, before);
    }

    #[test]
    fn test_retreat_from_first_step_signals_exit() {
        let mut session = WizardSession::new();
        let before = session.clone();
        assert_eq!(session.retreat(), RetreatOutcome::ExitFlow);
        assert_eq!(session, before);
    }

    #[test]
    fn test_retreat_never_checks_validity() {
        let mut session = filled_session();
        session.advance();
        session.fields.reset();
        // Fields are now invalid for step 0, but going back is always allowed.
        assert_eq!(session.retreat(), RetreatOutcome::Retreated);
        assert_eq!(session.step, WizardStep::AccountDetails);
    }
}
