// ABOUTME: End-to-end tests for the onboarding wizard state machine

use poshakh::media::{
    pick_from_library, ImageRef, MediaLibrary, PermissionStatus, PickResult,
};
use poshakh::wizard::{
    AdvanceOutcome, FieldKey, RetreatOutcome, SelectionSet, WizardSession, WizardStep,
};
use pretty_assertions::assert_eq;

fn filled_session() -> WizardSession {
    let mut session = WizardSession::new();
    session.fields.set(FieldKey::Name, "Ann");
    session.fields.set(FieldKey::Email, "a@b.com");
    session.fields.set(FieldKey::Password, "x");
    session
}

#[test]
fn valid_advance_moves_exactly_one_step_and_touches_nothing_else() {
    let mut session = filled_session();
    session.toggle_style("Vintage");
    session.stage_upload(ImageRef::new("poshakh://staged"));

    for expected in [WizardStep::StylePreferences, WizardStep::WardrobeUpload] {
        let before = session.clone();
        assert_eq!(session.advance(), AdvanceOutcome::Advanced);
        assert_eq!(session.step, expected);
        // Everything except the step index is untouched.
        assert_eq!(session.fields, before.fields);
        assert_eq!(session.styles, before.styles);
        assert_eq!(session.colors, before.colors);
        assert_eq!(session.uploads, before.uploads);
    }
}

#[test]
fn advance_with_any_account_field_empty_stays_on_first_step() {
    let missing_one = [FieldKey::Name, FieldKey::Email, FieldKey::Password];
    for skipped in missing_one {
        let mut session = filled_session();
        session.fields.set(skipped, "");
        assert_eq!(session.advance(), AdvanceOutcome::Blocked);
        assert_eq!(session.step, WizardStep::AccountDetails);
    }
}

#[test]
fn double_toggle_restores_membership() {
    let mut set: SelectionSet<String> =
        SelectionSet::with_seed(["Casual".to_string(), "Sporty".to_string()]);
    let before = set.clone();

    set.toggle("Formal".to_string());
    set.toggle("Formal".to_string());
    assert_eq!(set, before);

    // Also from the present side: removing then re-adding.
    set.toggle("Casual".to_string());
    set.toggle("Casual".to_string());
    assert_eq!(set, before);
}

#[test]
fn retreat_from_first_step_signals_exit_exactly_once_per_call() {
    let mut session = WizardSession::new();
    let before = session.clone();

    assert_eq!(session.retreat(), RetreatOutcome::ExitFlow);
    assert_eq!(session, before);

    // A second retreat signals again and still mutates nothing.
    assert_eq!(session.retreat(), RetreatOutcome::ExitFlow);
    assert_eq!(session, before);
}

/// Media library that always denies access.
struct DenyingLibrary;

impl MediaLibrary for DenyingLibrary {
    fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    fn request_camera_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    fn pick_image(&self) -> Option<ImageRef> {
        None
    }
}

#[test]
fn appended_references_keep_order_and_denied_picks_contribute_zero() {
    let mut session = WizardSession::new();

    // A few denied gallery attempts up front append nothing.
    for _ in 0..3 {
        match pick_from_library(&DenyingLibrary) {
            PickResult::Picked(reference) => session.stage_upload(reference),
            PickResult::PermissionDenied | PickResult::Cancelled => {}
        }
    }
    assert_eq!(session.uploads.len(), 0);

    let references: Vec<ImageRef> = (0..5)
        .map(|i| ImageRef::new(format!("poshakh://capture/{i}")))
        .collect();
    for reference in &references {
        session.stage_upload(reference.clone());
    }

    assert_eq!(session.uploads.len(), 5);
    let staged: Vec<&ImageRef> = session.uploads.iter().collect();
    for (staged_ref, expected) in staged.iter().zip(&references) {
        assert_eq!(*staged_ref, expected);
    }
}

#[test]
fn full_wizard_scenario() {
    let mut session = WizardSession::new();

    session.fields.set(FieldKey::Name, "Ann");
    session.fields.set(FieldKey::Email, "a@b.com");
    session.fields.set(FieldKey::Password, "x");
    assert_eq!(session.advance(), AdvanceOutcome::Advanced);
    assert_eq!(session.step, WizardStep::StylePreferences);

    session.toggle_style("Formal");
    assert!(session.styles.contains(&"Casual".to_string()));
    assert!(session.styles.contains(&"Formal".to_string()));
    assert_eq!(session.styles.len(), 2);

    assert_eq!(session.advance(), AdvanceOutcome::Advanced);
    assert_eq!(session.step, WizardStep::WardrobeUpload);

    // The upload step has no validity gate; completing mutates nothing.
    let before = session.clone();
    assert_eq!(session.advance(), AdvanceOutcome::Complete);
    assert_eq!(session, before);
}
