// ABOUTME: Unit tests for AppState navigation, hand-offs and screen states

use chrono::NaiveDate;
use poshakh::app::state::{AppState, TryOnMode, View};
use poshakh::app::{AppEvent, EventHandler};
use poshakh::config::{AppConfig, SetupConfig};
use poshakh::media::ImageRef;
use poshakh::wizard::FieldKey;

fn completed_setup_state() -> AppState {
    let mut setup = SetupConfig::default();
    setup.mark_completed();
    AppState::new(AppConfig::default(), setup)
}

#[test]
fn fresh_install_lands_on_landing() {
    let state = AppState::default();
    assert_eq!(state.current_view, View::Landing);
    assert!(!state.should_quit);
    assert!(state.wizard.is_none());
}

#[test]
fn completed_setup_boots_into_home() {
    let state = completed_setup_state();
    assert_eq!(state.current_view, View::Home);
}

#[test]
fn home_navigation_round_trips() {
    let mut state = completed_setup_state();
    for (event, view) in [
        (AppEvent::ShowCalendar, View::Calendar),
        (AppEvent::ShowStreaks, View::Streaks),
        (AppEvent::ShowCreateOutfit, View::CreateOutfit),
        (AppEvent::ShowTryOn, View::TryOn),
        (AppEvent::ShowProfile, View::Profile),
    ] {
        EventHandler::process_event(event, &mut state);
        assert_eq!(state.current_view, view);
        EventHandler::process_event(AppEvent::ShowHome, &mut state);
        assert_eq!(state.current_view, View::Home);
    }
}

#[test]
fn onboarding_completion_hands_off_to_home() {
    std::env::set_var("POSHAKH_HOME", std::env::temp_dir().join("poshakh-test-home"));

    let mut state = AppState::default();
    state.start_onboarding();
    {
        let session = state.wizard.as_mut().unwrap();
        session.fields.set(FieldKey::Name, "Ann");
        session.fields.set(FieldKey::Email, "a@b.com");
        session.fields.set(FieldKey::Password, "x");
        session.stage_upload(ImageRef::new("poshakh://staged/coat"));
    }
    EventHandler::process_event(AppEvent::WizardAdvance, &mut state);
    EventHandler::process_event(AppEvent::WizardAdvance, &mut state);
    EventHandler::process_event(AppEvent::WizardAdvance, &mut state);

    assert_eq!(state.current_view, View::Home);
    assert!(state.wizard.is_none());
    assert!(state.setup.completed);
    assert_eq!(state.wardrobe.len(), 1);
    assert_eq!(state.wardrobe[0].category, None);
}

#[test]
fn wizard_exit_returns_to_landing_and_discards_session() {
    let mut state = AppState::default();
    state.start_onboarding();
    {
        let session = state.wizard.as_mut().unwrap();
        session.fields.set(FieldKey::Name, "abandoned");
    }
    EventHandler::process_event(AppEvent::WizardRetreat, &mut state);
    assert_eq!(state.current_view, View::Landing);
    assert!(state.wizard.is_none());

    // Re-entering starts from a clean session.
    state.start_onboarding();
    let session = state.wizard.as_ref().unwrap();
    assert_eq!(session.fields.get(FieldKey::Name), "");
}

#[test]
fn calendar_like_and_reroll_act_on_selected_day() {
    let mut state = completed_setup_state();
    let planned = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
    state.calendar.selected = planned;

    EventHandler::process_event(AppEvent::CalendarLikeOutfit, &mut state);
    assert!(state.planner.plan(planned).unwrap().liked);

    let before = state.planner.plan(planned).unwrap().outfit.id;
    EventHandler::process_event(AppEvent::CalendarRerollOutfit, &mut state);
    let after = state.planner.plan(planned).unwrap().outfit.id;
    assert_ne!(before, after);
}

#[test]
fn marking_worn_extends_streak() {
    let mut state = completed_setup_state();
    let before = state.streaks.current();
    let history_before = state.streaks.history().len();

    EventHandler::process_event(AppEvent::StreakMarkWorn, &mut state);
    assert_eq!(state.streaks.current(), before + 1);
    assert_eq!(state.streaks.history().len(), history_before + 1);
    assert!(state.streaks.longest() >= state.streaks.current());
}

#[test]
fn try_on_mode_resets_on_entry() {
    let mut state = completed_setup_state();
    EventHandler::process_event(AppEvent::ShowTryOn, &mut state);
    EventHandler::process_event(AppEvent::TryOnStaticMode, &mut state);
    assert_eq!(state.try_on.mode, TryOnMode::Static);

    EventHandler::process_event(AppEvent::ShowHome, &mut state);
    EventHandler::process_event(AppEvent::ShowTryOn, &mut state);
    assert_eq!(state.try_on.mode, TryOnMode::Select);
}

#[test]
fn profile_edit_cancel_restores_pre_edit_values() {
    let mut state = completed_setup_state();
    EventHandler::process_event(AppEvent::ShowProfile, &mut state);
    let original = state.profile.profile.username.clone();

    EventHandler::process_event(AppEvent::ProfileStartEdit, &mut state);
    for _ in 0..original.len() {
        EventHandler::process_event(AppEvent::ProfileBackspace, &mut state);
    }
    for c in "Imposter".chars() {
        EventHandler::process_event(AppEvent::ProfileInputChar(c), &mut state);
    }
    assert_eq!(state.profile.profile.username, "Imposter");

    EventHandler::process_event(AppEvent::ProfileCancelEdit, &mut state);
    assert_eq!(state.profile.profile.username, original);
    assert!(!state.profile.editing);
}

#[test]
fn profile_save_with_empty_username_is_rejected() {
    let mut state = completed_setup_state();
    EventHandler::process_event(AppEvent::ProfileStartEdit, &mut state);
    state.profile.profile.username.clear();
    EventHandler::process_event(AppEvent::ProfileSaveEdit, &mut state);

    assert!(state.profile.editing);
    assert!(state
        .notifications
        .iter()
        .any(|n| n.message.contains("Username cannot be empty")));
}
