// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::state::{AppState, AsyncAction, ProfileTab, TryOnMode, View};
use crate::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    // Landing
    StartOnboarding,
    ShowSignIn,
    // Sign-in
    SignInInputChar(char),
    SignInBackspace,
    SignInToggleFocus,
    SignInToggleRemember,
    SignInSubmit,
    SignInForgotPassword,
    SignInCancel,
    // Onboarding wizard
    WizardInputChar(char),
    WizardBackspace,
    WizardFocusNextField,
    WizardFocusPreviousField,
    WizardCursorUp,
    WizardCursorDown,
    WizardToggleSelection,
    WizardAdvance,
    WizardRetreat,
    WizardCapturePhoto,
    WizardPickFromGallery,
    // Main navigation
    ShowHome,
    ShowCalendar,
    ShowStreaks,
    ShowCreateOutfit,
    ShowTryOn,
    ShowProfile,
    // Calendar
    CalendarNextMonth,
    CalendarPreviousMonth,
    CalendarMoveSelection(i64),
    CalendarLikeOutfit,
    CalendarRerollOutfit,
    // Streaks
    StreakMarkWorn,
    // Create outfit
    CreateCapturePhoto,
    CreatePickFromGallery,
    CreateRetryRecognition,
    CreateFileUncategorised,
    CreateDiscard,
    // Try-on
    TryOnStaticMode,
    TryOnCameraMode,
    TryOnFlipCamera,
    TryOnBackToModeSelect,
    // Profile
    ProfileStartEdit,
    ProfileInputChar(char),
    ProfileBackspace,
    ProfileFocusNextField,
    ProfileFocusPreviousField,
    ProfileSaveEdit,
    ProfileCancelEdit,
    ProfileToggleMoreInfo,
    ProfileSwitchTab(ProfileTab),
    ProfileChangeAvatar,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key press to an event for the current view. Returns `None` for
    /// keys that mean nothing right now.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits, regardless of view or focused input.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppEvent::Quit);
        }

        match state.current_view {
            View::Landing => Self::handle_landing_key(key),
            View::SignIn => Self::handle_sign_in_key(key, state),
            View::Onboarding => Self::handle_wizard_key(key, state),
            View::Home => Self::handle_home_key(key),
            View::Calendar => Self::handle_calendar_key(key),
            View::Streaks => Self::handle_streaks_key(key),
            View::CreateOutfit => Self::handle_create_key(key, state),
            View::TryOn => Self::handle_try_on_key(key, state),
            View::Profile => Self::handle_profile_key(key, state),
        }
    }

    fn handle_landing_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('g') | KeyCode::Enter => Some(AppEvent::StartOnboarding),
            KeyCode::Char('s') => Some(AppEvent::ShowSignIn),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_sign_in_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.sign_in.loading {
            // The simulated auth call is in flight; only escape is honoured.
            return match key.code {
                KeyCode::Esc => Some(AppEvent::SignInCancel),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc => Some(AppEvent::SignInCancel),
            KeyCode::Enter => Some(AppEvent::SignInSubmit),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => Some(AppEvent::SignInToggleFocus),
            KeyCode::Backspace => Some(AppEvent::SignInBackspace),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::SignInToggleRemember)
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::SignInForgotPassword)
            }
            KeyCode::Char(c) => Some(AppEvent::SignInInputChar(c)),
            _ => None,
        }
    }

    fn handle_wizard_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let step = state.wizard.as_ref().map(|s| s.step)?;
        match step {
            WizardStep::AccountDetails => match key.code {
                KeyCode::Esc => Some(AppEvent::WizardRetreat),
                KeyCode::Enter => Some(AppEvent::WizardAdvance),
                KeyCode::Tab | KeyCode::Down => Some(AppEvent::WizardFocusNextField),
                KeyCode::BackTab | KeyCode::Up => Some(AppEvent::WizardFocusPreviousField),
                KeyCode::Backspace => Some(AppEvent::WizardBackspace),
                KeyCode::Char(c) => Some(AppEvent::WizardInputChar(c)),
                _ => None,
            },
            WizardStep::StylePreferences => match key.code {
                KeyCode::Esc => Some(AppEvent::WizardRetreat),
                KeyCode::Enter => Some(AppEvent::WizardAdvance),
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::WizardCursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::WizardCursorDown),
                KeyCode::Char(' ') => Some(AppEvent::WizardToggleSelection),
                _ => None,
            },
            WizardStep::WardrobeUpload => match key.code {
                KeyCode::Esc => Some(AppEvent::WizardRetreat),
                KeyCode::Enter => Some(AppEvent::WizardAdvance),
                KeyCode::Char('c') => Some(AppEvent::WizardCapturePhoto),
                KeyCode::Char('g') => Some(AppEvent::WizardPickFromGallery),
                _ => None,
            },
        }
    }

    fn handle_home_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('c') => Some(AppEvent::ShowCalendar),
            KeyCode::Char('s') => Some(AppEvent::ShowStreaks),
            KeyCode::Char('n') => Some(AppEvent::ShowCreateOutfit),
            KeyCode::Char('t') => Some(AppEvent::ShowTryOn),
            KeyCode::Char('p') => Some(AppEvent::ShowProfile),
            _ => None,
        }
    }

    fn handle_calendar_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::ShowHome),
            KeyCode::Left => Some(AppEvent::CalendarMoveSelection(-1)),
            KeyCode::Right => Some(AppEvent::CalendarMoveSelection(1)),
            KeyCode::Up => Some(AppEvent::CalendarMoveSelection(-7)),
            KeyCode::Down => Some(AppEvent::CalendarMoveSelection(7)),
            KeyCode::Char('n') | KeyCode::PageDown => Some(AppEvent::CalendarNextMonth),
            KeyCode::Char('p') | KeyCode::PageUp => Some(AppEvent::CalendarPreviousMonth),
            KeyCode::Char('l') => Some(AppEvent::CalendarLikeOutfit),
            KeyCode::Char('r') => Some(AppEvent::CalendarRerollOutfit),
            _ => None,
        }
    }

    fn handle_streaks_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::ShowHome),
            KeyCode::Char('w') => Some(AppEvent::StreakMarkWorn),
            _ => None,
        }
    }

    fn handle_create_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.create.processing {
            // Capture/recognition in flight; leaving the screen aborts it.
            return match key.code {
                KeyCode::Esc => Some(AppEvent::ShowHome),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::ShowHome),
            KeyCode::Char('c') => Some(AppEvent::CreateCapturePhoto),
            KeyCode::Char('g') => Some(AppEvent::CreatePickFromGallery),
            KeyCode::Char('r') => Some(AppEvent::CreateRetryRecognition),
            KeyCode::Char('u') => Some(AppEvent::CreateFileUncategorised),
            KeyCode::Char('d') => Some(AppEvent::CreateDiscard),
            _ => None,
        }
    }

    fn handle_try_on_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match state.try_on.mode {
            TryOnMode::Select => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::ShowHome),
                KeyCode::Char('s') => Some(AppEvent::TryOnStaticMode),
                KeyCode::Char('c') => Some(AppEvent::TryOnCameraMode),
                _ => None,
            },
            TryOnMode::Static => match key.code {
                KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::TryOnBackToModeSelect),
                _ => None,
            },
            TryOnMode::Camera => match key.code {
                KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::TryOnBackToModeSelect),
                KeyCode::Char('f') => Some(AppEvent::TryOnFlipCamera),
                _ => None,
            },
        }
    }

    fn handle_profile_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.profile.editing {
            return match key.code {
                KeyCode::Esc => Some(AppEvent::ProfileCancelEdit),
                KeyCode::Enter => Some(AppEvent::ProfileSaveEdit),
                KeyCode::Tab | KeyCode::Down => Some(AppEvent::ProfileFocusNextField),
                KeyCode::BackTab | KeyCode::Up => Some(AppEvent::ProfileFocusPreviousField),
                KeyCode::Backspace => Some(AppEvent::ProfileBackspace),
                KeyCode::Char(c) => Some(AppEvent::ProfileInputChar(c)),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::ShowHome),
            KeyCode::Char('e') => Some(AppEvent::ProfileStartEdit),
            KeyCode::Char('m') => Some(AppEvent::ProfileToggleMoreInfo),
            KeyCode::Char('a') => Some(AppEvent::ProfileChangeAvatar),
            KeyCode::Char('1') => Some(AppEvent::ProfileSwitchTab(ProfileTab::Posts)),
            KeyCode::Char('2') => Some(AppEvent::ProfileSwitchTab(ProfileTab::History)),
            KeyCode::Char('3') => Some(AppEvent::ProfileSwitchTab(ProfileTab::Favorites)),
            _ => None,
        }
    }

    /// Apply an event to the state. Async work is queued as an
    /// [`AsyncAction`] and performed by `App::tick`.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "processing event");
        match event {
            AppEvent::Quit => state.should_quit = true,

            // Landing
            AppEvent::StartOnboarding => state.start_onboarding(),
            AppEvent::ShowSignIn => {
                state.sign_in = Default::default();
                state.set_view(View::SignIn);
            }

            // Sign-in
            AppEvent::SignInInputChar(c) => state.sign_in.focused_value_mut().push(c),
            AppEvent::SignInBackspace => {
                state.sign_in.focused_value_mut().pop();
            }
            AppEvent::SignInToggleFocus => state.sign_in.toggle_focus(),
            AppEvent::SignInToggleRemember => {
                state.sign_in.remember_me = !state.sign_in.remember_me;
            }
            AppEvent::SignInSubmit => match state.sign_in.validate() {
                Ok(()) => {
                    state.pending_async_action = Some(AsyncAction::BeginSignIn);
                }
                Err(e) => state.add_error_notification(e.to_string()),
            },
            AppEvent::SignInForgotPassword => {
                state.add_info_notification("A password reset link will be sent to your email");
            }
            AppEvent::SignInCancel => state.set_view(View::Landing),

            // Onboarding wizard
            AppEvent::WizardInputChar(c) => {
                if let Some(session) = state.wizard.as_mut() {
                    let field = session.focused_field;
                    session.fields.push_char(field, c);
                }
            }
            AppEvent::WizardBackspace => {
                if let Some(session) = state.wizard.as_mut() {
                    let field = session.focused_field;
                    session.fields.pop_char(field);
                }
            }
            AppEvent::WizardFocusNextField => {
                if let Some(session) = state.wizard.as_mut() {
                    session.focus_next_field();
                }
            }
            AppEvent::WizardFocusPreviousField => {
                if let Some(session) = state.wizard.as_mut() {
                    session.focus_previous_field();
                }
            }
            AppEvent::WizardCursorUp => {
                state.wizard_cursor = state.wizard_cursor.saturating_sub(1);
            }
            AppEvent::WizardCursorDown => {
                state.wizard_cursor =
                    (state.wizard_cursor + 1).min(AppState::wizard_option_count() - 1);
            }
            AppEvent::WizardToggleSelection => state.wizard_toggle_at_cursor(),
            AppEvent::WizardAdvance => state.wizard_advance(),
            AppEvent::WizardRetreat => state.wizard_retreat(),
            AppEvent::WizardCapturePhoto => {
                if !state.wizard_capture_running {
                    state.pending_async_action = Some(AsyncAction::WizardCapturePhoto);
                }
            }
            AppEvent::WizardPickFromGallery => {
                state.pending_async_action = Some(AsyncAction::WizardPickFromGallery);
            }

            // Main navigation
            AppEvent::ShowHome => state.set_view(View::Home),
            AppEvent::ShowCalendar => state.set_view(View::Calendar),
            AppEvent::ShowStreaks => state.set_view(View::Streaks),
            AppEvent::ShowCreateOutfit => state.set_view(View::CreateOutfit),
            AppEvent::ShowTryOn => {
                state.try_on = Default::default();
                state.set_view(View::TryOn);
            }
            AppEvent::ShowProfile => state.set_view(View::Profile),

            // Calendar
            AppEvent::CalendarNextMonth => state.calendar.next_month(),
            AppEvent::CalendarPreviousMonth => state.calendar.previous_month(),
            AppEvent::CalendarMoveSelection(days) => state.calendar.move_selection(days),
            AppEvent::CalendarLikeOutfit => {
                let date = state.calendar.selected;
                state.planner.like(date);
            }
            AppEvent::CalendarRerollOutfit => {
                let date = state.calendar.selected;
                state.planner.reroll(date);
            }

            // Streaks
            AppEvent::StreakMarkWorn => {
                // Wearing today's pick extends the streak by one day past the
                // last recorded wear.
                let date = state.anchor_date() + chrono::Duration::days(1);
                let pick = state
                    .planner
                    .plan(state.anchor_date())
                    .map(|p| p.outfit.clone())
                    .or_else(|| state.planner.catalog().first().cloned());
                if let Some(outfit) = pick {
                    state.streaks.record_worn(date, outfit.title, outfit.image);
                    state.add_success_notification("Streak extended!");
                }
            }

            // Create outfit
            AppEvent::CreateCapturePhoto => {
                state.pending_async_action = Some(AsyncAction::CreateCapturePhoto);
            }
            AppEvent::CreatePickFromGallery => {
                state.pending_async_action = Some(AsyncAction::CreatePickFromGallery);
            }
            AppEvent::CreateRetryRecognition => {
                if let Some(image) = state.create.pending_image.clone() {
                    state.pending_async_action = Some(AsyncAction::Recognize(image));
                }
            }
            AppEvent::CreateFileUncategorised => {
                if let Some(image) = state.create.pending_image.take() {
                    state
                        .wardrobe
                        .push(crate::models::WardrobeItem::new(image, None));
                    state.create.last_outcome = None;
                    state.add_info_notification("Item added without a category");
                }
            }
            AppEvent::CreateDiscard => {
                state.create.pending_image = None;
                state.create.last_outcome = None;
            }

            // Try-on
            AppEvent::TryOnStaticMode => state.try_on.mode = TryOnMode::Static,
            AppEvent::TryOnCameraMode => {
                state.pending_async_action = Some(AsyncAction::EnterCameraTryOn);
            }
            AppEvent::TryOnFlipCamera => {
                state.try_on.facing = state.try_on.facing.flipped();
            }
            AppEvent::TryOnBackToModeSelect => state.try_on.mode = TryOnMode::Select,

            // Profile
            AppEvent::ProfileStartEdit => state.profile.begin_edit(),
            AppEvent::ProfileInputChar(c) => state.profile.focused_value_mut().push(c),
            AppEvent::ProfileBackspace => {
                state.profile.focused_value_mut().pop();
            }
            AppEvent::ProfileFocusNextField => {
                state.profile.edit_focus = state.profile.edit_focus.next();
            }
            AppEvent::ProfileFocusPreviousField => {
                state.profile.edit_focus = state.profile.edit_focus.previous();
            }
            AppEvent::ProfileSaveEdit => match state.profile.save_edit() {
                Ok(()) => {
                    state.add_success_notification("Your profile has been updated successfully");
                }
                Err(e) => state.add_error_notification(e.to_string()),
            },
            AppEvent::ProfileCancelEdit => state.profile.cancel_edit(),
            AppEvent::ProfileToggleMoreInfo => {
                state.profile.show_more_info = !state.profile.show_more_info;
            }
            AppEvent::ProfileSwitchTab(tab) => state.profile.active_tab = tab,
            AppEvent::ProfileChangeAvatar => {
                state.pending_async_action = Some(AsyncAction::ChangeAvatar);
            }
        }
    }
}
