// ABOUTME: Application state management and view switching logic for the poshakh TUI

use crate::config::{AppConfig, SetupConfig};
use crate::media::ImageRef;
use crate::models::{
    seeded_planner, seeded_tracker, OutfitPlanner, StreakTracker, UserProfile, WardrobeItem,
};
use crate::recognition::RecognitionOutcome;
use crate::wizard::{
    AdvanceOutcome, FieldKey, RetreatOutcome, WizardSession, COLOR_OPTIONS, STYLE_OPTIONS,
};
use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::time::{Duration, Instant};
use tokio::task::AbortHandle;
use tracing::{info, warn};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email regex is valid");
}

/// User-facing form validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email")]
    EmptyEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    EmptyPassword,
    #[error("Username cannot be empty")]
    EmptyUsername,
}

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    SignIn,
    Onboarding,
    Home,
    Calendar,
    Streaks,
    CreateOutfit,
    TryOn,
    Profile,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient message shown in the footer bar.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

/// Background work queued by an event handler, performed by `App::tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    WizardCapturePhoto,
    WizardPickFromGallery,
    CreateCapturePhoto,
    CreatePickFromGallery,
    Recognize(ImageRef),
    BeginSignIn,
    EnterCameraTryOn,
    ChangeAvatar,
}

/// Field focused on the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

/// Sign-in screen state.
#[derive(Debug, Clone)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub focus: SignInField,
    pub remember_me: bool,
    pub loading: bool,
}

impl Default for SignInState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: SignInField::Email,
            remember_me: false,
            loading: false,
        }
    }
}

impl SignInState {
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            SignInField::Email => &mut self.email,
            SignInField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SignInField::Email => SignInField::Password,
            SignInField::Password => SignInField::Email,
        };
    }

    /// Validate in the same order the checks are surfaced to the user.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(())
    }
}

/// Calendar screen state: the visible month and the selected day.
#[derive(Debug, Clone)]
pub struct CalendarState {
    /// First day of the visible month.
    pub month: NaiveDate,
    pub selected: NaiveDate,
}

impl CalendarState {
    pub fn anchored_to(date: NaiveDate) -> Self {
        Self {
            month: first_of_month(date),
            selected: date,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month)
    }

    /// Offset of day 1 from Sunday, for grid alignment.
    pub fn first_weekday_offset(&self) -> u32 {
        use chrono::Datelike;
        self.month.weekday().num_days_from_sunday()
    }

    pub fn next_month(&mut self) {
        self.month = add_months(self.month, 1);
        self.selected = self.month;
    }

    pub fn previous_month(&mut self) {
        self.month = add_months(self.month, -1);
        self.selected = self.month;
    }

    /// Move the selection by whole days, clamped to the visible month.
    pub fn move_selection(&mut self, days: i64) {
        use chrono::Datelike;
        let candidate = self.selected + chrono::Duration::days(days);
        if candidate.month() == self.month.month() && candidate.year() == self.month.year() {
            self.selected = candidate;
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    use chrono::Datelike;
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn days_in_month(month_start: NaiveDate) -> u32 {
    let next = add_months(month_start, 1);
    next.signed_duration_since(first_of_month(month_start)).num_days() as u32
}

fn add_months(month_start: NaiveDate, delta: i32) -> NaiveDate {
    use chrono::Datelike;
    let zero_based = month_start.year() * 12 + month_start.month() as i32 - 1 + delta;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(month_start)
}

/// Create-outfit screen state.
#[derive(Debug, Clone, Default)]
pub struct CreateOutfitState {
    /// A capture or recognition task is in flight.
    pub processing: bool,
    /// Image awaiting recognition or a failure decision.
    pub pending_image: Option<ImageRef>,
    /// Last recognition result, shown until the next action.
    pub last_outcome: Option<RecognitionOutcome>,
}

/// Try-on preview modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TryOnMode {
    #[default]
    Select,
    Static,
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Front,
    Back,
}

impl CameraFacing {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Virtual try-on screen state.
#[derive(Debug, Clone, Default)]
pub struct TryOnState {
    pub mode: TryOnMode,
    pub facing: CameraFacing,
}

/// Tabs on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    History,
    Favorites,
}

/// Editable fields of the profile form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Username,
    Bio,
    Instagram,
    Twitter,
    Facebook,
    Website,
    Email,
    Location,
}

impl ProfileField {
    pub fn all() -> &'static [ProfileField] {
        &[
            Self::Username,
            Self::Bio,
            Self::Instagram,
            Self::Twitter,
            Self::Facebook,
            Self::Website,
            Self::Email,
            Self::Location,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Name",
            Self::Bio => "Bio",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Website => "Website",
            Self::Email => "Email",
            Self::Location => "Location",
        }
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Profile screen state. Editing snapshots the profile on entry and restores
/// the snapshot on cancel.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub profile: UserProfile,
    pub editing: bool,
    snapshot: Option<UserProfile>,
    pub edit_focus: ProfileField,
    pub active_tab: ProfileTab,
    pub show_more_info: bool,
    pub posts: Vec<ImageRef>,
}

impl Default for ProfileState {
    fn default() -> Self {
        let posts = [
            "photos/2466756/pexels-photo-2466756.jpeg",
            "photos/2584269/pexels-photo-2584269.jpeg",
            "photos/2681751/pexels-photo-2681751.jpeg",
            "photos/2905238/pexels-photo-2905238.jpeg",
            "photos/3310695/pexels-photo-3310695.jpeg",
            "photos/4380970/pexels-photo-4380970.jpeg",
        ]
        .into_iter()
        .map(|p| ImageRef::new(format!("https://images.pexels.com/{p}")))
        .collect();

        Self {
            profile: UserProfile::sample(),
            editing: false,
            snapshot: None,
            edit_focus: ProfileField::Username,
            active_tab: ProfileTab::Posts,
            show_more_info: false,
            posts,
        }
    }
}

impl ProfileState {
    /// Enter edit mode, capturing the pre-edit values.
    pub fn begin_edit(&mut self) {
        if !self.editing {
            self.snapshot = Some(self.profile.clone());
            self.editing = true;
            self.edit_focus = ProfileField::Username;
        }
    }

    /// Leave edit mode, restoring the values present at edit entry.
    pub fn cancel_edit(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.profile = snapshot;
        }
        self.editing = false;
    }

    /// Commit the edit. An empty username is rejected and edit mode stays
    /// active so the user can correct it.
    pub fn save_edit(&mut self) -> Result<(), ValidationError> {
        if self.profile.username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        self.snapshot = None;
        self.editing = false;
        Ok(())
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.edit_focus {
            ProfileField::Username => &mut self.profile.username,
            ProfileField::Bio => &mut self.profile.bio,
            ProfileField::Instagram => &mut self.profile.social.instagram,
            ProfileField::Twitter => &mut self.profile.social.twitter,
            ProfileField::Facebook => &mut self.profile.social.facebook,
            ProfileField::Website => &mut self.profile.social.website,
            ProfileField::Email => &mut self.profile.contact.email,
            ProfileField::Location => &mut self.profile.contact.location,
        }
    }
}

/// Top-level application state. All mutation happens on the event-loop task.
pub struct AppState {
    pub current_view: View,
    pub should_quit: bool,

    pub app_config: AppConfig,
    pub setup: SetupConfig,

    /// Active onboarding attempt; `None` outside the wizard.
    pub wizard: Option<WizardSession>,
    /// Highlight position on the wizard preferences step (presentation
    /// state, deliberately kept out of the session value object).
    pub wizard_cursor: usize,
    /// A simulated capture for the wizard upload step is in flight.
    pub wizard_capture_running: bool,

    pub sign_in: SignInState,
    pub calendar: CalendarState,
    pub create: CreateOutfitState,
    pub try_on: TryOnState,
    pub profile: ProfileState,

    pub wardrobe: Vec<WardrobeItem>,
    pub planner: OutfitPlanner,
    pub streaks: StreakTracker,

    pub notifications: Vec<Notification>,
    pub pending_async_action: Option<AsyncAction>,

    // Abort handles for in-flight background tasks, keyed by owner screen.
    // Leaving the screen aborts the task, so no mutation lands afterwards.
    pub wizard_task: Option<AbortHandle>,
    pub create_task: Option<AbortHandle>,
    pub sign_in_task: Option<AbortHandle>,
}

impl AppState {
    pub fn new(app_config: AppConfig, setup: SetupConfig) -> Self {
        let planner = seeded_planner();
        let streaks = seeded_tracker();
        let anchor = planner
            .planned_dates()
            .last()
            .unwrap_or_else(|| Local::now().date_naive());

        let current_view = if setup.needs_setup() {
            View::Landing
        } else {
            View::Home
        };

        Self {
            current_view,
            should_quit: false,
            app_config,
            setup,
            wizard: None,
            wizard_cursor: 0,
            wizard_capture_running: false,
            sign_in: SignInState::default(),
            calendar: CalendarState::anchored_to(anchor),
            create: CreateOutfitState::default(),
            try_on: TryOnState::default(),
            profile: ProfileState::default(),
            wardrobe: Vec::new(),
            planner,
            streaks,
            notifications: Vec::new(),
            pending_async_action: None,
            wizard_task: None,
            create_task: None,
            sign_in_task: None,
        }
    }

    /// Date the dashboard and streak views anchor on: the most recent worn
    /// day, falling back to the wall clock.
    pub fn anchor_date(&self) -> NaiveDate {
        self.streaks
            .history()
            .first()
            .map(|e| e.date)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Switch views, aborting any background task owned by the screen being
    /// left.
    pub fn set_view(&mut self, view: View) {
        if self.current_view == view {
            return;
        }
        match self.current_view {
            View::Onboarding => self.abort_wizard_task(),
            View::CreateOutfit => self.abort_create_task(),
            View::SignIn => self.abort_sign_in_task(),
            _ => {}
        }
        info!(from = ?self.current_view, to = ?view, "view switched");
        self.current_view = view;
    }

    pub fn abort_wizard_task(&mut self) {
        if let Some(handle) = self.wizard_task.take() {
            handle.abort();
        }
        self.wizard_capture_running = false;
    }

    pub fn abort_create_task(&mut self) {
        if let Some(handle) = self.create_task.take() {
            handle.abort();
        }
        self.create.processing = false;
    }

    pub fn abort_sign_in_task(&mut self) {
        if let Some(handle) = self.sign_in_task.take() {
            handle.abort();
        }
        self.sign_in.loading = false;
    }

    // ---- Onboarding flow ----

    /// Enter the wizard with a fresh session.
    pub fn start_onboarding(&mut self) {
        self.wizard = Some(WizardSession::new());
        self.wizard_cursor = 0;
        self.set_view(View::Onboarding);
    }

    /// Drive the navigator forward and perform the hand-offs its signals ask
    /// for.
    pub fn wizard_advance(&mut self) {
        let Some(session) = self.wizard.as_mut() else {
            return;
        };
        match session.advance() {
            AdvanceOutcome::Advanced => {
                self.wizard_cursor = 0;
            }
            AdvanceOutcome::Blocked => {
                // The control is rendered disabled; nothing to do here.
            }
            AdvanceOutcome::Complete => self.complete_onboarding(),
        }
    }

    /// Drive the navigator backward; exiting from the first step returns to
    /// the landing screen and discards the session.
    pub fn wizard_retreat(&mut self) {
        let Some(session) = self.wizard.as_mut() else {
            return;
        };
        match session.retreat() {
            RetreatOutcome::Retreated => {
                self.wizard_cursor = 0;
            }
            RetreatOutcome::ExitFlow => {
                self.abort_wizard_task();
                self.wizard = None;
                self.set_view(View::Landing);
            }
        }
    }

    /// The session/auth collaborator contract: persist the setup record,
    /// merge staged uploads into the wardrobe, discard the session and enter
    /// the main application.
    fn complete_onboarding(&mut self) {
        let Some(session) = self.wizard.take() else {
            return;
        };
        self.abort_wizard_task();

        self.setup.account_name = session.fields.get(FieldKey::Name).to_string();
        self.setup.selected_styles = session.styles.iter().cloned().collect();
        self.setup.selected_colors = session.colors.iter().cloned().collect();
        self.setup.mark_completed();
        if let Err(e) = self.setup.save() {
            warn!("Failed to persist setup record: {e:#}");
            self.add_error_notification(format!("Could not save setup: {e}"));
        }

        for reference in session.uploads.into_items() {
            self.wardrobe.push(WardrobeItem::new(reference, None));
        }

        info!("onboarding complete");
        self.add_success_notification("Welcome to Poshakh!");
        self.set_view(View::Home);
    }

    /// Combined option list on the preferences step: styles then colours.
    pub fn wizard_option_count() -> usize {
        STYLE_OPTIONS.len() + COLOR_OPTIONS.len()
    }

    /// Toggle the option under the preferences-step cursor.
    pub fn wizard_toggle_at_cursor(&mut self) {
        let cursor = self.wizard_cursor;
        let Some(session) = self.wizard.as_mut() else {
            return;
        };
        if cursor < STYLE_OPTIONS.len() {
            session.toggle_style(STYLE_OPTIONS[cursor]);
        } else if let Some(color) = COLOR_OPTIONS.get(cursor - STYLE_OPTIONS.len()) {
            session.toggle_color(color);
        }
    }

    // ---- Notifications ----

    pub fn add_notification(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            level,
            created_at: Instant::now(),
        });
    }

    pub fn add_success_notification(&mut self, message: impl Into<String>) {
        self.add_notification(NotificationLevel::Success, message);
    }

    pub fn add_error_notification(&mut self, message: impl Into<String>) {
        self.add_notification(NotificationLevel::Error, message);
    }

    pub fn add_info_notification(&mut self, message: impl Into<String>) {
        self.add_notification(NotificationLevel::Info, message);
    }

    /// Drop notifications older than the display window.
    pub fn prune_notifications(&mut self, ttl: Duration) {
        self.notifications.retain(|n| n.created_at.elapsed() < ttl);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), SetupConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStep;

    fn onboarding_state() -> AppState {
        let mut state = AppState::default();
        state.start_onboarding();
        state
    }

    #[test]
    fn test_initial_view_depends_on_setup() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Landing);

        let mut setup = SetupConfig::default();
        setup.mark_completed();
        let state = AppState::new(AppConfig::default(), setup);
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn test_start_onboarding_creates_fresh_session() {
        let state = onboarding_state();
        assert_eq!(state.current_view, View::Onboarding);
        let session = state.wizard.as_ref().unwrap();
        assert_eq!(session.step, WizardStep::AccountDetails);
    }

    #[test]
    fn test_wizard_exit_discards_session() {
        let mut state = onboarding_state();
        state.wizard_retreat();
        assert!(state.wizard.is_none());
        assert_eq!(state.current_view, View::Landing);
    }

    #[test]
    fn test_wizard_blocked_advance_keeps_step() {
        let mut state = onboarding_state();
        state.wizard_advance();
        let session = state.wizard.as_ref().unwrap();
        assert_eq!(session.step, WizardStep::AccountDetails);
    }

    #[test]
    fn test_completion_merges_uploads_and_persists_choices() {
        let mut state = onboarding_state();
        {
            let session = state.wizard.as_mut().unwrap();
            session.fields.set(FieldKey::Name, "Ann");
            session.fields.set(FieldKey::Email, "a@b.com");
            session.fields.set(FieldKey::Password, "x");
            session.toggle_style("Formal");
            session.stage_upload(ImageRef::new("poshakh://one"));
            session.stage_upload(ImageRef::new("poshakh://two"));
        }
        state.wizard_advance();
        state.wizard_advance();
        state.wizard_advance(); // past the final step

        assert!(state.wizard.is_none());
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.wardrobe.len(), 2);
        assert_eq!(state.wardrobe[0].image.as_str(), "poshakh://one");
        assert!(state.setup.completed);
        assert_eq!(state.setup.account_name, "Ann");
        assert!(state.setup.selected_styles.contains(&"Formal".to_string()));
    }

    #[test]
    fn test_toggle_at_cursor_hits_styles_then_colors() {
        let mut state = onboarding_state();
        state.wizard_cursor = 1; // "Formal"
        state.wizard_toggle_at_cursor();
        state.wizard_cursor = STYLE_OPTIONS.len(); // "Pink"
        state.wizard_toggle_at_cursor();

        let session = state.wizard.as_ref().unwrap();
        assert!(session.styles.contains(&"Formal".to_string()));
        assert!(session.colors.contains(&"Pink".to_string()));
    }

    #[test]
    fn test_sign_in_validation_order() {
        let mut sign_in = SignInState::default();
        assert_eq!(sign_in.validate(), Err(ValidationError::EmptyEmail));

        sign_in.email = "not-an-email".to_string();
        assert_eq!(sign_in.validate(), Err(ValidationError::InvalidEmail));

        sign_in.email = "a@b.com".to_string();
        assert_eq!(sign_in.validate(), Err(ValidationError::EmptyPassword));

        sign_in.password = "secret".to_string();
        assert_eq!(sign_in.validate(), Ok(()));
    }

    #[test]
    fn test_calendar_month_math() {
        let calendar = CalendarState::anchored_to(
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        );
        assert_eq!(calendar.days_in_month(), 30);
        // April 1 2025 is a Tuesday.
        assert_eq!(calendar.first_weekday_offset(), 2);
    }

    #[test]
    fn test_calendar_month_paging() {
        let mut calendar = CalendarState::anchored_to(
            NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
        );
        calendar.next_month();
        assert_eq!(calendar.month, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        calendar.previous_month();
        calendar.previous_month();
        assert_eq!(calendar.month, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }

    #[test]
    fn test_calendar_selection_clamped_to_month() {
        let mut calendar = CalendarState::anchored_to(
            NaiveDate::from_ymd_opt(2025, 4, 29).unwrap(),
        );
        calendar.move_selection(7);
        assert_eq!(
            calendar.selected,
            NaiveDate::from_ymd_opt(2025, 4, 29).unwrap(),
            "selection must stay inside April"
        );
        calendar.move_selection(1);
        assert_eq!(calendar.selected, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    }

    #[test]
    fn test_profile_cancel_restores_snapshot() {
        let mut profile = ProfileState::default();
        let original_name = profile.profile.username.clone();

        profile.begin_edit();
        profile.profile.username = "Someone Else".to_string();
        profile.profile.bio = "changed".to_string();
        profile.cancel_edit();

        assert!(!profile.editing);
        assert_eq!(profile.profile.username, original_name);
    }

    #[test]
    fn test_profile_save_rejects_empty_username() {
        let mut profile = ProfileState::default();
        profile.begin_edit();
        profile.profile.username = "  ".to_string();
        assert!(profile.save_edit().is_err());
        assert!(profile.editing, "edit mode stays active on rejection");
    }

    #[test]
    fn test_profile_save_commits() {
        let mut profile = ProfileState::default();
        profile.begin_edit();
        profile.profile.username = "New Name".to_string();
        assert!(profile.save_edit().is_ok());
        assert!(!profile.editing);

        // A later cancel must not resurrect the old snapshot.
        profile.begin_edit();
        profile.cancel_edit();
        assert_eq!(profile.profile.username, "New Name");
    }

    #[test]
    fn test_notification_pruning() {
        let mut state = AppState::default();
        state.add_success_notification("done");
        state.prune_notifications(Duration::from_secs(60));
        assert_eq!(state.notifications.len(), 1);
        state.prune_notifications(Duration::ZERO);
        assert!(state.notifications.is_empty());
    }
}
