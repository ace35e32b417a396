// ABOUTME: Main application structure: state, background tasks and the tick cycle

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, View};

use crate::config::{AppConfig, SetupConfig};
use crate::media::{
    capture_photo, pick_from_library, ImageRef, MediaLibrary, PickResult, SimulatedMediaLibrary,
};
use crate::recognition::{RecognitionOutcome, RecognitionProvider, SimulatedRecognizer};
use anyhow::Result;
use state::{AsyncAction, TryOnMode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// How long a simulated authentication round-trip takes.
const SIGN_IN_DELAY: Duration = Duration::from_millis(1500);

/// How long footer notifications stay visible.
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Result of a background task, delivered over the outcome channel and
/// applied on the event-loop task. Outcomes for a screen the user has
/// already left are dropped.
#[derive(Debug, Clone)]
pub enum TaskOutcome {
    WizardCaptureFinished(Option<ImageRef>),
    CreateCaptureFinished(Option<ImageRef>),
    RecognitionFinished {
        image: ImageRef,
        outcome: RecognitionOutcome,
    },
    SignInFinished,
}

pub struct App {
    pub state: AppState,
    outcome_tx: mpsc::UnboundedSender<TaskOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<TaskOutcome>,
    recognizer: Arc<dyn RecognitionProvider>,
    media: Arc<dyn MediaLibrary>,
}

impl App {
    pub fn new() -> Self {
        let app_config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            AppConfig::default()
        });
        let setup = SetupConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load setup record, using defaults: {e:#}");
            SetupConfig::default()
        });

        let recognizer = Arc::new(SimulatedRecognizer::new(
            app_config.recognition.delay(),
            app_config.recognition.success_rate,
        ));
        let media = Arc::new(SimulatedMediaLibrary::new(
            app_config.capture.sample_references.clone(),
        ));

        Self::with_collaborators(AppState::new(app_config, setup), recognizer, media)
    }

    /// Build an app around explicit collaborators. Tests inject mocks here.
    pub fn with_collaborators(
        state: AppState,
        recognizer: Arc<dyn RecognitionProvider>,
        media: Arc<dyn MediaLibrary>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            outcome_tx,
            outcome_rx,
            recognizer,
            media,
        }
    }

    /// One cycle of background work: perform any queued action, apply
    /// finished task outcomes, expire old notifications.
    pub async fn tick(&mut self) -> Result<()> {
        if let Some(action) = self.state.pending_async_action.take() {
            self.handle_async_action(action);
        }

        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }

        self.state.prune_notifications(NOTIFICATION_TTL);
        Ok(())
    }

    fn handle_async_action(&mut self, action: AsyncAction) {
        match action {
            AsyncAction::WizardCapturePhoto => {
                let refs = self.state.app_config.capture.sample_references.clone();
                let delay = self.state.app_config.capture.delay();
                let tx = self.outcome_tx.clone();
                let handle = tokio::spawn(async move {
                    let image = capture_photo(refs, delay).await;
                    let _ = tx.send(TaskOutcome::WizardCaptureFinished(image));
                });
                self.state.wizard_task = Some(handle.abort_handle());
                self.state.wizard_capture_running = true;
            }

            AsyncAction::WizardPickFromGallery => match pick_from_library(&*self.media) {
                PickResult::Picked(reference) => {
                    if let Some(session) = self.state.wizard.as_mut() {
                        session.stage_upload(reference);
                    }
                }
                PickResult::PermissionDenied => {
                    self.state.add_error_notification(
                        "Permission to access camera roll is required!",
                    );
                }
                PickResult::Cancelled => {}
            },

            AsyncAction::CreateCapturePhoto => {
                let refs = self.state.app_config.capture.sample_references.clone();
                let delay = self.state.app_config.capture.delay();
                let tx = self.outcome_tx.clone();
                let handle = tokio::spawn(async move {
                    let image = capture_photo(refs, delay).await;
                    let _ = tx.send(TaskOutcome::CreateCaptureFinished(image));
                });
                self.state.create_task = Some(handle.abort_handle());
                self.state.create.processing = true;
            }

            AsyncAction::CreatePickFromGallery => match pick_from_library(&*self.media) {
                PickResult::Picked(reference) => self.start_recognition(reference),
                PickResult::PermissionDenied => {
                    self.state.add_error_notification(
                        "Permission to access camera roll is required!",
                    );
                }
                PickResult::Cancelled => {}
            },

            AsyncAction::Recognize(image) => self.start_recognition(image),

            AsyncAction::BeginSignIn => {
                let tx = self.outcome_tx.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(SIGN_IN_DELAY).await;
                    let _ = tx.send(TaskOutcome::SignInFinished);
                });
                self.state.sign_in_task = Some(handle.abort_handle());
                self.state.sign_in.loading = true;
            }

            AsyncAction::EnterCameraTryOn => {
                if self.media.request_camera_permission().is_granted() {
                    self.state.try_on.mode = TryOnMode::Camera;
                } else {
                    self.state
                        .add_error_notification("Camera permission is required for live preview");
                }
            }

            AsyncAction::ChangeAvatar => match pick_from_library(&*self.media) {
                PickResult::Picked(reference) => {
                    self.state.profile.profile.avatar = reference;
                    self.state.add_success_notification("Profile photo updated");
                }
                PickResult::PermissionDenied => {
                    self.state.add_error_notification(
                        "Please allow access to your photo library to change profile picture",
                    );
                }
                PickResult::Cancelled => {}
            },
        }
    }

    /// Hand an image to the recognition provider as a cancellable task.
    fn start_recognition(&mut self, image: ImageRef) {
        let recognizer = Arc::clone(&self.recognizer);
        let tx = self.outcome_tx.clone();
        let task_image = image.clone();
        let handle = tokio::spawn(async move {
            let outcome = recognizer.recognize(&task_image).await;
            let _ = tx.send(TaskOutcome::RecognitionFinished {
                image: task_image,
                outcome,
            });
        });
        self.state.create_task = Some(handle.abort_handle());
        self.state.create.processing = true;
        self.state.create.pending_image = Some(image);
        self.state.create.last_outcome = None;
    }

    fn apply_outcome(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::WizardCaptureFinished(image) => {
                self.state.wizard_task = None;
                self.state.wizard_capture_running = false;
                if self.state.current_view != View::Onboarding {
                    return;
                }
                if let (Some(session), Some(reference)) = (self.state.wizard.as_mut(), image) {
                    session.stage_upload(reference);
                }
            }

            TaskOutcome::CreateCaptureFinished(image) => {
                self.state.create_task = None;
                if self.state.current_view != View::CreateOutfit {
                    return;
                }
                match image {
                    Some(reference) => self.start_recognition(reference),
                    None => self.state.create.processing = false,
                }
            }

            TaskOutcome::RecognitionFinished { image, outcome } => {
                self.state.create_task = None;
                if self.state.current_view != View::CreateOutfit {
                    return;
                }
                self.state.create.processing = false;
                self.state.create.last_outcome = Some(outcome);
                match outcome {
                    RecognitionOutcome::Success(category) => {
                        info!(category = category.label(), "garment recognised");
                        self.state
                            .wardrobe
                            .push(crate::models::WardrobeItem::new(image, Some(category)));
                        self.state.create.pending_image = None;
                        self.state.add_success_notification(format!(
                            "Added to wardrobe as {}",
                            category.label()
                        ));
                    }
                    RecognitionOutcome::Failure => {
                        // Keep the image around so the user can retry or
                        // file it uncategorised.
                        self.state.create.pending_image = Some(image);
                    }
                }
            }

            TaskOutcome::SignInFinished => {
                self.state.sign_in_task = None;
                if self.state.current_view != View::SignIn {
                    return;
                }
                self.state.sign_in.loading = false;
                info!("sign-in complete");
                self.state.set_view(View::Home);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MockMediaLibrary, PermissionStatus};

    fn test_app(media: MockMediaLibrary) -> App {
        let recognizer = Arc::new(SimulatedRecognizer::new(Duration::from_millis(1), 1.0));
        App::with_collaborators(AppState::default(), recognizer, Arc::new(media))
    }

    #[tokio::test]
    async fn test_gallery_denial_appends_nothing() {
        let mut media = MockMediaLibrary::new();
        media
            .expect_request_permission()
            .return_const(PermissionStatus::Denied);

        let mut app = test_app(media);
        app.state.start_onboarding();
        app.state.pending_async_action = Some(AsyncAction::WizardPickFromGallery);
        app.tick().await.unwrap();

        let session = app.state.wizard.as_ref().unwrap();
        assert!(session.uploads.is_empty());
        assert!(!app.state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_gallery_pick_stages_upload() {
        let mut media = MockMediaLibrary::new();
        media
            .expect_request_permission()
            .return_const(PermissionStatus::Granted);
        media
            .expect_pick_image()
            .return_const(Some(ImageRef::new("poshakh://picked")));

        let mut app = test_app(media);
        app.state.start_onboarding();
        app.state.pending_async_action = Some(AsyncAction::WizardPickFromGallery);
        app.tick().await.unwrap();

        let session = app.state.wizard.as_ref().unwrap();
        assert_eq!(session.uploads.len(), 1);
    }

    #[tokio::test]
    async fn test_camera_try_on_denied_stays_on_select() {
        let mut media = MockMediaLibrary::new();
        media
            .expect_request_camera_permission()
            .return_const(PermissionStatus::Denied);

        let mut app = test_app(media);
        app.state.set_view(View::TryOn);
        app.state.pending_async_action = Some(AsyncAction::EnterCameraTryOn);
        app.tick().await.unwrap();

        assert_eq!(app.state.try_on.mode, TryOnMode::Select);
        assert!(!app.state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_recognition_success_adds_wardrobe_item() {
        let mut app = test_app(MockMediaLibrary::new());
        app.state.set_view(View::CreateOutfit);
        app.state.pending_async_action =
            Some(AsyncAction::Recognize(ImageRef::new("poshakh://shirt")));
        app.tick().await.unwrap();
        assert!(app.state.create.processing);

        // Let the simulated recogniser finish, then apply its outcome.
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.tick().await.unwrap();

        assert!(!app.state.create.processing);
        assert_eq!(app.state.wardrobe.len(), 1);
        assert!(app.state.create.pending_image.is_none());
    }

    #[tokio::test]
    async fn test_stale_outcome_for_left_screen_is_dropped() {
        let mut app = test_app(MockMediaLibrary::new());
        app.state.set_view(View::CreateOutfit);
        app.state.pending_async_action =
            Some(AsyncAction::Recognize(ImageRef::new("poshakh://shirt")));
        app.tick().await.unwrap();

        tokio::time::sleep(Duration::from_millis(20)).await;
        // User leaves before the outcome is drained.
        app.state.set_view(View::Home);
        app.tick().await.unwrap();

        assert!(app.state.wardrobe.is_empty());
    }
}
