// ABOUTME: Media library and camera collaborator abstractions
// Permission-gated gallery picks plus the simulated camera capture producer

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Opaque reference to an image (a URI in practice).
///
/// The app never inspects the contents; references are staged, displayed and
/// handed to the recognition provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a media permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Result of asking the media library for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// User chose an image.
    Picked(ImageRef),
    /// User backed out of the picker; nothing is appended anywhere.
    Cancelled,
    /// Permission was not granted; the caller surfaces a notification and
    /// performs no state change.
    PermissionDenied,
}

/// External media-library collaborator: permission request plus a
/// single-image pick. Real platforms would bridge to the OS photo picker;
/// the simulated implementation below stands in for it.
#[cfg_attr(test, mockall::automock)]
pub trait MediaLibrary: Send + Sync {
    /// Request access to the photo library.
    fn request_permission(&self) -> PermissionStatus;

    /// Request access to the camera. Tracked separately from the library
    /// permission (the try-on preview only needs the camera).
    fn request_camera_permission(&self) -> PermissionStatus;

    /// Open the picker and return zero or one image reference.
    /// Must only be called after a granted permission.
    fn pick_image(&self) -> Option<ImageRef>;
}

/// Convenience wrapper enforcing the permission-before-pick contract.
pub fn pick_from_library(library: &dyn MediaLibrary) -> PickResult {
    if !library.request_permission().is_granted() {
        debug!("media library permission denied");
        return PickResult::PermissionDenied;
    }
    match library.pick_image() {
        Some(reference) => PickResult::Picked(reference),
        None => PickResult::Cancelled,
    }
}

/// Simulated media library: permission always granted, picks cycle through
/// a canned reference list.
pub struct SimulatedMediaLibrary {
    references: Vec<ImageRef>,
}

impl SimulatedMediaLibrary {
    pub fn new(references: Vec<ImageRef>) -> Self {
        Self { references }
    }
}

impl MediaLibrary for SimulatedMediaLibrary {
    fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn request_camera_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn pick_image(&self) -> Option<ImageRef> {
        if self.references.is_empty() {
            return None;
        }
        let idx = rand::thread_rng().gen_range(0..self.references.len());
        Some(self.references[idx].clone())
    }
}

/// Simulated camera capture: waits out the configured shutter delay and
/// yields one of the canned references chosen uniformly at random.
///
/// Callers spawn this as a task and retain the `AbortHandle`; aborting the
/// task before the delay elapses means no reference is ever produced, so
/// navigating away from the owning screen cannot mutate state afterwards.
pub async fn capture_photo(references: Vec<ImageRef>, delay: Duration) -> Option<ImageRef> {
    tokio::time::sleep(delay).await;
    if references.is_empty() {
        return None;
    }
    let idx = rand::thread_rng().gen_range(0..references.len());
    Some(references[idx].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(n: usize) -> Vec<ImageRef> {
        (0..n).map(|i| ImageRef::new(format!("poshakh://sample/{i}"))).collect()
    }

    #[test]
    fn test_pick_denied_yields_no_reference() {
        let mut library = MockMediaLibrary::new();
        library
            .expect_request_permission()
            .return_const(PermissionStatus::Denied);
        library.expect_pick_image().never();

        assert_eq!(pick_from_library(&library), PickResult::PermissionDenied);
    }

    #[test]
    fn test_pick_cancelled_yields_no_reference() {
        let mut library = MockMediaLibrary::new();
        library
            .expect_request_permission()
            .return_const(PermissionStatus::Granted);
        library.expect_pick_image().return_const(None);

        assert_eq!(pick_from_library(&library), PickResult::Cancelled);
    }

    #[test]
    fn test_simulated_library_picks_from_canned_set() {
        let library = SimulatedMediaLibrary::new(refs(3));
        let picked = library.pick_image().unwrap();
        assert!(picked.as_str().starts_with("poshakh://sample/"));
    }

    #[test]
    fn test_simulated_library_empty_set() {
        let library = SimulatedMediaLibrary::new(Vec::new());
        assert!(library.pick_image().is_none());
    }

    #[tokio::test]
    async fn test_capture_yields_canned_reference() {
        let captured = capture_photo(refs(3), Duration::from_millis(1)).await;
        assert!(captured.unwrap().as_str().starts_with("poshakh://sample/"));
    }

    #[tokio::test]
    async fn test_aborted_capture_never_resolves() {
        let handle = tokio::spawn(capture_photo(refs(1), Duration::from_secs(60)));
        handle.abort();
        assert!(handle.await.is_err());
    }
}
