// ABOUTME: Append-only queue of locally staged wardrobe images

use crate::media::ImageRef;

/// Ordered, append-only list of image references staged during onboarding.
///
/// Insertion order is display order. Nothing is ever flushed to a backend;
/// on wizard completion the app merges the queue into the wardrobe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUploadQueue {
    items: Vec<ImageRef>,
}

impl DraftUploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference at the end. No dedup, no upper bound.
    pub fn append(&mut self, reference: ImageRef) {
        self.items.push(reference);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ImageRef] {
        &self.items
    }

    /// Consume the queue, yielding the staged references in append order.
    pub fn into_items(self) -> Vec<ImageRef> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut queue = DraftUploadQueue::new();
        for i in 0..5 {
            queue.append(ImageRef::new(format!("poshakh://item/{i}")));
        }
        assert_eq!(queue.len(), 5);
        let uris: Vec<&str> = queue.iter().map(ImageRef::as_str).collect();
        assert_eq!(
            uris,
            [
                "poshakh://item/0",
                "poshakh://item/1",
                "poshakh://item/2",
                "poshakh://item/3",
                "poshakh://item/4",
            ]
        );
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut queue = DraftUploadQueue::new();
        queue.append(ImageRef::new("poshakh://same"));
        queue.append(ImageRef::new("poshakh://same"));
        assert_eq!(queue.len(), 2);
    }
}
