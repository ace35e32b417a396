// ABOUTME: Wardrobe item model produced by the create-outfit flow

use crate::media::ImageRef;
use crate::recognition::ClothingCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One garment in the virtual wardrobe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: Uuid,
    pub image: ImageRef,
    /// `None` when recognition failed and the user filed it uncategorised.
    pub category: Option<ClothingCategory>,
    pub added_at: DateTime<Utc>,
}

impl WardrobeItem {
    pub fn new(image: ImageRef, category: Option<ClothingCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            category,
            added_at: Utc::now(),
        }
    }

    /// Label shown in item lists.
    pub fn category_label(&self) -> &'static str {
        self.category.map_or("Uncategorised", ClothingCategory::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncategorised_label() {
        let item = WardrobeItem::new(ImageRef::new("poshakh://x"), None);
        assert_eq!(item.category_label(), "Uncategorised");
    }

    #[test]
    fn test_categorised_label() {
        let item = WardrobeItem::new(ImageRef::new("poshakh://x"), Some(ClothingCategory::Top));
        assert_eq!(item.category_label(), "Top");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = WardrobeItem::new(ImageRef::new("poshakh://x"), None);
        let b = WardrobeItem::new(ImageRef::new("poshakh://x"), None);
        assert_ne!(a.id, b.id);
    }
}
