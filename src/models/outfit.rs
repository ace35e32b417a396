// ABOUTME: Outfit catalog and the date-keyed outfit planner

use crate::media::ImageRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A complete outfit suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: Uuid,
    pub title: String,
    pub image: ImageRef,
}

impl Outfit {
    pub fn new(title: impl Into<String>, image: ImageRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            image,
        }
    }
}

/// An outfit planned for a specific day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedOutfit {
    pub outfit: Outfit,
    pub liked: bool,
}

impl PlannedOutfit {
    pub fn new(outfit: Outfit) -> Self {
        Self {
            outfit,
            liked: false,
        }
    }
}

/// Date-keyed outfit plans plus the catalog suggestions are drawn from.
#[derive(Debug, Clone, Default)]
pub struct OutfitPlanner {
    plans: BTreeMap<NaiveDate, PlannedOutfit>,
    catalog: Vec<Outfit>,
}

impl OutfitPlanner {
    pub fn new(catalog: Vec<Outfit>) -> Self {
        Self {
            plans: BTreeMap::new(),
            catalog,
        }
    }

    pub fn plan(&self, date: NaiveDate) -> Option<&PlannedOutfit> {
        self.plans.get(&date)
    }

    pub fn has_plan(&self, date: NaiveDate) -> bool {
        self.plans.contains_key(&date)
    }

    pub fn set_plan(&mut self, date: NaiveDate, outfit: Outfit) {
        self.plans.insert(date, PlannedOutfit::new(outfit));
    }

    /// Mark the plan for `date` liked. No-op on unplanned days.
    pub fn like(&mut self, date: NaiveDate) {
        if let Some(plan) = self.plans.get_mut(&date) {
            plan.liked = true;
        }
    }

    /// Replace the plan for `date` with a different catalog suggestion.
    ///
    /// Cycles deterministically through the catalog so repeated re-rolls
    /// never repeat the current outfit until the catalog wraps. No-op on
    /// unplanned days or with an empty catalog.
    pub fn reroll(&mut self, date: NaiveDate) {
        let Some(current) = self.plans.get(&date) else {
            return;
        };
        if self.catalog.is_empty() {
            return;
        }
        let pos = self
            .catalog
            .iter()
            .position(|o| o.id == current.outfit.id)
            .map_or(0, |i| (i + 1) % self.catalog.len());
        let next = self.catalog[pos].clone();
        self.plans.insert(date, PlannedOutfit::new(next));
    }

    pub fn catalog(&self) -> &[Outfit] {
        &self.catalog
    }

    pub fn planned_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.plans.keys().copied()
    }
}

/// Planner seeded with the stock April 2025 suggestions.
pub fn seeded_planner() -> OutfitPlanner {
    let catalog = vec![
        Outfit::new(
            "Casual Spring Outfit",
            ImageRef::new("https://images.unsplash.com/photo-1551489186-cf8726f514f8"),
        ),
        Outfit::new(
            "Formal Business Meeting",
            ImageRef::new("https://images.unsplash.com/photo-1566206091558-7f218b696731"),
        ),
        Outfit::new(
            "Weekend Brunch",
            ImageRef::new("https://images.unsplash.com/photo-1536243298747-ea8874136d64"),
        ),
        Outfit::new(
            "Outdoor Event",
            ImageRef::new("https://images.unsplash.com/photo-1603344797033-f0f4f587ab60"),
        ),
        Outfit::new(
            "Velvet Evening Gown",
            ImageRef::new("https://images.unsplash.com/photo-1566174053879-31528523f8ae"),
        ),
    ];

    let mut planner = OutfitPlanner::new(catalog);
    let seeds = [
        (12, 0usize),
        (13, 1),
        (14, 2),
        (15, 3),
    ];
    for (day, idx) in seeds {
        if let Some(date) = NaiveDate::from_ymd_opt(2025, 4, day) {
            let outfit = planner.catalog[idx].clone();
            planner.set_plan(date, outfit);
        }
    }
    planner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_seeded_plans() {
        let planner = seeded_planner();
        assert!(planner.has_plan(date(12)));
        assert!(planner.has_plan(date(15)));
        assert!(!planner.has_plan(date(16)));
        assert_eq!(planner.plan(date(15)).unwrap().outfit.title, "Outdoor Event");
    }

    #[test]
    fn test_like_marks_plan() {
        let mut planner = seeded_planner();
        planner.like(date(12));
        assert!(planner.plan(date(12)).unwrap().liked);
    }

    #[test]
    fn test_like_unplanned_day_is_noop() {
        let mut planner = seeded_planner();
        planner.like(date(20));
        assert!(!planner.has_plan(date(20)));
    }

    #[test]
    fn test_reroll_changes_outfit() {
        let mut planner = seeded_planner();
        let before = planner.plan(date(12)).unwrap().outfit.id;
        planner.reroll(date(12));
        let after = planner.plan(date(12)).unwrap().outfit.id;
        assert_ne!(before, after);
    }

    #[test]
    fn test_reroll_resets_liked() {
        let mut planner = seeded_planner();
        planner.like(date(12));
        planner.reroll(date(12));
        assert!(!planner.plan(date(12)).unwrap().liked);
    }
}
