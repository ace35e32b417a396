// ABOUTME: Style-streak tracking with consecutive-day logic and outfit history

use crate::media::ImageRef;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A past outfit suggestion with its worn state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakEntry {
    pub date: NaiveDate,
    pub description: String,
    pub image: ImageRef,
    pub worn: bool,
}

/// Current and longest streak counters plus the recent history.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    current: u32,
    longest: u32,
    last_worn: Option<NaiveDate>,
    history: Vec<StreakEntry>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn longest(&self) -> u32 {
        self.longest
    }

    /// History entries, most recent first.
    pub fn history(&self) -> &[StreakEntry] {
        &self.history
    }

    /// Record that the user wore an outfit on `date`.
    ///
    /// Consecutive-day wear extends the streak, a gap resets it to 1, and a
    /// same-day repeat is a no-op. `longest` tracks the running maximum.
    pub fn record_worn(&mut self, date: NaiveDate, description: impl Into<String>, image: ImageRef) {
        match self.last_worn {
            Some(last) if last == date => return,
            Some(last) if date.signed_duration_since(last).num_days() == 1 => {
                self.current += 1;
            }
            _ => self.current = 1,
        }
        self.last_worn = Some(date);
        self.longest = self.longest.max(self.current);
        self.history.insert(
            0,
            StreakEntry {
                date,
                description: description.into(),
                image,
                worn: true,
            },
        );
    }

    /// Filled/empty flags for the week containing `today`, Sunday first.
    pub fn week_indicator(&self, today: NaiveDate) -> [bool; 7] {
        let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
        let sunday = today - chrono::Duration::days(days_from_sunday);

        let mut week = [false; 7];
        for (offset, slot) in week.iter_mut().enumerate() {
            let day = sunday + chrono::Duration::days(offset as i64);
            *slot = self.history.iter().any(|e| e.worn && e.date == day);
        }
        week
    }
}

/// Tracker seeded with the stock demo history: a seven-day run ending
/// April 15 2025, longest streak fourteen.
pub fn seeded_tracker() -> StreakTracker {
    let entries = [
        (9, "Shopping Day", "photo-1483985988355-763728e1935b"),
        (10, "Office Casual", "photo-1490481651871-ab68de25d43d"),
        (11, "Dinner Date", "photo-1515886657613-9f3515b0c78f"),
        (12, "Casual Spring Outfit", "photo-1551489186-cf8726f514f8"),
        (13, "Formal Business Meeting", "photo-1566206091558-7f218b696731"),
        (14, "Weekend Brunch", "photo-1536243298747-ea8874136d64"),
        (15, "Outdoor Event", "photo-1603344797033-f0f4f587ab60"),
    ];

    let mut tracker = StreakTracker::new();
    // Earlier run that set the longest-streak high-water mark.
    tracker.longest = 14;
    for (day, description, slug) in entries {
        if let Some(date) = NaiveDate::from_ymd_opt(2025, 4, day) {
            tracker.record_worn(
                date,
                description,
                ImageRef::new(format!("https://images.unsplash.com/{slug}")),
            );
        }
    }
    tracker
}
