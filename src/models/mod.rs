// ABOUTME: Domain models for wardrobe items, outfits, streaks and the user profile

pub mod outfit;
pub mod streak;
pub mod user;
pub mod wardrobe;

pub use outfit::{seeded_planner, Outfit, OutfitPlanner, PlannedOutfit};
pub use streak::{seeded_tracker, StreakEntry, StreakTracker};
pub use user::{ContactInfo, ProfileStats, SocialLinks, UserProfile};
pub use wardrobe::WardrobeItem;
