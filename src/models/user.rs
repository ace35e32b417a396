// ABOUTME: User profile model with social links, contact info and display stats

use crate::media::ImageRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub twitter: String,
    pub facebook: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
}

/// Follower counts shown on the profile header. Display-only; a backend
/// would own these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub posts: u32,
    pub followers: String,
    pub following: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub bio: String,
    pub avatar: ImageRef,
    pub social: SocialLinks,
    pub contact: ContactInfo,
    pub stats: ProfileStats,
}

impl UserProfile {
    /// Stock demo profile.
    pub fn sample() -> Self {
        Self {
            username: "Sarah Anderson".to_string(),
            bio: "Fashion enthusiast | Personal Stylist".to_string(),
            avatar: ImageRef::new(
                "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg",
            ),
            social: SocialLinks {
                instagram: "sarah_stylist".to_string(),
                twitter: "sarahstylist".to_string(),
                facebook: "sarahstylist".to_string(),
                website: "sarahstylist.com".to_string(),
            },
            contact: ContactInfo {
                email: "sarah@example.com".to_string(),
                location: "New York, USA".to_string(),
            },
            stats: ProfileStats {
                posts: 286,
                followers: "15.3k".to_string(),
                following: 892,
            },
        }
    }
}
