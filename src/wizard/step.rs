// ABOUTME: Static descriptors for the three onboarding steps
// The step sequence is immutable for the lifetime of the process

use super::session::WizardSession;

/// Steps of the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    AccountDetails,
    StylePreferences,
    WardrobeUpload,
}

impl WizardStep {
    /// All steps in order.
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::AccountDetails,
            Self::StylePreferences,
            Self::WardrobeUpload,
        ]
    }

    /// Step number, 1-indexed for display.
    pub fn number(self) -> usize {
        match self {
            Self::AccountDetails => 1,
            Self::StylePreferences => 2,
            Self::WardrobeUpload => 3,
        }
    }

    pub fn total() -> usize {
        Self::all().len()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::AccountDetails => "Create Your Account",
            Self::StylePreferences => "Tell Us About Yourself",
            Self::WardrobeUpload => "Build Your Wardrobe",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::AccountDetails => "Let's get started with your personal fashion journey!",
            Self::StylePreferences => "Help us personalize your fashion experience.",
            Self::WardrobeUpload => "Add clothes from your closet to create outfits.",
        }
    }

    /// Whether the session satisfies this step's validity predicate.
    ///
    /// Only the account step gates progress; preferences and wardrobe
    /// uploads may always be skipped.
    pub fn is_satisfied_by(self, session: &WizardSession) -> bool {
        match self {
            Self::AccountDetails => session.fields.all_filled(),
            Self::StylePreferences | Self::WardrobeUpload => true,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::AccountDetails => Some(Self::StylePreferences),
            Self::StylePreferences => Some(Self::WardrobeUpload),
            Self::WardrobeUpload => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::AccountDetails => None,
            Self::StylePreferences => Some(Self::AccountDetails),
            Self::WardrobeUpload => Some(Self::StylePreferences),
        }
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_final(self) -> bool {
        self.next().is_none()
    }
}

/// Style tags offered on the preferences step.
pub const STYLE_OPTIONS: &[&str] = &[
    "Casual",
    "Formal",
    "Sporty",
    "Bohemian",
    "Vintage",
    "Minimalist",
];

/// Colour tags offered on the preferences step.
pub const COLOR_OPTIONS: &[&str] = &["Pink", "Blue", "Green", "Yellow", "Purple"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(
            WizardStep::AccountDetails.next(),
            Some(WizardStep::StylePreferences)
        );
        assert_eq!(WizardStep::AccountDetails.previous(), None);

        assert_eq!(WizardStep::WardrobeUpload.next(), None);
        assert_eq!(
            WizardStep::WardrobeUpload.previous(),
            Some(WizardStep::StylePreferences)
        );
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::AccountDetails.number(), 1);
        assert_eq!(WizardStep::WardrobeUpload.number(), 3);
        assert_eq!(WizardStep::total(), 3);
    }

    #[test]
    fn test_boundary_flags() {
        assert!(WizardStep::AccountDetails.is_first());
        assert!(!WizardStep::AccountDetails.is_final());
        assert!(WizardStep::WardrobeUpload.is_final());
    }
}
