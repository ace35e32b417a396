// ABOUTME: UI components for the TUI interface, one renderer per screen

pub mod calendar;
pub mod create_outfit;
pub mod home_screen;
pub mod landing;
pub mod layout;
pub mod onboarding;
pub mod profile;
pub mod sign_in;
pub mod streaks;
pub mod theme;
pub mod try_on;

pub use calendar::CalendarComponent;
pub use create_outfit::CreateOutfitComponent;
pub use home_screen::HomeScreenComponent;
pub use landing::LandingComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
pub use profile::ProfileComponent;
pub use sign_in::SignInComponent;
pub use streaks::StreaksComponent;
pub use try_on::TryOnComponent;
