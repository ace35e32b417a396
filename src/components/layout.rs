// ABOUTME: Top-level layout: dispatches the current view and draws the notification bar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::state::{AppState, NotificationLevel, View};

use super::calendar::CalendarComponent;
use super::create_outfit::CreateOutfitComponent;
use super::home_screen::HomeScreenComponent;
use super::landing::LandingComponent;
use super::onboarding::OnboardingComponent;
use super::profile::ProfileComponent;
use super::sign_in::SignInComponent;
use super::streaks::StreaksComponent;
use super::theme::{ERROR_RED, MUTED_GRAY, SELECTION_GREEN, WARNING_YELLOW};
use super::try_on::TryOnComponent;

pub struct LayoutComponent {
    landing: LandingComponent,
    sign_in: SignInComponent,
    onboarding: OnboardingComponent,
    home: HomeScreenComponent,
    calendar: CalendarComponent,
    streaks: StreaksComponent,
    create_outfit: CreateOutfitComponent,
    try_on: TryOnComponent,
    profile: ProfileComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            landing: LandingComponent::new(),
            sign_in: SignInComponent::new(),
            onboarding: OnboardingComponent::new(),
            home: HomeScreenComponent::new(),
            calendar: CalendarComponent::new(),
            streaks: StreaksComponent::new(),
            create_outfit: CreateOutfitComponent::new(),
            try_on: TryOnComponent::new(),
            profile: ProfileComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        match state.current_view {
            View::Landing => self.landing.render(frame, layout[0]),
            View::SignIn => self.sign_in.render(frame, layout[0], &state.sign_in),
            View::Onboarding => self.onboarding.render(frame, layout[0], state),
            View::Home => self.home.render(frame, layout[0], state),
            View::Calendar => self.calendar.render(frame, layout[0], state),
            View::Streaks => self.streaks.render(frame, layout[0], state),
            View::CreateOutfit => self.create_outfit.render(frame, layout[0], state),
            View::TryOn => self.try_on.render(frame, layout[0], state),
            View::Profile => self.profile.render(frame, layout[0], state),
        }

        self.render_notification_bar(frame, layout[1], state);
    }

    fn render_notification_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(notification) = state.notifications.last() else {
            return;
        };
        let color = match notification.level {
            NotificationLevel::Info => MUTED_GRAY,
            NotificationLevel::Success => SELECTION_GREEN,
            NotificationLevel::Warning => WARNING_YELLOW,
            NotificationLevel::Error => ERROR_RED,
        };
        let bar = Paragraph::new(Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(color),
        )));
        frame.render_widget(bar, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
