// ABOUTME: Profile screen: header stats, tabbed content, edit form with snapshot cancel

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::{AppState, ProfileField, ProfileState, ProfileTab};

use super::theme::{AMBER, CORAL, CREAM_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let container = Block::default().style(Style::default().bg(CREAM_BG));
        frame.render_widget(container, area);

        if state.profile.editing {
            self.render_edit_form(frame, area, &state.profile);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Length(3), // Stats
                Constraint::Length(4), // More info (optional)
                Constraint::Min(4),    // Tab content
                Constraint::Length(1), // Hints
            ])
            .split(area);

        self.render_header(frame, layout[0], &state.profile);
        self.render_stats(frame, layout[1], &state.profile);
        if state.profile.show_more_info {
            self.render_more_info(frame, layout[2], &state.profile);
        }
        self.render_tab_content(frame, layout[3], state);

        let hints = Paragraph::new(Line::from(Span::styled(
            "e edit · a change photo · m more info · 1/2/3 tabs · esc back",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[4]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, profile: &ProfileState) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                profile.profile.username.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                profile.profile.bio.clone(),
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                profile.profile.avatar.as_str().to_string(),
                Style::default().fg(SUBDUED_BORDER),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(" Profile ")
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(header, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, profile: &ProfileState) {
        let stats = &profile.profile.stats;
        let row = Paragraph::new(Line::from(vec![
            Span::styled(
                stats.posts.to_string(),
                Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" posts   ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                stats.followers.clone(),
                Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" followers   ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                stats.following.to_string(),
                Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" following", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(row, area);
    }

    fn render_more_info(&self, frame: &mut Frame, area: Rect, profile: &ProfileState) {
        let social = &profile.profile.social;
        let contact = &profile.profile.contact;
        let info = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(
                    "@{}  ·  {}  ·  {}",
                    social.instagram, social.website, contact.location
                ),
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                contact.email.clone(),
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(info, area);
    }

    fn render_tab_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let profile = &state.profile;
        let tab_title = match profile.active_tab {
            ProfileTab::Posts => " Posts ",
            ProfileTab::History => " History ",
            ProfileTab::Favorites => " Favorites ",
        };

        let items: Vec<ListItem> = match profile.active_tab {
            ProfileTab::Posts => profile
                .posts
                .iter()
                .map(|p| {
                    ListItem::new(Line::from(Span::styled(
                        p.as_str().to_string(),
                        Style::default().fg(MUTED_GRAY),
                    )))
                })
                .collect(),
            ProfileTab::History => state
                .streaks
                .history()
                .iter()
                .map(|e| {
                    ListItem::new(Line::from(Span::styled(
                        format!("{}  {}", e.date, e.description),
                        Style::default().fg(SOFT_WHITE),
                    )))
                })
                .collect(),
            ProfileTab::Favorites => state
                .planner
                .planned_dates()
                .filter_map(|d| state.planner.plan(d).filter(|p| p.liked).map(|p| (d, p)))
                .map(|(d, p)| {
                    ListItem::new(Line::from(Span::styled(
                        format!("{}  {}", d, p.outfit.title),
                        Style::default().fg(SOFT_WHITE),
                    )))
                })
                .collect(),
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(tab_title)
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(list, area);
    }

    fn render_edit_form(&self, frame: &mut Frame, area: Rect, profile: &ProfileState) {
        let fields = ProfileField::all();
        let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(1));

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(area);

        for (i, field) in fields.iter().enumerate() {
            let focused = profile.edit_focus == *field;
            let value = self.field_value(profile, *field);
            let widget = Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(SOFT_WHITE),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(if focused { CORAL } else { SUBDUED_BORDER }))
                    .title(format!(" {} ", field.label()))
                    .style(Style::default().bg(PANEL_BG)),
            );
            frame.render_widget(widget, layout[i]);
        }

        let hints = Paragraph::new(Line::from(Span::styled(
            "enter save · esc cancel · tab next field",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[fields.len()]);
    }

    fn field_value(&self, profile: &ProfileState, field: ProfileField) -> String {
        match field {
            ProfileField::Username => profile.profile.username.clone(),
            ProfileField::Bio => profile.profile.bio.clone(),
            ProfileField::Instagram => profile.profile.social.instagram.clone(),
            ProfileField::Twitter => profile.profile.social.twitter.clone(),
            ProfileField::Facebook => profile.profile.social.facebook.clone(),
            ProfileField::Website => profile.profile.social.website.clone(),
            ProfileField::Email => profile.profile.contact.email.clone(),
            ProfileField::Location => profile.profile.contact.location.clone(),
        }
    }
}

impl Default for ProfileComponent {
    fn default() -> Self {
        Self::new()
    }
}
