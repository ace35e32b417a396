// ABOUTME: Style-streak view: streak cards, week indicator, outfit history

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::AppState;

use super::theme::{AMBER, CREAM_BG, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER};

const WEEKDAYS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub struct StreaksComponent;

impl StreaksComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let container = Block::default().style(Style::default().bg(CREAM_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(5), // Streak cards
                Constraint::Length(4), // Week indicator
                Constraint::Min(5),    // History
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Style Streaks",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        self.render_streak_cards(frame, layout[1], state);
        self.render_week(frame, layout[2], state);
        self.render_history(frame, layout[3], state);

        let hints = Paragraph::new(Line::from(Span::styled(
            "w wear today's pick · esc back",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[4]);
    }

    fn render_streak_cards(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let motivation = state.app_config.ui_preferences.show_motivation;
        self.streak_card(
            frame,
            cards[0],
            "Current Streak",
            state.streaks.current(),
            motivation.then_some("Keep it going!"),
        );
        self.streak_card(frame, cards[1], "Longest Streak", state.streaks.longest(), None);
    }

    fn streak_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        days: u32,
        footer: Option<&str>,
    ) {
        let mut lines = vec![
            Line::from(Span::styled(label.to_string(), Style::default().fg(MUTED_GRAY))),
            Line::from(vec![
                Span::styled(
                    days.to_string(),
                    Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" days", Style::default().fg(MUTED_GRAY)),
            ]),
        ];
        if let Some(text) = footer {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(AMBER),
            )));
        }

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(card, area);
    }

    fn render_week(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let week = state.streaks.week_indicator(state.anchor_date());

        let mut spans = Vec::new();
        for (i, filled) in week.iter().enumerate() {
            let circle = if *filled {
                Span::styled(" ● ", Style::default().fg(AMBER))
            } else {
                Span::styled(" ○ ", Style::default().fg(MUTED_GRAY))
            };
            spans.push(circle);
            spans.push(Span::styled(
                format!("{} ", WEEKDAYS[i]),
                Style::default().fg(MUTED_GRAY),
            ));
        }

        let week_row = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .title(" This Week ")
                    .style(Style::default().bg(PANEL_BG)),
            );
        frame.render_widget(week_row, area);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let show_badges = state.app_config.ui_preferences.show_worn_badges;
        let items: Vec<ListItem> = state
            .streaks
            .history()
            .iter()
            .map(|entry| {
                let mut spans = vec![
                    Span::styled(
                        format!(
                            "{} {:>2}  ",
                            entry.date.format("%b"),
                            entry.date.day()
                        ),
                        Style::default().fg(MUTED_GRAY),
                    ),
                    Span::styled(
                        entry.description.clone(),
                        Style::default().fg(SOFT_WHITE),
                    ),
                ];
                if show_badges && entry.worn {
                    spans.push(Span::styled(
                        "  ✓ Worn",
                        Style::default().fg(SELECTION_GREEN),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let history = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(" Your Streak Outfits ")
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(history, area);
    }
}

impl Default for StreaksComponent {
    fn default() -> Self {
        Self::new()
    }
}
