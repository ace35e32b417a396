// ABOUTME: Home dashboard with stat cards, today's pick and trending outfits

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;

use super::theme::{AMBER, CORAL, CREAM_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

pub struct HomeScreenComponent;

impl HomeScreenComponent {
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
                Constraint::Length(3), // Wordmark
                Constraint::Length(5), // Stat cards
                Constraint::Min(6),    // Today's pick
                Constraint::Length(4), // Trending
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let wordmark = Paragraph::new(Line::from(Span::styled(
            "POSHAKH",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(wordmark, layout[0]);

        self.render_stat_cards(frame, layout[1], state);
        self.render_todays_pick(frame, layout[2], state);
        self.render_trending(frame, layout[3], state);

        let hints = Paragraph::new(Line::from(Span::styled(
            "[c]alendar  [s]treaks  [n]ew outfit  [t]ry-on  [p]rofile  [q]uit",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[4]);
    }

    fn render_stat_cards(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        let month = state.calendar.month.format("%B").to_string();
        self.stat_card(frame, cards[0], "Calendar", &month);
        self.stat_card(
            frame,
            cards[1],
            "Streak",
            &format!("{} days", state.streaks.current()),
        );
        self.stat_card(
            frame,
            cards[2],
            "Uploads",
            &state.wardrobe.len().to_string(),
        );
    }

    fn stat_card(&self, frame: &mut Frame, area: Rect, title: &str, value: &str) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(title.to_string(), Style::default().fg(MUTED_GRAY))),
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(card, area);
    }

    fn render_todays_pick(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let anchor = state.anchor_date();
        let pick = state.planner.plan(anchor);

        let lines = match pick {
            Some(plan) => vec![
                Line::from(Span::styled(
                    format!("{} {}, {}", anchor.format("%B"), anchor.day(), anchor.year()),
                    Style::default().fg(MUTED_GRAY),
                )),
                Line::from(Span::styled(
                    plan.outfit.title.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    plan.outfit.image.as_str().to_string(),
                    Style::default().fg(MUTED_GRAY),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "No pick for today yet",
                Style::default().fg(MUTED_GRAY),
            ))],
        };

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORAL))
                .title(" Today's Pick ")
                .title_style(Style::default().fg(CORAL).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(card, area);
    }

    fn render_trending(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Span> = state
            .planner
            .catalog()
            .iter()
            .take(3)
            .enumerate()
            .flat_map(|(i, o)| {
                let mut spans = Vec::new();
                if i > 0 {
                    spans.push(Span::styled("  ·  ", Style::default().fg(SUBDUED_BORDER)));
                }
                spans.push(Span::styled(
                    o.title.clone(),
                    Style::default().fg(SOFT_WHITE),
                ));
                spans
            })
            .collect();

        let trending = Paragraph::new(Line::from(titles))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .title(" Trending Outfits ")
                    .style(Style::default().bg(PANEL_BG)),
            );
        frame.render_widget(trending, area);
    }
}

impl Default for HomeScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
