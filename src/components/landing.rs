// ABOUTME: Landing screen with the app wordmark and entry actions

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{CORAL, CREAM_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let container = Block::default().style(Style::default().bg(CREAM_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Min(6),    // Wordmark
                Constraint::Length(3), // Tagline
                Constraint::Length(8), // Actions
            ])
            .split(area);

        let wordmark = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "P O S H A K H",
                Style::default().fg(CORAL).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "your wardrobe, styled",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(wordmark, layout[0]);

        let tagline = Paragraph::new(Line::from(Span::styled(
            "Plan outfits, track streaks and build your virtual wardrobe.",
            Style::default().fg(SOFT_WHITE),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, layout[1]);

        let actions = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("[g] ", Style::default().fg(CORAL).add_modifier(Modifier::BOLD)),
                Span::styled("Get started", Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("[s] ", Style::default().fg(CORAL).add_modifier(Modifier::BOLD)),
                Span::styled("Sign in", Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("[q] ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Quit", Style::default().fg(MUTED_GRAY)),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(actions, layout[2]);
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}
