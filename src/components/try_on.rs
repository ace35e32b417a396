// ABOUTME: Virtual try-on preview: mode select, static overlay, camera overlay

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, CameraFacing, TryOnMode};

use super::theme::{CORAL, CREAM_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

pub struct TryOnComponent;

impl TryOnComponent {
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
                Constraint::Min(8),    // Body
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Virtual Try-On",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let outfit = state
            .planner
            .catalog()
            .last()
            .map(|o| o.title.clone())
            .unwrap_or_else(|| "No outfit selected".to_string());

        match state.try_on.mode {
            TryOnMode::Select => self.render_mode_select(frame, layout[1]),
            TryOnMode::Static => self.render_static_preview(frame, layout[1], &outfit),
            TryOnMode::Camera => {
                self.render_camera_preview(frame, layout[1], &outfit, state.try_on.facing);
            }
        }

        let hints = match state.try_on.mode {
            TryOnMode::Select => "s static preview · c camera preview · esc back",
            TryOnMode::Static => "esc back to mode select",
            TryOnMode::Camera => "f flip camera · esc back to mode select",
        };
        let hints = Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[2]);
    }

    fn render_mode_select(&self, frame: &mut Frame, area: Rect) {
        let modes = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.mode_card(frame, modes[0], "[s]", "Static Preview");
        self.mode_card(frame, modes[1], "[c]", "Camera Preview");
    }

    fn mode_card(&self, frame: &mut Frame, area: Rect, key: &str, label: &str) {
        let card = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                key.to_string(),
                Style::default().fg(CORAL).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label.to_string(), Style::default().fg(SOFT_WHITE))),
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

    fn render_static_preview(&self, frame: &mut Frame, area: Rect, outfit: &str) {
        let preview = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "┌─ model ─┐",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                format!("│ {outfit} │"),
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(
                "└─ overlay 80% ─┘",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORAL))
                .title(" Static Preview ")
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(preview, area);
    }

    fn render_camera_preview(
        &self,
        frame: &mut Frame,
        area: Rect,
        outfit: &str,
        facing: CameraFacing,
    ) {
        let facing_label = match facing {
            CameraFacing::Front => "front",
            CameraFacing::Back => "back",
        };
        let preview = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("live camera ({facing_label})"),
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                format!("{outfit} · overlay 60%"),
                Style::default().fg(SOFT_WHITE),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORAL))
                .title(" Camera Preview ")
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(preview, area);
    }
}

impl Default for TryOnComponent {
    fn default() -> Self {
        Self::new()
    }
}
