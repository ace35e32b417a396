// ABOUTME: Sign-in form with email/password fields and a loading state

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{SignInField, SignInState};

use super::theme::{CORAL, CREAM_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

pub struct SignInComponent;

impl SignInComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &SignInState) {
        let container = Block::default().style(Style::default().bg(CREAM_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(2), // Remember me
                Constraint::Min(3),    // Status / hints
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Welcome Back",
            Style::default().fg(CORAL).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        self.render_field(
            frame,
            layout[1],
            "Email",
            &state.email,
            state.focus == SignInField::Email,
            false,
        );
        self.render_field(
            frame,
            layout[2],
            "Password",
            &state.password,
            state.focus == SignInField::Password,
            true,
        );

        let remember = Paragraph::new(Line::from(vec![
            Span::styled(
                if state.remember_me { "[x] " } else { "[ ] " },
                Style::default().fg(CORAL),
            ),
            Span::styled("Remember me (ctrl-r)", Style::default().fg(MUTED_GRAY)),
        ]));
        frame.render_widget(remember, layout[3]);

        let status = if state.loading {
            Line::from(Span::styled(
                "Signing you in...",
                Style::default().fg(CORAL).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                "enter sign in · tab switch field · ctrl-f forgot password · esc back",
                Style::default().fg(MUTED_GRAY),
            ))
        };
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), layout[4]);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
        masked: bool,
    ) {
        let border = if focused { CORAL } else { SUBDUED_BORDER };
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let field = Paragraph::new(Line::from(Span::styled(
            shown,
            Style::default().fg(SOFT_WHITE),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(format!(" {label} "))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(field, area);
    }
}

impl Default for SignInComponent {
    fn default() -> Self {
        Self::new()
    }
}
