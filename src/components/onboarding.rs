// ABOUTME: Onboarding wizard renderer
// Step-dot progress header, per-step body, navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::wizard::{FieldKey, WizardSession, WizardStep, COLOR_OPTIONS, STYLE_OPTIONS};

use super::theme::{
    CORAL, CORAL_DIM, CREAM_BG, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};

pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(session) = state.wizard.as_ref() else {
            return;
        };

        frame.render_widget(Clear, area);
        let container = Block::default().style(Style::default().bg(CREAM_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress dots
                Constraint::Min(12),   // Step content
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], session);
        match session.step {
            WizardStep::AccountDetails => self.render_account_step(frame, layout[1], session),
            WizardStep::StylePreferences => {
                self.render_preferences_step(frame, layout[1], session, state.wizard_cursor);
            }
            WizardStep::WardrobeUpload => {
                self.render_upload_step(frame, layout[1], session, state.wizard_capture_running);
            }
        }
        self.render_navigation(frame, layout[2], session);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, session: &WizardSession) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                session.step.title(),
                Style::default().fg(CORAL).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({}/{})", session.step.number(), WizardStep::total()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        // Progress dots: filled for done, ringed for current, hollow ahead.
        let current = session.step.number() - 1;
        let mut spans = Vec::new();
        for (idx, step) in WizardStep::all().iter().enumerate() {
            let (icon, style) = if idx < current {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current {
                ("◉", Style::default().fg(CORAL).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == current {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
            if idx + 1 < WizardStep::all().len() {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }
        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, header_layout[1]);
    }

    fn render_account_step(&self, frame: &mut Frame, area: Rect, session: &WizardSession) {
        let block = self.step_block(session.step);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(2),
            ])
            .split(inner);

        for (i, &key) in FieldKey::all().iter().enumerate() {
            let focused = session.focused_field == key;
            let value = session.fields.get(key);
            let shown = if key == FieldKey::Password {
                "•".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            let text = if shown.is_empty() && !focused {
                Span::styled(key.placeholder(), Style::default().fg(MUTED_GRAY))
            } else {
                Span::styled(shown, Style::default().fg(SOFT_WHITE))
            };
            let field = Paragraph::new(Line::from(text)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(if focused { CORAL } else { SUBDUED_BORDER }))
                    .title(format!(" {} ", key.label())),
            );
            frame.render_widget(field, layout[i]);
        }

        let terms = Paragraph::new(Line::from(Span::styled(
            "By continuing, you agree to our Terms of Service and Privacy Policy",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(terms, layout[3]);
    }

    fn render_preferences_step(
        &self,
        frame: &mut Frame,
        area: Rect,
        session: &WizardSession,
        cursor: usize,
    ) {
        let block = self.step_block(session.step);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let style_items: Vec<ListItem> = STYLE_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let selected = session.styles.contains(&(*tag).to_string());
                self.option_item(tag, selected, cursor == i)
            })
            .collect();
        let styles = List::new(style_items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(" Style Preferences "),
        );
        frame.render_widget(styles, layout[0]);

        let color_items: Vec<ListItem> = COLOR_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let selected = session.colors.contains(&(*tag).to_string());
                self.option_item(tag, selected, cursor == STYLE_OPTIONS.len() + i)
            })
            .collect();
        let colors = List::new(color_items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(" Favorite Colors "),
        );
        frame.render_widget(colors, layout[1]);
    }

    fn option_item<'a>(&self, tag: &'a str, selected: bool, highlighted: bool) -> ListItem<'a> {
        let marker = if selected { "✓ " } else { "  " };
        let mut style = if selected {
            Style::default().fg(SELECTION_GREEN)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        if highlighted {
            style = style.bg(SUBDUED_BORDER).add_modifier(Modifier::BOLD);
        }
        ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(tag, style),
        ]))
    }

    fn render_upload_step(
        &self,
        frame: &mut Frame,
        area: Rect,
        session: &WizardSession,
        capture_running: bool,
    ) {
        let block = self.step_block(session.step);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Instructions
                Constraint::Length(2), // Actions
                Constraint::Length(2), // Processing indicator
                Constraint::Min(3),    // Staged items
            ])
            .split(inner);

        let instructions = Paragraph::new(Line::from(Span::styled(
            "Start building your virtual wardrobe by taking photos of your clothes \
             or uploading them from your gallery.",
            Style::default().fg(SOFT_WHITE),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(instructions, layout[0]);

        let actions = Paragraph::new(Line::from(vec![
            Span::styled("[c] ", Style::default().fg(CORAL).add_modifier(Modifier::BOLD)),
            Span::styled("Take Photo   ", Style::default().fg(SOFT_WHITE)),
            Span::styled("[g] ", Style::default().fg(CORAL).add_modifier(Modifier::BOLD)),
            Span::styled("Upload from gallery", Style::default().fg(SOFT_WHITE)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(actions, layout[1]);

        if capture_running {
            let processing = Paragraph::new(Line::from(Span::styled(
                "Processing your image...",
                Style::default().fg(CORAL).add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(processing, layout[2]);
        }

        let staged: Vec<ListItem> = session
            .uploads
            .iter()
            .map(|r| ListItem::new(Line::from(Span::styled(r.as_str(), Style::default().fg(MUTED_GRAY)))))
            .collect();
        let uploads = List::new(staged).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(format!(" Uploaded Items ({}) ", session.uploads.len())),
        );
        frame.render_widget(uploads, layout[3]);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, session: &WizardSession) {
        let can_advance = session.can_advance();
        let continue_label = if session.step.is_final() {
            "Get Started"
        } else {
            "Continue"
        };
        let continue_style = if can_advance {
            Style::default().fg(CORAL).add_modifier(Modifier::BOLD)
        } else {
            // Disabled while the step predicate fails; the key is a no-op.
            Style::default().fg(CORAL_DIM)
        };
        let back_label = if session.step.is_first() {
            "Back to landing"
        } else {
            "Back"
        };

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[esc] ", Style::default().fg(MUTED_GRAY)),
            Span::styled(back_label, Style::default().fg(MUTED_GRAY)),
            Span::raw("    "),
            Span::styled("[enter] ", continue_style),
            Span::styled(continue_label, continue_style),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(footer, area);
    }

    fn step_block(&self, step: WizardStep) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.description()))
            .title_style(Style::default().fg(MUTED_GRAY))
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
