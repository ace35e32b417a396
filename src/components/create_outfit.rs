// ABOUTME: Create-outfit flow: capture or pick an image, run recognition, file the item

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::recognition::RecognitionOutcome;

use super::theme::{
    CORAL, CREAM_BG, ERROR_RED, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};

pub struct CreateOutfitComponent;

impl CreateOutfitComponent {
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
                Constraint::Length(2), // Actions
                Constraint::Length(4), // Status
                Constraint::Min(5),    // Wardrobe
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Create Outfit",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let actions = Paragraph::new(Line::from(vec![
            Span::styled("[c] ", Style::default().fg(CORAL).add_modifier(Modifier::BOLD)),
            Span::styled("Take Photo   ", Style::default().fg(SOFT_WHITE)),
            Span::styled("[g] ", Style::default().fg(CORAL).add_modifier(Modifier::BOLD)),
            Span::styled("Upload from gallery", Style::default().fg(SOFT_WHITE)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(actions, layout[1]);

        self.render_status(frame, layout[2], state);
        self.render_wardrobe(frame, layout[3], state);

        let hints = Paragraph::new(Line::from(Span::styled(
            "esc back",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[4]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = if state.create.processing {
            vec![Line::from(Span::styled(
                "Analysing your garment...",
                Style::default().fg(CORAL).add_modifier(Modifier::ITALIC),
            ))]
        } else {
            match state.create.last_outcome {
                Some(RecognitionOutcome::Success(category)) => vec![Line::from(vec![
                    Span::styled("Recognised as ", Style::default().fg(SOFT_WHITE)),
                    Span::styled(
                        category.label(),
                        Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
                    ),
                ])],
                Some(RecognitionOutcome::Failure) => vec![
                    Line::from(Span::styled(
                        "Couldn't recognise that garment",
                        Style::default().fg(ERROR_RED),
                    )),
                    Line::from(vec![
                        Span::styled("[r] ", Style::default().fg(CORAL)),
                        Span::styled("retry   ", Style::default().fg(SOFT_WHITE)),
                        Span::styled("[u] ", Style::default().fg(CORAL)),
                        Span::styled("keep uncategorised   ", Style::default().fg(SOFT_WHITE)),
                        Span::styled("[d] ", Style::default().fg(CORAL)),
                        Span::styled("discard", Style::default().fg(SOFT_WHITE)),
                    ]),
                ],
                None => vec![Line::from(Span::styled(
                    "Snap or upload a piece of clothing to add it to your wardrobe.",
                    Style::default().fg(MUTED_GRAY),
                ))],
            }
        };

        let status = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(status, area);
    }

    fn render_wardrobe(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .wardrobe
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<14}", item.category_label()),
                        Style::default().fg(CORAL),
                    ),
                    Span::styled(
                        item.image.as_str().to_string(),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]))
            })
            .collect();

        let wardrobe = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(format!(" Wardrobe ({}) ", state.wardrobe.len()))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(wardrobe, area);
    }
}

impl Default for CreateOutfitComponent {
    fn default() -> Self {
        Self::new()
    }
}
