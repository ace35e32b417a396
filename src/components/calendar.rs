// ABOUTME: Month-grid calendar with planned-outfit markers and a detail card

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;

use super::theme::{AMBER, CREAM_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

const WEEKDAYS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub struct CalendarComponent;

impl CalendarComponent {
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
                Constraint::Length(2), // Month selector
                Constraint::Length(1), // Weekday row
                Constraint::Length(7), // Grid (up to 6 weeks)
                Constraint::Min(6),    // Outfit card
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let month_label = format!(
            "← {} {} →",
            state.calendar.month.format("%B"),
            state.calendar.month.year()
        );
        let selector = Paragraph::new(Line::from(Span::styled(
            month_label,
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(selector, layout[0]);

        let weekday_row = Paragraph::new(Line::from(
            WEEKDAYS
                .iter()
                .map(|d| Span::styled(format!(" {d} "), Style::default().fg(MUTED_GRAY)))
                .collect::<Vec<_>>(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(weekday_row, layout[1]);

        self.render_grid(frame, layout[2], state);
        self.render_outfit_card(frame, layout[3], state);

        let hints = Paragraph::new(Line::from(Span::styled(
            "arrows move · n/p month · l like · r try another · esc back",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[4]);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let calendar = &state.calendar;
        let offset = calendar.first_weekday_offset() as usize;
        let days = calendar.days_in_month();

        let mut lines: Vec<Line> = Vec::new();
        let mut spans: Vec<Span> = Vec::new();
        for _ in 0..offset {
            spans.push(Span::raw("    "));
        }

        for day in 1..=days {
            let date = NaiveDate::from_ymd_opt(
                calendar.month.year(),
                calendar.month.month(),
                day,
            );
            let Some(date) = date else { continue };

            let selected = date == calendar.selected;
            let planned = state.planner.has_plan(date);
            let mut style = Style::default().fg(SOFT_WHITE);
            if planned {
                style = style.fg(AMBER);
            }
            if selected {
                style = style
                    .bg(AMBER)
                    .fg(CREAM_BG)
                    .add_modifier(Modifier::BOLD);
            }
            let marker = if planned && !selected { "•" } else { " " };
            spans.push(Span::styled(format!("{day:>3}"), style));
            spans.push(Span::styled(marker.to_string(), Style::default().fg(AMBER)));

            if (offset + day as usize) % 7 == 0 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }

        let grid = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(grid, area);
    }

    fn render_outfit_card(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let selected = state.calendar.selected;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));

        let lines = match state.planner.plan(selected) {
            Some(plan) => {
                let liked = if plan.liked { "  ♥ liked" } else { "" };
                vec![
                    Line::from(Span::styled(
                        format!(
                            "{} {}, {}",
                            selected.format("%B"),
                            selected.day(),
                            selected.year()
                        ),
                        Style::default().fg(MUTED_GRAY),
                    )),
                    Line::from(vec![
                        Span::styled(
                            plan.outfit.title.clone(),
                            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(liked, Style::default().fg(AMBER)),
                    ]),
                    Line::from(Span::styled(
                        plan.outfit.image.as_str().to_string(),
                        Style::default().fg(MUTED_GRAY),
                    )),
                ]
            }
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No outfit suggestion for this date",
                    Style::default().fg(MUTED_GRAY),
                )),
            ],
        };

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(block);
        frame.render_widget(card, area);
    }
}

impl Default for CalendarComponent {
    fn default() -> Self {
        Self::new()
    }
}
