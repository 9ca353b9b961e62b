//! UI rendering for the verdant terminal client.
//!
//! Dispatches on the active view and draws a shared header, status line,
//! and keybind hints. All rendering reads from [`AppViewState`]; no UI
//! code mutates application state.

pub mod add_plant;
pub mod components;
pub mod dashboard;
pub mod detection;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{ActiveView, App, NoticeLevel};
use crate::view_state::AppViewState;
use theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_HEALTHY, COLOR_SELECTED};

/// Render the UI based on the current view.
pub fn render(frame: &mut Frame, app: &App) {
    let view = app.view_state();
    let area = frame.area();

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // body
            Constraint::Length(1), // status line
            Constraint::Length(1), // keybind hints
        ])
        .split(area);

    render_header(frame, sections[0], &view);

    match view.view {
        ActiveView::Dashboard => dashboard::render(frame, sections[1], &view),
        ActiveView::DiseaseDetection => detection::render(frame, sections[1], &view),
        ActiveView::AddPlant => add_plant::render(frame, sections[1], &view),
    }

    render_status_line(frame, sections[2], &view);
    render_hints(frame, sections[3], &view);
}

/// Header: app name, view tabs, and the selected plant.
fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));

    let mut spans = vec![
        Span::styled(
            " verdant ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(COLOR_DIM)),
    ];

    for (index, tab) in [
        ActiveView::Dashboard,
        ActiveView::DiseaseDetection,
        ActiveView::AddPlant,
    ]
    .iter()
    .enumerate()
    {
        let style = if *tab == view.view {
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("[{}] {}  ", index + 1, tab.title()), style));
    }

    if let Some(plant) = view.selected_plant {
        spans.push(Span::styled("│ ", Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(
            format!("{} ({})", plant.name, plant.plant_type),
            Style::default().fg(COLOR_HEALTHY),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Status line: the most recent live notice, if any.
fn render_status_line(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let line = match view.notice {
        Some(notice) => {
            let (prefix, color) = match notice.level {
                NoticeLevel::Info => ("✓ ", COLOR_HEALTHY),
                NoticeLevel::Error => ("✗ ", COLOR_ERROR),
            };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::styled(notice.message.as_str(), Style::default().fg(color)),
            ])
        }
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Keybind hints for the active view.
fn render_hints(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let hints = match view.view {
        ActiveView::Dashboard => {
            " 1/2/3 views · ←→ panel · ↑↓ select · enter detect/resolve · w water · n new plant · r refresh · q quit"
        }
        ActiveView::DiseaseDetection => {
            " type path · enter select image · ctrl+d analyze · esc dashboard"
        }
        ActiveView::AddPlant => " type to edit · tab switch field · enter save · esc dashboard",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
