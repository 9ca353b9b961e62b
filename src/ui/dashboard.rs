//! Dashboard view: stat tiles, plant list, and the unresolved-alert panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEALTHY, COLOR_SELECTED, COLOR_WARN,
};
use crate::view_state::AppViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_stat_tiles(frame, rows[0], view);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_plants(frame, panels[0], view);
    render_alerts(frame, panels[1], view);
}

/// One row of aggregate tiles from the server-side dashboard stats.
fn render_stat_tiles(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = &view.dashboard;
    let values: [(String, &str); 4] = if stats.stats_available {
        [
            (stats.total_plants.to_string(), "Plants"),
            (stats.total_detections.to_string(), "Detections"),
            (stats.active_alerts.to_string(), "Active Alerts"),
            (format!("{:.1}%", stats.health_percentage), "Health"),
        ]
    } else {
        [
            ("–".to_string(), "Plants"),
            ("–".to_string(), "Detections"),
            ("–".to_string(), "Active Alerts"),
            ("–".to_string(), "Health"),
        ]
    };

    for (tile, (value, label)) in tiles.iter().zip(values) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER));
        let line = Line::from(vec![
            Span::styled(
                value,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", label), Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), *tile);
    }
}

/// Plant list with the current selection highlighted.
fn render_plants(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let focused = view.focus == Focus::Plants;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { COLOR_SELECTED } else { COLOR_BORDER }))
        .title(format!(" Plants ({}) ", view.plants.len()));

    let mut lines = Vec::new();
    if view.plants.is_empty() {
        lines.push(Line::from(Span::styled(
            "No plants yet. Press n to add one.",
            Style::default().fg(COLOR_DIM),
        )));
    }
    for (index, plant) in view.plants.iter().enumerate() {
        let selected = view
            .selected_plant
            .map(|s| s.id == plant.id)
            .unwrap_or(false);
        let cursor = if focused && index == view.plants_index {
            "› "
        } else {
            "  "
        };
        let name_style = if selected {
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        let health_color = match plant.health_status.as_str() {
            "healthy" => COLOR_HEALTHY,
            "warning" => COLOR_WARN,
            _ => COLOR_ERROR,
        };
        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(COLOR_SELECTED)),
            Span::styled(plant.name.clone(), name_style),
            Span::styled(format!("  {}", plant.plant_type), Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("  ● {}", plant.health_status),
                Style::default().fg(health_color),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The newest unresolved alerts, or the all-healthy indicator.
fn render_alerts(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let focused = view.focus == Focus::Alerts;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { COLOR_SELECTED } else { COLOR_BORDER }))
        .title(format!(" Alerts ({}) ", view.dashboard.visible_alert_count));

    let mut lines = Vec::new();
    if view.dashboard.all_clear {
        lines.push(Line::from(Span::styled(
            "✓ All plants healthy",
            Style::default()
                .fg(COLOR_HEALTHY)
                .add_modifier(Modifier::BOLD),
        )));
    }
    for (index, alert) in view.top_alerts.iter().enumerate() {
        let cursor = if focused && index == view.alerts_index {
            "› "
        } else {
            "  "
        };
        let severity_color = match alert.severity.to_ascii_lowercase().as_str() {
            "high" => COLOR_ERROR,
            "medium" => COLOR_WARN,
            _ => COLOR_DIM,
        };
        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(COLOR_SELECTED)),
            Span::styled(
                format!("[{}] ", alert.severity),
                Style::default().fg(severity_color),
            ),
            Span::styled(alert.message.clone(), Style::default().fg(COLOR_ACCENT)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
