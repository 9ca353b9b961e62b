//! Disease detection view: image entry, attempt status, and the report.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::detection::DetectionPhase;
use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEALTHY, COLOR_WARN,
};
use crate::view_state::AppViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // image path input
            Constraint::Length(2), // attempt status
            Constraint::Min(4),    // report
            Constraint::Length(6), // history
        ])
        .split(area);

    let input = InputFieldConfig::new(" Image path ", view.image_input)
        .focused(true)
        .placeholder("/path/to/leaf-photo.jpg");
    render_input_field(frame, rows[0], &input);

    render_status(frame, rows[1], view);
    render_report(frame, rows[2], view);
    render_history(frame, rows[3], view);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let detection = &view.detection;
    let phase_color = match detection.phase {
        DetectionPhase::Completed => COLOR_HEALTHY,
        DetectionPhase::Failed => COLOR_ERROR,
        DetectionPhase::Analyzing => COLOR_WARN,
        _ => COLOR_DIM,
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().fg(COLOR_DIM)),
        Span::styled(detection.phase_label, Style::default().fg(phase_color)),
        match detection.image {
            Some(path) => Span::styled(
                format!("  ({})", path.display()),
                Style::default().fg(COLOR_DIM),
            ),
            None => Span::raw(""),
        },
    ])];

    if view.selected_plant.is_none() {
        lines.push(Line::from(Span::styled(
            "Select a plant on the dashboard first.",
            Style::default().fg(COLOR_WARN),
        )));
    } else if let Some(error) = detection.error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(COLOR_ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_report(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Result ");

    let Some(report) = view.detection.report else {
        let hint = Line::from(Span::styled(
            "No result yet. Select an image and press ctrl+d to analyze.",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    };

    let name_color = if report.is_healthy() {
        COLOR_HEALTHY
    } else {
        COLOR_ERROR
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                report.disease_name.clone(),
                Style::default().fg(name_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:.0}% confidence · {}", report.confidence, report.severity),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            report.description.clone(),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(vec![
            Span::styled("Treatment: ", Style::default().fg(COLOR_DIM)),
            Span::styled(report.treatment.clone(), Style::default().fg(COLOR_ACCENT)),
        ]),
    ];
    for recommendation in &report.recommendations {
        lines.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(COLOR_HEALTHY)),
            Span::styled(recommendation.clone(), Style::default().fg(COLOR_ACCENT)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_history(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Past detections ");

    let mut lines = Vec::new();
    if view.detection_history.is_empty() {
        lines.push(Line::from(Span::styled(
            "No detections recorded for this plant.",
            Style::default().fg(COLOR_DIM),
        )));
    }
    for record in view.detection_history.iter().take(4) {
        lines.push(Line::from(vec![
            Span::styled(
                record.timestamp.format("%Y-%m-%d %H:%M ").to_string(),
                Style::default().fg(COLOR_DIM),
            ),
            Span::styled(record.disease_name.clone(), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                format!("  {:.0}%", record.confidence * 100.0),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
