//! Add-plant view: the two-field creation form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::FormField;
use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::theme::COLOR_DIM;
use crate::view_state::AppViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let name = InputFieldConfig::new(" Name ", &view.form.name)
        .focused(view.form.field == FormField::Name)
        .placeholder("e.g. Kitchen Fern");
    render_input_field(frame, rows[0], &name);

    let plant_type = InputFieldConfig::new(" Type ", &view.form.plant_type)
        .focused(view.form.field == FormField::PlantType)
        .placeholder("e.g. Fern, Tomato, Succulent");
    render_input_field(frame, rows[1], &plant_type);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Both fields are required. The plant list reloads after saving.",
            Style::default().fg(COLOR_DIM),
        ))),
        rows[2],
    );
}
