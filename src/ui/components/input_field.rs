//! Input Field Component
//!
//! A single-line text input with focus handling and placeholder display,
//! drawn with rounded borders.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed on the border
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text shown when the value is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Render an input field into the given area.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let border_color = if config.focused {
        COLOR_SELECTED
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(config.label);

    let line = if config.value.is_empty() {
        match config.placeholder {
            Some(placeholder) => Line::from(Span::styled(
                placeholder,
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            )),
            None => Line::default(),
        }
    } else {
        let mut spans = vec![Span::styled(
            config.value,
            Style::default().fg(COLOR_ACCENT),
        )];
        if config.focused {
            spans.push(Span::styled("▌", Style::default().fg(COLOR_SELECTED)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
