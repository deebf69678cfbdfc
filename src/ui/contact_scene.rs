//! UI rendering for the contact form.

use crate::page::{ContactField, ContactForm};
use crate::ui::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_contact(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let layout = create_game_layout(frame, area, " Contact ", Color::Magenta);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(layout.content);

    for (field, row) in ContactField::ALL.iter().zip(rows.iter()) {
        render_field(frame, *row, form, *field);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        "Say hello!",
        Color::Magenta,
        &[
            ("[Tab/Down]", "Next"),
            ("[Enter]", "Send"),
            ("[Esc]", "Arcade"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel, " About ");
    let about = vec![
        Line::from(Span::styled(
            " Get in touch",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " All fields are required.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(about).wrap(Wrap { trim: false }), inner);
}

fn render_field(frame: &mut Frame, area: Rect, form: &ContactForm, field: ContactField) {
    let focused = form.focus == field;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans = vec![Span::styled(
        form.value(field).to_string(),
        Style::default().fg(Color::White),
    )];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
