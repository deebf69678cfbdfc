//! Page chrome around the main scene: cube banner, footer, toasts.

use crate::page::{FlowingCube, ToastKind, Toasts};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::Canvas,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Banner with the title and drifting cubes behind it.
pub fn render_banner(frame: &mut Frame, area: Rect, cubes: &[FlowingCube], elapsed_secs: f64) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let canvas = Canvas::default()
        .marker(Marker::Dot)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for cube in cubes {
                let x = cube.position(elapsed_secs) * 100.0;
                let y = 100.0 - cube.top_percent;
                ctx.print(
                    x,
                    y,
                    Line::from(Span::styled(
                        cube.face(elapsed_secs).glyph().to_string(),
                        cube_style(cube.opacity),
                    )),
                );
            }
        });
    frame.render_widget(canvas, inner);

    if inner.height > 0 {
        let title_row = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        let title = Paragraph::new(Line::from(Span::styled(
            " SKYHOP ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_row);
    }
}

fn cube_style(opacity: f64) -> Style {
    let style = Style::default().fg(Color::Blue);
    if opacity < 0.45 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, footer: &str) {
    let paragraph = Paragraph::new(footer)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Stack toasts upward from the bottom-right corner of `area`.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &Toasts, now: Instant) {
    let mut bottom = area.y + area.height.saturating_sub(1);
    for toast in toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        let opacity = toast.opacity(now);
        if opacity <= 0.05 {
            continue;
        }
        let width = (toast.message.chars().count() as u16 + 4).min(area.width);
        let height = 3u16;
        if bottom < area.y + height {
            break;
        }
        let toast_area = Rect::new(
            area.x + area.width.saturating_sub(width + 2),
            bottom - height,
            width,
            height,
        );

        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let mut style = Style::default().fg(Color::White).bg(color);
        if opacity < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }

        frame.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(toast.message.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(paragraph, toast_area);

        bottom -= height;
    }
}
