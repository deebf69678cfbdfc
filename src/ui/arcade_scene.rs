//! UI rendering for the arcade.

use crate::game::{ArcadeEngine, Phase};
use crate::store::BestScoreStore;
use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_overlay_box, render_status_bar,
};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[
    ("[Space/Click]", "Jump"),
    ("[R]", "Start"),
    ("[Tab]", "Contact"),
    ("[Q]", "Quit"),
];

/// Render the arcade scene: drawing surface, labels panel, status bar.
pub fn render_arcade<S: BestScoreStore, R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &ArcadeEngine<S, R>,
) {
    let layout = create_game_layout(frame, area, " Skyhop ", Color::Cyan);

    render_surface(frame, layout.content, engine);
    render_status_bar_content(frame, layout.status_bar, engine);
    render_info_panel(frame, layout.info_panel, engine);

    if engine.is_game_over() {
        render_overlay_box(
            frame,
            layout.content,
            Color::Red,
            "GAME OVER",
            &[
                format!("Final score: {}", engine.score()),
                format!("Best: {}", engine.best_score()),
                "[Space] fly again".to_string(),
            ],
        );
    }
}

/// Draw the full surface: grid, pipes, bird, score.
///
/// The canvas y axis points up, so world y is flipped against the field
/// height.
fn render_surface<S: BestScoreStore, R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &ArcadeEngine<S, R>,
) {
    let config = engine.config();
    let width = config.field_width;
    let height = config.field_height;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            draw_grid(ctx, width, height, config.grid_cell, engine.background_offset());
            ctx.layer();

            for pipe in engine.pipes() {
                let top_height = pipe.gap_top;
                let bottom_height = height - pipe.gap_bottom();
                fill_rect(ctx, pipe.x, height - top_height, pipe.width, top_height, Color::Green);
                fill_rect(ctx, pipe.x, 0.0, pipe.width, bottom_height, Color::Green);
            }

            let bird = engine.bird();
            ctx.draw(&Circle {
                x: bird.x,
                y: height - bird.y,
                radius: bird.radius,
                color: Color::Yellow,
            });
            ctx.layer();

            match engine.phase() {
                Phase::Idle => {
                    ctx.print(
                        width * 0.25,
                        height * 0.5,
                        Line::from(Span::styled(
                            "Press Space to start",
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        )),
                    );
                }
                Phase::Running | Phase::GameOver => {
                    ctx.print(
                        width * 0.5,
                        height * 0.95,
                        Line::from(Span::styled(
                            engine.score().to_string(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        )),
                    );
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_grid(ctx: &mut Context, width: f64, height: f64, cell: f64, offset: f64) {
    if cell <= 0.0 {
        return;
    }
    let mut x = -offset;
    while x <= width {
        if x >= 0.0 {
            ctx.draw(&segment(x, 0.0, x, height, Color::DarkGray));
        }
        x += cell;
    }
    let mut y = 0.0;
    while y <= height {
        ctx.draw(&segment(0.0, y, width, y, Color::DarkGray));
        y += cell;
    }
}

fn segment(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> CanvasLine {
    CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    }
}

/// Outline plus vertical hatching so pipes read as solid.
fn fill_rect(ctx: &mut Context, x: f64, y: f64, width: f64, height: f64, color: Color) {
    if height <= 0.0 {
        return;
    }
    ctx.draw(&Rectangle {
        x,
        y,
        width,
        height,
        color,
    });
    let mut hatch = x + 4.0;
    while hatch < x + width {
        ctx.draw(&segment(hatch, y, hatch, y + height, color));
        hatch += 4.0;
    }
}

fn render_status_bar_content<S: BestScoreStore, R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &ArcadeEngine<S, R>,
) {
    let (text, color) = match engine.phase() {
        Phase::Idle => ("Press Space to start!".to_string(), Color::Yellow),
        Phase::Running => (format!("Flying - {} pipes", engine.score()), Color::Green),
        Phase::GameOver => (
            format!("Crashed with {} pipes. Space to retry.", engine.score()),
            Color::Red,
        ),
    };
    render_status_bar(frame, area, &text, color, CONTROLS);
}

/// Labels mirrored beside the surface: score, best, start button.
fn render_info_panel<S: BestScoreStore, R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &ArcadeEngine<S, R>,
) {
    let inner = render_info_panel_frame(frame, area, " Scores ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let hud = engine.hud();
    let button_style = if engine.is_running() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", hud.score),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", hud.best),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("[ {} ]", hud.start_button), button_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
