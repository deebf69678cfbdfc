//! Shared UI components: panel layout, status bar, overlay boxes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the info panel on the right of a scene.
pub const INFO_PANEL_WIDTH: u16 = 24;

/// Scene areas: the surface on the left, two status rows under it, and a
/// bordered labels panel on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Split a scene's outer border into its areas without drawing anything.
///
/// The event loop uses the same areas to hit-test mouse clicks.
pub fn game_layout_areas(area: Rect) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let [left, info_panel] = split2(
        inner,
        Direction::Horizontal,
        Constraint::Min(20),
        Constraint::Length(INFO_PANEL_WIDTH),
    );
    let [content, status_bar] = split2(
        left,
        Direction::Vertical,
        Constraint::Min(6),
        Constraint::Length(2),
    );
    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split2(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Wipe `area`, frame it with a titled border, and hand back its layout.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                title,
                Style::default().fg(border_color).add_modifier(Modifier::BOLD),
            )),
        area,
    );
    game_layout_areas(area)
}

/// Status message on the first row, key hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    let mut rows = vec![Line::from(Span::styled(
        status_text,
        Style::default().fg(status_color),
    ))];

    if !controls.is_empty() {
        let hints = controls.iter().enumerate().flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        });
        rows.push(Line::from(hints.collect::<Vec<_>>()));
    }

    frame.render_widget(Paragraph::new(rows).alignment(Alignment::Center), area);
}

/// Side panel border with a dim outline; returns the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(Color::Gray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A `width` x `height` rect centred in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a small bordered box in the middle of `area`, leaving the rest
/// of the area visible behind it.
pub fn render_overlay_box(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    lines: &[String],
) {
    let height = lines.len() as u16 + 4;
    let width = lines
        .iter()
        .map(|l| l.chars().count() as u16)
        .chain(std::iter::once(title.chars().count() as u16))
        .max()
        .unwrap_or(0)
        + 6;
    let box_area = centered_rect(area, width, height);
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(
        lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::White)))),
    );
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_inside_border() {
        let layout = game_layout_areas(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.info_panel.width, INFO_PANEL_WIDTH);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(layout.content.x, 1);
        assert_eq!(layout.content.y, 1);
        assert_eq!(layout.content.width, 80 - 2 - INFO_PANEL_WIDTH);
        assert_eq!(layout.content.height, 30 - 2 - 2);
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(10, 10, 20, 6);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(15, 11, 10, 4));
        assert_eq!(centered_rect(area, 50, 50), area);
    }
}
