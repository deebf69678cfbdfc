//! Screen layout and the top-level draw call.

pub mod arcade_scene;
pub mod contact_scene;
pub mod game_common;
pub mod page_chrome;

use crate::app::{App, Tab};
use crate::store::BestScoreStore;
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::time::Instant;

/// Height of the cube banner, including its bottom border.
pub const BANNER_HEIGHT: u16 = 5;

/// Top-level screen areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub banner: Rect,
    pub main: Rect,
    pub footer: Rect,
}

pub fn app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);
    AppLayout {
        banner: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Screen rect of the arcade drawing surface, for mouse hit-testing.
pub fn arcade_surface(area: Rect) -> Rect {
    game_common::game_layout_areas(app_layout(area).main).content
}

/// Main UI drawing function.
pub fn draw_app<S: BestScoreStore, R: Rng>(frame: &mut Frame, app: &App<S, R>, now: Instant) {
    let size = frame.size();
    let layout = app_layout(size);

    page_chrome::render_banner(frame, layout.banner, &app.cubes, app.elapsed_secs(now));

    match app.tab {
        Tab::Arcade => arcade_scene::render_arcade(frame, layout.main, &app.engine),
        Tab::Contact => contact_scene::render_contact(frame, layout.main, &app.contact),
    }

    page_chrome::render_footer(frame, layout.footer, &app.footer);
    page_chrome::render_toasts(frame, layout.main, &app.toasts, now);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_stacks_vertically() {
        let layout = app_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.banner.height, BANNER_HEIGHT);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.main.y, BANNER_HEIGHT);
        assert_eq!(layout.main.height, 40 - BANNER_HEIGHT - 1);
    }

    #[test]
    fn test_arcade_surface_inside_main() {
        let area = Rect::new(0, 0, 100, 40);
        let surface = arcade_surface(area);
        let main = app_layout(area).main;
        assert!(surface.x > main.x && surface.y > main.y);
        assert!(surface.right() < main.right());
        assert!(surface.bottom() < main.bottom());
    }
}
