//! Skyhop arcade data structures.
//!
//! Coordinates are surface pixels: x grows to the right, y grows downward,
//! and (0, 0) is the top-left corner of the drawing surface.

use serde::{Deserialize, Serialize};

/// Tunable constants for one arcade field.
///
/// Every value is fixed for the lifetime of an engine; sessions started with
/// `start()` or `restart()` all use the same config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Drawing surface width in pixels. Obstacles spawn at this x.
    pub field_width: f64,
    /// Drawing surface height in pixels. Reaching it with the bird is fatal.
    pub field_height: f64,
    /// Fixed horizontal position of the bird's centre.
    pub bird_x: f64,
    /// Vertical position of the bird's centre at session start.
    pub bird_start_y: f64,
    pub bird_radius: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity the bird is set to on jump (negative = upward).
    pub jump_impulse: f64,
    /// Pixels every obstacle moves left per tick.
    pub scroll_speed: f64,
    pub pipe_width: f64,
    pub gap_height: f64,
    /// A new obstacle spawns once the newest one is left of
    /// `field_width - pipe_spacing`.
    pub pipe_spacing: f64,
    /// Minimum distance between a gap and the top or bottom of the field.
    pub gap_margin: f64,
    /// Size of the scrolling background grid squares.
    pub grid_cell: f64,
    /// Key the best score is persisted under.
    pub best_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 500.0,
            bird_x: 80.0,
            bird_start_y: 250.0,
            bird_radius: 12.0,
            gravity: 0.25,
            jump_impulse: -5.5,
            scroll_speed: 2.0,
            pipe_width: 52.0,
            gap_height: 140.0,
            pipe_spacing: 280.0,
            gap_margin: 50.0,
            grid_cell: 40.0,
            best_score_key: "flappyHighScore".to_string(),
        }
    }
}

impl GameConfig {
    /// Range the top edge of a gap is drawn from: `[min, max]`.
    ///
    /// Collapses to `[margin, margin]` when the field is too short for the
    /// margins, so a draw can never land outside the field.
    pub fn gap_top_range(&self) -> (f64, f64) {
        let min = self.gap_margin;
        let max = self.field_height - self.gap_height - self.gap_margin;
        if max > min {
            (min, max)
        } else {
            (min, min)
        }
    }
}

/// The player-controlled bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Vertical position of the centre.
    pub y: f64,
    pub radius: f64,
    /// Current vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y,
            radius: config.bird_radius,
            velocity: 0.0,
        }
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }

    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn right(&self) -> f64 {
        self.x + self.radius
    }
}

/// A single obstacle (top + bottom pipe with a gap between them).
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    /// Top edge of the gap.
    pub gap_top: f64,
    pub gap_height: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

impl Pipe {
    /// Right edge; the pipe is behind the bird once this is left of it.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap_height
    }

    /// True when the bird overlaps the solid part of this pipe.
    pub fn hits(&self, bird: &Bird) -> bool {
        let overlaps_x = bird.right() > self.x && bird.left() < self.trailing_edge();
        overlaps_x && (bird.top() < self.gap_top || bird.bottom() > self.gap_bottom())
    }
}

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Engine created, nothing played yet.
    Idle,
    Running,
    /// Terminal collision happened; score holds the final score.
    GameOver,
}

/// What a call to `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The handle was not the pending frame (cancelled or already fired).
    Stale,
    /// The simulation advanced and the next frame is scheduled.
    Advanced { scored: u32 },
    /// A terminal collision ended the session this tick.
    GameOver { score: u32 },
}

/// Text mirrored into the labels beside the drawing surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HudLabels {
    pub score: String,
    pub best: String,
    pub start_button: String,
}

impl HudLabels {
    pub fn new(score: u32, best: u32, phase: Phase) -> Self {
        let start_button = match phase {
            Phase::Idle => "Start",
            Phase::Running | Phase::GameOver => "Restart",
        };
        Self {
            score: format!("Score: {}", score),
            best: format!("Best: {}", best),
            start_button: start_button.to_string(),
        }
    }
}
