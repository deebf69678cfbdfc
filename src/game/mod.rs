//! Skyhop arcade: a Flappy Bird style game.
//!
//! The player keeps a bird aloft between scrolling pipe pairs. Gravity pulls
//! the bird down every tick, a jump sets its velocity upward, and touching a
//! pipe or the floor ends the session. Passing a pipe scores a point.

pub mod logic;
pub mod scheduler;
pub mod types;

pub use logic::*;
pub use scheduler::*;
pub use types::*;
