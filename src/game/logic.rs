//! Game loop engine for the Skyhop arcade.
//!
//! One `ArcadeEngine` owns a whole play field: the bird, the pipes, the
//! score, the persisted best score, and the frame that is scheduled next.
//! The host drives it by handing the pending frame back to `tick` once per
//! display refresh and renders whatever state the tick left behind.

use super::scheduler::{FrameHandle, FrameScheduler};
use super::types::{Bird, GameConfig, HudLabels, Phase, Pipe, TickOutcome};
use crate::store::BestScoreStore;
use rand::Rng;
use tracing::{debug, info, trace, warn};

pub struct ArcadeEngine<S: BestScoreStore, R: Rng> {
    config: GameConfig,
    store: S,
    rng: R,
    scheduler: FrameScheduler,
    bird: Bird,
    /// Ordered by ascending x, which is also spawn order.
    pipes: Vec<Pipe>,
    phase: Phase,
    score: u32,
    best_score: u32,
    last_tick_ms: Option<f64>,
    background_offset: f64,
    hud: HudLabels,
}

impl<S: BestScoreStore, R: Rng> ArcadeEngine<S, R> {
    /// Create an idle engine, reading the best score from `store`.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let best_score = store.load(&config.best_score_key).unwrap_or(0);
        debug!(best_score, "arcade engine initialised");
        let mut engine = Self {
            bird: Bird::new(&config),
            config,
            store,
            rng,
            scheduler: FrameScheduler::new(),
            pipes: Vec::new(),
            phase: Phase::Idle,
            score: 0,
            best_score,
            last_tick_ms: None,
            background_offset: 0.0,
            hud: HudLabels::default(),
        };
        engine.sync_hud();
        engine
    }

    /// Begin a session from idle or game over. No-op while running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            debug!("start ignored, session already running");
            return;
        }
        self.begin_session();
    }

    /// Abandon whatever is in progress and begin a fresh session.
    pub fn restart(&mut self) {
        if let Some(cancelled) = self.scheduler.cancel() {
            debug!(frame = cancelled.id(), "cancelled pending frame for restart");
        }
        self.begin_session();
    }

    /// Set the bird's velocity to the jump impulse. No-op unless running.
    pub fn jump(&mut self) {
        if self.phase == Phase::Running {
            self.bird.velocity = self.config.jump_impulse;
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `handle` must be the engine's pending frame; anything else (a frame
    /// cancelled by `restart`, or one that already ran) is ignored without
    /// touching state.
    pub fn tick(&mut self, handle: FrameHandle, timestamp_ms: f64) -> TickOutcome {
        if !self.scheduler.fire(handle) || self.phase != Phase::Running {
            trace!(frame = handle.id(), "ignoring stale frame");
            return TickOutcome::Stale;
        }

        let frame_ms = self.last_tick_ms.map(|last| timestamp_ms - last);
        self.last_tick_ms = Some(timestamp_ms);
        trace!(frame = handle.id(), ?frame_ms, y = self.bird.y, "tick");

        if self.config.grid_cell > 0.0 {
            self.background_offset =
                (self.background_offset + self.config.scroll_speed) % self.config.grid_cell;
        }

        // A floor hit still lets this tick scroll and score before it ends
        let floor_hit = self.integrate_bird();

        for pipe in &mut self.pipes {
            pipe.x -= self.config.scroll_speed;
        }

        let scored = self.score_passed_pipes();
        self.recycle_pipes();

        let pipe_hit = self.pipes.iter().any(|pipe| pipe.hits(&self.bird));
        if floor_hit || pipe_hit {
            return self.end_session();
        }

        self.scheduler.request();
        self.sync_hud();
        TickOutcome::Advanced { scored }
    }

    /// Run the pending frame, if there is one.
    pub fn run_pending_frame(&mut self, timestamp_ms: f64) -> Option<TickOutcome> {
        let handle = self.scheduler.pending()?;
        Some(self.tick(handle, timestamp_ms))
    }

    /// Gravity step plus boundary handling. Returns true on a floor hit.
    fn integrate_bird(&mut self) -> bool {
        let bird = &mut self.bird;
        bird.velocity += self.config.gravity;
        bird.y += bird.velocity;

        if bird.y < bird.radius {
            bird.y = bird.radius;
            bird.velocity = 0.0;
        }

        let floor = self.config.field_height;
        if bird.bottom() >= floor {
            bird.y = floor - bird.radius;
            return true;
        }
        false
    }

    fn score_passed_pipes(&mut self) -> u32 {
        let mut scored = 0;
        for pipe in &mut self.pipes {
            if !pipe.scored && pipe.trailing_edge() < self.bird.x {
                pipe.scored = true;
                scored += 1;
            }
        }
        if scored > 0 {
            self.score += scored;
            if self.score > self.best_score {
                self.best_score = self.score;
                info!(best_score = self.best_score, "new best score");
                self.persist_best_score();
            }
        }
        scored
    }

    /// Drop pipes that left the field and spawn the next one when due.
    fn recycle_pipes(&mut self) {
        self.pipes.retain(|pipe| pipe.trailing_edge() >= 0.0);

        let spawn_line = self.config.field_width - self.config.pipe_spacing;
        let due = self.pipes.last().map_or(true, |last| last.x < spawn_line);
        if due {
            self.spawn_pipe();
        }
    }

    fn spawn_pipe(&mut self) {
        let (min, max) = self.config.gap_top_range();
        let gap_top = if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        };
        self.pipes.push(Pipe {
            x: self.config.field_width,
            width: self.config.pipe_width,
            gap_top,
            gap_height: self.config.gap_height,
            scored: false,
        });
    }

    fn persist_best_score(&mut self) {
        let key = self.config.best_score_key.clone();
        if let Err(e) = self.store.save(&key, self.best_score) {
            warn!(error = %e, best_score = self.best_score, "failed to persist best score");
        }
    }

    fn begin_session(&mut self) {
        self.scheduler.cancel();
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.spawn_pipe();
        self.score = 0;
        self.phase = Phase::Running;
        self.last_tick_ms = None;
        self.background_offset = 0.0;
        let frame = self.scheduler.request();
        self.sync_hud();
        debug!(frame = frame.id(), best_score = self.best_score, "session started");
    }

    fn end_session(&mut self) -> TickOutcome {
        self.scheduler.cancel();
        self.phase = Phase::GameOver;
        self.sync_hud();
        info!(score = self.score, best_score = self.best_score, "game over");
        TickOutcome::GameOver { score: self.score }
    }

    fn sync_hud(&mut self) {
        self.hud = HudLabels::new(self.score, self.best_score, self.phase);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn background_offset(&self) -> f64 {
        self.background_offset
    }

    pub fn last_tick_ms(&self) -> Option<f64> {
        self.last_tick_ms
    }

    pub fn hud(&self) -> &HudLabels {
        &self.hud
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.scheduler.pending()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
