//! Game loop controller
//!
//! Owns the world for one play session and drives it one frame at a time:
//! tick, render, then ask the host for the next frame while the run lasts.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{Action, FrameHandle, FrameScheduler, KeyState};
use crate::renderer::{RenderSurface, render_frame};
use crate::sim::{PlayArea, TickInput, TickReport, World, tick};
use crate::tuning::Tuning;

/// One play session: the current world plus loop bookkeeping
#[derive(Debug)]
pub struct GameSession {
    world: World,
    area: PlayArea,
    tuning: Tuning,
    input: TickInput,
    pending_frame: Option<FrameHandle>,
    /// Seeds successive worlds so resets stay reproducible
    seed_rng: Pcg32,
}

impl GameSession {
    pub fn new(area: PlayArea, tuning: Tuning, seed: u64) -> Self {
        let mut seed_rng = Pcg32::seed_from_u64(seed);
        let world = World::new(area, tuning.clone(), seed_rng.random());
        log::info!(
            "Session started: {}x{} play area, seed {}",
            area.width,
            area.height,
            world.seed
        );
        Self {
            world,
            area,
            tuning,
            input: TickInput::default(),
            pending_frame: None,
            seed_rng,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Begin the loop. A no-op if a frame is already pending.
    pub fn start(&mut self, sched: &mut dyn FrameScheduler) {
        if self.pending_frame.is_none() && self.world.is_running() {
            self.schedule(sched);
        }
    }

    /// Hold or release the jump action
    pub fn set_jump(&mut self, held: bool) {
        self.input.jump = held;
    }

    /// Route a host key event. Returns true if the key is bound to an action.
    pub fn handle_key(&mut self, key: &str, state: KeyState, sched: &mut dyn FrameScheduler) -> bool {
        let Some(action) = Action::from_key(key) else {
            return false;
        };

        match (action, state) {
            (Action::Jump, KeyState::Pressed) => self.set_jump(true),
            (Action::Jump, KeyState::Released) => self.set_jump(false),
            (Action::Reset, KeyState::Pressed) => {
                if !self.world.is_running() {
                    self.reset(sched);
                }
            }
            (Action::Reset, KeyState::Released) => {}
        }
        true
    }

    /// Run one scheduled frame: tick, draw, and reschedule while running
    pub fn frame(
        &mut self,
        sched: &mut dyn FrameScheduler,
        surface: &mut dyn RenderSurface,
    ) -> TickReport {
        self.pending_frame = None;

        let report = tick(&mut self.world, &self.input);
        render_frame(&self.world, surface);

        if self.world.is_running() {
            self.schedule(sched);
        } else if report.ended {
            log::info!(
                "Game over after {} ticks, score {}",
                self.world.time_ticks,
                self.world.score
            );
        }

        report
    }

    /// Throw the world away and start a fresh run
    pub fn reset(&mut self, sched: &mut dyn FrameScheduler) {
        self.stop(sched);
        self.world = World::new(self.area, self.tuning.clone(), self.seed_rng.random());
        self.input = TickInput::default();
        self.schedule(sched);
        log::info!("Reset: new world with seed {}", self.world.seed);
    }

    fn schedule(&mut self, sched: &mut dyn FrameScheduler) {
        self.pending_frame = sched.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("Host refused a frame; the loop is paused until restarted");
        }
    }

    /// Cancel the pending frame, if any
    pub fn stop(&mut self, sched: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            sched.cancel_frame(handle);
        }
    }
}
