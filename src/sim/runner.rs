use crate::{render::Surface, sim::AgentSimulation};
use getset::CopyGetters;

/// Drives an [`AgentSimulation`] against a host frame scheduler. The host
/// calls [`Runner::on_frame`] once per display frame; while running, each
/// call performs exactly one tick followed by one render, in that order,
/// and reports whether the next frame should be scheduled.
///
/// Stopping only parks the loop: restarting resumes the same population.
/// Changing parameters means building a new simulation and a new runner.
#[derive(CopyGetters)]
pub struct Runner<S> {
    sim: AgentSimulation,
    surface: S,
    #[getset(get_copy = "pub")]
    running: bool,
    #[getset(get_copy = "pub")]
    frames: u64,
}

impl<S: Surface> Runner<S> {
    pub fn new(sim: AgentSimulation, surface: S) -> Self {
        Runner {
            sim,
            surface,
            running: false,
            frames: 0,
        }
    }

    /// Begin the tick+render cycle. Idempotent.
    pub fn start_simulation(&mut self) {
        if !self.running {
            self.running = true;
            log::info!(
                "simulation started: {} agents, model {}",
                self.sim.count(),
                self.sim.model()
            );
        }
    }

    /// Halt the cycle. Idempotent and safe to call when no loop is active;
    /// any already-scheduled frame becomes a no-op.
    pub fn stop_simulation(&mut self) {
        if self.running {
            self.running = false;
            log::info!("simulation stopped after {} frames", self.frames);
        }
    }

    /// One scheduler callback. Returns true when a next frame should be
    /// scheduled.
    pub fn on_frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.sim.step();
        self.sim.render(&mut self.surface);
        self.frames += 1;
        return true;
    }

    /// The simulation being driven.
    pub fn sim(&self) -> &AgentSimulation {
        &self.sim
    }

    /// The surface being rendered into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear the runner apart, recovering the simulation and the surface.
    pub fn into_parts(self) -> (AgentSimulation, S) {
        (self.sim, self.surface)
    }
}
