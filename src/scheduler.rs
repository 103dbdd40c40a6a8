//! Timed driving of a [`Simulation`]
//!
//! The core never schedules itself. The scheduler owns the step rate and a
//! running/paused flag, and refuses manual steps while a timed run is
//! active so two drivers never step the same generation.

use crate::error::SchedulerError;
use crate::game_of_life::Simulation;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Steps per second, never below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct StepRate(u32);

impl StepRate {
    pub const MIN: u32 = 1;
    pub const DEFAULT: u32 = 15;

    /// Clamp `steps_per_second` to at least [`StepRate::MIN`]
    pub fn new(steps_per_second: i64) -> Self {
        let clamped = steps_per_second.clamp(Self::MIN as i64, u32::MAX as i64) as u32;
        Self(clamped)
    }

    pub fn steps_per_second(self) -> u32 {
        self.0
    }

    /// Delay between two scheduled steps
    pub fn interval(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}

impl Default for StepRate {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for StepRate {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<StepRate> for i64 {
    fn from(rate: StepRate) -> Self {
        rate.0 as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Serialises every call to [`Simulation::step`] from one driver
#[derive(Debug)]
pub struct Scheduler {
    rate: StepRate,
    state: RunState,
}

impl Scheduler {
    pub fn new(rate: StepRate) -> Self {
        Self {
            rate,
            state: RunState::Paused,
        }
    }

    pub fn rate(&self) -> StepRate {
        self.rate
    }

    /// Change the rate; refused while running
    pub fn set_rate(&mut self, rate: StepRate) -> Result<(), SchedulerError> {
        if self.is_running() {
            return Err(SchedulerError::Busy);
        }
        self.rate = rate;
        debug!(steps_per_second = rate.steps_per_second(), "step rate set");
        Ok(())
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self) {
        self.state = RunState::Running;
        info!(steps_per_second = self.rate.steps_per_second(), "run started");
    }

    pub fn pause(&mut self) {
        if self.is_running() {
            info!("run paused");
        }
        self.state = RunState::Paused;
    }

    /// One user-requested step; only allowed while paused
    pub fn manual_step(&mut self, sim: &mut Simulation) -> Result<u64, SchedulerError> {
        if self.is_running() {
            return Err(SchedulerError::Busy);
        }
        Ok(sim.step()?)
    }

    /// One timer-driven step. Does nothing while paused.
    pub fn tick(&mut self, sim: &mut Simulation) -> Result<Option<u64>, SchedulerError> {
        if !self.is_running() {
            return Ok(None);
        }
        Ok(Some(sim.step()?))
    }

    /// Step `sim` up to `generations` times at the configured rate.
    ///
    /// `on_step` sees the simulation after every step, the place a renderer
    /// hooks in. Setting `cancel` stops the loop before the next step. The
    /// scheduler is paused again on return, and the number of steps taken is
    /// reported.
    pub fn run<F>(
        &mut self,
        sim: &mut Simulation,
        generations: usize,
        cancel: &AtomicBool,
        mut on_step: F,
    ) -> Result<usize, SchedulerError>
    where
        F: FnMut(&Simulation),
    {
        self.start();
        let interval = self.rate.interval();
        let mut taken = 0;

        let outcome = loop {
            if taken == generations || cancel.load(Ordering::Relaxed) {
                break Ok(taken);
            }
            match self.tick(sim) {
                Ok(_) => {
                    taken += 1;
                    on_step(sim);
                }
                Err(err) => break Err(err),
            }
            if taken < generations {
                std::thread::sleep(interval);
            }
        };

        self.pause();
        info!(steps = taken, generation = sim.generation(), "run finished");
        outcome
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(StepRate::default())
    }
}
