// Domain-level flight state, summaries and snapshots.

use crate::domain::systems::flight::{self, FlightConfig};
use crate::domain::tuning::{LaunchTuning, TargetZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Hit,
    Miss,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// Final numbers of a finished run, shaped like the persisted record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    pub angle: f64,
    pub speed: f64,
    pub max_height: f64,
    pub range: f64,
    pub time: f64,
    pub scored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSnapshot {
    pub tick: u64,
    pub position: Position,
    pub max_height: f64,
    pub elapsed: f64,
    pub outcome: Outcome,
}

// One projectile run, advanced only through `tick`.
#[derive(Debug, Clone)]
pub struct FlightState {
    pub(crate) angle_deg: f64,
    pub(crate) speed: f64,
    pub(crate) vx: f64,
    pub(crate) vy: f64,
    pub(crate) position: Position,
    pub(crate) max_height: f64,
    pub(crate) elapsed: f64,
    pub(crate) tick: u64,
    pub(crate) outcome: Outcome,
    pub(crate) cfg: FlightConfig,
}

impl FlightState {
    // No range checks here; `LaunchTuning::validate` guards user input.
    pub fn launch(angle_deg: f64, speed: f64, tuning: &LaunchTuning, target: TargetZone) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            angle_deg,
            speed,
            vx: speed * rad.cos(),
            vy: speed * rad.sin(),
            position: Position::default(),
            max_height: 0.0,
            elapsed: 0.0,
            tick: 0,
            outcome: Outcome::Running,
            cfg: FlightConfig {
                gravity: tuning.gravity,
                projectile_radius: tuning.projectile_radius,
                target,
            },
        }
    }

    /// Advances the run by `dt` seconds and returns the summary on the tick
    /// that reaches a terminal outcome.
    pub fn tick(&mut self, dt: f64) -> Option<FlightSummary> {
        flight::tick_flight(self, dt)
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn target(&self) -> TargetZone {
        self.cfg.target
    }

    pub fn summary(&self) -> Option<FlightSummary> {
        if !self.outcome.is_terminal() {
            return None;
        }
        Some(FlightSummary {
            angle: self.angle_deg,
            speed: self.speed,
            max_height: self.max_height,
            range: self.position.x,
            time: self.elapsed,
            scored: self.outcome == Outcome::Hit,
        })
    }
}

impl From<&FlightState> for FlightSnapshot {
    fn from(s: &FlightState) -> Self {
        Self {
            tick: s.tick,
            position: s.position,
            max_height: s.max_height,
            elapsed: s.elapsed,
            outcome: s.outcome,
        }
    }
}
