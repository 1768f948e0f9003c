use crate::domain::state::{FlightState, FlightSummary, Outcome, Position};
use crate::domain::tuning::TargetZone;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightConfig {
    pub gravity: f64,           // m/s^2
    pub projectile_radius: f64, // m
    pub target: TargetZone,
}

// Closed-form position at time `t`; no velocity integration.
pub fn sample_position(vx: f64, vy: f64, gravity: f64, t: f64) -> Position {
    Position {
        x: vx * t,
        y: vy * t - 0.5 * gravity * t * t,
    }
}

// Zone grown by the radius on every side, then a point-in-rectangle test.
// Corners are looser than a true circle/rectangle distance check.
pub fn overlaps_target(position: Position, radius: f64, zone: TargetZone) -> bool {
    position.x + radius >= zone.left
        && position.x - radius <= zone.right
        && position.y + radius >= zone.bottom
        && position.y - radius <= zone.top
}

pub fn tick_flight(state: &mut FlightState, dt: f64) -> Option<FlightSummary> {
    if state.outcome.is_terminal() || !(dt.is_finite() && dt > 0.0) {
        return None;
    }

    state.elapsed += dt;
    state.tick += 1;
    let t = state.elapsed;
    let cfg = state.cfg;

    state.position = sample_position(state.vx, state.vy, cfg.gravity, t);
    state.max_height = state.max_height.max(state.position.y);

    // Hit wins over a same-tick ground crossing.
    if overlaps_target(state.position, cfg.projectile_radius, cfg.target) {
        state.outcome = Outcome::Hit;
    } else if state.position.y < 0.0 && t > 0.0 {
        state.outcome = Outcome::Miss;
    }

    if state.outcome.is_terminal() {
        debug!(
            tick = state.tick,
            outcome = ?state.outcome,
            x = state.position.x,
            t,
            "flight finished"
        );
    }

    state.summary()
}
