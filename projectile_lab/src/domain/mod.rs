// Domain layer: flight simulation types and rules.

pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::LaunchError;
pub use state::{FlightSnapshot, FlightState, FlightSummary, Outcome, Position};
pub use tuning::{LaunchTuning, ShotPreset, TargetZone};
