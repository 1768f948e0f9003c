// Use-case level outputs for the launcher.

use crate::domain::{FlightSnapshot, FlightSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum LaunchStatus {
    Idle,
    InFlight {
        run_id: u64,
        snapshot: FlightSnapshot,
    },
    Landed {
        run_id: u64,
        snapshot: FlightSnapshot,
        summary: FlightSummary,
    },
}

impl LaunchStatus {
    pub fn run_id(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::InFlight { run_id, .. } | Self::Landed { run_id, .. } => Some(*run_id),
        }
    }

    pub fn snapshot(&self) -> Option<&FlightSnapshot> {
        match self {
            Self::Idle => None,
            Self::InFlight { snapshot, .. } | Self::Landed { snapshot, .. } => Some(snapshot),
        }
    }
}
