use std::fmt;

// Domain-level errors for launching a run.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchError {
    AngleOutOfRange { angle_deg: f64, min: f64, max: f64 },
    SpeedOutOfRange { speed: f64, min: f64, max: f64 },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AngleOutOfRange { angle_deg, min, max } => {
                write!(f, "angle {angle_deg} is outside {min}..={max} degrees")
            }
            Self::SpeedOutOfRange { speed, min, max } => {
                write!(f, "speed {speed} is outside {min}..={max} m/s")
            }
        }
    }
}

impl std::error::Error for LaunchError {}
