use crate::domain::errors::LaunchError;

/// Launch tuning for the projectile lab.
///
/// Keep this separate from runtime configuration (tick interval, service URLs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchTuning {
    /// Smallest accepted launch angle in degrees.
    pub min_angle_deg: f64,

    /// Largest accepted launch angle in degrees.
    pub max_angle_deg: f64,

    /// Slowest accepted launch speed in meters per second.
    pub min_speed: f64,

    /// Fastest accepted launch speed in meters per second.
    pub max_speed: f64,

    /// Simulated seconds advanced per tick.
    pub time_step: f64,

    /// Downward acceleration in meters per second squared.
    pub gravity: f64,

    /// Projectile collision radius in meters.
    pub projectile_radius: f64,
}

impl Default for LaunchTuning {
    fn default() -> Self {
        Self {
            min_angle_deg: 5.0,
            max_angle_deg: 85.0,
            min_speed: 1.0,
            max_speed: 60.0,
            time_step: 0.05,
            gravity: 9.8,
            projectile_radius: 0.25,
        }
    }
}

impl LaunchTuning {
    pub fn validate(&self, angle_deg: f64, speed: f64) -> Result<(), LaunchError> {
        if !angle_deg.is_finite() || !(self.min_angle_deg..=self.max_angle_deg).contains(&angle_deg)
        {
            return Err(LaunchError::AngleOutOfRange {
                angle_deg,
                min: self.min_angle_deg,
                max: self.max_angle_deg,
            });
        }
        if !speed.is_finite() || !(self.min_speed..=self.max_speed).contains(&speed) {
            return Err(LaunchError::SpeedOutOfRange {
                speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }

    /// Slider semantics: out-of-range or garbage input snaps into the range.
    pub fn clamp_angle(&self, angle_deg: f64) -> f64 {
        if angle_deg.is_nan() {
            return self.min_angle_deg;
        }
        angle_deg.clamp(self.min_angle_deg, self.max_angle_deg)
    }
}
