use super::launch::LaunchTuning;
use super::target::TargetZone;

/// Lab variant: tuning, target and an optional fixed muzzle speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPreset {
    pub tuning: LaunchTuning,
    pub target: TargetZone,
    /// When set, the launcher ignores the requested speed.
    pub fixed_speed: Option<f64>,
}

impl ShotPreset {
    pub fn basket() -> Self {
        Self {
            tuning: LaunchTuning::default(),
            target: TargetZone::basket(),
            fixed_speed: None,
        }
    }

    pub fn inclined_gun() -> Self {
        Self {
            tuning: LaunchTuning::default(),
            target: TargetZone::ground_block(),
            fixed_speed: Some(50.0),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "basket" => Some(Self::basket()),
            "inclined-gun" | "inclined_gun" | "gun" => Some(Self::inclined_gun()),
            _ => None,
        }
    }

    pub fn speed_for(&self, requested: f64) -> f64 {
        self.fixed_speed.unwrap_or(requested)
    }
}

impl Default for ShotPreset {
    fn default() -> Self {
        Self::basket()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlightState, Outcome};

    #[test]
    fn when_preset_name_is_known_then_it_resolves() {
        assert_eq!(ShotPreset::from_name("basket"), Some(ShotPreset::basket()));
        assert_eq!(
            ShotPreset::from_name(" Inclined-Gun "),
            Some(ShotPreset::inclined_gun())
        );
        assert_eq!(ShotPreset::from_name("cannon"), None);
    }

    #[test]
    fn when_speed_is_fixed_then_requested_speed_is_ignored() {
        assert_eq!(ShotPreset::inclined_gun().speed_for(12.0), 50.0);
        assert_eq!(ShotPreset::basket().speed_for(12.0), 12.0);
    }

    #[test]
    fn when_gun_fires_at_twenty_degrees_then_block_is_hit() {
        let preset = ShotPreset::inclined_gun();
        let mut state =
            FlightState::launch(20.0, preset.speed_for(0.0), &preset.tuning, preset.target);

        let summary = (0..10_000)
            .find_map(|_| state.tick(preset.tuning.time_step))
            .expect("flight should finish");

        assert_eq!(state.outcome(), Outcome::Hit);
        assert!(summary.range >= 145.75 && summary.range <= 150.25);
    }
}
