use std::{env, time::Duration};

use crate::domain::ShotPreset;

// Runtime constants for a lab session (not flight tuning).

pub fn results_service_url() -> String {
    env::var("RESULTS_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:5001".to_string())
}

pub fn results_timeout() -> Duration {
    Duration::from_millis(parse_or("RESULTS_TIMEOUT_MS", 1500))
}

pub fn launch_angle() -> f64 {
    parse_or("LAUNCH_ANGLE", 45.0)
}

pub fn launch_speed() -> f64 {
    parse_or("LAUNCH_SPEED", 20.0)
}

// Unknown names fall back to the basket lab.
pub fn launch_preset() -> ShotPreset {
    env::var("LAUNCH_PRESET")
        .ok()
        .and_then(|name| {
            let preset = ShotPreset::from_name(&name);
            if preset.is_none() {
                tracing::warn!(%name, "unknown LAUNCH_PRESET; using basket");
            }
            preset
        })
        .unwrap_or_default()
}

// Wall-clock tick period; 50 ms plays a 0.05 s step in real time.
pub fn tick_interval() -> Duration {
    let millis: u64 = parse_or("TICK_INTERVAL_MS", 50);
    Duration::from_millis(millis.max(1))
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
