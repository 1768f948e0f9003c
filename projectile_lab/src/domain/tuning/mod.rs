pub mod launch;
pub mod preset;
pub mod target;

pub use launch::LaunchTuning;
pub use preset::ShotPreset;
pub use target::TargetZone;
