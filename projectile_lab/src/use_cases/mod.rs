// Use cases layer: run lifecycle for the projectile lab.

pub mod launcher;
pub mod types;

pub use launcher::{Launcher, LauncherSettings};
pub use types::LaunchStatus;
