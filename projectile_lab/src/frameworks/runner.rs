// Framework bootstrap for a single lab session.

use crate::domain::{LaunchError, ShotPreset};
use crate::frameworks::config;
use crate::interface_adapters::clients::ResultsClient;
use crate::use_cases::{Launcher, LauncherSettings};
use std::io::Result;
use std::time::Duration;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn launcher_settings(preset: &ShotPreset, tick_interval: Duration) -> LauncherSettings {
    LauncherSettings {
        tick_interval,
        tuning: preset.tuning,
        target: preset.target,
    }
}

// Launches once, waits for the outcome and the save, then logs the stored history.
pub async fn run(
    client: ResultsClient,
    preset: ShotPreset,
    tick_interval: Duration,
    angle_deg: f64,
    speed: f64,
) -> Result<()> {
    let launcher = Launcher::new(launcher_settings(&preset, tick_interval), client.clone());
    let speed = preset.speed_for(speed);

    let run_id = launcher
        .start(angle_deg, speed)
        .await
        .map_err(|e: LaunchError| {
            tracing::error!(error = %e, angle_deg, speed, "launch rejected");
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        })?;

    match launcher.wait_for_outcome(run_id).await {
        Some(summary) => tracing::info!(
            angle = summary.angle,
            speed = summary.speed,
            max_height = summary.max_height,
            range = summary.range,
            time = summary.time,
            status = if summary.scored { "Hit" } else { "Miss" },
            "outcome"
        ),
        None => tracing::warn!(run_id, "flight ended without an outcome"),
    }

    launcher.flush_saves().await;

    // History is informational; the local outcome already stands.
    match client.fetch_history().await {
        Ok(history) => tracing::info!(
            url = client.base_url(),
            count = history.len(),
            "history fetched"
        ),
        Err(e) => tracing::warn!(error = %e, "failed to fetch history"),
    }

    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let client = ResultsClient::new(config::results_service_url(), config::results_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build results client: {e}")))?;

    run(
        client,
        config::launch_preset(),
        config::tick_interval(),
        config::launch_angle(),
        config::launch_speed(),
    )
    .await
}
