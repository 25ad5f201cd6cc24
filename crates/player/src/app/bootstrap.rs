use shell::{GestureKind, GestureTrigger};
use tracing::info;
use tracing_subscriber::EnvFilter;

const RUNTIME_ASSET_ENV_VAR: &str = "PLAYER_RUNTIME_ASSET";
const CONTENT_ASSET_ENV_VAR: &str = "PLAYER_CONTENT_ASSET";

#[derive(Debug, Clone)]
pub(crate) struct PlayerConfig {
    pub(crate) runtime_asset: String,
    pub(crate) content_asset: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            runtime_asset: "assets/runtime.img".to_string(),
            content_asset: "assets/main.bundle".to_string(),
        }
    }
}

pub(crate) struct AppWiring {
    pub(crate) config: PlayerConfig,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Player Startup ===");

    let defaults = PlayerConfig::default();
    let config = PlayerConfig {
        runtime_asset: env_or(RUNTIME_ASSET_ENV_VAR, defaults.runtime_asset),
        content_asset: env_or(CONTENT_ASSET_ENV_VAR, defaults.content_asset),
    };
    info!(
        runtime_asset = %config.runtime_asset,
        content_asset = %config.content_asset,
        "player_config"
    );

    AppWiring { config }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn env_or(var: &str, fallback: String) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(fallback)
}

/// Any line on stdin counts as the process-wide key-down that unlocks audio
/// playback.
pub(crate) fn spawn_gesture_listener(trigger: GestureTrigger) {
    std::thread::spawn(move || {
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_ok() {
            trigger.fire(GestureKind::KeyDown);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_missing_or_blank_values() {
        assert_eq!(
            env_or("PLAYER_TEST_UNSET_VAR", "fallback".to_string()),
            "fallback"
        );
    }
}
