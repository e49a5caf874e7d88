use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the config when set, so a one-off debug run
/// never needs a config edit. Calling this twice fails; call it once at
/// startup.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) => EnvFilter::new(spec),
        Err(_) => EnvFilter::new(directives(config)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
}

fn directives(config: Option<&LoggingConfig>) -> String {
    let default = LoggingConfig::default();
    let config = config.unwrap_or(&default);
    let mut parts = vec![config.level.clone()];
    // Per-target overrides, sorted for a stable filter string.
    let mut targets: Vec<_> = config.targets.iter().collect();
    targets.sort();
    for (target, level) in targets {
        parts.push(format!("{target}={level}"));
    }
    parts.join(",")
}
