//! Client bootstrap: layered configuration and logging setup for the
//! FarmaThony command-line tools.

pub mod config;
pub mod logging;

pub use config::{ApiConfig, AppConfig, LoggingConfig};
pub use logging::init_logging;
