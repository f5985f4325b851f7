mod logging;

pub use logging::init_logging;

use ferrous_resolver_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config) {
    info!(
        upstream = %config.resolver.upstream,
        roots = config.resolver.root_servers.len(),
        max_referrals = config.resolver.max_referrals,
        timeout_ms = ?config.resolver.query_timeout_ms,
        "Configuration loaded"
    );
}
