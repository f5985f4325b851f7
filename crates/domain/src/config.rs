pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, DNS_PORT, ROOT_SERVERS};
pub use root::{CliOverrides, Config};
