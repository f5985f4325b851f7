//! Ferrous Resolver Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod trace;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig, DNS_PORT, ROOT_SERVERS,
};
pub use dns_message::{Header, Message, Question};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordPayload, RecordType, ResourceRecord, SoaData};
pub use errors::DomainError;
pub use trace::{HopSource, TraceHop, TraceResult};
