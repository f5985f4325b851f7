#![allow(dead_code)]
pub mod builders;
pub mod dns_server_mock;
pub mod scripted_transport;

pub use builders::{test_config, wire_name, WireResponseBuilder, ROOT, UPSTREAM};
pub use dns_server_mock::MockDnsServer;
pub use scripted_transport::ScriptedTransport;
