pub mod codec;
pub mod resolver;
pub mod transport;

pub use codec::{reverse_lookup_name, MessageBuilder, ResponseParser};
pub use resolver::CoreResolver;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
