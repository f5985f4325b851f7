//! Hand-written DNS wire codec (RFC 1035 §4).

mod name;
mod wire_reader;

pub mod message_builder;
pub mod response_parser;
pub mod reverse;

pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;
pub use reverse::reverse_lookup_name;
