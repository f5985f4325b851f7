mod record;
mod record_type;

pub use record::{RecordPayload, ResourceRecord, SoaData};
pub use record_type::RecordType;
