pub mod dns;

pub use dns::{QueryDomainUseCase, TraceDomainUseCase};
