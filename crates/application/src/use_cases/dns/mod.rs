mod query_domain;
mod trace_domain;

pub use query_domain::QueryDomainUseCase;
pub use trace_domain::TraceDomainUseCase;
