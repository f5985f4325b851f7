use crate::dns_message::Message;
use std::fmt;
use std::net::IpAddr;

/// How the resolver learned the address of a nameserver it queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HopSource {
    /// Starting point taken from the root server list.
    Root,
    /// Address taken from an additional-section `A` record for `ns`.
    Glue { ns: String },
    /// Address obtained by a separate direct query for `ns`.
    Resolved { ns: String },
}

impl fmt::Display for HopSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopSource::Root => write!(f, "root"),
            HopSource::Glue { ns } => write!(f, "glue for {}", ns),
            HopSource::Resolved { ns } => write!(f, "resolved {}", ns),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceHop {
    pub server: IpAddr,
    pub source: HopSource,
}

/// Outcome of a successful trace: the answering response plus every
/// nameserver visited on the way, in query order.
#[derive(Debug, Clone)]
pub struct TraceResult {
    pub response: Message,
    pub hops: Vec<TraceHop>,
}

impl TraceResult {
    pub fn answering_server(&self) -> Option<IpAddr> {
        self.hops.last().map(|hop| hop.server)
    }

    pub fn referrals(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }
}
