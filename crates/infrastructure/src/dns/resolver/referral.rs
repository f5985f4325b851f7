use ferrous_resolver_domain::Message;
use std::net::Ipv4Addr;

/// Where a referral response points the trace next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextNameserver<'a> {
    /// An authority nameserver whose address came as glue.
    Glue { ns: &'a str, address: Ipv4Addr },
    /// No glue for any nameserver; the first one must be looked up.
    Unresolved { ns: &'a str },
    None,
}

/// Picks the next nameserver from a referral.
///
/// Glue wins: the first authority `NS` with an `A` record of the same name in
/// the additional section is taken, even when an earlier `NS` lacks glue.
pub fn select_next_nameserver(response: &Message) -> NextNameserver<'_> {
    let mut first_ns = None;

    for ns in response.authority_nameservers().filter_map(|r| r.ns_target()) {
        if let Some(address) = response.glue_for(ns).and_then(|glue| glue.ipv4()) {
            return NextNameserver::Glue { ns, address };
        }
        first_ns.get_or_insert(ns);
    }

    match first_ns {
        Some(ns) => NextNameserver::Unresolved { ns },
        None => NextNameserver::None,
    }
}
