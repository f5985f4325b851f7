use ferrous_resolver_domain::DomainError;
use std::net::IpAddr;

const IPV4_REVERSE_ZONE: &str = "in-addr.arpa";
const IPV6_REVERSE_ZONE: &str = "ip6.arpa";

/// Converts an IP literal to the owner name of its PTR record.
///
/// `192.0.2.1` becomes `1.2.0.192.in-addr.arpa`; an IPv6 address becomes its
/// 32 nibbles in reverse order under `ip6.arpa`.
pub fn reverse_lookup_name(input: &str) -> Result<String, DomainError> {
    let ip: IpAddr = input
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidReverseLookupInput(input.to_string()))?;

    Ok(match ip {
        IpAddr::V4(v4) => {
            let octets = v4.octets();
            format!(
                "{}.{}.{}.{}.{}",
                octets[3], octets[2], octets[1], octets[0], IPV4_REVERSE_ZONE
            )
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(64 + IPV6_REVERSE_ZONE.len());
            for byte in v6.octets().iter().rev() {
                name.push(nibble_char(byte & 0x0f));
                name.push('.');
                name.push(nibble_char(byte >> 4));
                name.push('.');
            }
            name.push_str(IPV6_REVERSE_ZONE);
            name
        }
    })
}

fn nibble_char(nibble: u8) -> char {
    char::from_digit(nibble as u32, 16).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_reverse() {
        assert_eq!(
            reverse_lookup_name("192.0.2.1").unwrap(),
            "1.2.0.192.in-addr.arpa"
        );
        assert_eq!(
            reverse_lookup_name("8.8.8.8").unwrap(),
            "8.8.8.8.in-addr.arpa"
        );
    }

    #[test]
    fn test_ipv6_reverse_expands_every_nibble() {
        let name = reverse_lookup_name("2001:db8::567:89ab").unwrap();
        assert_eq!(
            name,
            "b.a.9.8.7.6.5.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
        );
    }

    #[test]
    fn test_ipv6_loopback() {
        let name = reverse_lookup_name("::1").unwrap();
        assert!(name.starts_with("1.0.0.0."));
        assert_eq!(name.split('.').count(), 34);
    }

    #[test]
    fn test_rejects_hostnames() {
        assert_eq!(
            reverse_lookup_name("example.com"),
            Err(DomainError::InvalidReverseLookupInput(
                "example.com".to_string()
            ))
        );
        assert!(reverse_lookup_name("256.1.1.1").is_err());
        assert!(reverse_lookup_name("").is_err());
    }
}
