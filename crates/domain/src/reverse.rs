use crate::errors::DnsError;
use hickory_proto::rr::Name;
use std::net::IpAddr;

/// Derives the canonical reverse-lookup name for an address.
///
/// IPv4 addresses map to `in-addr.arpa` with reversed octets, IPv6
/// addresses to `ip6.arpa` with reversed nibbles.
pub fn reverse_name(ip: &IpAddr) -> Result<Name, DnsError> {
    let domain = match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa", nibbles.join("."))
        }
    };
    Name::from_utf8(&domain).map_err(|e| DnsError::InvalidDomainName(format!("{domain}: {e}")))
}
