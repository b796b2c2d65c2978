use crate::errors::DnsError;
use hickory_proto::rr::Name;

/// Parses a caller-supplied hostname into a [`Name`].
///
/// Rejects empty and syntactically invalid input before any query work
/// starts, so typed lookups fail synchronously on bad arguments.
pub fn parse_host_name(host: &str) -> Result<Name, DnsError> {
    if host.is_empty() {
        return Err(DnsError::InvalidDomainName(
            "host name cannot be empty".to_string(),
        ));
    }
    Name::from_utf8(host).map_err(|e| DnsError::InvalidDomainName(format!("{host}: {e}")))
}
