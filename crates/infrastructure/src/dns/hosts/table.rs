use cinder_dns_domain::DnsError;
use hickory_proto::rr::Name;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::net::IpAddr;
use std::path::Path;

/// An immutable name → address table built from hosts-file text.
///
/// Built in full from one source, then replaced wholesale via
/// `ArcSwap<HostsTable>` — never mutated in place (same idiom as a
/// blocklist index reload: readers keep whatever table they loaded).
#[derive(Debug, Default)]
pub struct HostsTable {
    entries: HashMap<Name, Vec<IpAddr>>,
}

impl HostsTable {
    /// Parses hosts-file text in one pass.
    ///
    /// Line format: `#` starts a comment to end of line; remaining
    /// whitespace-separated tokens are an address literal followed by one
    /// or more hostnames, each mapped to that address. Lines without at
    /// least one hostname are skipped. Addresses accumulate per hostname
    /// in file order, so later lines extend earlier keys.
    pub fn parse(text: &str) -> Result<Self, DnsError> {
        let mut entries: HashMap<Name, Vec<IpAddr>> = HashMap::new();
        for raw_line in text.lines() {
            let line = match raw_line.find('#') {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(literal) = tokens.next() else {
                continue;
            };
            for host in tokens {
                let name = Name::from_utf8(host)
                    .map_err(|e| DnsError::InvalidDomainName(format!("{host}: {e}")))?
                    .to_lowercase();
                let address: IpAddr =
                    literal.parse().map_err(|_| DnsError::InvalidHostAddress {
                        host: host.to_string(),
                        literal: literal.to_string(),
                    })?;
                entries.entry(name).or_default().push(address);
            }
        }
        Ok(Self { entries })
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, DnsError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DnsError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Addresses for a name, in file order. The probe must already be
    /// lowercased; keys are stored lowercased.
    pub fn lookup(&self, name: &Name) -> Option<&[IpAddr]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
