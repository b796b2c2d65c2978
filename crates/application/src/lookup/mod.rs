//! Generic-to-typed derivation layer
//!
//! [`LookupClient`] wraps any [`Resolver`] and derives the typed
//! convenience lookups applications actually want — address lists,
//! single addresses, reverse names, text records — from the one generic
//! query primitive. Each operation validates its argument, issues
//! exactly one query and attaches a conversion (see [`convert`]).

mod convert;

use crate::ports::Resolver;
use cinder_dns_domain::validators::parse_host_name;
use cinder_dns_domain::{reverse_name, DnsError, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::debug;

/// Typed lookups over an underlying resolver chain.
#[derive(Clone)]
pub struct LookupClient {
    resolver: Arc<dyn Resolver>,
}

impl LookupClient {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// The underlying chain, for issuing generic queries directly.
    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        &self.resolver
    }

    /// All IPv4 and IPv6 addresses for a host, in record order.
    pub async fn lookup_ip_all(&self, host: &str) -> Result<Vec<IpAddr>, DnsError> {
        let name = parse_host_name(host)?;
        debug!(host, "resolving all addresses");
        let query = Query::new(name, RecordType::ANY);
        convert::converted(self.resolver.resolve(&query), convert::collect_ips).await
    }

    /// The first IPv4 or IPv6 address for a host, if any.
    pub async fn lookup_ip(&self, host: &str) -> Result<Option<IpAddr>, DnsError> {
        let name = parse_host_name(host)?;
        let query = Query::new(name, RecordType::ANY);
        convert::converted(self.resolver.resolve(&query), convert::first_ip).await
    }

    pub async fn lookup_ipv4_all(&self, host: &str) -> Result<Vec<Ipv4Addr>, DnsError> {
        let name = parse_host_name(host)?;
        let query = Query::new(name, RecordType::A);
        convert::converted(self.resolver.resolve(&query), convert::collect_ipv4).await
    }

    pub async fn lookup_ipv4(&self, host: &str) -> Result<Option<Ipv4Addr>, DnsError> {
        let name = parse_host_name(host)?;
        let query = Query::new(name, RecordType::A);
        convert::converted(self.resolver.resolve(&query), convert::first_ipv4).await
    }

    pub async fn lookup_ipv6_all(&self, host: &str) -> Result<Vec<Ipv6Addr>, DnsError> {
        let name = parse_host_name(host)?;
        let query = Query::new(name, RecordType::AAAA);
        convert::converted(self.resolver.resolve(&query), convert::collect_ipv6).await
    }

    pub async fn lookup_ipv6(&self, host: &str) -> Result<Option<Ipv6Addr>, DnsError> {
        let name = parse_host_name(host)?;
        let query = Query::new(name, RecordType::AAAA);
        convert::converted(self.resolver.resolve(&query), convert::first_ipv6).await
    }

    /// The host name an address points back to, via the standard
    /// `in-addr.arpa` / `ip6.arpa` reverse mapping.
    pub async fn reverse_lookup(&self, ip: IpAddr) -> Result<Option<Name>, DnsError> {
        let name = reverse_name(&ip)?;
        debug!(ip = %ip, reverse = %name, "reverse lookup");
        let query = Query::new(name, RecordType::PTR);
        convert::converted(self.resolver.resolve(&query), convert::first_ptr_target).await
    }

    /// The text of every TXT record for a host, in record order.
    pub async fn txt_lookup(&self, host: &str) -> Result<Vec<String>, DnsError> {
        let name = parse_host_name(host)?;
        let query = Query::new(name, RecordType::TXT);
        convert::converted(self.resolver.resolve(&query), convert::collect_txt).await
    }
}
