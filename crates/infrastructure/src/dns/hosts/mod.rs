//! Hosts-file link of the resolver chain

mod table;

pub use table::HostsTable;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use cinder_dns_application::ports::Resolver;
use cinder_dns_domain::{Answer, DnsError, HostsConfig, Query, SYNTHETIC_TTL};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{DNSClass, RData, Record, RecordType};
use std::io::Read;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Serves Internet-class address lookups from a hosts table and
/// delegates everything else to the next link.
///
/// The table is replaced atomically on reload; lookups in flight keep
/// the table they loaded and never see partial state. Concurrent reloads
/// are last-writer-wins — each produces a complete, valid table, so the
/// race is accepted rather than locked away.
pub struct HostsResolver {
    table: ArcSwap<HostsTable>,
    next: Arc<dyn Resolver>,
}

impl HostsResolver {
    /// Chain link with an empty table; every query delegates until a
    /// table is loaded.
    pub fn new(next: Arc<dyn Resolver>) -> Self {
        Self {
            table: ArcSwap::from_pointee(HostsTable::default()),
            next,
        }
    }

    /// Builds the link from configuration, loading the configured file
    /// if the hosts section is enabled and names one.
    pub fn from_config(config: &HostsConfig, next: Arc<dyn Resolver>) -> Result<Self, DnsError> {
        let resolver = Self::new(next);
        if config.enabled {
            if let Some(path) = &config.path {
                resolver.load_path(path)?;
            }
        }
        Ok(resolver)
    }

    /// Replaces the current table with one parsed from hosts-file text.
    ///
    /// Parsing happens entirely before the swap: on any error the
    /// previous table stays in place and fully queryable.
    pub fn load(&self, text: &str) -> Result<(), DnsError> {
        let table = HostsTable::parse(text)?;
        info!(entries = table.len(), "hosts table replaced");
        self.table.store(Arc::new(table));
        Ok(())
    }

    /// Replaces the current table with the contents of a reader
    /// (UTF-8 hosts-file text).
    pub fn load_reader(&self, reader: impl Read) -> Result<(), DnsError> {
        let table = HostsTable::from_reader(reader)?;
        info!(entries = table.len(), "hosts table replaced");
        self.table.store(Arc::new(table));
        Ok(())
    }

    /// Replaces the current table with the contents of a hosts file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<(), DnsError> {
        let table = HostsTable::from_path(path)?;
        info!(entries = table.len(), "hosts table replaced");
        self.table.store(Arc::new(table));
        Ok(())
    }

    fn synthesize(&self, query: &Query, addresses: &[IpAddr]) -> Answer {
        let mut builder =
            Answer::builder(query.clone()).response_code(ResponseCode::NoError);
        for address in addresses {
            match address {
                IpAddr::V4(v4)
                    if matches!(query.record_type, RecordType::A | RecordType::ANY) =>
                {
                    builder = builder.record(Record::from_rdata(
                        query.name.clone(),
                        SYNTHETIC_TTL,
                        RData::A(A(*v4)),
                    ));
                }
                IpAddr::V6(v6)
                    if matches!(query.record_type, RecordType::AAAA | RecordType::ANY) =>
                {
                    builder = builder.record(Record::from_rdata(
                        query.name.clone(),
                        SYNTHETIC_TTL,
                        RData::AAAA(AAAA(*v6)),
                    ));
                }
                // Wrong family for the requested type: omitted, not an
                // error — an empty answer is a valid "no records of this
                // type" result.
                _ => {}
            }
        }
        builder.build()
    }
}

#[async_trait]
impl Resolver for HostsResolver {
    async fn resolve(&self, query: &Query) -> Result<Answer, DnsError> {
        // The table only models Internet-class address records.
        if query.class != DNSClass::IN && query.class != DNSClass::ANY {
            return self.next.resolve(query).await;
        }

        let table = self.table.load_full();
        match table.lookup(&query.name.to_lowercase()) {
            Some(addresses) => {
                debug!(name = %query.name, addresses = addresses.len(), "hosts hit");
                Ok(self.synthesize(query, addresses))
            }
            None => {
                debug!(name = %query.name, "hosts miss, delegating");
                self.next.resolve(query).await
            }
        }
    }
}
