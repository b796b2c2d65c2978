use async_trait::async_trait;
use cinder_dns_domain::{Answer, DnsError, Query};

/// One link in the resolver chain.
///
/// A resolver either answers the query itself or delegates to the next
/// link it was composed with, returning that link's result unchanged.
/// This is the sole extension point: hosts tables, caches and transports
/// all participate by implementing it and holding an `Arc<dyn Resolver>`
/// to the link below.
///
/// Dropping the returned future cancels the query, including any
/// delegated work it drives.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, query: &Query) -> Result<Answer, DnsError>;
}
