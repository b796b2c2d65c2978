use async_trait::async_trait;
use cinder_dns_application::ports::Resolver;
use cinder_dns_domain::{Answer, DnsError, Query};
use hickory_proto::op::ResponseCode;

/// Terminal chain link: answers every query with NXDOMAIN.
///
/// Ends a chain when no transport resolver is configured, so upstream
/// links always have something to delegate to.
pub struct NxDomainResolver;

#[async_trait]
impl Resolver for NxDomainResolver {
    async fn resolve(&self, query: &Query) -> Result<Answer, DnsError> {
        Ok(Answer::builder(query.clone())
            .response_code(ResponseCode::NXDomain)
            .build())
    }
}
