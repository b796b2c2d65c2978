//! Cinder DNS Infrastructure Layer
pub mod dns;

pub use dns::hosts::{HostsResolver, HostsTable};
pub use dns::resolver::NxDomainResolver;
