//! Concrete resolver chain links
//!
//! Links compose by holding an `Arc<dyn Resolver>` to the next link:
//!
//! ```no_run
//! use cinder_dns_infrastructure::{HostsResolver, NxDomainResolver};
//! use std::sync::Arc;
//!
//! let chain = HostsResolver::new(Arc::new(NxDomainResolver));
//! ```

pub mod nxdomain;

pub use nxdomain::NxDomainResolver;
