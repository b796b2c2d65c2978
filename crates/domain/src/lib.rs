//! Cinder DNS Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod flags;
pub mod query;
pub mod reverse;
pub mod validators;

pub use answer::{Answer, AnswerBuilder, SYNTHETIC_TTL};
pub use config::{Config, ConfigError, HostsConfig};
pub use errors::DnsError;
pub use flags::{ResolverFlag, ResolverFlags};
pub use query::Query;
pub use reverse::reverse_name;
