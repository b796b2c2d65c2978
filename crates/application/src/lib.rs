//! Cinder DNS Application Layer
pub mod lookup;
pub mod ports;

pub use lookup::LookupClient;
pub use ports::Resolver;
