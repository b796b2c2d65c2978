pub mod resolver;

pub use resolver::Resolver;
