pub mod hosts;
pub mod resolver;
