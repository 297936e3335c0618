pub mod commands;
mod logger;

pub use logger::*;

pub const DIVPOW10_VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");
