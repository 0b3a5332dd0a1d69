//! Domain layer - contract types, overview snapshot types and errors

pub mod contract;
mod error;
pub mod overview;

pub use error::ConsoleError;
