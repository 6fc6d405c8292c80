pub mod config;
pub mod contract;
pub mod errors;
pub mod models;
pub mod projector;

pub use contract::*;
pub use errors::*;
pub use models::*;
pub use projector::*;
