pub mod clients;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fixtures;
pub mod gateway;
pub mod source;

pub use clients::CampusClient;
pub use error::{Error, Result};
