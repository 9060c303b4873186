pub mod analyze;
pub mod config;
pub mod error;
pub mod gather;
pub mod http_client;
pub mod output;
pub mod pipeline;
pub mod utils;

pub use crate::config::Config;
pub use crate::error::{HuntError, Result};
