pub mod cli;
pub mod database;
pub mod error;
pub mod logger;
pub mod migration;

pub use self::error::{Error, Result};
