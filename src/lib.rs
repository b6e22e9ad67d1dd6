//! File records backed by a semicolon-delimited CSV, with date and
//! number-aware file-name ordering.

pub mod config;
pub mod data;
pub mod error;
pub mod service;

pub use config::Config;
pub use data::{Record, SortMode};
pub use error::{ConfigError, InvalidModeError, LoadError, ParseError, ServiceError};
pub use service::{DataRequest, DataResponse, DataService, Method};
