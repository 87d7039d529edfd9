pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::QrClient, storage::LocalStorage};
pub use config::TomlConfig;
pub use core::{engine::QrEngine, request::build_request_url};
pub use domain::model::{ImageSize, QrRequest};
pub use utils::error::{QrError, Result};
