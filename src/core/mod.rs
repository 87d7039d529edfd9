pub mod engine;
pub mod request;

pub use crate::domain::model::{ImageSize, QrRequest};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
