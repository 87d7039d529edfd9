use crate::domain::model::ImageSize;
use crate::utils::error::Result;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn payload(&self) -> &str;
    fn image_size(&self) -> ImageSize;
    fn output_path(&self) -> &str;

    /// `None` means the request may block indefinitely.
    fn request_timeout(&self) -> Option<Duration> {
        None
    }
}
