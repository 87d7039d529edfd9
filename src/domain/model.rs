use crate::utils::error::QrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAYLOAD: &str = "https://lender-tracker.vercel.app";
pub const DEFAULT_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_OUTPUT_PATH: &str = "lender_tracker_qr_real.png";

/// Pixel dimensions of the requested image, written as `<width>x<height>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ImageSize {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| QrError::InvalidConfigValueError {
            field: "size".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("Expected <width>x<height>, e.g. 500x500"))?;

        let width: u32 = width
            .parse()
            .map_err(|_| invalid("Width must be a positive integer"))?;
        let height: u32 = height
            .parse()
            .map_err(|_| invalid("Height must be a positive integer"))?;

        if width == 0 || height == 0 {
            return Err(invalid("Dimensions must be at least 1 pixel"));
        }

        Ok(Self { width, height })
    }
}

impl TryFrom<String> for ImageSize {
    type Error = QrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ImageSize> for String {
    fn from(size: ImageSize) -> Self {
        size.to_string()
    }
}

/// The data to encode plus the image size it should be rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub payload: String,
    pub size: ImageSize,
}

impl QrRequest {
    pub fn new(payload: impl Into<String>, size: ImageSize) -> Self {
        Self {
            payload: payload.into(),
            size,
        }
    }
}
