use crate::domain::model::{ImageSize, DEFAULT_ENDPOINT, DEFAULT_OUTPUT_PATH, DEFAULT_PAYLOAD};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "qr-fetch")]
#[command(about = "Download a QR code image for a URL from a QR image API")]
pub struct CliConfig {
    /// Data to encode into the QR code
    #[arg(long, default_value = DEFAULT_PAYLOAD)]
    pub payload: String,

    /// File the downloaded image is written to (its directory must exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Image size as <width>x<height>
    #[arg(long, default_value = "500x500")]
    pub size: ImageSize,

    /// QR image API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,

    #[arg(long, help = "Print the request URL without downloading")]
    pub dry_run: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn payload(&self) -> &str {
        &self.payload
    }

    fn image_size(&self) -> ImageSize {
        self.size
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("payload", &self.payload)?;
        validation::validate_path("output", &self.output)?;
        Ok(())
    }
}
