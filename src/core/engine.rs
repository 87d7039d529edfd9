use crate::adapters::http::QrClient;
use crate::core::request::build_request_url;
use crate::domain::model::QrRequest;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use url::Url;

/// Runs the fetch-and-save routine: encode, fetch, persist, strictly in that order.
pub struct QrEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: QrClient,
}

impl<S: Storage, C: ConfigProvider> QrEngine<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = QrClient::new(config.request_timeout())?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Builds the request URL without touching the network.
    pub fn plan(&self) -> Result<Url> {
        let request = QrRequest::new(self.config.payload(), self.config.image_size());
        build_request_url(self.config.endpoint(), &request)
    }

    pub async fn run(&self) -> Result<String> {
        let request_url = self.plan()?;

        println!("Generating QR code for: {}", self.config.payload());
        println!("Downloading from: {}", request_url);

        let image = self.client.fetch(&request_url).await?;

        let output_path = self.config.output_path();
        self.storage.write_file(output_path, &image).await?;

        println!("QR code saved to: {}", output_path);
        tracing::info!("✅ Saved {} bytes to {}", image.len(), output_path);

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ImageSize, DEFAULT_PAYLOAD};
    use crate::utils::error::QrError;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        fail_writes: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                fail_writes: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::new()
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(QrError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("Permission denied: {}", path),
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        endpoint: String,
        payload: String,
        size: ImageSize,
        output_path: String,
    }

    impl MockConfig {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                payload: DEFAULT_PAYLOAD.to_string(),
                size: ImageSize::default(),
                output_path: "qr.png".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
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
            &self.output_path
        }
    }

    #[tokio::test]
    async fn test_run_saves_response_body() {
        let server = MockServer::start();
        let image: Vec<u8> = (0..=255u8).cycle().take(2048).collect();

        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/create-qr-code/")
                .query_param("size", "500x500")
                .query_param("data", DEFAULT_PAYLOAD);
            then.status(200)
                .header("Content-Type", "image/png")
                .body(image.clone());
        });

        let storage = MockStorage::new();
        let config = MockConfig::new(server.url("/v1/create-qr-code/"));
        let engine = QrEngine::new(storage.clone(), config).unwrap();

        let output_path = engine.run().await.unwrap();

        api_mock.assert();
        assert_eq!(output_path, "qr.png");
        assert_eq!(storage.get_file("qr.png").await, Some(image));
    }

    #[tokio::test]
    async fn test_run_uses_configured_size() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).query_param("size", "120x80");
            then.status(200).body("png");
        });

        let storage = MockStorage::new();
        let mut config = MockConfig::new(server.url("/"));
        config.size = ImageSize::new(120, 80);
        let engine = QrEngine::new(storage, config).unwrap();

        engine.run().await.unwrap();
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_run_server_error_writes_nothing() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET);
            then.status(500);
        });

        let storage = MockStorage::new();
        let config = MockConfig::new(server.url("/"));
        let engine = QrEngine::new(storage.clone(), config).unwrap();

        let result = engine.run().await;

        api_mock.assert_hits(1);
        assert!(matches!(result, Err(QrError::HttpStatus { status: 500, .. })));
        assert_eq!(storage.get_file("qr.png").await, None);
    }

    #[tokio::test]
    async fn test_run_propagates_storage_failure() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET);
            then.status(200).body("png");
        });

        let config = MockConfig::new(server.url("/"));
        let engine = QrEngine::new(MockStorage::failing(), config).unwrap();

        match engine.run().await {
            Err(QrError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plan_does_not_hit_network() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let config = MockConfig::new(server.url("/v1/create-qr-code/"));
        let engine = QrEngine::new(MockStorage::new(), config).unwrap();

        let url = engine.plan().unwrap();

        api_mock.assert_hits(0);
        assert!(url
            .as_str()
            .ends_with("/v1/create-qr-code/?size=500x500&data=https%3A%2F%2Flender-tracker.vercel.app"));
    }
}
