/**
 * Image Host Client
 *
 * HTTP client for the external image host's upload API (ImageKit-style).
 * The binary is sent as a multipart POST authenticated with the private key
 * as basic-auth username; the response carries the hosted URL that gets
 * persisted alongside the image metadata.
 *
 * Failures (network, non-2xx, unparseable response) surface as
 * `ApiError::ImageHost` and become 500 responses. Nothing is retried.
 */

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::ApiError;
use crate::server::config::ImageHostConfig;

/// Successful upload response from the host.
#[derive(Debug, Clone, Deserialize)]
pub struct HostedFile {
    /// Publicly reachable URL of the uploaded file
    pub url: String,
}

/// Client for the image host upload API
#[derive(Clone)]
pub struct ImageHostClient {
    http: reqwest::Client,
    upload_endpoint: String,
    private_key: String,
}

impl ImageHostClient {
    /// Build a client from the host section of the application config.
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_endpoint: config.upload_endpoint.clone(),
            private_key: config.private_key.clone(),
        }
    }

    /// Upload a file and return its hosted URL.
    ///
    /// # Arguments
    /// * `file_name` - Original file name, forwarded to the host
    /// * `data` - Raw file bytes
    pub async fn upload(&self, file_name: &str, data: Vec<u8>) -> Result<HostedFile, ApiError> {
        let part = Part::bytes(data).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string());

        let response = self
            .http
            .post(&self.upload_endpoint)
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let hosted = response.json::<HostedFile>().await?;
        Ok(hosted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ImageHostClient {
        ImageHostClient::new(&ImageHostConfig {
            upload_endpoint: format!("{}/api/v1/files/upload", server.uri()),
            private_key: "private_test_key".to_string(),
        })
    }

    #[tokio::test]
    async fn test_upload_returns_hosted_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/files/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://ik.example.com/demo/photo.jpg",
                "fileId": "abc123"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let hosted = client.upload("photo.jpg", vec![0xFF, 0xD8, 0xFF]).await.unwrap();
        assert_eq!(hosted.url, "https://ik.example.com/demo/photo.jpg");
    }

    #[tokio::test]
    async fn test_host_error_surfaces_as_image_host_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/files/upload"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.upload("photo.jpg", vec![1, 2, 3]).await;
        assert!(matches!(result, Err(ApiError::ImageHost(_))));
    }
}
