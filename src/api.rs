// src/api.rs
use std::path::Path;

use reqwest::blocking::{multipart, Client};
use thiserror::Error;

use crate::report::PredictionReport;
use crate::settings::Settings;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. The service does not return a useful body, so the
    /// user sees the same generic message regardless of the status.
    #[error("Ошибка при загрузке")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("не удалось прочитать файл: {0}")]
    File(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> ApiError {
        ApiError::File(e.to_string())
    }
}

/// The application's single outbound call. Behind a trait so the upload
/// flow can run against a fake in tests.
pub trait UploadClient: Send + Sync {
    fn upload(&self, file: &Path) -> Result<PredictionReport, ApiError>;
}

pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            base_url: settings.api_base.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl UploadClient for ApiClient {
    /// Posts the file as one multipart `file` part (raw bytes, original
    /// filename) to `{base}/upload`. A single attempt, no retry.
    fn upload(&self, file: &Path) -> Result<PredictionReport, ApiError> {
        let form = multipart::Form::new().file("file", file)?;

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(response.json()?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_the_generic_message() {
        assert_eq!(ApiError::Status(502).to_string(), "Ошибка при загрузке");
    }

    #[test]
    fn io_failure_maps_to_file_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match ApiError::from(io) {
            ApiError::File(msg) => assert!(msg.contains("gone")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
