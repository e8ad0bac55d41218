use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Every call has a bounded lifetime; expiry surfaces as a plain
/// network-variant `APIError`, never a hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type APIResponse<T> = Result<T, APIError>;

#[derive(Debug, Error)]
#[error("{variant}")]
pub struct APIError {
    pub variant: APIErrorVariant,
}

#[derive(Debug, Error)]
pub enum APIErrorVariant {
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Unexpected response body: {0}")]
    MalformedResponse(reqwest::Error),
    #[error("Expected status code {expected} but got {got}. Response body: `{body}`")]
    UnexpectedStatusCode {
        expected: StatusCode,
        got: StatusCode,
        body: String,
    },
}

impl From<APIErrorVariant> for APIError {
    fn from(variant: APIErrorVariant) -> Self {
        Self { variant }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub(crate) fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .get(&self.url(&path))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(APIErrorVariant::Network)?;
        Self::handle_response(res, expected_status_code).await
    }

    pub(crate) async fn post<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(&self.url(&path))
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(APIErrorVariant::Network)?;
        Self::handle_response(res, expected_status_code).await
    }

    async fn handle_response<T: DeserializeOwned>(
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let got = res.status();
        if got != expected_status_code {
            // Capture whatever diagnostic text the backend put in the body.
            let body = res.text().await.unwrap_or_default();
            return Err(APIErrorVariant::UnexpectedStatusCode {
                expected: expected_status_code,
                got,
                body,
            }
            .into());
        }
        res.json::<T>()
            .await
            .map_err(|e| APIErrorVariant::MalformedResponse(e).into())
    }
}
