//! Buffered HTTP responses.

use serde::de::DeserializeOwned;

use crate::FetchError;

/// Status and body of a finished request.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Read a `reqwest` response to the end.
    pub async fn read(response: reqwest::Response) -> Result<Self, FetchError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, body))
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn a non-2xx response into [`FetchError::HttpError`] carrying the
    /// body text.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}
