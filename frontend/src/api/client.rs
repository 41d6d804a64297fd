use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Characters escaped when an identifier is used as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        self.client
            .request(method, format!("{}{}", base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
    }

    /// Sends the request and turns any non-success status into `ApiError::Status`.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = match Self::mocked(&request) {
            Some(mocked) => mocked?,
            None => self
                .client
                .execute(request)
                .await
                .map_err(|e| ApiError::network(e.to_string()))?,
        };

        let status = response.status();
        if status.is_success() {
            log::debug!("{} {} -> {}", method, url, status.as_u16());
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_body(status.as_u16(), &body);
        log::warn!("{} {} -> {}: {}", method, url, status.as_u16(), error);
        Err(error)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    fn mocked(request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
        mock::respond(request)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    fn mocked(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
        None
    }
}

pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_escapes_reserved_characters() {
        assert_eq!(path_segment("EMP001"), "EMP001");
        assert_eq!(path_segment("EMP 1/2"), "EMP%201%2F2");
        assert_eq!(path_segment("a?b#c"), "a%3Fb%23c");
    }
}
