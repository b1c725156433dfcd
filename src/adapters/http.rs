use crate::config::ApiClientConfig;
use crate::utils::error::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// JSON request executor for the Employee API.
///
/// Every exchange ends either in a decoded payload or in one [`ApiError`]:
/// non-2xx answers become `Remote`, missing answers become `Transport`, and
/// requests that cannot be built become `Request`. Nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_address: String,
}

impl ApiClient {
    pub fn new(config: &ApiClientConfig) -> std::result::Result<Self, ApiError> {
        Url::parse(&config.base_address).map_err(|e| ApiError::Request {
            message: format!("invalid base address '{}': {}", config.base_address, e),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApiError::Request {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_address: config.base_address.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::DELETE, path, None::<&()>).await
    }

    /// DELETE that only cares about the status; whatever body the API
    /// sends back on success is dropped unread.
    pub async fn delete_discarding_body(&self, path: &str) -> Result<()> {
        self.exchange(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn execute<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let bytes = self.exchange(method, path, body).await?;
        decode_body(&bytes)
    }

    async fn exchange<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> std::result::Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path)?;
        tracing::debug!("Making API request: {} {}", method, url);

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            let error = translate_send_error(e);
            tracing::warn!("{} {} failed: {}", method, url, error);
            error
        })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
            message: format!("failed to read response body: {}", e),
        })?;

        if let Err(error) = check_status(status, &bytes) {
            tracing::warn!("{} {} rejected: {}", method, url, error);
            return Err(error);
        }

        Ok(bytes.to_vec())
    }

    fn url(&self, path: &str) -> std::result::Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_address, path);
        Url::parse(&raw).map_err(|e| ApiError::Request {
            message: format!("invalid request URL '{}': {}", raw, e),
        })
    }
}

/// Classifies a failure from `send()`: nothing built means `Request`,
/// anything later (timeout, refused, DNS) means `Transport`.
pub fn translate_send_error(error: reqwest::Error) -> ApiError {
    if error.is_builder() {
        ApiError::Request {
            message: error.to_string(),
        }
    } else {
        ApiError::Transport {
            message: error.to_string(),
        }
    }
}

/// Turns a non-2xx response into `ApiError::Remote`.
pub fn check_status(status: StatusCode, body: &[u8]) -> std::result::Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    Err(ApiError::Remote {
        status: status.as_u16(),
        body: render_body(body),
    })
}

// JSON bodies are re-serialized compactly; anything else is kept as text.
fn render_body(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

// An empty body decodes as JSON `null`, so `()` works for 204 responses.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EmployeeError;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiClientConfig::new(server.base_url(), 2_000)).unwrap()
    }

    #[test]
    fn test_check_status_passes_success() {
        assert!(check_status(StatusCode::OK, b"{}").is_ok());
        assert!(check_status(StatusCode::NO_CONTENT, b"").is_ok());
    }

    #[test]
    fn test_check_status_builds_remote_error() {
        let err = check_status(StatusCode::UNPROCESSABLE_ENTITY, br#"{ "error": "bad" }"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Remote {
                status: 422,
                body: r#"{"error":"bad"}"#.to_string(),
            }
        );

        let err = check_status(StatusCode::BAD_GATEWAY, b"upstream down").unwrap_err();
        assert_eq!(err.to_string(), "API error: 502 - upstream down");
    }

    #[test]
    fn test_decode_empty_body_as_unit() {
        decode_body::<()>(b"").unwrap();
        let value: serde_json::Value = decode_body(b"  ").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_invalid_base_address_is_request_error() {
        let err = ApiClient::new(&ApiClientConfig::new("not a url", 1_000)).unwrap_err();
        assert!(matches!(err, ApiError::Request { .. }));
    }

    #[test]
    fn test_base_address_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ApiClientConfig::new("http://localhost:8080/api/", 1_000))
            .unwrap();
        assert_eq!(client.base_address(), "http://localhost:8080/api");
        assert_eq!(
            client.url("/employees").unwrap().as_str(),
            "http://localhost:8080/api/employees"
        );
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/items")
                .header("Content-Type", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"id": 1}, {"id": 2}]));
        });

        let items: Vec<serde_json::Value> = client_for(&server).get("/items").await.unwrap();

        api_mock.assert();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_post_and_put_send_json_body() {
        let server = MockServer::start();
        let post_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/items")
                .json_body(serde_json::json!({"name": "a"}));
            then.status(201).json_body(serde_json::json!({"id": 7, "name": "a"}));
        });
        let put_mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/items/7")
                .json_body(serde_json::json!({"name": "b"}));
            then.status(200).json_body(serde_json::json!({"id": 7, "name": "b"}));
        });

        let client = client_for(&server);
        let created: serde_json::Value = client
            .post("/items", &serde_json::json!({"name": "a"}))
            .await
            .unwrap();
        let updated: serde_json::Value = client
            .put("/items/7", &serde_json::json!({"name": "b"}))
            .await
            .unwrap();

        post_mock.assert();
        put_mock.assert();
        assert_eq!(created["id"], 7);
        assert_eq!(updated["name"], "b");
    }

    #[tokio::test]
    async fn test_delete_with_empty_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(DELETE).path("/items/7");
            then.status(204);
        });

        client_for(&server).delete::<()>("/items/7").await.unwrap();

        api_mock.assert();
    }

    #[tokio::test]
    async fn test_delete_discarding_body_accepts_any_success_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/items/1");
            then.status(200).body("not json at all");
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/items/2");
            then.status(200)
                .json_body(serde_json::json!({"id": 2, "deleted": true}));
        });

        let client = client_for(&server);
        client.delete_discarding_body("/items/1").await.unwrap();
        client.delete_discarding_body("/items/2").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_remote_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/items/9");
            then.status(409)
                .json_body(serde_json::json!({"message": "in use"}));
        });

        let err = client_for(&server)
            .delete::<()>("/items/9")
            .await
            .unwrap_err();

        match err {
            EmployeeError::Api(ApiError::Remote { status, body }) => {
                assert_eq!(status, 409);
                assert_eq!(body, r#"{"message":"in use"}"#);
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_payload_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/items");
            then.status(200).body("<html>oops</html>");
        });

        let err = client_for(&server)
            .get::<Vec<serde_json::Value>>("/items")
            .await
            .unwrap_err();

        assert!(matches!(err, EmployeeError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(serde_json::json!({}));
        });

        let client = ApiClient::new(&ApiClientConfig::new(server.base_url(), 50)).unwrap();
        let err = client
            .get::<serde_json::Value>("/slow")
            .await
            .unwrap_err();

        assert!(matches!(err, EmployeeError::Api(ApiError::Transport { .. })));
    }
}
