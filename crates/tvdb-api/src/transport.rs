//! Single-request HTTP transport.
//!
//! Executes exactly one request and classifies the outcome. The body is read in
//! full before it is parsed. A 200 response yields the `data` member of the
//! `{status, data}` envelope; anything else becomes an [`ApiError`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::error::{ApiError, StatusError};
use crate::params::QueryParams;

/// One outgoing request.
#[derive(Debug)]
pub struct TransportRequest<'a> {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Bearer token; no `Authorization` header is sent when `None` or empty.
    pub token: Option<&'a str>,
    /// Query-string parameters.
    pub query: &'a QueryParams,
    /// Serialized JSON body.
    pub body: Option<Vec<u8>>,
}

/// Stateless HTTP transport over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: Client,
}

impl Transport {
    /// Wraps a configured `reqwest::Client`.
    #[must_use]
    pub const fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Sends the request and decodes the envelope payload as `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Timeout`] / [`ApiError::Transport`] when the request or body read fails.
    /// - [`ApiError::Status`] for a non-200 status or a body that is not JSON.
    /// - [`ApiError::Decode`] when the payload does not match `T`.
    #[instrument(skip_all, fields(method = %request.method))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: TransportRequest<'_>,
    ) -> Result<T, ApiError> {
        let mut builder = self
            .http_client
            .request(request.method, request.url)
            .header(ACCEPT, "application/json")
            .query(request.query.as_pairs());

        if let Some(token) = request.token.filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let http_request = builder.build().map_err(ApiError::from_reqwest)?;
        tracing::debug!(url = %http_request.url(), "TVDB API request");

        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        let raw_body = response.text().await.map_err(ApiError::from_reqwest)?;
        tracing::debug!(status = %status, len = raw_body.len(), "TVDB API response");

        classify(status, &raw_body)
    }
}

/// Maps a status code and buffered body to the payload or an error.
fn classify<T: DeserializeOwned>(status: StatusCode, raw_body: &str) -> Result<T, ApiError> {
    let code = status.as_u16();
    let Ok(mut parsed) = serde_json::from_str::<Value>(raw_body) else {
        return Err(StatusError::parse_failure(Some(code)).into());
    };

    if status != StatusCode::OK {
        return Err(StatusError::new(parsed, Some(code)).into());
    }

    let data = parsed.get_mut("data").map(Value::take).unwrap_or_default();
    serde_json::from_value(data).map_err(|source| ApiError::Decode {
        status_code: code,
        source,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::PARSE_ERROR_MARKER;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: u64,
    }

    fn transport() -> Transport {
        Transport::new(Client::new())
    }

    fn url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{p}", server.uri())).unwrap()
    }

    #[test]
    fn test_classify_success_returns_data() {
        // Arrange
        let body = r#"{"status":"success","data":{"id":7}}"#;

        // Act
        let payload: Payload = classify(StatusCode::OK, body).unwrap();

        // Assert
        assert_eq!(payload, Payload { id: 7 });
    }

    #[test]
    fn test_classify_non_200_is_status_error() {
        // Arrange
        let body = r#"{"message":"not found"}"#;

        // Act
        let err = classify::<Payload>(StatusCode::NOT_FOUND, body).unwrap_err();

        // Assert
        let ApiError::Status(status) = err else {
            panic!("expected status error, got {err:?}");
        };
        assert_eq!(status.status_code(), Some(404));
        assert_eq!(status.response(), &json!({"message": "not found"}));
    }

    #[test]
    fn test_classify_non_2xx_success_code_is_still_status_error() {
        // Arrange & Act
        let err = classify::<Payload>(StatusCode::CREATED, r#"{"data":{"id":1}}"#).unwrap_err();

        // Assert
        assert_eq!(err.status_code(), Some(201));
        assert!(matches!(err, ApiError::Status(_)));
    }

    #[test]
    fn test_classify_invalid_json_reports_marker_for_any_status() {
        // Arrange & Act
        let ok = classify::<Payload>(StatusCode::OK, "not json").unwrap_err();
        let bad = classify::<Payload>(StatusCode::BAD_GATEWAY, "not json").unwrap_err();

        // Assert
        for (err, code) in [(ok, 200), (bad, 502)] {
            let ApiError::Status(status) = err else {
                panic!("expected status error");
            };
            assert_eq!(status.response(), &json!(PARSE_ERROR_MARKER));
            assert_eq!(status.status_code(), Some(code));
        }
    }

    #[test]
    fn test_classify_shape_mismatch_is_decode_error() {
        // Arrange & Act
        let err = classify::<Payload>(StatusCode::OK, r#"{"data":{"id":"x"}}"#).unwrap_err();

        // Assert
        assert!(matches!(err, ApiError::Decode { status_code: 200, .. }));
    }

    #[tokio::test]
    async fn test_execute_sends_bearer_query_and_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/things"))
            .and(header("Authorization", "Bearer tok"))
            .and(header("Content-Type", "application/json"))
            .and(query_param("page", "2"))
            .and(body_json(json!({"name": "x"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status":"success","data":{"id":3}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let query = QueryParams::new().set("page", 2);
        let request = TransportRequest {
            method: Method::POST,
            url: url(&server, "/v4/things"),
            token: Some("tok"),
            query: &query,
            body: Some(serde_json::to_vec(&json!({"name": "x"})).unwrap()),
        };

        // Act
        let payload: Payload = transport().execute(request).await.unwrap();

        // Assert
        assert_eq!(payload.id, 3);
    }

    #[tokio::test]
    async fn test_execute_empty_token_sends_no_authorization() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data":{"id":1}})))
            .mount(&server)
            .await;

        let query = QueryParams::new();
        let request = TransportRequest {
            method: Method::GET,
            url: url(&server, "/v4/x"),
            token: Some(""),
            query: &query,
            body: None,
        };

        // Act
        let _: Payload = transport().execute(request).await.unwrap();

        // Assert
        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_execute_timeout_is_distinct() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data":{"id":1}}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let query = QueryParams::new();
        let request = TransportRequest {
            method: Method::GET,
            url: url(&server, "/v4/slow"),
            token: None,
            query: &query,
            body: None,
        };

        // Act
        let err = Transport::new(client)
            .execute::<Payload>(request)
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, ApiError::Timeout(_)));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_execute_connection_failure_is_transport_error() {
        // Arrange: nothing listens on this port once the server is dropped
        let server = MockServer::start().await;
        let target = url(&server, "/v4/gone");
        drop(server);

        let query = QueryParams::new();
        let request = TransportRequest {
            method: Method::GET,
            url: target,
            token: None,
            query: &query,
            body: None,
        };

        // Act
        let err = transport().execute::<Payload>(request).await.unwrap_err();

        // Assert
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status_code(), None);
    }
}
