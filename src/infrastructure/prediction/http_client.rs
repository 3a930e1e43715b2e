use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::RequestError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, RequestError>;

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, RequestError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, RequestError> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(RequestError::status(
                status.as_u16(),
                error_detail(status, &error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::invalid_response(format!("Failed to parse response: {}", e)))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, RequestError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| RequestError::network(format!("Request failed: {}", e)))?;

        Self::read_json(response).await
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, RequestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RequestError::network(format!("Request failed: {}", e)))?;

        Self::read_json(response).await
    }
}

/// Human-readable reason for a failed response
///
/// The service reports its own failures as `{"detail": "..."}`; fall back to
/// the raw body, then to the status reason.
fn error_detail(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("detail").and_then(|d| d.as_str()).map(String::from));

    match detail {
        Some(detail) => detail,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_detail_field() {
        let detail = error_detail(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Input contains NaN"}"#,
        );
        assert_eq!(detail, "Input contains NaN");
    }

    #[test]
    fn test_error_detail_falls_back_to_body() {
        let detail = error_detail(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(detail, "upstream down");

        let detail = error_detail(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail": [1, 2]}"#);
        assert_eq!(detail, r#"{"detail": [1, 2]}"#);
    }

    #[test]
    fn test_error_detail_falls_back_to_reason() {
        let detail = error_detail(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(detail, "Internal Server Error");
    }
}
