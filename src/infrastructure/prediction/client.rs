use async_trait::async_trait;
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{
    FeatureSet, ModelInfo, PredictionProvider, PredictionRequest, PredictionResponse,
    PredictionResult, RequestError,
};

/// Prediction service reached over HTTP
#[derive(Debug)]
pub struct HttpPredictionClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> HttpPredictionClient<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    fn model_info_url(&self) -> String {
        format!("{}/model-info", self.base_url)
    }

    fn build_request(&self, features: &FeatureSet) -> Result<serde_json::Value, RequestError> {
        serde_json::to_value(PredictionRequest::new(*features)).map_err(|e| {
            RequestError::invalid_response(format!("Failed to encode request: {}", e))
        })
    }

    fn parse_response(
        &self,
        json: serde_json::Value,
        features: &FeatureSet,
    ) -> Result<PredictionResult, RequestError> {
        let response: PredictionResponse = serde_json::from_value(json).map_err(|e| {
            RequestError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        Ok(PredictionResult::new(response.prediction, *features))
    }
}

#[async_trait]
impl<C: HttpClientTrait> PredictionProvider for HttpPredictionClient<C> {
    async fn predict(&self, features: &FeatureSet) -> Result<PredictionResult, RequestError> {
        let url = self.predict_url();
        let body = self.build_request(features)?;

        debug!(url = %url, "Sending prediction request");
        let json = self.client.post_json(&url, &body).await?;

        self.parse_response(json, features)
    }

    async fn model_info(&self) -> Result<ModelInfo, RequestError> {
        let url = self.model_info_url();

        debug!(url = %url, "Fetching model info");
        let json = self.client.get_json(&url).await?;

        serde_json::from_value(json).map_err(|e| {
            RequestError::invalid_response(format!("Failed to parse model info: {}", e))
        })
    }
}
