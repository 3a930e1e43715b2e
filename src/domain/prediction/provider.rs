use async_trait::async_trait;
use std::fmt::Debug;

use super::{ModelInfo, PredictionResult, RequestError};
use crate::domain::feature::FeatureSet;

#[cfg(test)]
use mockall::automock;

/// A service that turns features into predictions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PredictionProvider: Send + Sync + Debug {
    /// Request a single prediction; no retry on failure
    async fn predict(&self, features: &FeatureSet) -> Result<PredictionResult, RequestError>;

    /// Describe the model behind the service
    async fn model_info(&self) -> Result<ModelInfo, RequestError>;
}
