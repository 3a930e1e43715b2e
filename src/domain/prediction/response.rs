use serde::Deserialize;

use crate::domain::feature::FeatureSet;

/// Body returned by the `/predict` endpoint
///
/// Only `prediction` is required; anything else the service sends is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

/// A prediction paired with the features that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub prediction: f64,
    pub features: FeatureSet,
}

impl PredictionResult {
    pub fn new(prediction: f64, features: FeatureSet) -> Self {
        Self {
            prediction,
            features,
        }
    }
}

/// Description of the model behind the service, from `/model-info`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub features: Vec<String>,
    pub model_parameters: ModelParameters,
}

/// Linear model parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelParameters {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}
