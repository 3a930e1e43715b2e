use serde::Serialize;

use crate::domain::feature::FeatureSet;

/// Body sent to the `/predict` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub features: FeatureSet,
}

impl PredictionRequest {
    pub fn new(features: FeatureSet) -> Self {
        Self { features }
    }
}
