//! Prediction domain - Requests to and results from the prediction service

mod error;
mod provider;
mod request;
mod response;

pub use error::RequestError;
#[cfg(test)]
pub use provider::MockPredictionProvider;
pub use provider::PredictionProvider;
pub use request::PredictionRequest;
pub use response::{ModelInfo, ModelParameters, PredictionResponse, PredictionResult};
