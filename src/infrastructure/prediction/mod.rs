//! Prediction service client implementations

mod client;
mod http_client;

pub use client::HttpPredictionClient;
pub use http_client::{HttpClient, HttpClientTrait};
