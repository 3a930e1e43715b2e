//! Domain layer - Core business logic and entities

pub mod error;
pub mod feature;
pub mod prediction;
pub mod submission;

pub use error::DomainError;
pub use feature::{
    parse_feature_value, validate_features, FeatureName, FeatureSet, RawFeatureInput,
    ValidationError, INVALID_FEATURES_MESSAGE,
};
pub use prediction::{
    ModelInfo, ModelParameters, PredictionProvider, PredictionRequest, PredictionResponse,
    PredictionResult, RequestError,
};
pub use submission::{
    cancellation, CancelHandle, CancelSignal, SubmissionState, SubmissionTracker,
    TransitionError,
};
