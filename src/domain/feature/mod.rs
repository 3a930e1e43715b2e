//! Feature domain - The three numeric model inputs and their validation

mod entity;
mod validation;

pub use entity::{FeatureName, FeatureSet};
pub use validation::{
    parse_feature_value, validate_features, RawFeatureInput, ValidationError,
    INVALID_FEATURES_MESSAGE,
};
