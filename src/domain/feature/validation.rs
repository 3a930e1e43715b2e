//! Feature input validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::{FeatureName, FeatureSet};

/// Message shown whenever any field fails to parse
pub const INVALID_FEATURES_MESSAGE: &str = "Please enter valid numbers for all features";

/// Decimal literal: optional sign, digits with optional fraction, optional exponent.
/// Rules out `inf`, `NaN`, `infinity` and friends that `f64::from_str` would accept.
static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid decimal pattern")
});

/// Raw text could not be turned into a [`FeatureSet`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_FEATURES_MESSAGE)]
pub struct ValidationError {
    invalid: Vec<FeatureName>,
}

impl ValidationError {
    pub fn new(mut invalid: Vec<FeatureName>) -> Self {
        invalid.sort();
        invalid.dedup();
        Self { invalid }
    }

    /// Fields that failed to parse, in key order
    pub fn invalid_fields(&self) -> &[FeatureName] {
        &self.invalid
    }
}

/// The three text fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeatureInput {
    feature1: String,
    feature2: String,
    feature3: String,
}

impl RawFeatureInput {
    pub fn new(
        feature1: impl Into<String>,
        feature2: impl Into<String>,
        feature3: impl Into<String>,
    ) -> Self {
        Self {
            feature1: feature1.into(),
            feature2: feature2.into(),
            feature3: feature3.into(),
        }
    }

    pub fn get(&self, name: FeatureName) -> &str {
        match name {
            FeatureName::Feature1 => &self.feature1,
            FeatureName::Feature2 => &self.feature2,
            FeatureName::Feature3 => &self.feature3,
        }
    }

    pub fn set(&mut self, name: FeatureName, text: impl Into<String>) {
        let slot = match name {
            FeatureName::Feature1 => &mut self.feature1,
            FeatureName::Feature2 => &mut self.feature2,
            FeatureName::Feature3 => &mut self.feature3,
        };
        *slot = text.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse one field into a finite number
pub fn parse_feature_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if !DECIMAL_PATTERN.is_match(trimmed) {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validate all three fields at once
///
/// Either every field parses and a complete [`FeatureSet`] is returned, or the
/// error names every field that did not.
pub fn validate_features(input: &RawFeatureInput) -> Result<FeatureSet, ValidationError> {
    let parsed: Vec<(FeatureName, Option<f64>)> = FeatureName::ALL
        .into_iter()
        .map(|name| (name, parse_feature_value(input.get(name))))
        .collect();

    let invalid: Vec<FeatureName> = parsed
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    match parsed.as_slice() {
        [(_, Some(f1)), (_, Some(f2)), (_, Some(f3))] => FeatureSet::new(*f1, *f2, *f3),
        _ => Err(ValidationError::new(invalid)),
    }
}
