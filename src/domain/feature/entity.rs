//! Feature domain entities

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// One of the three fixed feature keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    Feature1,
    Feature2,
    Feature3,
}

impl FeatureName {
    /// All feature keys in display order
    pub const ALL: [FeatureName; 3] = [Self::Feature1, Self::Feature2, Self::Feature3];

    /// Wire key used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature1 => "feature1",
            Self::Feature2 => "feature2",
            Self::Feature3 => "feature3",
        }
    }

    /// Human-readable input label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Feature1 => "Feature 1",
            Self::Feature2 => "Feature 2",
            Self::Feature3 => "Feature 3",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three validated, finite feature values
///
/// Built only through [`FeatureSet::new`] or deserialization, both of which
/// reject non-finite values. There are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureSet")]
pub struct FeatureSet {
    feature1: f64,
    feature2: f64,
    feature3: f64,
}

impl FeatureSet {
    /// Create a feature set, rejecting NaN and infinite values
    pub fn new(feature1: f64, feature2: f64, feature3: f64) -> Result<Self, ValidationError> {
        let invalid: Vec<FeatureName> = FeatureName::ALL
            .into_iter()
            .zip([feature1, feature2, feature3])
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
            .collect();

        if !invalid.is_empty() {
            return Err(ValidationError::new(invalid));
        }

        Ok(Self {
            feature1,
            feature2,
            feature3,
        })
    }

    pub fn feature1(&self) -> f64 {
        self.feature1
    }

    pub fn feature2(&self) -> f64 {
        self.feature2
    }

    pub fn feature3(&self) -> f64 {
        self.feature3
    }

    /// Look up a value by key
    pub fn get(&self, name: FeatureName) -> f64 {
        match name {
            FeatureName::Feature1 => self.feature1,
            FeatureName::Feature2 => self.feature2,
            FeatureName::Feature3 => self.feature3,
        }
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f64)> + '_ {
        FeatureName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

#[derive(Deserialize)]
struct RawFeatureSet {
    feature1: f64,
    feature2: f64,
    feature3: f64,
}

impl TryFrom<RawFeatureSet> for FeatureSet {
    type Error = ValidationError;

    fn try_from(raw: RawFeatureSet) -> Result<Self, Self::Error> {
        Self::new(raw.feature1, raw.feature2, raw.feature3)
    }
}
