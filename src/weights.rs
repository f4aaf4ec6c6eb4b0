use std::collections::HashMap;

use crate::feature::FeatureKey;

/// Sparse feature weights
///
/// Unseen keys weigh 0. Entries are created on first update and never pruned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightStore {
    weights: HashMap<FeatureKey, f64>,
}

impl WeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a feature, 0 if it was never updated
    #[inline]
    pub fn get(&self, key: &FeatureKey) -> f64 {
        self.weights.get(key).copied().unwrap_or(0.0)
    }

    /// Add `delta` to the weight of a feature
    #[inline]
    pub fn increment(&mut self, key: FeatureKey, delta: f64) {
        *self.weights.entry(key).or_insert(0.0) += delta;
    }

    /// Add `delta` to every feature of a feature set
    pub fn update<I: IntoIterator<Item = FeatureKey>>(&mut self, features: I, delta: f64) {
        for key in features {
            self.increment(key, delta);
        }
    }

    /// Total weight of a feature set
    pub fn score<I: IntoIterator<Item = FeatureKey>>(&self, features: I) -> f64 {
        features.into_iter().map(|key| self.get(&key)).sum()
    }

    /// Number of stored features
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, f64)> + '_ {
        self.weights.iter().map(|(key, &weight)| (key, weight))
    }
}
