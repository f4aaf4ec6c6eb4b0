use std::fmt;

use crate::dictionary::Dictionary;
use crate::feature::TokenId;
use crate::tagger::Tagger;
use crate::tagset::{Tag, TagSet};
use crate::weights::WeightStore;

/// The perceptron model
///
/// Owns the tag set, the token vocabulary seen during training and the
/// feature weights. Weights change only through
/// [`Trainer`](crate::train::Trainer), which borrows the model mutably.
#[derive(Clone, Default)]
pub struct Model {
    tags: TagSet,
    vocab: Dictionary,
    weights: WeightStore,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("num_labels", &self.tags.len())
            .field("num_tokens", &self.vocab.len())
            .field("num_features", &self.weights.len())
            .finish()
    }
}

impl Model {
    /// Create a model with all-zero weights over a fixed tag set
    pub fn new(tags: TagSet) -> Self {
        Self {
            tags,
            vocab: Dictionary::new(),
            weights: WeightStore::new(),
        }
    }

    /// Get a tagger for this model
    pub fn tagger(&self) -> Tagger<'_> {
        Tagger::new(self)
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }

    /// Get the number of labels
    pub fn num_labels(&self) -> usize {
        self.tags.len()
    }

    /// Get the number of distinct tokens seen in training
    pub fn num_tokens(&self) -> usize {
        self.vocab.len()
    }

    /// Convert a label name to a tag
    pub fn to_tag(&self, name: &str) -> Option<Tag> {
        self.tags.get(name)
    }

    /// Convert a tag to its name
    pub fn to_label(&self, tag: Tag) -> Option<&str> {
        self.tags.name(tag)
    }

    /// Convert a token to its vocabulary id
    pub fn to_token_id(&self, token: &str) -> Option<TokenId> {
        self.vocab.get(token)
    }

    pub(crate) fn weights_mut(&mut self) -> &mut WeightStore {
        &mut self.weights
    }

    /// Intern a training token
    pub(crate) fn intern_token(&mut self, token: &str) -> TokenId {
        self.vocab.get_or_insert(token)
    }
}
