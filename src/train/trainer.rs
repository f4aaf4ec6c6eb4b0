use crate::corpus::Sentence;
use crate::error::{Error, Result};
use crate::model::Model;
use crate::tagset::TagSet;

use super::params::TrainerParams;

/// Perceptron trainer
///
/// Collects training sentences, discovers the tag set from them and fits a
/// [`Model`].
#[derive(Debug, Default)]
pub struct Trainer {
    /// Training sentences, in input order
    pub(super) sentences: Vec<Sentence>,
    /// Training parameters
    pub(super) params: TrainerParams,
}

impl Trainer {
    /// Create a new trainer
    pub fn new() -> Self {
        Self::default()
    }

    /// Get training parameters
    pub fn params(&self) -> &TrainerParams {
        &self.params
    }

    /// Get training parameters for mutation
    pub fn params_mut(&mut self) -> &mut TrainerParams {
        &mut self.params
    }

    /// Set the number of epochs (builder pattern)
    pub fn with_epochs(mut self, epochs: usize) -> Result<Self> {
        self.params.set_epochs(epochs)?;
        Ok(self)
    }

    /// Append training data
    pub fn append<T, L>(&mut self, tokens: &[T], tags: &[L]) -> Result<()>
    where
        T: AsRef<str>,
        L: AsRef<str>,
    {
        if tokens.len() != tags.len() {
            return Err(Error::LengthMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        if tokens.is_empty() {
            return Err(Error::EmptySequence);
        }
        let sentence = Sentence::new(
            tokens.iter().map(|s| s.as_ref().to_string()).collect(),
            tags.iter().map(|s| s.as_ref().to_string()).collect(),
        )?;
        self.sentences.push(sentence);
        Ok(())
    }

    /// Number of training sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Clear all training data
    pub fn clear(&mut self) {
        self.sentences.clear();
    }

    /// Tag set of the training data, in first-seen order
    pub fn tag_set(&self) -> TagSet {
        TagSet::from_tags(self.sentences.iter().flat_map(|s| s.tags()))
    }

    /// Build a model over the discovered tag set and train it
    ///
    /// Without training data the model has no tags and no weights.
    pub fn train(&self) -> Result<Model> {
        let tags = self.tag_set();
        if self.sentences.is_empty() {
            log::warn!("no training data, the model will have an empty tag set");
        }
        log::info!(
            "training on {} sentences with {} labels: {:?}",
            self.sentences.len(),
            tags.len(),
            tags.names().collect::<Vec<_>>()
        );
        let mut model = Model::new(tags);
        self.fit(&mut model)?;
        Ok(model)
    }
}

impl Extend<Sentence> for Trainer {
    fn extend<I: IntoIterator<Item = Sentence>>(&mut self, iter: I) {
        self.sentences
            .extend(iter.into_iter().filter(|sentence| !sentence.is_empty()));
    }
}
