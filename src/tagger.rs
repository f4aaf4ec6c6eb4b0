use crate::decoder::{self, Decoding};
use crate::error::Result;
use crate::feature::TokenId;
use crate::model::Model;
use crate::tagset::Tag;

/// The tagger provides the functionality for predicting tag sequences for token sequences using a model
#[derive(Debug, Clone, Copy)]
pub struct Tagger<'a> {
    /// Perceptron model
    model: &'a Model,
    /// Search strategy
    decoding: Decoding,
}

impl<'a> Tagger<'a> {
    pub(crate) fn new(model: &'a Model) -> Self {
        Self {
            model,
            decoding: Decoding::default(),
        }
    }

    /// Use another search strategy
    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    pub fn decoding(&self) -> Decoding {
        self.decoding
    }

    /// Predict the tag sequence for the token sequence.
    pub fn tag<T: AsRef<str>>(&self, tokens: &[T]) -> Result<Vec<&'a str>> {
        let path = self.tag_ids(tokens)?;
        Ok(path
            .into_iter()
            .filter_map(|tag| self.model.to_label(tag))
            .collect())
    }

    /// Predict the tag sequence as tag ids
    pub fn tag_ids<T: AsRef<str>>(&self, tokens: &[T]) -> Result<Vec<Tag>> {
        let ids: Vec<Option<TokenId>> = tokens
            .iter()
            .map(|token| self.model.to_token_id(token.as_ref()))
            .collect();
        decoder::decode(
            self.decoding,
            self.model.tags(),
            self.model.weights(),
            &ids,
        )
    }
}
