use std::iter::{self, Chain, Once};
use std::option;

use crate::tagset::Tag;

/// Token id in a model's vocabulary
pub type TokenId = u32;

/// Key of a single weight in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    /// Transition feature: (prev_tag, tag)
    Transition(Tag, Tag),
    /// Emission feature: (tag, token)
    Emission(Tag, TokenId),
}

/// Features fired by one step of a tag sequence
pub type Features = Chain<Once<FeatureKey>, option::IntoIter<FeatureKey>>;

/// Extract the features for moving from `prev` to `tag` while emitting `token`.
///
/// The transition feature is always present. The emission feature is present
/// only when a token is given; the end-of-sentence step passes `None`.
pub fn extract(prev: Tag, tag: Tag, token: Option<TokenId>) -> Features {
    iter::once(FeatureKey::Transition(prev, tag))
        .chain(token.map(|token| FeatureKey::Emission(tag, token)))
}
