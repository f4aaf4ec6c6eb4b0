use std::fmt;

use crate::dictionary::Dictionary;

/// Name of the sentence-start sentinel
pub const BOS: &str = "<BOS>";
/// Name of the sentence-end sentinel
pub const EOS: &str = "<EOS>";

/// A tag type: one of the labels discovered from the training corpus, or a
/// boundary sentinel used only in transition features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Sentence start
    Bos,
    /// Sentence end
    Eos,
    /// Index into the tag set
    Label(u32),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Bos => f.write_str(BOS),
            Tag::Eos => f.write_str(EOS),
            Tag::Label(id) => write!(f, "#{}", id),
        }
    }
}

/// The ordered set of tag types a model can predict
///
/// Built once from the training corpus. Labels iterate in first-seen order,
/// which decides ties during decoding.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    labels: Dictionary,
}

impl TagSet {
    /// Build a tag set from tag sequences, keeping first-seen order
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: tags.into_iter().collect(),
        }
    }

    /// Number of labels, sentinels excluded
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up a label by name
    pub fn get(&self, name: &str) -> Option<Tag> {
        self.labels.get(name).map(Tag::Label)
    }

    /// Name of a tag, sentinels included
    pub fn name(&self, tag: Tag) -> Option<&str> {
        match tag {
            Tag::Bos => Some(BOS),
            Tag::Eos => Some(EOS),
            Tag::Label(id) => self.labels.name(id),
        }
    }

    /// Iterate over the labels in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = Tag> + Clone + '_ {
        (0..self.labels.len() as u32).map(Tag::Label)
    }

    /// Label names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(|(name, _)| name)
    }
}
