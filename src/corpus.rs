use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bstr::io::BufReadExt;
use bstr::ByteSlice;

use crate::error::{Error, Result};

/// A tokenized sentence with its gold tags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    tokens: Vec<String>,
    tags: Vec<String>,
}

impl Sentence {
    /// Pair tokens with their tags, which must have the same length
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(Error::LengthMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        Ok(Self { tokens, tags })
    }

    /// Build a sentence from a space-separated token string.
    ///
    /// Empty pieces, such as the one after a trailing space, are skipped.
    pub fn from_text<S: AsRef<str>>(text: &str, tags: &[S]) -> Result<Self> {
        let tokens = text
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let tags = tags.iter().map(|s| s.as_ref().to_string()).collect();
        Self::new(tokens, tags)
    }

    /// Tokens joined by spaces, each followed by one space
    pub fn text(&self) -> String {
        let mut text = String::new();
        for token in &self.tokens {
            text.push_str(token);
            text.push(' ');
        }
        text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn push(&mut self, token: &str, tag: &str) {
        self.tokens.push(token.to_string());
        self.tags.push(tag.to_string());
    }
}

/// Sentences read from a tagged corpus file
///
/// The format has one `token tag` pair per line, fields separated by spaces
/// or tabs, and a blank line after each sentence. Columns after the second
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    /// Read a corpus from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let corpus = Self::read(BufReader::new(file))?;
        log::info!(
            "read {} sentences ({} tokens) from {}",
            corpus.len(),
            corpus.num_tokens(),
            path.display()
        );
        Ok(corpus)
    }

    /// Read a corpus from a buffered reader.
    ///
    /// A line with fewer than two fields aborts the whole read.
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut sentences = Vec::new();
        let mut sentence = Sentence::default();
        for (index, line) in reader.byte_lines().enumerate() {
            let line = line?;
            let lineno = index + 1;
            let line = line.to_str().map_err(|e| Error::Parse {
                line: lineno,
                message: format!("invalid UTF-8: {}", e),
            })?;
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (None, _) => {
                    if !sentence.is_empty() {
                        sentences.push(std::mem::take(&mut sentence));
                    }
                }
                (Some(token), Some(tag)) => sentence.push(token, tag),
                (Some(_), None) => {
                    return Err(Error::Parse {
                        line: lineno,
                        message: format!("expected `token tag`, got {:?}", line),
                    });
                }
            }
        }
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        Ok(Self { sentences })
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of tokens over all sentences
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }
}

impl From<Vec<Sentence>> for Corpus {
    fn from(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}

impl IntoIterator for Corpus {
    type Item = Sentence;
    type IntoIter = std::vec::IntoIter<Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
