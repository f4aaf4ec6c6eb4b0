use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use bstr::io::BufReadExt;
use bstr::ByteSlice;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::evaluation::Evaluation;
use crate::tagger::Tagger;

/// Result file written when no other path is given
pub const DEFAULT_OUTPUT_PATH: &str = "dev-percep.out";

/// One line of a result file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: String,
    pub gold: String,
    pub predicted: String,
}

/// Writes `token gold predicted` lines, with a blank line after each sentence
#[derive(Debug)]
pub struct ResultWriter<W: Write> {
    inner: W,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one sentence. Extra items of the longer sequences are dropped.
    pub fn write_sentence<T, G, P>(&mut self, tokens: &[T], gold: &[G], predicted: &[P]) -> Result<()>
    where
        T: AsRef<str>,
        G: AsRef<str>,
        P: AsRef<str>,
    {
        for ((token, gold), predicted) in tokens.iter().zip(gold).zip(predicted) {
            writeln!(
                self.inner,
                "{} {} {}",
                token.as_ref(),
                gold.as_ref(),
                predicted.as_ref()
            )?;
        }
        writeln!(self.inner)?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Tag every sentence of a corpus and write the result file.
///
/// Returns the evaluation of the predictions against the corpus tags.
pub fn write_predictions<P: AsRef<Path>>(
    tagger: &Tagger<'_>,
    corpus: &Corpus,
    path: P,
) -> Result<Evaluation> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = ResultWriter::new(BufWriter::new(file));
    let mut evaluation = Evaluation::default();
    for sentence in corpus {
        let predicted = tagger.tag(sentence.tokens())?;
        writer.write_sentence(sentence.tokens(), sentence.tags(), &predicted)?;
        evaluation.accumulate(sentence.tags(), &predicted);
    }
    writer.into_inner()?;
    log::info!("wrote {} sentences to {}", corpus.len(), path.display());
    Ok(evaluation)
}

/// Read a result file back into sentences of tagged tokens
pub fn read_results<R: BufRead>(reader: R) -> Result<Vec<Vec<TaggedToken>>> {
    let mut sentences = Vec::new();
    let mut sentence = Vec::new();
    for (index, line) in reader.byte_lines().enumerate() {
        let line = line?;
        let lineno = index + 1;
        let line = line.to_str().map_err(|e| Error::Parse {
            line: lineno,
            message: format!("invalid UTF-8: {}", e),
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {
                if !sentence.is_empty() {
                    sentences.push(std::mem::take(&mut sentence));
                }
            }
            [token, gold, predicted, ..] => sentence.push(TaggedToken {
                token: token.to_string(),
                gold: gold.to_string(),
                predicted: predicted.to_string(),
            }),
            _ => {
                return Err(Error::Parse {
                    line: lineno,
                    message: format!("expected `token gold predicted`, got {:?}", line),
                });
            }
        }
    }
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
    Ok(sentences)
}
