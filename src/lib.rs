//! Structured perceptron sequence tagger
//!
//! This library learns sparse transition and emission weights from tagged
//! sentences and predicts tag sequences (part-of-speech, named entities) for
//! new ones.
//!
//! # Examples
//!
//! ## Training
//!
//! ```
//! use perceptag::train::Trainer;
//!
//! let mut trainer = Trainer::new().with_epochs(3)?;
//! trainer.append(&["The", "dog", "runs"], &["DET", "NOUN", "VERB"])?;
//! let model = trainer.train()?;
//! assert_eq!(model.num_labels(), 3);
//! # Ok::<(), perceptag::Error>(())
//! ```
//!
//! ## Prediction
//!
//! ```
//! use perceptag::{Corpus, Decoding, Trainer};
//!
//! let corpus = Corpus::read("The DET\ndog NOUN\nruns VERB\n\n".as_bytes())?;
//! let mut trainer = Trainer::new();
//! trainer.extend(corpus);
//! let model = trainer.train()?;
//!
//! let tagger = model.tagger();
//! assert_eq!(tagger.tag(&["The", "dog", "runs"])?, ["DET", "NOUN", "VERB"]);
//!
//! let exact = model.tagger().with_decoding(Decoding::Viterbi);
//! assert_eq!(exact.tag(&["The", "dog", "runs"])?.len(), 3);
//! # Ok::<(), perceptag::Error>(())
//! ```

mod corpus;
mod decoder;
mod dictionary;
mod error;
mod evaluation;
mod feature;
mod model;
mod results;
mod tagger;
mod tagset;
mod weights;

/// Training module containing the perceptron trainer
pub mod train;

// Re-export main types
pub use self::corpus::{Corpus, Sentence};
pub use self::decoder::Decoding;
pub use self::error::{Error, Result};
pub use self::evaluation::{Evaluation, LabelMeasure};
pub use self::feature::{extract, FeatureKey, Features, TokenId};
pub use self::model::Model;
pub use self::results::{read_results, write_predictions, ResultWriter, TaggedToken, DEFAULT_OUTPUT_PATH};
pub use self::tagger::Tagger;
pub use self::tagset::{Tag, TagSet, BOS, EOS};
pub use self::weights::WeightStore;

// Re-export training types for convenience
pub use self::train::Trainer;
