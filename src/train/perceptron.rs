use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::trainer::Trainer;
use crate::decoder;
use crate::error::{Error, Result};
use crate::feature::{extract, TokenId};
use crate::model::Model;
use crate::tagset::Tag;

/// Added to every feature of the gold path on a mistake
pub const REWARD: f64 = 1.0;
/// Subtracted from every feature of the predicted path on a mistake
pub const PENALTY: f64 = 2.0;

/// Outcome of one pass over the training data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochStats {
    /// Epoch number, starting at 1
    pub epoch: usize,
    /// Number of tokens whose predicted tag differed from the gold tag
    pub mistakes: usize,
    /// Number of tokens visited
    pub tokens: usize,
}

impl EpochStats {
    /// Ratio of wrongly predicted tokens
    pub fn error_rate(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.mistakes as f64 / self.tokens as f64
        }
    }
}

impl Trainer {
    /// Run the configured number of epochs over the training sentences
    pub fn fit(&self, model: &mut Model) -> Result<Vec<EpochStats>> {
        let mut order: Vec<usize> = (0..self.sentences.len()).collect();
        // Input order is kept unless shuffling is enabled
        let mut rng = self.params.shuffle().then(|| match self.params.shuffle_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        });

        let mut history = Vec::with_capacity(self.params.epochs());
        for epoch in 1..=self.params.epochs() {
            if let Some(rng) = rng.as_mut() {
                order.shuffle(rng);
            }

            let mut stats = EpochStats {
                epoch,
                mistakes: 0,
                tokens: 0,
            };
            for &idx in &order {
                let sentence = &self.sentences[idx];
                log::debug!("epoch {}, sentence {}: {}", epoch, idx, sentence.text().trim_end());
                stats.mistakes += self.train_line(model, sentence.tokens(), sentence.tags())?;
                stats.tokens += sentence.len();
            }

            log::info!(
                "epoch {}: {} mistakes over {} tokens (error rate = {:.6}), {} features",
                epoch,
                stats.mistakes,
                stats.tokens,
                stats.error_rate(),
                model.weights().len()
            );
            history.push(stats);
        }
        Ok(history)
    }

    /// Update the model from a single sentence.
    ///
    /// Returns the number of tokens the model tagged wrongly before the
    /// update.
    pub fn train_line<T, L>(&self, model: &mut Model, tokens: &[T], gold: &[L]) -> Result<usize>
    where
        T: AsRef<str>,
        L: AsRef<str>,
    {
        if tokens.len() != gold.len() {
            return Err(Error::LengthMismatch {
                tokens: tokens.len(),
                tags: gold.len(),
            });
        }
        let gold = gold
            .iter()
            .map(|name| {
                let name = name.as_ref();
                model
                    .to_tag(name)
                    .ok_or_else(|| Error::UnknownTag(name.to_string()))
            })
            .collect::<Result<Vec<Tag>>>()?;
        let token_ids: Vec<TokenId> = tokens
            .iter()
            .map(|token| model.intern_token(token.as_ref()))
            .collect();

        // Predict with current weights
        let known: Vec<Option<TokenId>> = token_ids.iter().copied().map(Some).collect();
        let predicted = decoder::decode(
            self.params.decoding(),
            model.tags(),
            model.weights(),
            &known,
        )?;

        let weights = model.weights_mut();
        let mut mistakes = 0;
        let mut prev_gold = Tag::Bos;
        let mut prev_pred = Tag::Bos;
        for ((&token, &g), &p) in token_ids.iter().zip(&gold).zip(&predicted) {
            if g != p {
                weights.update(extract(prev_gold, g, Some(token)), REWARD);
                weights.update(extract(prev_pred, p, Some(token)), -PENALTY);
                mistakes += 1;
            }
            prev_gold = g;
            prev_pred = p;
        }

        // A wrong final tag also gets the end-of-sentence transition wrong
        if let (Some(&g), Some(&p)) = (gold.last(), predicted.last()) {
            if g != p {
                weights.update(extract(g, Tag::Eos, None), REWARD);
                weights.update(extract(p, Tag::Eos, None), -PENALTY);
            }
        }

        log::debug!("{} mistakes over {} tokens", mistakes, tokens.len());
        Ok(mistakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureKey;
    use crate::tagset::TagSet;

    fn model_ab() -> (Model, Tag, Tag) {
        let model = Model::new(TagSet::from_tags(["A", "B"]));
        let a = model.to_tag("A").unwrap();
        let b = model.to_tag("B").unwrap();
        (model, a, b)
    }

    #[test]
    fn test_update_on_mismatch() {
        let (mut model, a, b) = model_ab();
        let w1 = model.intern_token("w1");
        let w2 = model.intern_token("w2");
        // Make the model predict [A, B]
        model.weights_mut().increment(FeatureKey::Emission(b, w2), 1.0);
        assert_eq!(model.tagger().tag(&["w1", "w2"]).unwrap(), vec!["A", "B"]);

        let trainer = Trainer::new();
        let mistakes = trainer
            .train_line(&mut model, &["w1", "w2"], &["A", "A"])
            .unwrap();
        assert_eq!(mistakes, 1);

        let w = model.weights();
        // No update at the first position
        assert_eq!(w.get(&FeatureKey::Transition(Tag::Bos, a)), 0.0);
        assert_eq!(w.get(&FeatureKey::Emission(a, w1)), 0.0);
        // Second position
        assert_eq!(w.get(&FeatureKey::Transition(a, a)), REWARD);
        assert_eq!(w.get(&FeatureKey::Emission(a, w2)), REWARD);
        assert_eq!(w.get(&FeatureKey::Transition(a, b)), -PENALTY);
        assert_eq!(w.get(&FeatureKey::Emission(b, w2)), 1.0 - PENALTY);
        // End of sentence
        assert_eq!(w.get(&FeatureKey::Transition(a, Tag::Eos)), REWARD);
        assert_eq!(w.get(&FeatureKey::Transition(b, Tag::Eos)), -PENALTY);
        assert_eq!(w.len(), 6);
    }

    #[test]
    fn test_no_update_when_correct() {
        let (mut model, _, _) = model_ab();
        let trainer = Trainer::new();
        let mistakes = trainer
            .train_line(&mut model, &["x", "y"], &["A", "A"])
            .unwrap();
        assert_eq!(mistakes, 0);
        assert!(model.weights().is_empty());
        // Tokens are still added to the vocabulary
        assert_eq!(model.num_tokens(), 2);
    }

    #[test]
    fn test_no_eos_update_when_last_tag_matches() {
        let (mut model, a, b) = model_ab();
        let trainer = Trainer::new();
        // Zero weights predict [A, A]
        trainer
            .train_line(&mut model, &["x", "y"], &["B", "A"])
            .unwrap();

        let w = model.weights();
        assert_eq!(w.get(&FeatureKey::Transition(Tag::Bos, b)), REWARD);
        assert_eq!(w.get(&FeatureKey::Transition(Tag::Bos, a)), -PENALTY);
        assert_eq!(w.get(&FeatureKey::Transition(a, Tag::Eos)), 0.0);
        assert_eq!(w.get(&FeatureKey::Transition(b, Tag::Eos)), 0.0);
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let (mut model, _, _) = model_ab();
        let trainer = Trainer::new();
        let err = trainer
            .train_line(&mut model, &["x"], &["C"])
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown tag: C");
        assert!(model.weights().is_empty());
    }

    #[test]
    fn test_fit_reports_epochs() {
        let mut trainer = Trainer::new().with_epochs(3).unwrap();
        trainer.append(&["x", "y"], &["A", "B"]).unwrap();
        let mut model = Model::new(trainer.tag_set());
        let history = trainer.fit(&mut model).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].epoch, 1);
        assert_eq!(history[0].tokens, 2);
        assert_eq!(history[0].mistakes, 1);
        assert_eq!(history[2].mistakes, 0);
    }
}
