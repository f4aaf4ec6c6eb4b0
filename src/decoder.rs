use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::feature::{FeatureKey, TokenId};
use crate::tagset::{Tag, TagSet};
use crate::weights::WeightStore;

/// Search strategy used to turn weights into a tag sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// Left-to-right, keeping only the best tag at each position.
    ///
    /// The `<EOS>` transition is never scored.
    #[default]
    Greedy,
    /// Exact search over all tag sequences, `<EOS>` transition included
    Viterbi,
}

impl fmt::Display for Decoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoding::Greedy => f.write_str("greedy"),
            Decoding::Viterbi => f.write_str("viterbi"),
        }
    }
}

impl FromStr for Decoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "greedy" => Ok(Decoding::Greedy),
            "viterbi" => Ok(Decoding::Viterbi),
            _ => Err(Error::InvalidParameter(format!(
                "unknown decoding: {}, expected greedy or viterbi",
                s
            ))),
        }
    }
}

/// Predict one tag per token.
///
/// `None` tokens are out of the model's vocabulary and carry no emission
/// weight.
pub(crate) fn decode(
    decoding: Decoding,
    tags: &TagSet,
    weights: &WeightStore,
    tokens: &[Option<TokenId>],
) -> Result<Vec<Tag>> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    if tags.is_empty() {
        return Err(Error::EmptyTagSet);
    }
    let path = match decoding {
        Decoding::Greedy => greedy(tags, weights, tokens),
        Decoding::Viterbi => viterbi(tags, weights, tokens),
    };
    Ok(path)
}

#[inline]
fn emission(weights: &WeightStore, tag: Tag, token: Option<TokenId>) -> f64 {
    token.map_or(0.0, |token| weights.get(&FeatureKey::Emission(tag, token)))
}

#[inline]
fn transition(weights: &WeightStore, prev: Tag, tag: Tag) -> f64 {
    weights.get(&FeatureKey::Transition(prev, tag))
}

fn greedy(tags: &TagSet, weights: &WeightStore, tokens: &[Option<TokenId>]) -> Vec<Tag> {
    let mut path = Vec::with_capacity(tokens.len());
    let mut prev = Tag::Bos;
    for &token in tokens {
        let mut best: Option<(Tag, f64)> = None;
        for tag in tags.iter() {
            let score = transition(weights, prev, tag) + emission(weights, tag, token);
            // Strict comparison keeps the earliest tag on ties
            if best.map_or(true, |(_, max_score)| score > max_score) {
                best = Some((tag, score));
            }
        }
        // Non-empty tag set checked by `decode`
        if let Some((tag, _)) = best {
            prev = tag;
            path.push(tag);
        }
    }
    path
}

fn viterbi(tags: &TagSet, weights: &WeightStore, tokens: &[Option<TokenId>]) -> Vec<Tag> {
    let labels: Vec<Tag> = tags.iter().collect();
    let l = labels.len();
    let t = tokens.len();

    // score[time * l + j]: best score of a path from BOS ending with label j at `time`
    let mut score = vec![0.0; t * l];
    // backward_edge[time * l + j]: predecessor of label j on that path
    let mut backward_edge = vec![0usize; t * l];

    for (j, &tag) in labels.iter().enumerate() {
        score[j] = transition(weights, Tag::Bos, tag) + emission(weights, tag, tokens[0]);
    }

    for time in 1..t {
        for (j, &tag) in labels.iter().enumerate() {
            let mut max_score = f64::NEG_INFINITY;
            let mut argmax_score = 0;
            for (i, &prev) in labels.iter().enumerate() {
                // Transit from (time-1, i) to (time, j)
                let s = score[(time - 1) * l + i] + transition(weights, prev, tag);
                if max_score < s {
                    max_score = s;
                    argmax_score = i;
                }
            }
            backward_edge[time * l + j] = argmax_score;
            score[time * l + j] = max_score + emission(weights, tag, tokens[time]);
        }
    }

    // Find the label that reaches EOS with the maximum score
    let mut max_score = f64::NEG_INFINITY;
    let mut last = 0;
    for (j, &tag) in labels.iter().enumerate() {
        let s = score[(t - 1) * l + j] + transition(weights, tag, Tag::Eos);
        if max_score < s {
            max_score = s;
            last = j;
        }
    }

    // Tag labels by tracing the backward links
    let mut path = vec![0usize; t];
    path[t - 1] = last;
    for time in (0..t - 1).rev() {
        path[time] = backward_edge[(time + 1) * l + path[time + 1]];
    }
    path.into_iter().map(|j| labels[j]).collect()
}
