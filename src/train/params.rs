use crate::decoder::Decoding;
use crate::error::{Error, Result};

/// Number of passes over the training corpus when not configured
pub const DEFAULT_EPOCHS: usize = 6;

/// Perceptron training parameters.
#[derive(Debug, Clone)]
pub struct TrainerParams {
    epochs: usize,
    shuffle: bool,
    shuffle_seed: Option<u64>,
    decoding: Decoding,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            shuffle: false,
            shuffle_seed: None,
            decoding: Decoding::Greedy,
        }
    }
}

impl TrainerParams {
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn set_epochs(&mut self, epochs: usize) -> Result<()> {
        if epochs < 1 {
            return Err(Error::InvalidParameter(
                "epochs must be at least 1".to_string(),
            ));
        }
        self.epochs = epochs;
        Ok(())
    }

    /// Whether sentences are visited in a new random order every epoch
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }

    /// Seed for the shuffle; without one the order is seeded from entropy
    pub fn set_shuffle_seed(&mut self, seed: Option<u64>) {
        self.shuffle_seed = seed;
    }

    /// Decoder used to predict during training
    pub fn decoding(&self) -> Decoding {
        self.decoding
    }

    pub fn set_decoding(&mut self, decoding: Decoding) {
        self.decoding = decoding;
    }

    /// Set a parameter by name, parsing its value from a string
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "epochs" => self.set_epochs(parse(name, value)?),
            "shuffle" => {
                self.set_shuffle(parse(name, value)?);
                Ok(())
            }
            "shuffle_seed" => {
                self.set_shuffle_seed(Some(parse(name, value)?));
                Ok(())
            }
            "decoding" => {
                self.set_decoding(value.parse()?);
                Ok(())
            }
            _ => Err(Error::InvalidParameter(format!(
                "unknown parameter: {}",
                name
            ))),
        }
    }

    /// Get a parameter value by name
    pub fn get(&self, name: &str) -> Result<String> {
        match name {
            "epochs" => Ok(self.epochs.to_string()),
            "shuffle" => Ok(self.shuffle.to_string()),
            "shuffle_seed" => Ok(self
                .shuffle_seed
                .map(|seed| seed.to_string())
                .unwrap_or_default()),
            "decoding" => Ok(self.decoding.to_string()),
            _ => Err(Error::InvalidParameter(format!(
                "unknown parameter: {}",
                name
            ))),
        }
    }
}

fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        Error::InvalidParameter(format!("invalid value for {}: {}", name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TrainerParams::default();
        assert_eq!(params.epochs(), 6);
        assert!(!params.shuffle());
        assert_eq!(params.shuffle_seed(), None);
        assert_eq!(params.decoding(), Decoding::Greedy);
    }

    #[test]
    fn test_set_by_name() {
        let mut params = TrainerParams::default();
        params.set("epochs", "3").unwrap();
        params.set("shuffle", "true").unwrap();
        params.set("shuffle_seed", "42").unwrap();
        params.set("decoding", "viterbi").unwrap();

        assert_eq!(params.get("epochs").unwrap(), "3");
        assert_eq!(params.get("shuffle").unwrap(), "true");
        assert_eq!(params.get("shuffle_seed").unwrap(), "42");
        assert_eq!(params.get("decoding").unwrap(), "viterbi");
    }
}
