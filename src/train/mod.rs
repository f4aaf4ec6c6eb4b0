//! Training module for perceptron models
//!
//! This module contains the trainer, its parameters and the structured
//! perceptron update.

mod params;
mod perceptron;
mod trainer;

// Re-export public types
pub use self::params::{TrainerParams, DEFAULT_EPOCHS};
pub use self::perceptron::{EpochStats, PENALTY, REWARD};
pub use self::trainer::Trainer;
