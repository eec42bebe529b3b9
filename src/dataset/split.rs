//! Seeded train/test split.

use log::debug;
use rand::prelude::*;

use crate::config::SplitConfig;
use crate::error::{HamspamError, Result};
use crate::ml::naive_bayes::Message;

/// Disjoint training and test partitions of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<Message>,
    pub test: Vec<Message>,
}

/// Shuffle `messages` with a seeded RNG and cut off the first
/// `round(n × train_fraction)` of them for training.
///
/// The same seed always yields the same partitions.
pub fn train_test_split(messages: &[Message], config: &SplitConfig) -> Result<TrainTestSplit> {
    let fraction = config.train_fraction;
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(HamspamError::configuration(format!(
            "train fraction must be strictly between 0 and 1, got {fraction}"
        )));
    }

    let mut shuffled = messages.to_vec();
    let mut rng = StdRng::seed_from_u64(config.seed);
    shuffled.shuffle(&mut rng);

    let train_len = ((shuffled.len() as f64) * fraction).round() as usize;
    let test = shuffled.split_off(train_len.min(shuffled.len()));

    debug!(
        "split {} messages into {} training and {} test (seed {})",
        messages.len(),
        shuffled.len(),
        test.len(),
        config.seed
    );

    Ok(TrainTestSplit {
        train: shuffled,
        test,
    })
}
