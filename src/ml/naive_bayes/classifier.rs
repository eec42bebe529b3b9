//! Scoring rule and the classifier trait.
//!
//! A message is scored per label as `prior × Π P(token | label)` over the
//! tokens the label's table knows. Tokens missing from a table contribute
//! no factor; they are neutral evidence, never probability zero.

use log::warn;
use serde::{Deserialize, Serialize};

use super::estimator::{ClassPriors, ParameterTable};
use super::types::{Decision, Label, PerLabel};
use crate::analysis::analyzer::tokenize;

/// How per-label scores are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// `ln prior + Σ ln P(w|c)`. Same decisions as the product rule without
    /// underflow on long messages.
    #[default]
    LogSpace,
    /// `prior × Π P(w|c)`. Falls back to log space when both products
    /// underflow to zero.
    Product,
}

/// Full result of classifying a message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub decision: Decision,
    /// Spam score in the units of `strategy` (log or linear).
    pub spam_score: f64,
    /// Ham score in the units of `strategy` (log or linear).
    pub ham_score: f64,
    /// Strategy the reported scores were computed with.
    pub strategy: ScoringStrategy,
    /// Tokens found in at least one parameter table.
    pub known_tokens: usize,
    /// All tokens of the message, known or not.
    pub total_tokens: usize,
    /// Product scoring collapsed both scores to zero and the decision was
    /// recomputed in log space.
    pub log_space_fallback: bool,
}

impl Classification {
    /// Whether only the priors decided this message (no known tokens).
    pub fn priors_only(&self) -> bool {
        self.known_tokens == 0
    }
}

/// Classifier trait.
///
/// Implementations never fail: every string has a decision, possibly `Tie`.
pub trait MessageClassifier: Send + Sync {
    /// Classify a raw message.
    fn classify(&self, text: &str) -> Classification;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;

    /// Classify a raw message and keep only the decision.
    fn decide(&self, text: &str) -> Decision {
        self.classify(text).decision
    }
}

/// Compare two final scores.
pub fn decide(spam_score: f64, ham_score: f64) -> Decision {
    if spam_score > ham_score {
        Decision::Spam
    } else if ham_score > spam_score {
        Decision::Ham
    } else {
        Decision::Tie
    }
}

/// Score an analyzed message against explicit model parameters.
///
/// Tokens are folded strictly left to right so a given strategy always
/// produces bit-identical scores for the same input.
pub fn score<S: AsRef<str>>(
    tokens: &[S],
    priors: &ClassPriors,
    spam_table: &ParameterTable,
    ham_table: &ParameterTable,
    strategy: ScoringStrategy,
) -> Classification {
    let tables = PerLabel::new(spam_table, ham_table);

    match strategy {
        ScoringStrategy::LogSpace => {
            let (scores, known_tokens) = log_scores(tokens, priors, &tables);
            finish(scores, strategy, known_tokens, tokens.len(), false)
        }
        ScoringStrategy::Product => {
            let (scores, known_tokens) = product_scores(tokens, priors, &tables);
            if known_tokens > 0 && scores.spam == 0.0 && scores.ham == 0.0 {
                warn!(
                    "product scores underflowed to zero after {known_tokens} known tokens; \
                     recomputing in log space"
                );
                let (scores, known_tokens) = log_scores(tokens, priors, &tables);
                finish(
                    scores,
                    ScoringStrategy::LogSpace,
                    known_tokens,
                    tokens.len(),
                    true,
                )
            } else {
                finish(scores, strategy, known_tokens, tokens.len(), false)
            }
        }
    }
}

/// Tokenize a raw message with the default analyzer and decide it in log space.
pub fn classify(
    message: &str,
    priors: &ClassPriors,
    spam_table: &ParameterTable,
    ham_table: &ParameterTable,
) -> Decision {
    let tokens = tokenize(message);
    score(
        &tokens,
        priors,
        spam_table,
        ham_table,
        ScoringStrategy::LogSpace,
    )
    .decision
}

fn finish(
    scores: PerLabel<f64>,
    strategy: ScoringStrategy,
    known_tokens: usize,
    total_tokens: usize,
    log_space_fallback: bool,
) -> Classification {
    Classification {
        decision: decide(scores.spam, scores.ham),
        spam_score: scores.spam,
        ham_score: scores.ham,
        strategy,
        known_tokens,
        total_tokens,
        log_space_fallback,
    }
}

fn log_scores<S: AsRef<str>>(
    tokens: &[S],
    priors: &ClassPriors,
    tables: &PerLabel<&ParameterTable>,
) -> (PerLabel<f64>, usize) {
    let mut scores = PerLabel::from_fn(|label| priors.get(label).ln());
    let mut known_tokens = 0;

    for token in tokens {
        let mut known = false;
        for label in Label::ALL {
            if let Some(log_p) = tables[label].lookup_log(token.as_ref()) {
                scores[label] += log_p;
                known = true;
            }
        }
        known_tokens += usize::from(known);
    }

    (scores, known_tokens)
}

fn product_scores<S: AsRef<str>>(
    tokens: &[S],
    priors: &ClassPriors,
    tables: &PerLabel<&ParameterTable>,
) -> (PerLabel<f64>, usize) {
    let mut scores = PerLabel::from_fn(|label| priors.get(label));
    let mut known_tokens = 0;

    for token in tokens {
        let mut known = false;
        for label in Label::ALL {
            if let Some(p) = tables[label].lookup(token.as_ref()) {
                scores[label] *= p;
                known = true;
            }
        }
        known_tokens += usize::from(known);
    }

    (scores, known_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::naive_bayes::estimator::{estimate, estimate_priors};
    use crate::ml::naive_bayes::frequency::{TokenizedMessage, count_frequencies};
    use crate::ml::naive_bayes::vocabulary::Vocabulary;

    struct Fixture {
        priors: ClassPriors,
        tables: PerLabel<ParameterTable>,
    }

    fn fixture(corpus: &[(Label, &str)]) -> Fixture {
        let messages: Vec<TokenizedMessage> = corpus
            .iter()
            .map(|(label, text)| {
                TokenizedMessage::new(*label, text.split_whitespace().map(str::to_owned).collect())
            })
            .collect();
        let vocabulary = Vocabulary::build(messages.iter().map(|m| m.tokens.as_slice()));
        let stats = count_frequencies(&messages, &vocabulary);
        Fixture {
            priors: estimate_priors(stats.message_counts(), messages.len()).unwrap(),
            tables: estimate(&vocabulary, &stats, 1.0).unwrap(),
        }
    }

    fn run(fixture: &Fixture, tokens: &[&str], strategy: ScoringStrategy) -> Classification {
        score(
            tokens,
            &fixture.priors,
            &fixture.tables.spam,
            &fixture.tables.ham,
            strategy,
        )
    }

    #[test]
    fn test_decide() {
        assert_eq!(decide(0.2, 0.1), Decision::Spam);
        assert_eq!(decide(-3.0, -1.0), Decision::Ham);
        assert_eq!(decide(0.5, 0.5), Decision::Tie);
    }

    #[test]
    fn test_spammy_words_win() {
        let fixture = fixture(&[
            (Label::Spam, "win cash prize now"),
            (Label::Spam, "claim your prize"),
            (Label::Ham, "see you at lunch"),
            (Label::Ham, "call me when you are home"),
        ]);

        for strategy in [ScoringStrategy::LogSpace, ScoringStrategy::Product] {
            assert_eq!(run(&fixture, &["prize", "cash"], strategy).decision, Decision::Spam);
            assert_eq!(run(&fixture, &["lunch", "home"], strategy).decision, Decision::Ham);
        }
    }

    #[test]
    fn test_classify_raw_message() {
        let fixture = fixture(&[
            (Label::Spam, "win cash prize"),
            (Label::Ham, "see you at lunch"),
        ]);
        let (spam, ham) = (&fixture.tables.spam, &fixture.tables.ham);

        assert_eq!(classify("WIN a CASH prize!!", &fixture.priors, spam, ham), Decision::Spam);
        assert_eq!(classify("Lunch?", &fixture.priors, spam, ham), Decision::Ham);
        assert_eq!(classify("", &fixture.priors, spam, ham), Decision::Tie);
    }

    #[test]
    fn test_out_of_vocabulary_is_neutral() {
        let fixture = fixture(&[
            (Label::Spam, "prize"),
            (Label::Ham, "lunch"),
            (Label::Ham, "home"),
        ]);

        let result = run(&fixture, &["zebra", "quantum"], ScoringStrategy::Product);
        assert_eq!(result.known_tokens, 0);
        assert_eq!(result.total_tokens, 2);
        assert!(result.priors_only());
        assert_eq!(result.spam_score, fixture.priors.spam());
        assert_eq!(result.ham_score, fixture.priors.ham());
        assert_eq!(result.decision, Decision::Ham);

        let with_noise = run(&fixture, &["prize", "zebra"], ScoringStrategy::LogSpace);
        let without_noise = run(&fixture, &["prize"], ScoringStrategy::LogSpace);
        assert_eq!(with_noise.spam_score, without_noise.spam_score);
        assert_eq!(with_noise.ham_score, without_noise.ham_score);
    }

    #[test]
    fn test_empty_message_with_equal_priors_ties() {
        let fixture = fixture(&[(Label::Spam, "prize"), (Label::Ham, "lunch")]);
        let no_tokens: [&str; 0] = [];

        for strategy in [ScoringStrategy::LogSpace, ScoringStrategy::Product] {
            assert_eq!(run(&fixture, &no_tokens, strategy).decision, Decision::Tie);
            assert_eq!(run(&fixture, &["unknown"], strategy).decision, Decision::Tie);
        }
    }

    #[test]
    fn test_equally_likely_word_ties() {
        let fixture = fixture(&[
            (Label::Spam, "prize common"),
            (Label::Ham, "lunch common"),
        ]);

        for strategy in [ScoringStrategy::LogSpace, ScoringStrategy::Product] {
            let result = run(&fixture, &["common"], strategy);
            assert_eq!(result.known_tokens, 1);
            assert_eq!(result.decision, Decision::Tie);
        }
    }

    #[test]
    fn test_product_underflow_falls_back_to_log_space() {
        let fixture = fixture(&[
            (Label::Spam, "prize prize cash"),
            (Label::Ham, "lunch home"),
        ]);
        let tokens: Vec<&str> = std::iter::repeat_n("prize", 2000).collect();

        let result = run(&fixture, &tokens, ScoringStrategy::Product);
        assert!(result.log_space_fallback);
        assert_eq!(result.strategy, ScoringStrategy::LogSpace);
        assert_eq!(result.decision, Decision::Spam);
        assert!(result.spam_score.is_finite());

        let log_result = run(&fixture, &tokens, ScoringStrategy::LogSpace);
        assert!(!log_result.log_space_fallback);
        assert_eq!(log_result.decision, result.decision);
        assert_eq!(log_result.spam_score, result.spam_score);
    }

    #[test]
    fn test_strategies_agree_on_short_messages() {
        let fixture = fixture(&[
            (Label::Spam, "urgent reply now to win"),
            (Label::Spam, "free entry txt now"),
            (Label::Ham, "now i am at home"),
            (Label::Ham, "reply when free"),
            (Label::Ham, "ok"),
        ]);

        for tokens in [
            vec!["free", "txt"],
            vec!["reply", "home"],
            vec!["win", "ok", "ok"],
            vec!["urgent"],
        ] {
            let log = run(&fixture, &tokens, ScoringStrategy::LogSpace);
            let product = run(&fixture, &tokens, ScoringStrategy::Product);
            assert_eq!(log.decision, product.decision, "tokens: {tokens:?}");
            assert!((log.spam_score.exp() - product.spam_score).abs() < 1e-12);
        }
    }
}
