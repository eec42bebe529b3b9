//! Accuracy measurement on held-out labeled messages.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::classifier::MessageClassifier;
use super::types::{Decision, Label, Message};
use crate::error::{HamspamError, Result};

/// How a `Tie` decision counts toward accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// A tie never matches the true label and is counted as incorrect.
    #[default]
    CountAsIncorrect,
    /// Ties are reported separately and left out of the accuracy denominator.
    Exclude,
}

/// Decisions broken down by true label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub spam_as_spam: usize,
    pub spam_as_ham: usize,
    pub spam_as_tie: usize,
    pub ham_as_spam: usize,
    pub ham_as_ham: usize,
    pub ham_as_tie: usize,
}

impl ConfusionMatrix {
    /// Count one decision for a message whose true label is `actual`.
    pub fn record(&mut self, actual: Label, decision: Decision) {
        let cell = match (actual, decision) {
            (Label::Spam, Decision::Spam) => &mut self.spam_as_spam,
            (Label::Spam, Decision::Ham) => &mut self.spam_as_ham,
            (Label::Spam, Decision::Tie) => &mut self.spam_as_tie,
            (Label::Ham, Decision::Spam) => &mut self.ham_as_spam,
            (Label::Ham, Decision::Ham) => &mut self.ham_as_ham,
            (Label::Ham, Decision::Tie) => &mut self.ham_as_tie,
        };
        *cell += 1;
    }

    /// Add another matrix cell by cell.
    pub fn merge(mut self, other: Self) -> Self {
        self.spam_as_spam += other.spam_as_spam;
        self.spam_as_ham += other.spam_as_ham;
        self.spam_as_tie += other.spam_as_tie;
        self.ham_as_spam += other.ham_as_spam;
        self.ham_as_ham += other.ham_as_ham;
        self.ham_as_tie += other.ham_as_tie;
        self
    }

    pub fn total(&self) -> usize {
        self.correct() + self.misclassified() + self.ties()
    }

    /// Decisions matching the true label.
    pub fn correct(&self) -> usize {
        self.spam_as_spam + self.ham_as_ham
    }

    /// Decisions naming the wrong label. Ties are not included.
    pub fn misclassified(&self) -> usize {
        self.spam_as_ham + self.ham_as_spam
    }

    pub fn ties(&self) -> usize {
        self.spam_as_tie + self.ham_as_tie
    }

    /// Share of `Spam` decisions that were spam; `None` without any.
    pub fn spam_precision(&self) -> Option<f64> {
        ratio(self.spam_as_spam, self.spam_as_spam + self.ham_as_spam)
    }

    /// Share of spam messages decided `Spam`; `None` without any spam.
    pub fn spam_recall(&self) -> Option<f64> {
        ratio(
            self.spam_as_spam,
            self.spam_as_spam + self.spam_as_ham + self.spam_as_tie,
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// Outcome of evaluating a classifier on a labeled test set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Messages evaluated.
    pub total: usize,
    pub correct: usize,
    /// Wrong decisions, plus ties under [`TiePolicy::CountAsIncorrect`].
    pub incorrect: usize,
    pub ties: usize,
    /// In `[0, 1]`; 0.0 when nothing counts toward the denominator.
    pub accuracy: f64,
    pub tie_policy: TiePolicy,
    pub confusion: ConfusionMatrix,
}

impl EvaluationReport {
    /// Derive counts and accuracy from a confusion matrix.
    pub fn from_confusion(confusion: ConfusionMatrix, tie_policy: TiePolicy) -> Self {
        let total = confusion.total();
        let correct = confusion.correct();
        let ties = confusion.ties();

        let (incorrect, denominator) = match tie_policy {
            TiePolicy::CountAsIncorrect => (confusion.misclassified() + ties, total),
            TiePolicy::Exclude => (confusion.misclassified(), total - ties),
        };

        EvaluationReport {
            total,
            correct,
            incorrect,
            ties,
            accuracy: ratio(correct, denominator).unwrap_or(0.0),
            tie_policy,
            confusion,
        }
    }
}

/// Classify every test message and compare against its true label.
///
/// Messages are classified in parallel; the counts do not depend on order.
/// Every message must carry a label.
pub fn evaluate<C>(
    test_messages: &[Message],
    classifier: &C,
    tie_policy: TiePolicy,
) -> Result<EvaluationReport>
where
    C: MessageClassifier + ?Sized,
{
    if let Some(idx) = test_messages.iter().position(|m| m.label.is_none()) {
        return Err(HamspamError::configuration(format!(
            "test message {idx} has no label"
        )));
    }

    let confusion = test_messages
        .par_iter()
        .filter_map(|message| message.label.map(|label| (label, message)))
        .map(|(label, message)| {
            let mut confusion = ConfusionMatrix::default();
            confusion.record(label, classifier.decide(&message.text));
            confusion
        })
        .reduce(ConfusionMatrix::default, ConfusionMatrix::merge);

    let report = EvaluationReport::from_confusion(confusion, tie_policy);
    debug!(
        "{} evaluated {} messages: {} correct, {} incorrect, {} ties",
        classifier.name(),
        report.total,
        report.correct,
        report.incorrect,
        report.ties
    );

    Ok(report)
}
