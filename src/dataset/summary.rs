//! Label distribution of a corpus.

use serde::{Deserialize, Serialize};

use crate::ml::naive_bayes::{Label, Message, PerLabel};

/// Count and share of one label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelShare {
    pub label: Label,
    pub count: usize,
    /// `count / total`, 0.0 for an empty corpus.
    pub fraction: f64,
}

/// Size and label distribution of a set of messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total: usize,
    /// Messages without a label.
    pub unlabeled: usize,
    /// One entry per label, in [`Label::ALL`] order.
    pub labels: Vec<LabelShare>,
}

impl DatasetSummary {
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut counts = PerLabel::<usize>::default();
        let mut unlabeled = 0;

        for message in messages {
            match message.label {
                Some(label) => counts[label] += 1,
                None => unlabeled += 1,
            }
        }

        let total = messages.len();
        let labels = counts
            .iter()
            .map(|(label, &count)| LabelShare {
                label,
                count,
                fraction: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
            })
            .collect();

        DatasetSummary {
            total,
            unlabeled,
            labels,
        }
    }

    /// Count of one label.
    pub fn count(&self, label: Label) -> usize {
        self.share(label).map_or(0, |share| share.count)
    }

    /// Fraction of one label.
    pub fn fraction(&self, label: Label) -> f64 {
        self.share(label).map_or(0.0, |share| share.fraction)
    }

    fn share(&self, label: Label) -> Option<&LabelShare> {
        self.labels.iter().find(|share| share.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_fractions() {
        let messages = vec![
            Message::labeled("a", Label::Ham),
            Message::labeled("b", Label::Ham),
            Message::labeled("c", Label::Ham),
            Message::labeled("d", Label::Spam),
        ];

        let summary = DatasetSummary::from_messages(&messages);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(Label::Ham), 3);
        assert_eq!(summary.count(Label::Spam), 1);
        assert_eq!(summary.fraction(Label::Spam), 0.25);
        assert_eq!(summary.labels[0].label, Label::Spam);
    }

    #[test]
    fn test_unlabeled_messages() {
        let messages = vec![
            Message::labeled("a", Label::Spam),
            Message::unlabeled("b"),
        ];

        let summary = DatasetSummary::from_messages(&messages);

        assert_eq!(summary.unlabeled, 1);
        assert_eq!(summary.fraction(Label::Spam), 0.5);
        assert_eq!(summary.fraction(Label::Ham), 0.0);
    }

    #[test]
    fn test_empty() {
        let summary = DatasetSummary::from_messages(&[]);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.labels.len(), 2);
        assert_eq!(summary.fraction(Label::Ham), 0.0);
    }
}
