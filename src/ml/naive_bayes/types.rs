//! Common types for spam classification.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HamspamError;

/// True class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unsolicited message.
    Spam,
    /// Legitimate message.
    Ham,
}

impl Label {
    /// Both labels, in a fixed order.
    pub const ALL: [Label; 2] = [Label::Spam, Label::Ham];

    /// Lowercase name of the label as it appears in datasets.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Label {
    type Err = HamspamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("spam") {
            Ok(Label::Spam)
        } else if trimmed.eq_ignore_ascii_case("ham") {
            Ok(Label::Ham)
        } else {
            Err(HamspamError::dataset(format!("unknown label '{trimmed}'")))
        }
    }
}

/// One value per label.
///
/// Per-class state lives in this shape so estimation and scoring are a
/// single loop over [`Label::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerLabel<T> {
    pub spam: T,
    pub ham: T,
}

impl<T> PerLabel<T> {
    pub fn new(spam: T, ham: T) -> Self {
        PerLabel { spam, ham }
    }

    /// Build a value for each label from a function of the label.
    pub fn from_fn<F: FnMut(Label) -> T>(mut f: F) -> Self {
        let spam = f(Label::Spam);
        let ham = f(Label::Ham);
        PerLabel { spam, ham }
    }

    pub fn get(&self, label: Label) -> &T {
        match label {
            Label::Spam => &self.spam,
            Label::Ham => &self.ham,
        }
    }

    pub fn get_mut(&mut self, label: Label) -> &mut T {
        match label {
            Label::Spam => &mut self.spam,
            Label::Ham => &mut self.ham,
        }
    }

    pub fn map<U, F: FnMut(Label, &T) -> U>(&self, mut f: F) -> PerLabel<U> {
        PerLabel::from_fn(|label| f(label, self.get(label)))
    }

    /// Iterate `(label, value)` pairs in [`Label::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &T)> {
        Label::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}

impl<T> Index<Label> for PerLabel<T> {
    type Output = T;

    fn index(&self, label: Label) -> &T {
        self.get(label)
    }
}

impl<T> IndexMut<Label> for PerLabel<T> {
    fn index_mut(&mut self, label: Label) -> &mut T {
        self.get_mut(label)
    }
}

/// A raw text message with an optional true label.
///
/// Training and evaluation data carry a label; live input does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message body.
    pub text: String,
    /// True class, when known.
    pub label: Option<Label>,
}

impl Message {
    pub fn labeled<S: Into<String>>(text: S, label: Label) -> Self {
        Message {
            text: text.into(),
            label: Some(label),
        }
    }

    pub fn unlabeled<S: Into<String>>(text: S) -> Self {
        Message {
            text: text.into(),
            label: None,
        }
    }
}

/// Outcome of classifying one message.
///
/// `Tie` means both classes scored exactly the same and the message should
/// be deferred to a human rather than forced into a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Spam,
    Ham,
    Tie,
}

impl Decision {
    /// The label this decision assigns, or `None` for a tie.
    pub fn label(self) -> Option<Label> {
        match self {
            Decision::Spam => Some(Label::Spam),
            Decision::Ham => Some(Label::Ham),
            Decision::Tie => None,
        }
    }

    /// Whether this decision assigns `label`. A tie never matches.
    pub fn matches(self, label: Label) -> bool {
        self.label() == Some(label)
    }
}

impl From<Label> for Decision {
    fn from(label: Label) -> Self {
        match label {
            Label::Spam => Decision::Spam,
            Label::Ham => Decision::Ham,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Spam => write!(f, "spam"),
            Decision::Ham => write!(f, "ham"),
            Decision::Tie => write!(f, "tie"),
        }
    }
}
