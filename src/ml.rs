//! Machine learning models for message classification.

pub mod naive_bayes;
