//! Criterion benchmarks for the hamspam spam filter.
//!
//! Covers the three hot paths:
//! - Message tokenization
//! - Training (vocabulary, counting, estimation)
//! - Classification, single and batched

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hamspam::analysis::{Analyzer, MessageAnalyzer};
use hamspam::config::ClassifierConfig;
use hamspam::ml::naive_bayes::{
    Label, Message, MessageClassifier, NaiveBayesClassifier, ScoringStrategy,
};
use std::hint::black_box;

const SPAM_WORDS: &[&str] = &[
    "free", "win", "winner", "prize", "cash", "claim", "urgent", "txt", "call", "now", "mobile",
    "reply", "stop", "award", "guaranteed", "87121", "offer", "ringtone", "chat", "week",
];

const HAM_WORDS: &[&str] = &[
    "ok", "lar", "see", "you", "lunch", "home", "later", "sorry", "dinner", "tonight", "love",
    "going", "work", "bus", "mum", "tomorrow", "haha", "meeting", "call", "now",
];

/// Generate a synthetic labeled corpus.
fn generate_messages(count: usize) -> Vec<Message> {
    let mut messages = Vec::with_capacity(count);
    for i in 0..count {
        let (label, words) = if i % 7 == 0 {
            (Label::Spam, SPAM_WORDS)
        } else {
            (Label::Ham, HAM_WORDS)
        };
        let length = 5 + (i % 20); // Variable length messages
        let text: Vec<String> = (0..length)
            .map(|j| {
                let word = words[(i * 7 + j * 13) % words.len()]; // Pseudo-random distribution
                if j % 5 == 0 {
                    word.to_uppercase()
                } else {
                    word.to_string()
                }
            })
            .collect();
        messages.push(Message::labeled(format!("{}!", text.join(" ")), label));
    }
    messages
}

/// Benchmark message tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let analyzer = MessageAnalyzer::default();
    let messages = generate_messages(1000);

    group.bench_function("analyze_single_message", |b| {
        b.iter(|| black_box(analyzer.terms(black_box(&messages[3].text))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_messages", |b| {
        b.iter(|| {
            for message in messages.iter().take(100) {
                black_box(analyzer.terms(black_box(&message.text)));
            }
        })
    });

    group.finish();
}

/// Benchmark training on corpora of increasing size.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);

    for size in [500, 5000] {
        let messages = generate_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &messages, |b, messages| {
            b.iter(|| {
                black_box(
                    NaiveBayesClassifier::train(messages, &ClassifierConfig::default()).unwrap(),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark classification with both scoring strategies.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let messages = generate_messages(5000);
    let model = NaiveBayesClassifier::train(&messages, &ClassifierConfig::default()).unwrap();
    let texts: Vec<&str> = messages.iter().take(1000).map(|m| m.text.as_str()).collect();

    group.bench_function("classify_log_space", |b| {
        b.iter(|| black_box(model.classify(black_box(texts[1]))))
    });

    let product = NaiveBayesClassifier::train(&messages, &ClassifierConfig::default())
        .unwrap()
        .with_scoring(ScoringStrategy::Product);
    group.bench_function("classify_product", |b| {
        b.iter(|| black_box(product.classify(black_box(texts[1]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("classify_sequential", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(model.classify(text));
            }
        })
    });
    group.bench_function("classify_batch_parallel", |b| {
        b.iter(|| black_box(model.classify_batch(texts.as_slice())))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_training, bench_classification);

criterion_main!(benches);
