//! Command implementations for the hamspam CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::HamspamConfig;
use crate::dataset::{DatasetSummary, load_messages, train_test_split};
use crate::ml::naive_bayes::{Message, NaiveBayesClassifier, evaluate};

/// Execute a CLI command.
pub fn execute_command(args: HamspamArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Describe(describe_args) => describe_dataset(describe_args, config, &args),
        Command::Evaluate(evaluate_args) => evaluate_classifier(evaluate_args, config, &args),
        Command::Classify(classify_args) => classify_messages(classify_args, config, &args),
    }
}

/// Load the configuration file, or the defaults without one.
fn load_config(args: &HamspamArgs) -> Result<HamspamConfig> {
    match &args.config {
        Some(path) => HamspamConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(HamspamConfig::default()),
    }
}

fn read_dataset(path: &Path, config: &HamspamConfig) -> Result<Vec<Message>> {
    let messages = load_messages(path, &config.dataset)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    info!("read {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

/// Show the label distribution of a dataset and its split.
fn describe_dataset(
    args: &DescribeArgs,
    mut config: HamspamConfig,
    cli_args: &HamspamArgs,
) -> Result<()> {
    args.split.apply(&mut config.split);
    config.validate().context("invalid configuration")?;

    let messages = read_dataset(&args.dataset, &config)?;
    let split = train_test_split(&messages, &config.split)?;

    output_result(
        "Dataset summary",
        &DescribeResult {
            dataset: args.dataset.to_string_lossy().to_string(),
            train_fraction: config.split.train_fraction,
            seed: config.split.seed,
            all: DatasetSummary::from_messages(&messages),
            train: DatasetSummary::from_messages(&split.train),
            test: DatasetSummary::from_messages(&split.test),
        },
        cli_args,
    )?;

    Ok(())
}

/// Split, train and report accuracy on the held-out part.
fn evaluate_classifier(
    args: &EvaluateArgs,
    mut config: HamspamConfig,
    cli_args: &HamspamArgs,
) -> Result<()> {
    args.split.apply(&mut config.split);
    args.model.apply(&mut config.classifier);
    args.apply(&mut config.evaluation);
    config.validate().context("invalid configuration")?;

    let messages = read_dataset(&args.dataset, &config)?;
    let split = train_test_split(&messages, &config.split)?;

    let start = Instant::now();
    let model = NaiveBayesClassifier::train(&split.train, &config.classifier)
        .context("training failed")?;
    let training_ms = start.elapsed().as_millis() as u64;

    let start = Instant::now();
    let report = evaluate(&split.test, &model, config.evaluation.tie_policy)
        .context("evaluation failed")?;
    let evaluation_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Evaluation complete",
        &EvaluationResult {
            dataset: args.dataset.to_string_lossy().to_string(),
            model: model.summary(),
            report,
            training_ms,
            evaluation_ms,
        },
        cli_args,
    )?;

    Ok(())
}

/// Train on the whole dataset and classify each message argument.
fn classify_messages(
    args: &ClassifyArgs,
    mut config: HamspamConfig,
    cli_args: &HamspamArgs,
) -> Result<()> {
    args.model.apply(&mut config.classifier);
    config.validate().context("invalid configuration")?;

    let messages = read_dataset(&args.dataset, &config)?;
    let model =
        NaiveBayesClassifier::train(&messages, &config.classifier).context("training failed")?;

    let results = model
        .classify_batch(args.messages.as_slice())
        .into_iter()
        .zip(&args.messages)
        .map(|(classification, message)| MessageResult {
            message: message.clone(),
            classification,
        })
        .collect();

    output_result(
        "Classification results",
        &ClassificationResults {
            model: model.summary(),
            results,
        },
        cli_args,
    )?;

    Ok(())
}
