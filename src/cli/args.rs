//! Command line argument parsing for the hamspam CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ClassifierConfig, EvaluationConfig, SplitConfig};
use crate::ml::naive_bayes::{ScoringStrategy, TiePolicy};

/// hamspam - Naive Bayes SMS spam filter
#[derive(Parser, Debug, Clone)]
#[command(name = "hamspam")]
#[command(about = "Train and evaluate a multinomial Naive Bayes SMS spam filter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HamspamArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON); command line flags take precedence
    #[arg(short, long, value_name = "CONFIG_FILE", env = "HAMSPAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HamspamArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the label distribution of a dataset and of its train/test split
    Describe(DescribeArgs),

    /// Split a dataset, train on one part and measure accuracy on the other
    Evaluate(EvaluateArgs),

    /// Train on a whole dataset and classify the given messages
    Classify(ClassifyArgs),
}

/// Arguments for describing a dataset
#[derive(Parser, Debug, Clone)]
pub struct DescribeArgs {
    /// Path to the labeled dataset
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    #[command(flatten)]
    pub split: SplitOverrides,
}

/// Arguments for evaluating the classifier
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Path to the labeled dataset
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    #[command(flatten)]
    pub split: SplitOverrides,

    #[command(flatten)]
    pub model: ModelOverrides,

    /// How tied decisions count toward accuracy
    #[arg(long, value_name = "POLICY")]
    pub tie_policy: Option<TiePolicyArg>,
}

/// Arguments for classifying messages
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the labeled dataset used for training
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Messages to classify
    #[arg(value_name = "MESSAGE", required = true)]
    pub messages: Vec<String>,

    #[command(flatten)]
    pub model: ModelOverrides,
}

/// Split settings that override the configuration
#[derive(Args, Debug, Clone, Default)]
pub struct SplitOverrides {
    /// Share of messages used for training, in (0, 1)
    #[arg(long, value_name = "FRACTION")]
    pub train_fraction: Option<f64>,

    /// Seed of the shuffle before splitting
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SplitOverrides {
    /// Overwrite the fields given on the command line
    pub fn apply(&self, config: &mut SplitConfig) {
        if let Some(train_fraction) = self.train_fraction {
            config.train_fraction = train_fraction;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
    }
}

/// Model settings that override the configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ModelOverrides {
    /// Laplace smoothing constant
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Score accumulation strategy
    #[arg(long, value_name = "STRATEGY")]
    pub scoring: Option<ScoringArg>,
}

impl ModelOverrides {
    /// Overwrite the fields given on the command line
    pub fn apply(&self, config: &mut ClassifierConfig) {
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(scoring) = self.scoring {
            config.scoring = scoring.into();
        }
    }
}

impl EvaluateArgs {
    /// Overwrite the evaluation fields given on the command line
    pub fn apply(&self, config: &mut EvaluationConfig) {
        if let Some(tie_policy) = self.tie_policy {
            config.tie_policy = tie_policy.into();
        }
    }
}

/// Scoring strategies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringArg {
    /// Sum of log probabilities
    Log,
    /// Product of probabilities, with log-space fallback on underflow
    Product,
}

impl From<ScoringArg> for ScoringStrategy {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Log => ScoringStrategy::LogSpace,
            ScoringArg::Product => ScoringStrategy::Product,
        }
    }
}

/// Tie policies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiePolicyArg {
    /// Ties count as incorrect
    Incorrect,
    /// Ties are left out of the accuracy denominator
    Exclude,
}

impl From<TiePolicyArg> for TiePolicy {
    fn from(arg: TiePolicyArg) -> Self {
        match arg {
            TiePolicyArg::Incorrect => TiePolicy::CountAsIncorrect,
            TiePolicyArg::Exclude => TiePolicy::Exclude,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
