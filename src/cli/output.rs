//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HamspamArgs, OutputFormat};
use crate::dataset::DatasetSummary;
use crate::error::Result;
use crate::ml::naive_bayes::{Classification, EvaluationReport, Label, ModelSummary, TiePolicy};

/// Result structure for dataset description.
#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeResult {
    pub dataset: String,
    pub train_fraction: f64,
    pub seed: u64,
    pub all: DatasetSummary,
    pub train: DatasetSummary,
    pub test: DatasetSummary,
}

/// Result structure for evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub dataset: String,
    pub model: ModelSummary,
    pub report: EvaluationReport,
    pub training_ms: u64,
    pub evaluation_ms: u64,
}

/// Decision for one message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResult {
    pub message: String,
    pub classification: Classification,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub model: ModelSummary,
    pub results: Vec<MessageResult>,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &HamspamArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &HamspamArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HamspamArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for DescribeResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Dataset: {}\n", self.dataset));
        out.push_str("════════\n");
        render_summary(&mut out, "All messages", &self.all);
        render_summary(
            &mut out,
            &format!(
                "Training split ({}, seed {})",
                format_percent(self.train_fraction),
                self.seed
            ),
            &self.train,
        );
        render_summary(&mut out, "Test split", &self.test);
        out
    }
}

impl HumanOutput for EvaluationResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Dataset: {}\n", self.dataset));
        out.push_str("════════\n");
        render_model(&mut out, &self.model);

        let report = &self.report;
        out.push('\n');
        out.push_str("Evaluation:\n");
        out.push_str("───────────\n");
        let denominator = match report.tie_policy {
            TiePolicy::CountAsIncorrect => report.total,
            TiePolicy::Exclude => report.total - report.ties,
        };
        out.push_str(&format!(
            "Accuracy: {} ({}/{})\n",
            format_percent(report.accuracy),
            report.correct,
            denominator
        ));
        out.push_str(&format!("Incorrect: {}\n", report.incorrect));
        out.push_str(&format!(
            "Ties: {} ({})\n",
            report.ties,
            tie_policy_name(report.tie_policy)
        ));

        let c = &report.confusion;
        out.push('\n');
        out.push_str("              decided spam  decided ham  tie\n");
        out.push_str(&format!(
            "actual spam   {:>12}  {:>11}  {:>3}\n",
            c.spam_as_spam, c.spam_as_ham, c.spam_as_tie
        ));
        out.push_str(&format!(
            "actual ham    {:>12}  {:>11}  {:>3}\n",
            c.ham_as_spam, c.ham_as_ham, c.ham_as_tie
        ));
        if let Some(precision) = c.spam_precision() {
            out.push_str(&format!("Spam precision: {}\n", format_percent(precision)));
        }
        if let Some(recall) = c.spam_recall() {
            out.push_str(&format!("Spam recall: {}\n", format_percent(recall)));
        }

        out.push('\n');
        out.push_str(&format!(
            "Training time: {}ms, evaluation time: {}ms\n",
            self.training_ms, self.evaluation_ms
        ));
        out
    }
}

impl HumanOutput for ClassificationResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let c = &result.classification;
            out.push_str(&format!(
                "{:<4}  {}\n",
                c.decision.to_string().to_uppercase(),
                result.message
            ));
            out.push_str(&format!(
                "      spam {:.4}  ham {:.4}  ({} of {} tokens known{})\n",
                c.spam_score,
                c.ham_score,
                c.known_tokens,
                c.total_tokens,
                if c.log_space_fallback {
                    ", log-space fallback"
                } else {
                    ""
                }
            ));
        }
        out
    }
}

fn render_summary(out: &mut String, title: &str, summary: &DatasetSummary) {
    out.push('\n');
    out.push_str(&format!("{title}: {} messages\n", summary.total));
    for share in &summary.labels {
        out.push_str(&format!(
            "  {:<5} {:>6}  {}\n",
            share.label,
            share.count,
            format_percent(share.fraction)
        ));
    }
    if summary.unlabeled > 0 {
        out.push_str(&format!("  unlabeled {}\n", summary.unlabeled));
    }
}

fn render_model(out: &mut String, model: &ModelSummary) {
    out.push('\n');
    out.push_str("Model:\n");
    out.push_str("──────\n");
    out.push_str(&format!("Vocabulary size: {}\n", model.vocabulary_size));
    out.push_str(&format!("Smoothing alpha: {}\n", model.alpha));
    for label in Label::ALL {
        out.push_str(&format!(
            "P({label}) = {:.4}  ({} messages, {} words)\n",
            model.priors[label], model.messages[label], model.words[label]
        ));
    }
}

fn tie_policy_name(policy: TiePolicy) -> &'static str {
    match policy {
        TiePolicy::CountAsIncorrect => "counted as incorrect",
        TiePolicy::Exclude => "excluded from accuracy",
    }
}

/// Format a ratio in [0, 1] as a percentage.
fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::naive_bayes::{
        ConfusionMatrix, Decision, Message, PerLabel, ScoringStrategy,
    };

    fn model_summary() -> ModelSummary {
        ModelSummary {
            alpha: 1.0,
            scoring: ScoringStrategy::LogSpace,
            vocabulary_size: 42,
            messages: PerLabel::new(2, 8),
            words: PerLabel::new(20, 60),
            priors: PerLabel::new(0.2, 0.8),
        }
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.97847), "97.85%");
        assert_eq!(format_percent(1.0), "100.00%");
    }

    #[test]
    fn test_render_describe() {
        let messages = vec![
            Message::labeled("a", Label::Spam),
            Message::labeled("b", Label::Ham),
        ];
        let summary = DatasetSummary::from_messages(&messages);
        let result = DescribeResult {
            dataset: "sms.tsv".to_string(),
            train_fraction: 0.5,
            seed: 1,
            all: summary.clone(),
            train: summary.clone(),
            test: summary,
        };

        let text = result.render_human();
        assert!(text.contains("Dataset: sms.tsv"));
        assert!(text.contains("All messages: 2 messages"));
        assert!(text.contains("Training split (50.00%, seed 1)"));
        assert!(text.contains("50.00%"));
    }

    #[test]
    fn test_render_evaluation() {
        let mut confusion = ConfusionMatrix::default();
        confusion.record(Label::Spam, Decision::Spam);
        confusion.record(Label::Ham, Decision::Ham);
        confusion.record(Label::Ham, Decision::Ham);
        confusion.record(Label::Ham, Decision::Tie);
        let result = EvaluationResult {
            dataset: "sms.tsv".to_string(),
            model: model_summary(),
            report: EvaluationReport::from_confusion(confusion, TiePolicy::CountAsIncorrect),
            training_ms: 3,
            evaluation_ms: 1,
        };

        let text = result.render_human();
        assert!(text.contains("Vocabulary size: 42"));
        assert!(text.contains("Accuracy: 75.00% (3/4)"));
        assert!(text.contains("Ties: 1 (counted as incorrect)"));
        assert!(text.contains("Spam precision: 100.00%"));
    }

    #[test]
    fn test_render_classification() {
        let result = ClassificationResults {
            model: model_summary(),
            results: vec![MessageResult {
                message: "WIN cash".to_string(),
                classification: Classification {
                    decision: Decision::Spam,
                    spam_score: -4.5,
                    ham_score: -9.25,
                    strategy: ScoringStrategy::LogSpace,
                    known_tokens: 2,
                    total_tokens: 2,
                    log_space_fallback: false,
                },
            }],
        };

        let text = result.render_human();
        assert!(text.starts_with("SPAM  WIN cash\n"));
        assert!(text.contains("spam -4.5000  ham -9.2500  (2 of 2 tokens known)"));
    }

    #[test]
    fn test_json_output_shape() {
        let result = ClassificationResults {
            model: model_summary(),
            results: Vec::new(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["model"]["vocabulary_size"], 42);
        assert_eq!(value["model"]["scoring"], "log_space");
        assert_eq!(value["model"]["priors"]["spam"], 0.2);
    }
}
