use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which renderer shows errors and results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PresenterKind {
    /// Dismissible results panel over the form.
    #[default]
    Overlay,
    /// Plain-text prompt that must be acknowledged.
    Alert,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// JSON file with the questions and their correct answers
    #[arg(short, long)]
    pub quiz: PathBuf,

    /// How to present errors and results
    #[arg(short, long, value_enum, default_value_t = PresenterKind::Overlay)]
    pub presenter: PresenterKind,

    /// Grade a saved form snapshot instead of running the interactive quiz
    #[arg(short, long)]
    pub form: Option<PathBuf>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn is_batch(&self) -> bool {
        self.form.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_overlay() {
        let config = Config::try_parse_from(["quiz-grader", "--quiz", "quiz.json"]).unwrap();
        assert_eq!(config.presenter, PresenterKind::Overlay);
        assert!(!config.is_batch());
    }

    #[test]
    fn test_batch_with_alert() {
        let config = Config::try_parse_from([
            "quiz-grader",
            "-q",
            "quiz.json",
            "--presenter",
            "alert",
            "--form",
            "answers.json",
        ])
        .unwrap();
        assert_eq!(config.presenter, PresenterKind::Alert);
        assert!(config.is_batch());
    }

    #[test]
    fn test_quiz_is_required() {
        assert!(Config::try_parse_from(["quiz-grader"]).is_err());
    }
}
