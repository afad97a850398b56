use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use quiz_grader::{Config, Quiz, Submission, load_form_from_json, logging};

const EXIT_INCOMPLETE: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    match &config.log_file {
        Some(path) => logging::init_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?,
        None if config.is_batch() => logging::init_stderr(),
        None => {}
    }

    let quiz = Quiz::from_json(&config.quiz, config.presenter).context("Failed to load quiz")?;

    let Some(form_path) = &config.form else {
        quiz.run().context("Error running quiz")?;
        return Ok(ExitCode::SUCCESS);
    };

    let form = load_form_from_json(form_path).context("Failed to load form")?;
    let report = quiz.grade_form(&form).context("Failed to grade form")?;
    println!("{}", report.text);

    Ok(match report.submission {
        Submission::Graded(_) => ExitCode::SUCCESS,
        Submission::Incomplete { .. } => ExitCode::from(EXIT_INCOMPLETE),
    })
}
