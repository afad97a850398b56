use std::io::Write;

use quiz_grader::grading::{all_questions_answered, collect_state, grade};
use quiz_grader::pipeline::{Submission, submit};
use quiz_grader::presenter::{Alert, INCOMPLETE_MESSAGE, Overlay, Presenter};
use quiz_grader::{
    Answer, AnswerKey, Form, PresenterKind, Question, Quiz, ToggleControl, load_form_from_json,
};

fn single_choice() -> AnswerKey {
    AnswerKey::new(vec![Question::new(
        "What is the capital of Italy?",
        vec![
            Answer::new("Milan", false),
            Answer::new("Rome", true),
            Answer::new("Turin", false),
        ],
    )])
}

fn multi_select() -> AnswerKey {
    AnswerKey::new(vec![Question::new(
        "Which are primes?",
        vec![
            Answer::new("2", true),
            Answer::new("4", false),
            Answer::new("5", true),
        ],
    )])
}

fn radios(name: &str, checked: &[bool]) -> Vec<ToggleControl> {
    checked
        .iter()
        .map(|&checked| ToggleControl::radio(name, checked))
        .collect()
}

fn graded(submission: Submission) -> (usize, usize) {
    match submission {
        Submission::Graded(summary) => (summary.score, summary.total),
        other => panic!("expected a graded submission, got {other:?}"),
    }
}

#[test]
fn single_choice_correct_option_scores_one() {
    let controls = radios("0", &[false, true, false]);
    let mut presenter = Overlay::new();

    let submission = submit(&controls, &single_choice(), &mut presenter).unwrap();
    assert_eq!(graded(submission), (1, 1));
    assert!(presenter.plain_text().unwrap().contains("1 - What is the capital of Italy?"));
}

#[test]
fn single_choice_wrong_option_scores_zero() {
    let controls = radios("0", &[true, false, false]);
    let mut presenter = Alert::new();

    let submission = submit(&controls, &single_choice(), &mut presenter).unwrap();
    assert_eq!(graded(submission), (0, 1));
    assert_eq!(presenter.message(), Some("1 - Wrong\n\nYou scored 0/1"));
}

#[test]
fn multi_select_with_one_correct_missing_is_wrong() {
    let controls = vec![
        ToggleControl::checkbox("0-0", true),
        ToggleControl::checkbox("0-1", false),
        ToggleControl::checkbox("0-2", false),
    ];
    let state = collect_state(&controls);
    let result = grade(&state, &multi_select()).unwrap();

    assert!(!result.outcomes()[0].correct);
    assert_eq!(result.score(), 0);
}

#[test]
fn nothing_selected_takes_error_path() {
    let controls = radios("0", &[false, false, false]);
    assert!(!all_questions_answered(&collect_state(&controls)));

    let mut presenter = Overlay::new();
    let submission = submit(&controls, &single_choice(), &mut presenter).unwrap();

    assert!(matches!(submission, Submission::Incomplete { .. }));
    let text = presenter.plain_text().unwrap();
    assert!(text.starts_with("Error"));
    assert!(text.contains(INCOMPLETE_MESSAGE));
}

#[test]
fn all_correct_scores_total() {
    let answer_key = AnswerKey::new(vec![
        single_choice().questions()[0].clone(),
        multi_select().questions()[0].clone(),
    ]);

    let mut form = Form::from_answer_key(&answer_key);
    // Rome, then the 2 and 5 checkboxes.
    form.toggle(1);
    form.toggle(3);
    form.toggle(5);

    let report = Quiz::new(answer_key, PresenterKind::Alert)
        .grade_form(&form)
        .unwrap();
    assert_eq!(graded(report.submission), (2, 2));
    assert_eq!(report.text, "1 - Correct\n2 - Correct\n\nYou scored 2/2");
}

#[test]
fn denominator_counts_unrendered_questions() {
    let answer_key = AnswerKey::new(vec![
        single_choice().questions()[0].clone(),
        multi_select().questions()[0].clone(),
    ]);
    // Only the first question is on the page.
    let controls = radios("0", &[false, true, false]);
    let mut presenter = Alert::new();

    let submission = submit(&controls, &answer_key, &mut presenter).unwrap();
    assert_eq!(graded(submission), (1, 2));
}

#[test]
fn snapshot_file_round_trip_through_quiz() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "0", "kind": "radio", "checked": false}},
            {{"name": "0", "kind": "radio", "checked": true}},
            {{"name": "0", "kind": "radio", "checked": false}}
        ]"#
    )
    .unwrap();

    let form = load_form_from_json(file.path()).unwrap();
    let report = Quiz::new(single_choice(), PresenterKind::Overlay)
        .grade_form(&form)
        .unwrap();

    assert_eq!(graded(report.submission), (1, 1));
    assert!(report.text.ends_with("You scored 1/1"));
}
