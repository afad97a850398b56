use crate::config::PresenterKind;
use crate::grading::GradeError;
use crate::models::{AnswerKey, AppState, Form};
use crate::pipeline::{self, Submission};
use crate::presenter::{self, Presenter};

pub struct App {
    pub state: AppState,
    answer_key: AnswerKey,
    form: Form,
    /// Index into the form controls; `form.len()` is the submit control.
    cursor: usize,
    presenter: Box<dyn Presenter>,
    last_submission: Option<Submission>,
}

impl App {
    pub fn new(answer_key: AnswerKey, presenter: PresenterKind) -> Self {
        Self::with_presenter(answer_key, presenter::build(presenter))
    }

    pub fn with_presenter(answer_key: AnswerKey, presenter: Box<dyn Presenter>) -> Self {
        let form = Form::from_answer_key(&answer_key);

        Self {
            state: AppState::Answering,
            answer_key,
            form,
            cursor: 0,
            presenter,
            last_submission: None,
        }
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn on_submit_control(&self) -> bool {
        self.cursor == self.form.len()
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }

    pub fn select_next(&mut self) {
        self.cursor = (self.cursor + 1) % (self.form.len() + 1);
    }

    pub fn select_previous(&mut self) {
        let stops = self.form.len() + 1;
        self.cursor = (self.cursor + stops - 1) % stops;
    }

    /// Click the focused control: toggle an answer or submit.
    pub fn activate(&mut self) -> Result<(), GradeError> {
        if self.on_submit_control() {
            self.submit()
        } else {
            self.form.toggle(self.cursor);
            Ok(())
        }
    }

    pub fn submit(&mut self) -> Result<(), GradeError> {
        let submission = pipeline::submit(
            self.form.controls(),
            &self.answer_key,
            self.presenter.as_mut(),
        )?;
        self.last_submission = Some(submission);

        if self.presenter.is_open() {
            self.state = AppState::Presenting;
        }
        Ok(())
    }

    pub fn dismiss(&mut self) {
        self.presenter.dismiss();
        if !self.presenter.is_open() {
            self.state = AppState::Answering;
        }
    }

    pub fn scroll_results_down(&mut self) {
        self.presenter.scroll_down();
    }

    pub fn scroll_results_up(&mut self) {
        self.presenter.scroll_up();
    }

    pub fn restart(&mut self) {
        self.form.clear();
        self.cursor = 0;
        self.last_submission = None;
    }
}
