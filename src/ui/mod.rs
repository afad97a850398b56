mod form;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    form::render(frame, area, app);

    if app.state == AppState::Presenting {
        app.presenter().draw(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresenterKind;
    use crate::models::{Answer, AnswerKey, Question};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app(kind: PresenterKind) -> App {
        let answer_key = AnswerKey::new(vec![Question::new(
            "Which planet is red?",
            vec![Answer::new("Mars", true), Answer::new("Venus", false)],
        )]);
        App::new(answer_key, kind)
    }

    #[test]
    fn test_form_lists_questions_and_submit() {
        let screen = screen(&app(PresenterKind::Overlay));
        assert!(screen.contains("Which planet is red?"));
        assert!(screen.contains("Mars"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_trailing_question_without_answers_has_heading() {
        let answer_key = AnswerKey::new(vec![
            Question::new("Has options", vec![Answer::new("Only", true)]),
            Question::new("Nothing to pick", Vec::new()),
        ]);
        let screen = screen(&App::new(answer_key, PresenterKind::Overlay));
        assert!(screen.contains("1. Has options"));
        assert!(screen.contains("2. Nothing to pick"));
        assert!(screen.contains("0/2 answered"));
    }

    #[test]
    fn test_alert_drawn_after_submit() {
        let mut app = app(PresenterKind::Alert);
        app.submit().unwrap();
        let screen = screen(&app);
        assert!(screen.contains("Not all questions have been answered."));
        assert!(screen.contains("[ OK ]"));
    }
}
