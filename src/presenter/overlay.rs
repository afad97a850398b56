//! Dismissible results panel drawn over the form.

use std::cell::Cell;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use super::{Presenter, ScoreSummary, centered, wrapped_rows};

const PANEL_WIDTH: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Text,
    Correct,
    Incorrect,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    pub text: String,
    pub style: LineStyle,
}

impl PanelLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Close handler armed when the panel is revealed.
#[derive(Debug)]
struct CloseAction;

impl CloseAction {
    fn fire(self, hidden: &mut bool) {
        *hidden = true;
    }
}

/// Panel body plus its visibility.
#[derive(Debug)]
pub struct Overlay {
    body: Vec<PanelLine>,
    hidden: bool,
    close_action: Option<CloseAction>,
    scroll: u16,
    /// Furthest scroll offset seen by the last draw.
    max_scroll: Cell<u16>,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            hidden: true,
            close_action: None,
            scroll: 0,
            max_scroll: Cell::new(0),
        }
    }

    pub fn body(&self) -> &[PanelLine] {
        &self.body
    }

    /// Whether a close action is waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.close_action.is_some()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn reveal(&mut self) {
        self.hidden = false;
        self.scroll = 0;
        self.close_action = Some(CloseAction);
    }

    fn lines_styled(&self, style: LineStyle) -> Vec<Line<'_>> {
        self.body
            .iter()
            .filter(|line| line.style == style)
            .map(styled_line)
            .collect()
    }
}

fn marker_width(style: LineStyle) -> u16 {
    match style {
        LineStyle::Correct | LineStyle::Incorrect => 3,
        _ => 0,
    }
}

fn styled_line(line: &PanelLine) -> Line<'_> {
    match line.style {
        LineStyle::Heading => Line::from(Span::styled(
            line.text.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        ))
        .alignment(Alignment::Center),
        LineStyle::Text => Line::from(line.text.as_str()).fg(Color::Gray),
        LineStyle::Correct => Line::from(vec![
            Span::styled(" + ", Style::default().fg(Color::Green)),
            Span::styled(line.text.as_str(), Style::default().fg(Color::Green)),
        ]),
        LineStyle::Incorrect => Line::from(vec![
            Span::styled(" - ", Style::default().fg(Color::Red)),
            Span::styled(line.text.as_str(), Style::default().fg(Color::Red)),
        ]),
        LineStyle::Result => Line::from(Span::styled(
            line.text.as_str(),
            Style::default().fg(Color::White).bold(),
        ))
        .alignment(Alignment::Center),
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for Overlay {
    fn render_error(&mut self, message: &str) {
        self.body = vec![
            PanelLine::new("Error", LineStyle::Heading),
            PanelLine::new(message, LineStyle::Text),
        ];
        self.reveal();
    }

    fn render_results(&mut self, summary: &ScoreSummary) {
        let mut body = Vec::with_capacity(summary.lines.len() + 2);
        body.push(PanelLine::new("Results", LineStyle::Heading));

        for line in &summary.lines {
            let style = if line.correct {
                LineStyle::Correct
            } else {
                LineStyle::Incorrect
            };
            body.push(PanelLine::new(format!("{} - {}", line.number, line.text), style));
        }

        body.push(PanelLine::new(summary.score_line(), LineStyle::Result));
        self.body = body;
        self.reveal();
    }

    fn is_open(&self) -> bool {
        !self.hidden
    }

    fn dismiss(&mut self) {
        // The action detaches itself: a second dismiss finds nothing to fire.
        if let Some(action) = self.close_action.take() {
            action.fire(&mut self.hidden);
        }
    }

    fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll.get());
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if self.hidden {
            return;
        }

        let width = PANEL_WIDTH.min(area.width);
        // Borders plus two columns of padding on each side.
        let text_width = width.saturating_sub(6);

        let heading: Vec<Line> = self.lines_styled(LineStyle::Heading);
        let pinned: Vec<Line> = self.lines_styled(LineStyle::Result);
        let breakdown: Vec<Line> = self
            .body
            .iter()
            .filter(|line| !matches!(line.style, LineStyle::Heading | LineStyle::Result))
            .map(styled_line)
            .collect();

        let breakdown_rows: u16 = self
            .body
            .iter()
            .filter(|line| !matches!(line.style, LineStyle::Heading | LineStyle::Result))
            .map(|line| wrapped_rows(&line.text, text_width.saturating_sub(marker_width(line.style))))
            .sum();

        // Each pinned group gets one spacer row towards the breakdown.
        let heading_height = if heading.is_empty() { 0 } else { heading.len() as u16 + 1 };
        let pinned_height = if pinned.is_empty() { 0 } else { pinned.len() as u16 + 1 };

        // Two border rows and one row of top padding.
        let height = heading_height + breakdown_rows + pinned_height + 3;
        let panel = centered(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title_bottom(Line::from(" j/k scroll  ·  enter close ").centered())
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(panel);

        let [top, middle, bottom] = Layout::vertical([
            Constraint::Length(heading_height),
            Constraint::Fill(1),
            Constraint::Length(pinned_height),
        ])
        .areas(inner);

        let max_scroll = breakdown_rows.saturating_sub(middle.height);
        self.max_scroll.set(max_scroll);
        let scroll = self.scroll.min(max_scroll);

        frame.render_widget(Clear, panel);
        frame.render_widget(block, panel);
        frame.render_widget(Paragraph::new(heading), top);
        frame.render_widget(
            Paragraph::new(breakdown)
                .wrap(Wrap { trim: true })
                .scroll((scroll, 0)),
            middle,
        );

        let mut score = vec![Line::from("")];
        score.extend(pinned);
        frame.render_widget(Paragraph::new(score), bottom);
    }

    fn plain_text(&self) -> Option<String> {
        if self.hidden {
            return None;
        }

        let text = self
            .body
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::SummaryLine;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn summary() -> ScoreSummary {
        ScoreSummary {
            lines: vec![
                SummaryLine {
                    number: "1".into(),
                    text: "Capital of France".into(),
                    correct: true,
                },
                SummaryLine {
                    number: "2".into(),
                    text: "Largest ocean".into(),
                    correct: false,
                },
            ],
            score: 1,
            total: 2,
        }
    }

    #[test]
    fn test_starts_hidden() {
        let overlay = Overlay::new();
        assert!(!overlay.is_open());
        assert!(!overlay.is_armed());
        assert!(overlay.plain_text().is_none());
    }

    #[test]
    fn test_results_panel_layout() {
        let mut overlay = Overlay::new();
        overlay.render_results(&summary());

        let body = overlay.body();
        assert_eq!(body[0], PanelLine::new("Results", LineStyle::Heading));
        assert_eq!(body[1], PanelLine::new("1 - Capital of France", LineStyle::Correct));
        assert_eq!(body[2], PanelLine::new("2 - Largest ocean", LineStyle::Incorrect));
        assert_eq!(body[3], PanelLine::new("You scored 1/2", LineStyle::Result));
        assert!(overlay.is_open());
    }

    #[test]
    fn test_close_action_fires_once() {
        let mut overlay = Overlay::new();
        overlay.render_error("Not all questions have been answered.");
        assert!(overlay.is_armed());

        overlay.dismiss();
        assert!(!overlay.is_open());
        assert!(!overlay.is_armed());

        // Nothing left to fire.
        overlay.dismiss();
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_reveal_rearms_after_dismiss() {
        let mut overlay = Overlay::new();
        overlay.render_error("oops");
        overlay.dismiss();
        overlay.render_results(&summary());
        assert!(overlay.is_open());
        assert!(overlay.is_armed());
    }

    fn many_questions(count: usize, text: &str) -> ScoreSummary {
        let lines = (1..=count)
            .map(|number| SummaryLine {
                number: number.to_string(),
                text: format!("{text} {number}"),
                correct: number % 2 == 0,
            })
            .collect();
        ScoreSummary {
            lines,
            score: count / 2,
            total: count,
        }
    }

    fn screen(overlay: &Overlay, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| overlay.draw(frame, frame.area()))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_panel() {
        let mut overlay = Overlay::new();
        overlay.render_results(&summary());

        let screen = screen(&overlay, 80, 20);
        assert!(screen.contains("Results"));
        assert!(screen.contains("You scored 1/2"));
    }

    #[test]
    fn test_score_pinned_with_thirty_questions() {
        let mut overlay = Overlay::new();
        overlay.render_results(&many_questions(30, "Question"));

        let screen = screen(&overlay, 80, 24);
        assert!(screen.contains("Results"));
        assert!(screen.contains("You scored 15/30"));
        assert!(screen.contains("1 - Question 1"));
        assert!(!screen.contains("30 - Question 30"));
    }

    #[test]
    fn test_breakdown_scrolls_to_last_question() {
        let mut overlay = Overlay::new();
        overlay.render_results(&many_questions(30, "Question"));
        screen(&overlay, 80, 24);

        for _ in 0..40 {
            overlay.scroll_down();
        }
        // 30 rows in a 17-row viewport.
        assert_eq!(overlay.scroll(), 13);

        let screen = screen(&overlay, 80, 24);
        assert!(screen.contains("30 - Question 30"));
        assert!(screen.contains("You scored 15/30"));

        overlay.scroll_up();
        assert_eq!(overlay.scroll(), 12);
    }

    #[test]
    fn test_long_question_text_keeps_score_visible() {
        let text = "Which of the following statements about ownership and borrowing hold in Rust?";
        assert!(text.len() >= 76);

        let mut overlay = Overlay::new();
        overlay.render_results(&many_questions(3, text));

        for (width, height) in [(100, 40), (80, 24)] {
            let screen = screen(&overlay, width, height);
            assert!(screen.contains("You scored 1/3"), "score missing at {width}x{height}");
            assert!(screen.contains("3 - Which"), "last question cut at {width}x{height}");
        }
    }

    #[test]
    fn test_reveal_resets_scroll() {
        let mut overlay = Overlay::new();
        overlay.render_results(&many_questions(30, "Question"));
        screen(&overlay, 80, 24);
        overlay.scroll_down();
        overlay.render_error("again");
        assert_eq!(overlay.scroll(), 0);
    }
}
