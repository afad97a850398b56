//! Blocking plain-text prompt.

use std::cell::Cell;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use super::{Presenter, ScoreSummary, centered, wrapped_rows};

const PROMPT_WIDTH: u16 = 48;

/// Concatenate a score breakdown into one text block.
pub fn alert_text(summary: &ScoreSummary) -> String {
    let mut output = String::new();

    for line in &summary.lines {
        let verdict = if line.correct { "Correct" } else { "Wrong" };
        output.push_str(&format!("{} - {}\n", line.number, verdict));
    }

    output.push('\n');
    output.push_str(&summary.score_line());
    output
}

/// A message that must be acknowledged before anything else happens.
#[derive(Debug, Default)]
pub struct Alert {
    message: Option<String>,
    /// Score line kept below the scrolling breakdown.
    pinned: Option<String>,
    scroll: u16,
    max_scroll: Cell<u16>,
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn open(&mut self, message: String, pinned: Option<String>) {
        self.message = Some(message);
        self.pinned = pinned;
        self.scroll = 0;
    }
}

impl Presenter for Alert {
    fn render_error(&mut self, message: &str) {
        self.open(message.to_string(), None);
    }

    fn render_results(&mut self, summary: &ScoreSummary) {
        self.open(alert_text(summary), Some(summary.score_line()));
    }

    fn is_open(&self) -> bool {
        self.message.is_some()
    }

    fn dismiss(&mut self) {
        self.message = None;
        self.pinned = None;
    }

    fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll.get());
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let Some(message) = &self.message else {
            return;
        };

        let body = match &self.pinned {
            Some(pinned) => message.strip_suffix(pinned.as_str()).unwrap_or(message).trim_end(),
            None => message.as_str(),
        };

        let width = PROMPT_WIDTH.min(area.width);
        let text_width = width.saturating_sub(4);
        let body_rows: u16 = body.lines().map(|line| wrapped_rows(line, text_width)).sum();

        let mut footer: Vec<Line> = vec![Line::from("")];
        if let Some(pinned) = &self.pinned {
            footer.push(Line::from(pinned.as_str()));
            footer.push(Line::from(""));
        }
        footer.push(
            Line::from(Span::styled("[ OK ]", Style::default().fg(Color::Black).bg(Color::Gray)))
                .alignment(Alignment::Center),
        );
        let footer_height = footer.len() as u16;

        // Borders plus one row of padding top and bottom.
        let height = body_rows + footer_height + 4;
        let prompt = centered(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Color::White)
            .padding(Padding::uniform(1));
        let inner = block.inner(prompt);

        let [middle, bottom] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(footer_height)]).areas(inner);

        let max_scroll = body_rows.saturating_sub(middle.height);
        self.max_scroll.set(max_scroll);

        frame.render_widget(Clear, prompt);
        frame.render_widget(block, prompt);
        frame.render_widget(
            Paragraph::new(body)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll.min(max_scroll), 0)),
            middle,
        );
        frame.render_widget(Paragraph::new(footer), bottom);
    }

    fn plain_text(&self) -> Option<String> {
        self.message.clone()
    }
}
