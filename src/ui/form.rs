use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::{FormSection, ToggleControl, ToggleKind};
use crate::pipeline::Submission;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_questions(frame, chunks[1], app);
    render_status(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let answered = app
        .form()
        .sections()
        .iter()
        .enumerate()
        .filter(|(index, section)| {
            let end = app
                .form()
                .sections()
                .get(index + 1)
                .map_or(app.form().len(), |next| next.first_control);
            app.form().controls()[section.first_control..end]
                .iter()
                .any(|control| control.checked)
        })
        .count();

    let widget = Paragraph::new(format!("{}/{} answered", answered, app.answer_key().len()))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_questions(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let mut lines: Vec<Line> = Vec::with_capacity(form.len() + form.sections().len() * 2 + 2);
    let mut cursor_line = 0;
    let mut sections = form.sections().iter().enumerate().peekable();

    for (index, control) in form.controls().iter().enumerate() {
        while let Some((number, section)) = sections.next_if(|(_, s)| s.first_control == index) {
            push_heading(&mut lines, number, section);
        }

        let focused = index == app.cursor();
        if focused {
            cursor_line = lines.len();
        }
        lines.push(control_line(control, focused));
    }

    // Questions without answers sit after the last control.
    for (number, section) in sections {
        push_heading(&mut lines, number, section);
    }

    lines.push(Line::from(""));
    if app.on_submit_control() {
        cursor_line = lines.len();
    }
    lines.push(submit_line(app.on_submit_control()));

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Quiz ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn push_heading<'a>(lines: &mut Vec<Line<'a>>, number: usize, section: &'a FormSection) {
    if number > 0 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:2}. ", number + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(section.title.as_str(), Style::default().fg(Color::White).bold()),
    ]));
}

fn control_line(control: &ToggleControl, focused: bool) -> Line<'_> {
    let marker = match (control.kind, control.checked) {
        (ToggleKind::Radio, true) => "(•)",
        (ToggleKind::Radio, false) => "( )",
        (ToggleKind::Checkbox, true) => "[x]",
        (ToggleKind::Checkbox, false) => "[ ]",
    };

    let style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else if control.checked {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let pointer = if focused { ">" } else { " " };

    let label = if control.label.is_empty() {
        control.name.as_str()
    } else {
        control.label.as_str()
    };

    Line::from(vec![
        Span::styled(format!(" {} ", pointer), style),
        Span::styled(format!("{} ", marker), style),
        Span::styled(label, style),
    ])
}

fn submit_line(focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(Span::styled(" Submit ", style)).alignment(Alignment::Center)
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.last_submission() {
        Some(Submission::Graded(summary)) => {
            Span::styled(summary.score_line(), Style::default().fg(Color::Green))
        }
        Some(Submission::Incomplete { unanswered }) => Span::styled(
            format!("{} question(s) unanswered", unanswered.len()),
            Style::default().fg(Color::Yellow),
        ),
        None => Span::raw(""),
    };

    frame.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space toggle  ·  s submit  ·  r reset  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
