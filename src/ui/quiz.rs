use crate::models::{
    CorrectAnswer, ExamSession, Mode, QuestionKind, RecordedAnswer, UserAnswer,
};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::format_time;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &ExamSession) {
    let layout = calculate_quiz_chunks(f.area());

    let current = session.current();
    let header_text = match session.mode {
        Mode::Exam => format!(
            "Question {} / {} - Exam  |  Time {}  |  Answered {} / {}",
            session.current_index + 1,
            session.questions.len(),
            format_time(session.time_left),
            session.answered_count(),
            session.questions.len()
        ),
        Mode::Practice => format!(
            "Question {} / {} - Practice",
            session.current_index + 1,
            session.questions.len()
        ),
    };

    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_title = match session.mode {
        Mode::Exam => format!(
            "{} ({} pt)",
            current.question.kind.label(),
            current.points
        ),
        Mode::Practice => current.question.kind.label().to_string(),
    };
    let question = Paragraph::new(Text::from(current.question.question.as_str()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(question_title),
        );
    f.render_widget(question, layout.question_area);

    let options = Paragraph::new(option_lines(session))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let mut help_spans = vec![
        Span::styled(
            answer_keys_hint(current.question.kind),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Answer  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Progress  "),
    ];
    if session.mode == Mode::Exam {
        help_spans.extend([
            Span::styled(
                "s",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Submit  "),
        ]);
    }
    help_spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit to Menu"),
    ]);

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn answer_keys_hint(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Judgment => "t/f",
        QuestionKind::SingleChoice | QuestionKind::MultipleChoice => "a-z",
    }
}

fn option_lines(session: &ExamSession) -> Vec<Line<'static>> {
    let current = session.current();
    let question = &current.question;
    let recorded = session.answers.get(&question.id);
    let reveal = session.mode == Mode::Practice;

    let mut lines = Vec::new();
    match question.kind {
        QuestionKind::Judgment => {
            let picked = match recorded {
                Some(RecordedAnswer {
                    answer: UserAnswer::Judgment(v),
                    ..
                }) => Some(*v),
                _ => None,
            };
            let correct = matches!(question.answer, CorrectAnswer::Judgment(true));
            lines.push(judgment_line("T", "True", picked == Some(true), reveal && correct));
            lines.push(Line::from(""));
            lines.push(judgment_line(
                "F",
                "False",
                picked == Some(false),
                reveal && !correct,
            ));
        }
        QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
            let multiple = question.kind == QuestionKind::MultipleChoice;
            for option in &question.options {
                let selected = match recorded {
                    Some(RecordedAnswer {
                        answer: UserAnswer::Single(key),
                        ..
                    }) => *key == option.key,
                    Some(RecordedAnswer {
                        answer: UserAnswer::Multiple(keys),
                        ..
                    }) => keys.contains(&option.key),
                    _ => false,
                };
                let is_answer = match &question.answer {
                    CorrectAnswer::Single(key) => *key == option.key,
                    CorrectAnswer::Multiple(keys) => keys.contains(&option.key),
                    CorrectAnswer::Judgment(_) => false,
                };
                let marker = match (multiple, selected) {
                    (true, true) => "[x]",
                    (true, false) => "[ ]",
                    (false, true) => "(x)",
                    (false, false) => "( )",
                };
                let style = if reveal && is_answer {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("{} {}. {}", marker, option.key, option.value),
                    style,
                )));
                lines.push(Line::from(""));
            }
        }
    }
    lines
}

fn judgment_line(key: &str, label: &str, selected: bool, reveal: bool) -> Line<'static> {
    let marker = if selected { "(x)" } else { "( )" };
    let style = if reveal {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{} {}. {}", marker, key, label), style))
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this session and return to the menu?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
