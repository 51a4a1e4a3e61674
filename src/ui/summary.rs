use crate::models::{ExamSession, QuestionKind};
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &ExamSession, export_notice: Option<&str>) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Exam Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let summary = session.progress_summary();
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        format!("Score: {:.1} / {:.1}", session.score, session.max_score()),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(format!(
        "Answered: {} / {}   Correct: {}   Incorrect: {}",
        summary.answered,
        session.questions.len(),
        summary.correct,
        summary.incorrect
    )));
    text.push_line(Line::from(""));

    for kind in [
        QuestionKind::Judgment,
        QuestionKind::SingleChoice,
        QuestionKind::MultipleChoice,
    ] {
        let total = session
            .questions
            .iter()
            .filter(|q| q.question.kind == kind)
            .count();
        if total == 0 {
            continue;
        }
        let correct = session
            .questions
            .iter()
            .filter(|q| q.question.kind == kind)
            .filter(|q| {
                session
                    .answers
                    .get(&q.question.id)
                    .and_then(|r| r.is_correct)
                    .unwrap_or(false)
            })
            .count();
        text.push_line(Line::from(format!(
            "{}: {} / {} correct",
            kind.label(),
            correct,
            total
        )));
    }

    if let Some(notice) = export_notice {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }

    text.push_line(Line::from(""));
    text.push_line(Line::from("Incorrect answers:"));
    let mut any_wrong = false;
    for (number, sq) in session.questions.iter().enumerate() {
        let wrong = session
            .answers
            .get(&sq.question.id)
            .map(|r| r.is_correct == Some(false))
            .unwrap_or(false);
        if !wrong {
            continue;
        }
        any_wrong = true;
        text.push_line(Line::from(format!(
            "  {}. {}",
            number + 1,
            truncate_string(&sq.question.question, 60)
        )));
    }
    if !any_wrong {
        text.push_line(Line::from("  None"));
    }

    let content = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Retake  "),
        Span::styled(
            "e",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Export Report  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
