use crate::models::{ExamSession, Mode};
use crate::progress::QuestionProgress;
use crate::ui::layout::calculate_summary_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PER_ROW: usize = 10;

pub fn draw_progress(f: &mut Frame, session: &ExamSession) {
    let layout = calculate_summary_chunks(f.area());

    let summary = session.progress_summary();
    let title = Paragraph::new(format!(
        "Progress - answered {} / {}",
        summary.answered,
        session.questions.len()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    match session.mode {
        Mode::Exam => {
            text.push_line(Line::from(format!(
                "Correct {}  Incorrect {}  Pending {}  Unanswered {}",
                summary.correct, summary.incorrect, summary.pending, summary.unanswered
            )));
        }
        Mode::Practice => {
            text.push_line(Line::from(format!(
                "Answered {}  Unanswered {}",
                summary.answered, summary.unanswered
            )));
        }
    }
    text.push_line(Line::from(""));

    let indices: Vec<usize> = (0..session.questions.len()).collect();
    for chunk in indices.chunks(PER_ROW) {
        let mut spans = Vec::new();
        for index in chunk {
            let style = match session.question_progress(*index) {
                QuestionProgress::Correct => Style::default().fg(Color::Green),
                QuestionProgress::Incorrect => Style::default().fg(Color::Red),
                QuestionProgress::Pending => Style::default().fg(Color::Yellow),
                QuestionProgress::Unanswered => Style::default().fg(Color::DarkGray),
            };
            let highlight = if *index == session.current_index {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            spans.push(Span::styled(format!("{:>4}", index + 1), highlight));
        }
        text.push_line(Line::from(spans));
    }

    let grid = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(grid, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Tab/Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back to Question"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
