use crate::models::QuestionBank;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const MODES: [(&str, &str); 2] = [
    ("Exam", "190 sampled questions, 90 minutes, scored"),
    ("Practice", "full bank in order, answers revealed, untimed"),
];

pub fn draw_menu(
    f: &mut Frame,
    bank: Option<&QuestionBank>,
    load_error: Option<&str>,
    selected_mode: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Exam Trainer v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mode_items: Vec<ListItem> = MODES
        .iter()
        .enumerate()
        .map(|(i, (name, description))| {
            let style = if i == selected_mode && load_error.is_none() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("[{}] {} - {}", i + 1, name, description)).style(style)
        })
        .collect();

    let mode_list = List::new(mode_items)
        .block(Block::default().borders(Borders::ALL).title("Select a Mode"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(mode_list, chunks[1]);

    let bank_content: Vec<Line> = if let Some(error) = load_error {
        vec![
            Line::from(Span::styled(
                "Question bank unavailable",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(error.to_string()),
        ]
    } else if let Some(bank) = bank {
        let mut lines: Vec<Line> = bank
            .sections
            .iter()
            .map(|s| Line::from(format!("{}: {} questions", s.name, s.questions.len())))
            .collect();
        lines.push(Line::from(format!("Total: {}", bank.total_questions())));
        lines
    } else {
        vec![Line::from("No question bank loaded")]
    };

    let bank_panel = Paragraph::new(bank_content)
        .block(Block::default().borders(Borders::ALL).title("Question Bank"));
    f.render_widget(bank_panel, chunks[2]);

    let help_text = if load_error.is_some() {
        vec![Line::from(vec![
            Span::styled(
                "q/Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quit"),
        ])]
    } else {
        vec![Line::from(vec![
            Span::styled(
                "↑/↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Navigate  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Start  "),
            Span::styled(
                "q/Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quit"),
        ])]
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
