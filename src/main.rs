use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use exam_trainer::models::{AppState, ExamSession, Mode, QuestionBank, Status};
use exam_trainer::{
    default_report_path, draw_menu, draw_progress, draw_quit_confirmation, draw_quiz,
    draw_summary, handle_quiz_input, load_bank, logger, write_report,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::env;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

const DEFAULT_BANK_PATH: &str = "question_bank.json";

fn main() -> io::Result<()> {
    logger::init();

    let bank_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BANK_PATH.to_string());
    let (bank, load_error): (Option<QuestionBank>, Option<String>) =
        match load_bank(Path::new(&bank_path)) {
            Ok(bank) => (Some(bank), None),
            Err(e) => {
                logger::log(&format!("bank load failed: {}", e));
                (None, Some(e.to_string()))
            }
        };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Menu;
    let mut selected_mode: usize = 0;
    let mut session: Option<ExamSession> = None;
    let mut export_notice: Option<String> = None;

    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, bank.as_ref(), load_error.as_deref(), selected_mode),
            AppState::Quiz => {
                if let Some(session) = &session {
                    draw_quiz(f, session);
                }
            }
            AppState::Progress => {
                if let Some(session) = &session {
                    draw_progress(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &session {
                    draw_summary(f, session, export_notice.as_deref());
                }
            }
        })?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match app_state {
                    AppState::Menu => match key.code {
                        KeyCode::Up => {
                            if selected_mode > 0 {
                                selected_mode -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if selected_mode < 1 {
                                selected_mode += 1;
                            }
                        }
                        KeyCode::Char('1') => {
                            selected_mode = 0;
                        }
                        KeyCode::Char('2') => {
                            selected_mode = 1;
                        }
                        KeyCode::Enter => {
                            if let Some(bank) = &bank {
                                session = Some(if selected_mode == 0 {
                                    ExamSession::start_exam(bank, &mut rand::thread_rng())
                                } else {
                                    ExamSession::start_practice(bank)
                                });
                                export_notice = None;
                                app_state = AppState::Quiz;
                                last_tick = Instant::now();
                            }
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    },
                    AppState::Quiz => {
                        if let Some(session) = &mut session {
                            handle_quiz_input(session, key, &mut app_state);
                        }
                    }
                    AppState::Progress => match key.code {
                        KeyCode::Tab | KeyCode::Esc | KeyCode::Enter => {
                            app_state = AppState::Quiz;
                        }
                        _ => {}
                    },
                    AppState::QuizQuitConfirm => match key.code {
                        KeyCode::Char('y') => {
                            session = None;
                            app_state = AppState::Menu;
                        }
                        KeyCode::Char('n') | KeyCode::Esc => {
                            app_state = AppState::Quiz;
                        }
                        _ => {}
                    },
                    AppState::Summary => match key.code {
                        KeyCode::Char('r') => {
                            if let Some(bank) = &bank {
                                session =
                                    Some(ExamSession::start_exam(bank, &mut rand::thread_rng()));
                                export_notice = None;
                                app_state = AppState::Quiz;
                                last_tick = Instant::now();
                            }
                        }
                        KeyCode::Char('e') => {
                            if let Some(session) = &session {
                                let path = default_report_path();
                                export_notice = Some(match write_report(&path, session) {
                                    Ok(()) => format!("Report written to {}", path.display()),
                                    Err(e) => format!("Export failed: {}", e),
                                });
                            }
                        }
                        KeyCode::Char('m') => {
                            session = None;
                            app_state = AppState::Menu;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    },
                }
            }
        }

        // The countdown only runs while an exam session is in progress and on
        // screen; leaving for the menu drops the session and with it the timer.
        if last_tick.elapsed() >= tick_rate {
            if matches!(
                app_state,
                AppState::Quiz | AppState::Progress | AppState::QuizQuitConfirm
            ) && let Some(session) = &mut session
            {
                session.tick();
                if session.status == Status::Finished && session.mode == Mode::Exam {
                    app_state = AppState::Summary;
                }
            }
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
