use crate::logger;
use crate::models::{
    AppState, CorrectAnswer, ExamSession, Mode, Question, QuestionBank, QuestionKind,
    RecordedAnswer, Section, Selection, SessionQuestion, Status, UserAnswer,
};
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

pub const JUDGMENT_QUOTA: usize = 40;
pub const SINGLE_CHOICE_QUOTA: usize = 140;
pub const MULTIPLE_CHOICE_QUOTA: usize = 10;

/// 90 minutes.
pub const EXAM_SECONDS: u32 = 5400;

impl ExamSession {
    /// Draws the exam subset: shuffle each section, take its quota. A section
    /// with fewer questions than its quota contributes everything it has.
    pub fn start_exam(bank: &QuestionBank, rng: &mut impl Rng) -> Self {
        let mut questions = Vec::new();
        for (kind, quota) in [
            (QuestionKind::Judgment, JUDGMENT_QUOTA),
            (QuestionKind::SingleChoice, SINGLE_CHOICE_QUOTA),
            (QuestionKind::MultipleChoice, MULTIPLE_CHOICE_QUOTA),
        ] {
            if let Some(section) = bank.section(kind) {
                questions.extend(draw_from_section(section, quota, rng));
            }
        }
        logger::log(&format!("exam started with {} questions", questions.len()));
        Self {
            mode: Mode::Exam,
            questions,
            status: Status::InProgress,
            current_index: 0,
            answers: HashMap::new(),
            time_left: EXAM_SECONDS,
            score: 0.0,
        }
    }

    /// Full bank in section order: no sampling, no shuffling, no timer, no
    /// point weights.
    pub fn start_practice(bank: &QuestionBank) -> Self {
        let questions = bank
            .sections
            .iter()
            .flat_map(|s| s.questions.iter())
            .map(|q| SessionQuestion {
                question: q.clone(),
                points: 0.0,
            })
            .collect::<Vec<_>>();
        logger::log(&format!("practice started with {} questions", questions.len()));
        Self {
            mode: Mode::Practice,
            questions,
            status: Status::InProgress,
            current_index: 0,
            answers: HashMap::new(),
            time_left: 0,
            score: 0.0,
        }
    }

    pub fn current(&self) -> &SessionQuestion {
        &self.questions[self.current_index]
    }

    /// Applies a selection to the current question. Judgment/single choice:
    /// last write wins, correctness computed immediately in exam mode.
    /// Multiple choice: toggles key membership, set kept sorted, correctness
    /// deferred to submission. A selection whose shape does not match the
    /// question kind is ignored.
    pub fn record_answer(&mut self, selection: Selection) {
        if self.status != Status::InProgress {
            return;
        }
        let graded = self.mode == Mode::Exam;
        let current = &self.questions[self.current_index];
        let id = current.question.id;
        match (current.question.kind, selection) {
            (QuestionKind::Judgment, Selection::Judgment(value)) => {
                let is_correct = graded.then(|| {
                    matches!(&current.question.answer, CorrectAnswer::Judgment(a) if *a == value)
                });
                self.answers.insert(
                    id,
                    RecordedAnswer {
                        answer: UserAnswer::Judgment(value),
                        is_correct,
                    },
                );
            }
            (QuestionKind::SingleChoice, Selection::Key(key)) => {
                let is_correct = graded.then(|| {
                    matches!(&current.question.answer, CorrectAnswer::Single(a) if *a == key)
                });
                self.answers.insert(
                    id,
                    RecordedAnswer {
                        answer: UserAnswer::Single(key),
                        is_correct,
                    },
                );
            }
            (QuestionKind::MultipleChoice, Selection::Key(key)) => {
                let mut keys = match self.answers.remove(&id) {
                    Some(RecordedAnswer {
                        answer: UserAnswer::Multiple(keys),
                        ..
                    }) => keys,
                    _ => Vec::new(),
                };
                if let Some(pos) = keys.iter().position(|k| *k == key) {
                    keys.remove(pos);
                } else {
                    keys.push(key);
                    keys.sort();
                }
                // An emptied set means the question reverts to unanswered.
                if !keys.is_empty() {
                    self.answers.insert(
                        id,
                        RecordedAnswer {
                            answer: UserAnswer::Multiple(keys),
                            is_correct: None,
                        },
                    );
                }
            }
            _ => {}
        }
    }

    /// Final grading pass. Judgment/single choice reuse the immediate result;
    /// multiple choice compares sorted key sets. Unanswered questions are
    /// skipped. Recomputes from stored answers, so calling it again yields the
    /// same score.
    pub fn submit(&mut self) {
        if self.mode != Mode::Exam {
            return;
        }
        let mut score = 0.0;
        for sq in &self.questions {
            if let Some(recorded) = self.answers.get_mut(&sq.question.id) {
                let is_correct = match (&recorded.answer, &sq.question.answer) {
                    (UserAnswer::Judgment(v), CorrectAnswer::Judgment(a)) => v == a,
                    (UserAnswer::Single(k), CorrectAnswer::Single(a)) => k == a,
                    (UserAnswer::Multiple(keys), CorrectAnswer::Multiple(expected)) => {
                        keys == expected
                    }
                    _ => false,
                };
                recorded.is_correct = Some(is_correct);
                if is_correct {
                    score += sq.points;
                }
            }
        }
        self.score = score;
        self.status = Status::Finished;
        logger::log(&format!(
            "exam submitted: score {:.1} / {:.1}, {} of {} answered",
            self.score,
            self.max_score(),
            self.answers.len(),
            self.questions.len()
        ));
    }

    /// One countdown second. Auto-submits when the budget runs out; a
    /// finished session never ticks again.
    pub fn tick(&mut self) {
        if self.mode != Mode::Exam || self.status != Status::InProgress {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            logger::log("exam time expired, auto-submitting");
            self.submit();
        }
    }

    pub fn next_question(&mut self) {
        if self.current_index < self.questions.len().saturating_sub(1) {
            self.current_index += 1;
        }
    }

    pub fn prev_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn max_score(&self) -> f64 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

fn draw_from_section(
    section: &Section,
    quota: usize,
    rng: &mut impl Rng,
) -> Vec<SessionQuestion> {
    let mut pool: Vec<&Question> = section.questions.iter().collect();
    pool.shuffle(rng);
    pool.truncate(quota);
    pool.into_iter()
        .map(|q| SessionQuestion {
            points: q.kind.points(),
            question: q.clone(),
        })
        .collect()
}

pub fn handle_quiz_input(session: &mut ExamSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Up | KeyCode::Left => {
            session.prev_question();
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Enter => {
            session.next_question();
        }
        KeyCode::Tab => {
            *app_state = AppState::Progress;
        }
        KeyCode::Char(c) => handle_answer_key(session, c, app_state),
        _ => {}
    }
}

fn handle_answer_key(session: &mut ExamSession, c: char, app_state: &mut AppState) {
    let kind = session.current().question.kind;
    match c.to_ascii_lowercase() {
        's' if session.mode == Mode::Exam => {
            session.submit();
            *app_state = AppState::Summary;
        }
        't' if kind == QuestionKind::Judgment => {
            session.record_answer(Selection::Judgment(true));
        }
        'f' if kind == QuestionKind::Judgment => {
            session.record_answer(Selection::Judgment(false));
        }
        _ => {
            let key = c.to_ascii_uppercase().to_string();
            let known = session
                .current()
                .question
                .options
                .iter()
                .any(|o| o.key == key);
            if known {
                session.record_answer(Selection::Key(key));
            }
        }
    }
}
