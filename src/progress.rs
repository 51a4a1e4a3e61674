use crate::models::ExamSession;

/// Display classification of one session question. `Pending` is a
/// multiple-choice question with a selection that has not been graded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionProgress {
    Unanswered,
    Correct,
    Incorrect,
    Pending,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub answered: usize,
    pub unanswered: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub pending: usize,
}

impl ExamSession {
    pub fn question_progress(&self, index: usize) -> QuestionProgress {
        let question = &self.questions[index].question;
        match self.answers.get(&question.id) {
            None => QuestionProgress::Unanswered,
            Some(recorded) => match recorded.is_correct {
                Some(true) => QuestionProgress::Correct,
                Some(false) => QuestionProgress::Incorrect,
                None => QuestionProgress::Pending,
            },
        }
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let mut summary = ProgressSummary::default();
        for index in 0..self.questions.len() {
            match self.question_progress(index) {
                QuestionProgress::Unanswered => summary.unanswered += 1,
                QuestionProgress::Correct => {
                    summary.answered += 1;
                    summary.correct += 1;
                }
                QuestionProgress::Incorrect => {
                    summary.answered += 1;
                    summary.incorrect += 1;
                }
                QuestionProgress::Pending => {
                    summary.answered += 1;
                    summary.pending += 1;
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ChoiceOption, CorrectAnswer, Question, QuestionBank, QuestionKind, Section, Selection,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mixed_bank() -> QuestionBank {
        QuestionBank {
            sections: vec![
                Section {
                    kind: QuestionKind::Judgment,
                    name: "Judgment".to_string(),
                    questions: vec![
                        Question {
                            id: 1,
                            kind: QuestionKind::Judgment,
                            question: "Q1".to_string(),
                            options: vec![],
                            answer: CorrectAnswer::Judgment(true),
                        },
                        Question {
                            id: 2,
                            kind: QuestionKind::Judgment,
                            question: "Q2".to_string(),
                            options: vec![],
                            answer: CorrectAnswer::Judgment(false),
                        },
                    ],
                },
                Section {
                    kind: QuestionKind::MultipleChoice,
                    name: "Multiple Choice".to_string(),
                    questions: vec![Question {
                        id: 3,
                        kind: QuestionKind::MultipleChoice,
                        question: "Q3".to_string(),
                        options: vec![
                            ChoiceOption {
                                key: "A".to_string(),
                                value: "a".to_string(),
                            },
                            ChoiceOption {
                                key: "B".to_string(),
                                value: "b".to_string(),
                            },
                        ],
                        answer: CorrectAnswer::Multiple(vec!["A".to_string()]),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_progress_classification() {
        let bank = mixed_bank();
        let mut session = ExamSession::start_exam(&bank, &mut StdRng::seed_from_u64(7));
        // Answer each question from its own position so classifications line up.
        for index in 0..session.questions.len() {
            session.current_index = index;
            match session.questions[index].question.id {
                1 => session.record_answer(Selection::Judgment(true)),
                2 => session.record_answer(Selection::Judgment(true)),
                3 => session.record_answer(Selection::Key("A".to_string())),
                _ => unreachable!(),
            }
        }

        for index in 0..session.questions.len() {
            let expected = match session.questions[index].question.id {
                1 => QuestionProgress::Correct,
                2 => QuestionProgress::Incorrect,
                3 => QuestionProgress::Pending,
                _ => unreachable!(),
            };
            assert_eq!(session.question_progress(index), expected);
        }

        let summary = session.progress_summary();
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.unanswered, 0);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.pending, 1);
    }

    #[test]
    fn test_progress_unanswered_by_default() {
        let bank = mixed_bank();
        let session = ExamSession::start_exam(&bank, &mut StdRng::seed_from_u64(7));
        let summary = session.progress_summary();
        assert_eq!(summary.answered, 0);
        assert_eq!(summary.unanswered, 3);
    }

    #[test]
    fn test_pending_resolves_after_submission() {
        let bank = mixed_bank();
        let mut session = ExamSession::start_exam(&bank, &mut StdRng::seed_from_u64(7));
        let multiple_index = session
            .questions
            .iter()
            .position(|q| q.question.id == 3)
            .unwrap();
        session.current_index = multiple_index;
        session.record_answer(Selection::Key("A".to_string()));
        assert_eq!(
            session.question_progress(multiple_index),
            QuestionProgress::Pending
        );
        session.submit();
        assert_eq!(
            session.question_progress(multiple_index),
            QuestionProgress::Correct
        );
    }
}
