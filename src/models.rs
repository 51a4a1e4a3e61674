use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Judgment,
    SingleChoice,
    MultipleChoice,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Judgment => "True / False",
            QuestionKind::SingleChoice => "Single Choice",
            QuestionKind::MultipleChoice => "Multiple Choice",
        }
    }

    /// Exam-mode point weight for a question of this kind.
    pub fn points(&self) -> f64 {
        match self {
            QuestionKind::Judgment | QuestionKind::SingleChoice => 0.5,
            QuestionKind::MultipleChoice => 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceOption {
    pub key: String,
    pub value: String,
}

/// Correct answer as stored in the bank. The JSON shape differs per question
/// kind: a bool for judgment, an option key for single choice, an array of
/// option keys for multiple choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Judgment(bool),
    Single(String),
    Multiple(Vec<String>),
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectAnswer::Judgment(true) => write!(f, "True"),
            CorrectAnswer::Judgment(false) => write!(f, "False"),
            CorrectAnswer::Single(key) => write!(f, "{}", key),
            CorrectAnswer::Multiple(keys) => write!(f, "{}", keys.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    pub answer: CorrectAnswer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBank {
    pub sections: Vec<Section>,
}

impl QuestionBank {
    pub fn section(&self, kind: QuestionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Exam,
    Practice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Finished,
}

/// A selection intent coming from the renderer. For multiple-choice questions
/// a `Key` toggles membership instead of overwriting.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Judgment(bool),
    Key(String),
}

/// What the user picked for one question. Multiple-choice key sets are kept
/// sorted so correctness comparison is independent of selection order.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAnswer {
    Judgment(bool),
    Single(String),
    Multiple(Vec<String>),
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::Judgment(true) => write!(f, "True"),
            UserAnswer::Judgment(false) => write!(f, "False"),
            UserAnswer::Single(key) => write!(f, "{}", key),
            UserAnswer::Multiple(keys) => write!(f, "{}", keys.join(", ")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedAnswer {
    pub answer: UserAnswer,
    /// Computed immediately for judgment/single choice in exam mode, at
    /// submission for multiple choice, never in practice mode.
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct SessionQuestion {
    pub question: Question,
    pub points: f64,
}

/// One exam or practice attempt. Owned state with explicit transitions; the
/// main loop holds at most one of these at a time.
#[derive(Debug)]
pub struct ExamSession {
    pub mode: Mode,
    pub questions: Vec<SessionQuestion>,
    pub status: Status,
    pub current_index: usize,
    pub answers: HashMap<u32, RecordedAnswer>,
    /// Seconds remaining, exam mode only.
    pub time_left: u32,
    pub score: f64,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    Progress,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_kind_parsing() {
        let kind: QuestionKind = serde_json::from_str("\"judgment\"").unwrap();
        assert_eq!(kind, QuestionKind::Judgment);
        let kind: QuestionKind = serde_json::from_str("\"single_choice\"").unwrap();
        assert_eq!(kind, QuestionKind::SingleChoice);
        let kind: QuestionKind = serde_json::from_str("\"multiple_choice\"").unwrap();
        assert_eq!(kind, QuestionKind::MultipleChoice);
    }

    #[test]
    fn test_point_weights() {
        assert_eq!(QuestionKind::Judgment.points(), 0.5);
        assert_eq!(QuestionKind::SingleChoice.points(), 0.5);
        assert_eq!(QuestionKind::MultipleChoice.points(), 1.0);
    }

    #[test]
    fn test_judgment_question_parsing() {
        let json = r#"{"id": 1, "type": "judgment", "question": "The sky is blue.", "answer": true}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 1);
        assert_eq!(q.kind, QuestionKind::Judgment);
        assert!(q.options.is_empty());
        assert_eq!(q.answer, CorrectAnswer::Judgment(true));
    }

    #[test]
    fn test_single_choice_question_parsing() {
        let json = r#"{
            "id": 2,
            "type": "single_choice",
            "question": "Pick one.",
            "options": [
                {"key": "A", "value": "first"},
                {"key": "B", "value": "second"}
            ],
            "answer": "B"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.answer, CorrectAnswer::Single("B".to_string()));
    }

    #[test]
    fn test_multiple_choice_question_parsing() {
        let json = r#"{
            "id": 3,
            "type": "multiple_choice",
            "question": "Pick several.",
            "options": [
                {"key": "A", "value": "first"},
                {"key": "B", "value": "second"},
                {"key": "C", "value": "third"}
            ],
            "answer": ["A", "C"]
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(
            q.answer,
            CorrectAnswer::Multiple(vec!["A".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_bank_section_lookup() {
        let bank = QuestionBank {
            sections: vec![Section {
                kind: QuestionKind::Judgment,
                name: "Judgment".to_string(),
                questions: vec![],
            }],
        };
        assert!(bank.section(QuestionKind::Judgment).is_some());
        assert!(bank.section(QuestionKind::SingleChoice).is_none());
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(CorrectAnswer::Judgment(true).to_string(), "True");
        assert_eq!(CorrectAnswer::Single("A".to_string()).to_string(), "A");
        assert_eq!(
            CorrectAnswer::Multiple(vec!["A".to_string(), "C".to_string()]).to_string(),
            "A, C"
        );
        assert_eq!(UserAnswer::Judgment(false).to_string(), "False");
    }
}
