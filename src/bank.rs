use crate::logger;
use crate::models::{CorrectAnswer, Question, QuestionBank, QuestionKind};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

lazy_static::lazy_static! {
    // Matches answer letters leaked into question text, e.g. "( A )" or "( A,B )".
    static ref ANSWER_HINT: Regex = Regex::new(r"\(\s*[A-Z,]+\s*\)").unwrap();
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank has no sections")]
    NoSections,
    #[error("question bank has no questions")]
    NoQuestions,
    #[error("duplicate question id {0}")]
    DuplicateId(u32),
    #[error("question {id}: {reason}")]
    InvalidQuestion { id: u32, reason: String },
}

/// Loads, validates and normalizes the bank. Called once at startup; a
/// failure here means no session can be started.
pub fn load_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let content = fs::read_to_string(path)?;
    let mut bank: QuestionBank = serde_json::from_str(&content)?;
    validate(&bank)?;
    normalize(&mut bank);
    logger::log(&format!(
        "loaded question bank from {}: {} sections, {} questions",
        path.display(),
        bank.sections.len(),
        bank.total_questions()
    ));
    Ok(bank)
}

fn validate(bank: &QuestionBank) -> Result<(), BankError> {
    if bank.sections.is_empty() {
        return Err(BankError::NoSections);
    }
    if bank.total_questions() == 0 {
        return Err(BankError::NoQuestions);
    }

    let mut seen_ids = HashSet::new();
    for section in &bank.sections {
        for question in &section.questions {
            if !seen_ids.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }
            if question.kind != section.kind {
                return Err(invalid(question, "kind does not match its section"));
            }
            validate_question(question)?;
        }
    }
    Ok(())
}

fn validate_question(question: &Question) -> Result<(), BankError> {
    match question.kind {
        QuestionKind::Judgment => {
            if !matches!(question.answer, CorrectAnswer::Judgment(_)) {
                return Err(invalid(question, "judgment answer must be a boolean"));
            }
        }
        QuestionKind::SingleChoice => {
            if question.options.is_empty() {
                return Err(invalid(question, "choice question has no options"));
            }
            match &question.answer {
                CorrectAnswer::Single(key) if has_option(question, key) => {}
                CorrectAnswer::Single(key) => {
                    return Err(invalid(question, &format!("answer key {} has no option", key)));
                }
                _ => return Err(invalid(question, "single choice answer must be an option key")),
            }
        }
        QuestionKind::MultipleChoice => {
            if question.options.is_empty() {
                return Err(invalid(question, "choice question has no options"));
            }
            match &question.answer {
                CorrectAnswer::Multiple(keys) if keys.is_empty() => {
                    return Err(invalid(question, "multiple choice answer is empty"));
                }
                CorrectAnswer::Multiple(keys) => {
                    for key in keys {
                        if !has_option(question, key) {
                            return Err(invalid(
                                question,
                                &format!("answer key {} has no option", key),
                            ));
                        }
                    }
                }
                _ => {
                    return Err(invalid(
                        question,
                        "multiple choice answer must be a list of option keys",
                    ));
                }
            }
        }
    }
    Ok(())
}

fn has_option(question: &Question, key: &str) -> bool {
    question.options.iter().any(|o| o.key == key)
}

fn invalid(question: &Question, reason: &str) -> BankError {
    BankError::InvalidQuestion {
        id: question.id,
        reason: reason.to_string(),
    }
}

/// Sorts multiple-choice answer sets and blanks leaked answer hints from the
/// question text, so correctness checks and display both work off a canonical
/// form.
fn normalize(bank: &mut QuestionBank) {
    for section in &mut bank.sections {
        for question in &mut section.questions {
            if let CorrectAnswer::Multiple(keys) = &mut question.answer {
                keys.sort();
            }
            if ANSWER_HINT.is_match(&question.question) {
                question.question = ANSWER_HINT
                    .replace_all(&question.question, "(  )")
                    .into_owned();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_bank(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const VALID_BANK: &str = r#"{
        "sections": [
            {
                "type": "judgment",
                "name": "Judgment",
                "questions": [
                    {"id": 1, "type": "judgment", "question": "Water is wet.", "answer": true}
                ]
            },
            {
                "type": "multiple_choice",
                "name": "Multiple Choice",
                "questions": [
                    {
                        "id": 2,
                        "type": "multiple_choice",
                        "question": "Pick the vowels ( C,A ).",
                        "options": [
                            {"key": "A", "value": "a"},
                            {"key": "B", "value": "b"},
                            {"key": "C", "value": "e"}
                        ],
                        "answer": ["C", "A"]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_bank() {
        let file = write_bank(VALID_BANK);
        let bank = load_bank(file.path()).unwrap();
        assert_eq!(bank.sections.len(), 2);
        assert_eq!(bank.total_questions(), 2);
    }

    #[test]
    fn test_load_normalizes_multiple_choice_answers() {
        let file = write_bank(VALID_BANK);
        let bank = load_bank(file.path()).unwrap();
        let question = &bank.section(QuestionKind::MultipleChoice).unwrap().questions[0];
        assert_eq!(
            question.answer,
            CorrectAnswer::Multiple(vec!["A".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_load_blanks_answer_hints_in_question_text() {
        let file = write_bank(VALID_BANK);
        let bank = load_bank(file.path()).unwrap();
        let question = &bank.section(QuestionKind::MultipleChoice).unwrap().questions[0];
        assert_eq!(question.question, "Pick the vowels (  ).");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_bank(Path::new("definitely_missing_bank.json"));
        assert!(matches!(result, Err(BankError::Io(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_bank("{ not json");
        assert!(matches!(load_bank(file.path()), Err(BankError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_missing_sections() {
        let file = write_bank(r#"{"sections": []}"#);
        assert!(matches!(load_bank(file.path()), Err(BankError::NoSections)));
    }

    #[test]
    fn test_load_rejects_empty_bank() {
        let file = write_bank(
            r#"{"sections": [{"type": "judgment", "name": "J", "questions": []}]}"#,
        );
        assert!(matches!(load_bank(file.path()), Err(BankError::NoQuestions)));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let file = write_bank(
            r#"{
                "sections": [
                    {
                        "type": "judgment",
                        "name": "J",
                        "questions": [
                            {"id": 1, "type": "judgment", "question": "Q1", "answer": true},
                            {"id": 1, "type": "judgment", "question": "Q2", "answer": false}
                        ]
                    }
                ]
            }"#,
        );
        assert!(matches!(load_bank(file.path()), Err(BankError::DuplicateId(1))));
    }

    #[test]
    fn test_load_rejects_choice_without_options() {
        let file = write_bank(
            r#"{
                "sections": [
                    {
                        "type": "single_choice",
                        "name": "S",
                        "questions": [
                            {"id": 1, "type": "single_choice", "question": "Q", "answer": "A"}
                        ]
                    }
                ]
            }"#,
        );
        assert!(matches!(
            load_bank(file.path()),
            Err(BankError::InvalidQuestion { id: 1, .. })
        ));
    }

    #[test]
    fn test_load_rejects_answer_key_without_option() {
        let file = write_bank(
            r#"{
                "sections": [
                    {
                        "type": "single_choice",
                        "name": "S",
                        "questions": [
                            {
                                "id": 1,
                                "type": "single_choice",
                                "question": "Q",
                                "options": [{"key": "A", "value": "a"}],
                                "answer": "D"
                            }
                        ]
                    }
                ]
            }"#,
        );
        assert!(matches!(
            load_bank(file.path()),
            Err(BankError::InvalidQuestion { id: 1, .. })
        ));
    }

    #[test]
    fn test_load_rejects_kind_mismatch_with_section() {
        let file = write_bank(
            r#"{
                "sections": [
                    {
                        "type": "judgment",
                        "name": "J",
                        "questions": [
                            {
                                "id": 1,
                                "type": "single_choice",
                                "question": "Q",
                                "options": [{"key": "A", "value": "a"}],
                                "answer": "A"
                            }
                        ]
                    }
                ]
            }"#,
        );
        assert!(matches!(
            load_bank(file.path()),
            Err(BankError::InvalidQuestion { id: 1, .. })
        ));
    }

    #[test]
    fn test_load_rejects_answer_shape_mismatch() {
        let file = write_bank(
            r#"{
                "sections": [
                    {
                        "type": "judgment",
                        "name": "J",
                        "questions": [
                            {"id": 1, "type": "judgment", "question": "Q", "answer": "A"}
                        ]
                    }
                ]
            }"#,
        );
        assert!(matches!(
            load_bank(file.path()),
            Err(BankError::InvalidQuestion { id: 1, .. })
        ));
    }
}
