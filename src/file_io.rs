use crate::models::{ExamSession, QuestionKind};
use chrono::Local;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "exam_report_{}.md",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Writes a markdown report for a finished exam: score, per-kind breakdown
/// and the incorrectly answered questions with both answers.
pub fn write_report(path: &Path, session: &ExamSession) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "# Exam Report")?;
    writeln!(file)?;
    writeln!(file, "Date: {}", Local::now().format("%Y-%m-%d %H:%M"))?;
    writeln!(
        file,
        "Score: {:.1} / {:.1}",
        session.score,
        session.max_score()
    )?;
    let summary = session.progress_summary();
    writeln!(
        file,
        "Answered: {} / {}",
        summary.answered,
        session.questions.len()
    )?;
    writeln!(file)?;

    writeln!(file, "## Breakdown")?;
    writeln!(file)?;
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
        writeln!(file, "- {}: {} / {} correct", kind.label(), correct, total)?;
    }
    writeln!(file)?;

    writeln!(file, "## Incorrect Answers")?;
    writeln!(file)?;
    let mut any_wrong = false;
    for (number, sq) in session.questions.iter().enumerate() {
        let Some(recorded) = session.answers.get(&sq.question.id) else {
            continue;
        };
        if recorded.is_correct != Some(false) {
            continue;
        }
        any_wrong = true;
        writeln!(file, "### Question {}", number + 1)?;
        writeln!(file)?;
        writeln!(file, "{}", sq.question.question)?;
        writeln!(file)?;
        writeln!(file, "- Your answer: {}", recorded.answer)?;
        writeln!(file, "- Correct answer: {}", sq.question.answer)?;
        writeln!(file)?;
    }
    if !any_wrong {
        writeln!(file, "None.")?;
    }

    Ok(())
}
