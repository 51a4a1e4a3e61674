pub mod bank;
pub mod file_io;
pub mod logger;
pub mod models;
pub mod progress;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use bank::{load_bank, BankError};
pub use file_io::{default_report_path, write_report};
pub use models::{
    AppState, ChoiceOption, CorrectAnswer, ExamSession, Mode, Question, QuestionBank,
    QuestionKind, RecordedAnswer, Section, Selection, SessionQuestion, Status, UserAnswer,
};
pub use progress::{ProgressSummary, QuestionProgress};
pub use session::{
    handle_quiz_input, EXAM_SECONDS, JUDGMENT_QUOTA, MULTIPLE_CHOICE_QUOTA, SINGLE_CHOICE_QUOTA,
};
pub use ui::{draw_menu, draw_progress, draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::{format_time, truncate_string};
