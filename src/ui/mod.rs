pub mod layout;
mod menu;
mod progress;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use progress::draw_progress;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;
