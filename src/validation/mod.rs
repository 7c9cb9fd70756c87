//! Validation Engine
//!
//! Clean separation of rule checking from board loading and CLI concerns.

pub mod engine;
pub mod visibility;

pub use engine::{Diagnostic, Severity, check_skyscrapers, is_finished, validate_board};
pub use visibility::{left_to_right_check, visible_count};

// Re-export common types
pub use engine::ValidationResult;
