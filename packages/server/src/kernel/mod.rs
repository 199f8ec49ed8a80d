//! Kernel module - server infrastructure and dependencies.

pub mod comment;
pub mod deps;
pub mod dictionary;
pub mod test_dependencies;
pub mod traits;

pub use comment::assemble_comment;
pub use deps::{BitrixAdapter, GeminiAdapter, ResendAdapter, ServerDeps};
pub use dictionary::{dictionary, find_question_text, Lang, Question, QuestionDictionary};
pub use test_dependencies::{
    MockCrmService, MockEmailService, MockReportGenerator, TestDependencies,
};
pub use traits::*;
