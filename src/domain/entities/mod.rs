//! Domain entity definitions.

mod catalog;
mod credentials;
mod exam;
mod lesson;
mod profile;
mod quiz;
mod token;

pub use catalog::Catalog;
pub use credentials::Credentials;
pub use exam::Exam;
pub use lesson::{EndOfListPolicy, Lesson, LessonPart, PartKind};
pub use profile::UserProfile;
pub use quiz::{Question, Quiz};
pub use token::AuthToken;
