//! UI screens.

mod app;
mod exam_screen;
mod home_screen;
mod lesson_screen;
mod loading_screen;
mod login_screen;
mod profile_screen;
mod quiz_screen;

pub use app::{App, AppSettings};
pub use exam_screen::{ExamAction, ExamScreen};
pub use home_screen::{HomeAction, HomeScreen};
pub use lesson_screen::{LessonAction, LessonScreen};
pub use loading_screen::LoadingScreen;
pub use login_screen::{LoginAction, LoginScreen, LoginState};
pub use profile_screen::{ProfileAction, ProfileScreen, ProfileState};
pub use quiz_screen::{QuizAction, QuizScreen};
