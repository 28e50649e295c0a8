mod input;
mod popup;
mod status_bar;

pub use input::TextInput;
pub use popup::{DialogPopup, NoticePopup};
pub use status_bar::{StatusBar, StatusLevel};
