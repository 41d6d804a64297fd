pub mod screen;
pub mod toast;
