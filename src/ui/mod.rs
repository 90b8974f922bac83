pub mod format;
pub mod layout;
pub mod scroll;
pub mod theme;
