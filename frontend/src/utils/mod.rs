pub mod dom;
pub mod format;
pub mod motion;
