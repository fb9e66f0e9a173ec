//! Platform-facing helpers shared by the widget components.

pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
