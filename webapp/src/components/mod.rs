pub mod footer;
pub mod modal;
pub mod navigation;
pub mod section;
pub mod social;
pub mod theme_toggle;
