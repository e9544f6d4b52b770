pub mod config;
pub mod contact;
pub mod content;
pub mod headline;
pub mod project;
pub mod scroll;
pub mod theme;

// email shape check: one @, a dot somewhere in the domain, no whitespace
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
