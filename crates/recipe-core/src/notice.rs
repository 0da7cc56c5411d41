//! User-facing notices
//!
//! State transitions queue notices; the presentation layer drains and shows
//! them (toasts in the browser, stderr in the CLI).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

/// Notice texts
pub mod messages {
    pub const LOAD_REJECTED: &str = "Oops - could not fetch recipes!";
    pub const CREATED: &str = "Recipe added successfully!";
    pub const CREATE_REJECTED: &str = "Oops - could not add recipe!";
    pub const UPDATED: &str = "Recipe updated!";
    pub const UPDATE_REJECTED: &str = "Failed to update recipe. Please try again.";
    pub const DELETED: &str = "Recipe deleted successfully!";
    pub const DELETE_REJECTED: &str = "Oops - could not delete recipe!";
    pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";
}
