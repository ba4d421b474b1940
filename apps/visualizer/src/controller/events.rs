//! Worker-to-UI events and error modeling for the terminal front-end.

use shared::{
    error::{ErrorCode, ErrorReport},
    protocol::SortEvent,
};
use sort_engine::PendingFrame;

pub enum UiEvent {
    Info(String),
    Engine(SortEvent),
    /// Must be marked drawn (or dropped) for the sort to continue.
    Frame(PendingFrame),
    Error(UiError),
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Busy,
    Aborted,
    Runtime,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Command,
    Generate,
    Sort,
    Speed,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("already in progress") {
            UiErrorCategory::Busy
        } else if message_lower.contains("aborted") {
            UiErrorCategory::Aborted
        } else if message_lower.contains("invalid")
            || message_lower.contains("unknown")
            || message_lower.contains("unrecognized")
            || message_lower.contains("must be")
            || message_lower.contains("requires")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("runtime")
            || message_lower.contains("worker")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Runtime
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_report(context: UiErrorContext, report: ErrorReport) -> Self {
        let category = match report.code {
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::Busy => UiErrorCategory::Busy,
            ErrorCode::Aborted => UiErrorCategory::Aborted,
            ErrorCode::Internal => UiErrorCategory::Runtime,
        };
        Self {
            category,
            context,
            message: report.message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line text shown to the user.
    pub fn display_line(&self) -> String {
        let hint = match self.category() {
            UiErrorCategory::Busy => " (wait for the current sort or run 'generate' to abort it)",
            UiErrorCategory::Validation => "",
            UiErrorCategory::Aborted => "",
            UiErrorCategory::Runtime => " (restart the visualizer)",
            UiErrorCategory::Unknown => "",
        };
        format!("{:?} error: {}{hint}", self.context(), self.message())
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
