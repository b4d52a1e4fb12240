use crate::model::Employee;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command: zero or more leveled messages plus the
/// records the command touched or listed. The session layer decides how to
/// render these; commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Employee>,
    pub listed: Vec<Employee>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }

    /// True when no error-level message was produced.
    pub fn succeeded(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Field-by-field update request. `None` means "retain the current value";
/// the session maps blank input to `None` before building one of these.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
    pub email: Option<String>,
}

impl EmployeeUpdate {
    pub fn new(
        name: Option<String>,
        position: Option<String>,
        salary: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            name,
            position,
            salary,
            email,
        }
    }
}
