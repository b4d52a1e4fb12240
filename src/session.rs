//! # Interactive Session
//!
//! The menu loop for the staffdir binary. This is the presentation layer:
//! it renders the fixed six-item menu, prompts for raw lines, maps them onto
//! API calls, and colors the resulting messages. All field-level validation
//! lives in the command layer; the only parsing done here is the menu-choice
//! match itself.
//!
//! `Session` is generic over its reader and writer so tests can drive a whole
//! scripted session from a `Cursor` and assert on the transcript.

use crate::api::DirectoryApi;
use crate::commands::{CmdMessage, EmployeeUpdate, MessageLevel};
use crate::error::Result;
use crate::model::Employee;
use crate::store::DataStore;
use colored::Colorize;
use std::io::{BufRead, Write};

/// One of the six menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed input line. Anything outside `1`..`6` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Employee Manager ---\n\
                    1. Add Employee\n\
                    2. View All Employees\n\
                    3. Update Employee\n\
                    4. Delete Employee\n\
                    5. Search Employee\n\
                    6. Exit";

pub struct Session<S: DataStore, R, W> {
    api: DirectoryApi<S>,
    input: R,
    output: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            api: DirectoryApi::new(store),
            input,
            output,
        }
    }

    /// Run the menu loop until the user picks Exit (or input hits EOF).
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                return Ok(());
            };

            match MenuChoice::parse(line.trim()) {
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::ViewAll) => self.handle_view_all()?,
                Some(MenuChoice::Update) => self.handle_update()?,
                Some(MenuChoice::Delete) => self.handle_delete()?,
                Some(MenuChoice::Search) => self.handle_search()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(());
                }
                None => writeln!(self.output, "{}", "Invalid choice. Try again.".yellow())?,
            }
        }
    }

    /// Write `label` without a newline, flush, and read one line.
    /// Returns `None` on EOF. The trailing newline is stripped.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn handle_add(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter Employee ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(position) = self.prompt("Enter Position: ")? else {
            return Ok(());
        };
        let Some(salary) = self.prompt("Enter Salary: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(());
        };

        let result = self
            .api
            .add_employee(Employee::new(id, name, position, salary, email))?;
        self.print_messages(&result.messages)
    }

    fn handle_view_all(&mut self) -> Result<()> {
        let result = self.api.list_employees()?;
        for e in &result.listed {
            writeln!(
                self.output,
                "{} - {} - {} - {} - {}",
                e.id, e.name, e.position, e.salary, e.email
            )?;
        }
        self.print_messages(&result.messages)
    }

    fn handle_update(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter Employee ID to update: ")? else {
            return Ok(());
        };
        let Some(current) = self.api.get_employee(&id)? else {
            writeln!(self.output, "{}", "Employee not found.".red())?;
            return Ok(());
        };

        let name = self.prompt(&format!(
            "Enter new Name (leave blank to keep '{}'): ",
            current.name
        ))?;
        let position = self.prompt(&format!(
            "Enter new Position (leave blank to keep '{}'): ",
            current.position
        ))?;
        let salary = self.prompt(&format!(
            "Enter new Salary (leave blank to keep '{}'): ",
            current.salary
        ))?;
        let email = self.prompt(&format!(
            "Enter new Email (leave blank to keep '{}'): ",
            current.email
        ))?;

        let update = EmployeeUpdate::new(
            name.and_then(non_blank),
            position.and_then(non_blank),
            salary.and_then(non_blank),
            email.and_then(non_blank),
        );
        let result = self.api.update_employee(&id, &update)?;
        self.print_messages(&result.messages)
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter Employee ID to delete: ")? else {
            return Ok(());
        };
        let result = self.api.delete_employee(&id)?;
        self.print_messages(&result.messages)
    }

    fn handle_search(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter Employee ID to search: ")? else {
            return Ok(());
        };
        let result = self.api.search_employee(&id)?;
        for e in &result.listed {
            writeln!(self.output, "ID: {}", e.id)?;
            writeln!(self.output, "Name: {}", e.name)?;
            writeln!(self.output, "Position: {}", e.position)?;
            writeln!(self.output, "Salary: {}", e.salary)?;
            writeln!(self.output, "Email: {}", e.email)?;
        }
        self.print_messages(&result.messages)
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            let rendered = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            writeln!(self.output, "{}", rendered)?;
        }
        Ok(())
    }
}

/// Blank (empty or whitespace-only) input means "keep the current value".
fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
