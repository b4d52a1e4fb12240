use serde::{Deserialize, Serialize};

/// One employee record. The id is the primary key; salary is kept textual
/// because it is stored and displayed as text, and validated to be all
/// decimal digits wherever it is written.
///
/// The serde renames match the CSV header columns exactly
/// (`ID,Name,Position,Salary,Email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            salary: salary.into(),
            email: email.into(),
        }
    }
}

/// True when `salary` is non-empty and composed entirely of ASCII decimal
/// digits. Negative values, signs, separators and empty strings all fail.
pub fn salary_is_numeric(salary: &str) -> bool {
    !salary.is_empty() && salary.bytes().all(|b| b.is_ascii_digit())
}
