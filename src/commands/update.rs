use crate::commands::{CmdMessage, CmdResult, EmployeeUpdate};
use crate::error::Result;
use crate::model::salary_is_numeric;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str, update: &EmployeeUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mut employee) = store.get(id)? else {
        result.add_message(CmdMessage::error("Employee not found."));
        return Ok(result);
    };

    if let Some(name) = &update.name {
        employee.name = name.clone();
    }
    if let Some(position) = &update.position {
        employee.position = position.clone();
    }
    if let Some(salary) = &update.salary {
        if salary_is_numeric(salary) {
            employee.salary = salary.clone();
        } else {
            result.add_message(CmdMessage::warning("Invalid salary. Keeping old value."));
        }
    }
    if let Some(email) = &update.email {
        employee.email = email.clone();
    }

    // Persists even when every field was retained.
    store.insert(employee.clone())?;
    result.add_message(CmdMessage::success("Employee updated successfully."));
    result.affected.push(employee);
    Ok(result)
}
