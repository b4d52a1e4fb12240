use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{salary_is_numeric, Employee};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, employee: Employee) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.get(&employee.id)?.is_some() {
        result.add_message(CmdMessage::error("Employee with this ID already exists."));
        return Ok(result);
    }
    if !salary_is_numeric(&employee.salary) {
        result.add_message(CmdMessage::error("Salary must be a number."));
        return Ok(result);
    }

    store.insert(employee.clone())?;
    result.add_message(CmdMessage::success("Employee added successfully."));
    result.affected.push(employee);
    Ok(result)
}
