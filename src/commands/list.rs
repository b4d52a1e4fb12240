use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let employees = store.list()?;
    if employees.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No employees found."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_listed(employees))
}
