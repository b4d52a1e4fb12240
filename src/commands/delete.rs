use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove(id)? {
        Some(employee) => {
            result.add_message(CmdMessage::success("Employee deleted."));
            result.affected.push(employee);
        }
        None => result.add_message(CmdMessage::error("Employee not found.")),
    }

    Ok(result)
}
