use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.get(id)? {
        Some(employee) => result.listed.push(employee),
        None => result.add_message(CmdMessage::error("Employee not found.")),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Employee;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_an_employee_by_id() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Employee::new("1", "Alice", "Engineer", "50000", "a@x.com"),
        )
        .unwrap();

        let result = run(&store, "1").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].email, "a@x.com");
    }

    #[test]
    fn reports_missing_employee() {
        let store = InMemoryStore::new();
        let result = run(&store, "1").unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "Employee not found.");
    }

    #[test]
    fn delete_then_search_reports_not_found() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Employee::new("1", "Alice", "Engineer", "50000", "a@x.com"),
        )
        .unwrap();
        crate::commands::delete::run(&mut store, "1").unwrap();

        let result = run(&store, "1").unwrap();
        assert!(!result.succeeded());
    }
}
