//! # API Facade
//!
//! A **thin facade** over the command layer: the single entry point for all
//! staffdir operations, regardless of the UI driving them. It dispatches to
//! the right command and returns structured `Result<CmdResult>` values; it
//! holds no business logic and does no I/O or presentation.
//!
//! `DirectoryApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::Employee;
use crate::store::DataStore;

/// The main API facade for staffdir operations.
///
/// All UI clients should interact through this API rather than calling
/// commands directly.
pub struct DirectoryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> DirectoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, employee)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_employee(
        &mut self,
        id: &str,
        update: &commands::EmployeeUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_employee(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_employee(&self, id: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, id)
    }

    /// Direct lookup, used by the session to show current values when
    /// prompting for an update.
    pub fn get_employee(&self, id: &str) -> Result<Option<Employee>> {
        self.store.get(id)
    }

    /// Give the store back, consuming the api. Lets callers inspect final
    /// state after a session ends.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::EmployeeUpdate;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_full_lifecycle() {
        let mut api = DirectoryApi::new(InMemoryStore::new());

        let added = api
            .add_employee(Employee::new("1", "Alice", "Engineer", "50000", "a@x.com"))
            .unwrap();
        assert!(added.succeeded());

        let update = EmployeeUpdate::new(None, None, Some("60000".into()), None);
        api.update_employee("1", &update).unwrap();
        assert_eq!(api.get_employee("1").unwrap().unwrap().salary, "60000");

        let found = api.search_employee("1").unwrap();
        assert_eq!(found.listed.len(), 1);

        api.delete_employee("1").unwrap();
        assert!(!api.search_employee("1").unwrap().succeeded());
        assert!(api.list_employees().unwrap().listed.is_empty());
    }
}
