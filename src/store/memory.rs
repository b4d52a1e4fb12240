use super::{DataStore, Roster};
use crate::error::Result;
use crate::model::Employee;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    roster: Roster,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn get(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.roster.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.roster.iter().cloned().collect())
    }

    fn insert(&mut self, employee: Employee) -> Result<()> {
        self.roster.insert(employee);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<Option<Employee>> {
        Ok(self.roster.remove(id))
    }
}
