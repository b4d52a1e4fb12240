use super::{DataStore, Roster};
use crate::error::Result;
use crate::model::Employee;
use std::path::{Path, PathBuf};

/// Default backing file, created in the current working directory.
pub const DEFAULT_FILE_NAME: &str = "employees.csv";

/// The CSV header row, also the fixed field order of every data row.
const HEADER: [&str; 5] = ["ID", "Name", "Position", "Salary", "Email"];

/// CSV-backed storage. The whole file is parsed into a [`Roster`] at open;
/// every mutation rewrites the file in full before returning.
pub struct FileStore {
    path: PathBuf,
    roster: Roster,
}

impl FileStore {
    /// Open the store at `path`, loading any existing records. A missing file
    /// is not an error and yields an empty roster; a malformed file is.
    ///
    /// Duplicate ids in the file resolve last-row-wins, with the surviving
    /// record keeping the first occurrence's display position.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let roster = if path.exists() {
            Self::load(&path)?
        } else {
            Roster::new()
        };
        Ok(Self { path, roster })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Roster> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut roster = Roster::new();
        for record in reader.deserialize() {
            let employee: Employee = record?;
            roster.insert(employee);
        }
        Ok(roster)
    }

    /// Full rewrite: header row, then one row per roster entry in roster
    /// order. The header is written even when the roster is empty.
    fn save(&self) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;
        for employee in self.roster.iter() {
            writer.write_record([
                &employee.id,
                &employee.name,
                &employee.position,
                &employee.salary,
                &employee.email,
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn get(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.roster.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.roster.iter().cloned().collect())
    }

    fn insert(&mut self, employee: Employee) -> Result<()> {
        self.roster.insert(employee);
        self.save()
    }

    fn remove(&mut self, id: &str) -> Result<Option<Employee>> {
        let removed = self.roster.remove(id);
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, name: &str) -> Employee {
        Employee::new(id, name, "Engineer", "50000", "e@x.com")
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join(DEFAULT_FILE_NAME)).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn round_trips_through_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut store = FileStore::open(&path).unwrap();
        store.insert(emp("1", "Alice")).unwrap();
        store.insert(emp("2", "Bob")).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.list().unwrap(), store.list().unwrap());
        assert_eq!(reopened.get("2").unwrap().unwrap().name, "Bob");
    }

    #[test]
    fn writes_exact_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut store = FileStore::open(&path).unwrap();
        store
            .insert(Employee::new("1", "Alice", "Engineer", "50000", "a@x.com"))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "ID,Name,Position,Salary,Email\n1,Alice,Engineer,50000,a@x.com\n"
        );
    }

    #[test]
    fn removing_last_record_leaves_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut store = FileStore::open(&path).unwrap();
        store.insert(emp("1", "Alice")).unwrap();
        assert!(store.remove("1").unwrap().is_some());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "ID,Name,Position,Salary,Email\n");
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.remove("9").unwrap().is_none());
        // Nothing was ever written.
        assert!(!path.exists());
    }

    #[test]
    fn last_file_row_wins_on_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(
            &path,
            "ID,Name,Position,Salary,Email\n\
             1,Alice,Engineer,50000,a@x.com\n\
             2,Bob,Clerk,30000,b@x.com\n\
             1,Alicia,Manager,70000,a2@x.com\n",
        )
        .unwrap();

        let store = FileStore::open(&path).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        // Last row wins, but id 1 keeps its original slot ahead of id 2.
        assert_eq!(listed[0].name, "Alicia");
        assert_eq!(listed[1].name, "Bob");
    }

    #[test]
    fn quoted_fields_survive_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let mut store = FileStore::open(&path).unwrap();
        store
            .insert(Employee::new(
                "1",
                "Smith, Jane",
                "Engineer",
                "50000",
                "j@x.com",
            ))
            .unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("1").unwrap().unwrap().name, "Smith, Jane");
    }

    #[test]
    fn malformed_rows_fail_the_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "ID,Name,Position,Salary,Email\n1,Alice\n").unwrap();

        assert!(FileStore::open(&path).is_err());
    }
}
