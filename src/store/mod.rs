//! # Storage Layer
//!
//! This module defines the storage abstraction for staffdir. The [`DataStore`]
//! trait allows the command layer to work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production CSV-backed storage
//!   - Whole directory loaded into memory at open
//!   - Full-file rewrite after every successful mutation
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering
//!
//! Both backends keep records in a [`Roster`], a mapping keyed by employee id
//! that preserves insertion order for display. Re-inserting an existing id
//! replaces the record but keeps its original position, so a file row that
//! overrides an earlier duplicate still lists where the id first appeared.

use crate::error::Result;
use crate::model::Employee;
use std::collections::HashMap;

pub mod fs;
pub mod memory;

/// Abstract interface for employee storage.
///
/// Mutating operations persist before returning, so the backing store is
/// never behind the in-memory state.
pub trait DataStore {
    /// Get an employee by id
    fn get(&self, id: &str) -> Result<Option<Employee>>;

    /// List all employees in insertion order
    fn list(&self) -> Result<Vec<Employee>>;

    /// Insert an employee (create or replace), then persist
    fn insert(&mut self, employee: Employee) -> Result<()>;

    /// Remove an employee by id, then persist. Returns the removed record,
    /// or `None` if the id was absent (in which case nothing is written).
    fn remove(&mut self, id: &str) -> Result<Option<Employee>>;
}

/// The in-memory mapping from id to [`Employee`], plus a parallel key list
/// so iteration follows first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    by_id: HashMap<String, Employee>,
    order: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Insert or replace. A replaced id keeps its original position in the
    /// display order; a new id is appended.
    pub fn insert(&mut self, employee: Employee) {
        if !self.by_id.contains_key(&employee.id) {
            self.order.push(employee.id.clone());
        }
        self.by_id.insert(employee.id.clone(), employee);
    }

    pub fn remove(&mut self, id: &str) -> Option<Employee> {
        let removed = self.by_id.remove(id);
        if removed.is_some() {
            self.order.retain(|k| k != id);
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
