//! The department registry.
//!
//! This module provides the [`Department`] type, which owns every
//! registered work type and enforces that names are unique.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{DepartmentError, DepartmentResult};
use crate::models::{PayStrategy, WorkType};

/// The collection of work types owned by a salary department.
///
/// Entries keep insertion order. Alongside the entries the department keeps
/// the set of names in use; every operation updates both together, and the
/// live collection is never handed out, only borrowed or copied.
///
/// # Example
///
/// ```
/// use salary_department::department::Department;
/// use salary_department::models::PayStrategy;
/// use rust_decimal::Decimal;
///
/// let mut department = Department::new();
/// department.add("Testing", PayStrategy::flat(Decimal::new(2500, 0))?)?;
/// department.add("Analysis", PayStrategy::bonus(Decimal::new(4000, 0), Decimal::new(15, 0))?)?;
///
/// assert_eq!(department.average_pay()?, Decimal::new(3550, 0));
/// # Ok::<(), salary_department::error::DepartmentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Department {
    work_types: Vec<WorkType>,
    names: HashSet<String>,
}

impl Department {
    /// Creates an empty department.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a work type with this trimmed name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    /// Returns the number of registered work types.
    pub fn len(&self) -> usize {
        self.work_types.len()
    }

    /// Returns true if no work types are registered.
    pub fn is_empty(&self) -> bool {
        self.work_types.is_empty()
    }

    /// Registers a new work type under the trimmed `name`.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the name is blank
    /// - `DuplicateName` if the trimmed name is already registered
    ///
    /// On error the department is unchanged.
    pub fn add(&mut self, name: &str, strategy: PayStrategy) -> DepartmentResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DepartmentError::EmptyName);
        }
        if self.names.contains(name) {
            return Err(DepartmentError::DuplicateName {
                name: name.to_string(),
            });
        }

        debug!(name = %name, kind = %strategy.kind(), "Adding work type");
        self.work_types.push(WorkType::new(name.to_string(), strategy));
        self.names.insert(name.to_string());
        Ok(())
    }

    /// Removes the work type with the trimmed `name`, if any.
    pub fn remove(&mut self, name: &str) {
        let name = name.trim();
        if self.names.remove(name) {
            self.work_types.retain(|work| work.name() != name);
            debug!(name = %name, "Removed work type");
        }
    }

    /// Replaces `old_name` with a work type named `new_name`.
    ///
    /// This is a removal followed by an [`add`](Self::add). Renaming to the
    /// same name succeeds. If `new_name` belongs to a different entry the
    /// add fails with `DuplicateName` and the entry under `old_name` stays
    /// removed; there is no rollback.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: &str,
        strategy: PayStrategy,
    ) -> DepartmentResult<()> {
        self.remove(old_name);
        self.add(new_name, strategy)
    }

    /// Finds the work type with the trimmed `name`.
    pub fn find(&self, name: &str) -> Option<&WorkType> {
        let name = name.trim();
        self.work_types.iter().find(|work| work.name() == name)
    }

    /// Returns the mean pay across all work types.
    ///
    /// # Errors
    ///
    /// Returns `NoData` if the department is empty.
    pub fn average_pay(&self) -> DepartmentResult<Decimal> {
        if self.work_types.is_empty() {
            return Err(DepartmentError::NoData);
        }
        let total: Decimal = self.work_types.iter().map(WorkType::pay).sum();
        Ok(total / Decimal::from(self.work_types.len()))
    }

    /// Returns a copy of the work types in insertion order.
    pub fn list(&self) -> Vec<WorkType> {
        self.work_types.clone()
    }

    /// Returns a copy of the work types ordered by name.
    pub fn sorted_by_name(&self) -> Vec<WorkType> {
        let mut works = self.list();
        works.sort_by(|a, b| a.name().cmp(b.name()));
        works
    }

    /// Iterates over the work types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkType> {
        self.work_types.iter()
    }
}
