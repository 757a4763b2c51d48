//! The validated, immutable manual catalogue.
//!
//! A [`Catalog`] is constructed once from pre-parsed systems and tasks,
//! validated eagerly, and then only read. There is no ambient global: the
//! search and verification crates receive a borrowed `Catalog` explicitly.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{System, Task};
use crate::errors::CoreError;

/// Immutable collection of systems and tasks.
///
/// Record order is preserved from the source documents; search tie-breaking
/// relies on it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Catalog {
    systems: Vec<System>,
    tasks: Vec<Task>,
}

impl Catalog {
    /// Build a catalogue from pre-parsed records, validating eagerly.
    ///
    /// Search assumes validated input and dereferences fields without
    /// re-checking, so a malformed record must fail here, at load time.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if a record's `id`, `name`, or
    /// `title` is empty, or [`CoreError::DuplicateId`] if two records of the
    /// same kind share an id.
    pub fn new(systems: Vec<System>, tasks: Vec<Task>) -> Result<Self, CoreError> {
        let mut system_ids = HashSet::new();
        for system in &systems {
            if system.id.is_empty() {
                return Err(CoreError::MissingField {
                    kind: "system",
                    id: system.name.clone(),
                    field: "id",
                });
            }
            if system.name.is_empty() {
                return Err(CoreError::MissingField {
                    kind: "system",
                    id: system.id.clone(),
                    field: "name",
                });
            }
            if !system_ids.insert(system.id.as_str()) {
                return Err(CoreError::DuplicateId {
                    kind: "system",
                    id: system.id.clone(),
                });
            }
        }

        let mut task_ids = HashSet::new();
        for task in &tasks {
            if task.id.is_empty() {
                return Err(CoreError::MissingField {
                    kind: "task",
                    id: task.title.clone(),
                    field: "id",
                });
            }
            if task.title.is_empty() {
                return Err(CoreError::MissingField {
                    kind: "task",
                    id: task.id.clone(),
                    field: "title",
                });
            }
            if !task_ids.insert(task.id.as_str()) {
                return Err(CoreError::DuplicateId {
                    kind: "task",
                    id: task.id.clone(),
                });
            }
        }

        Ok(Self { systems, tasks })
    }

    #[must_use]
    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn system(&self, id: &str) -> Option<&System> {
        self.systems.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Display label for a system reference.
    ///
    /// Dangling references degrade gracefully: the raw id is returned as a
    /// plain label instead of failing.
    #[must_use]
    pub fn system_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.system(id).map_or(id, |s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreError;
    use pretty_assertions::assert_eq;

    fn system(id: &str, name: &str) -> System {
        System {
            id: id.into(),
            name: name.into(),
            description: "desc".into(),
            category: "Power".into(),
            icon: None,
            synonyms: Vec::new(),
            safety_notes: Vec::new(),
            declared_status: None,
        }
    }

    fn task(id: &str, title: &str, system_id: &str) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            system_id: system_id.into(),
            linked_system_ids: Vec::new(),
            keywords: Vec::new(),
            steps: Vec::new(),
            safety_warnings: Vec::new(),
        }
    }

    #[test]
    fn valid_catalog_constructs() {
        let catalog = Catalog::new(
            vec![system("solar", "Solar Charging System")],
            vec![task("top-up-water", "Top up fresh water", "fresh-water")],
        )
        .unwrap();
        assert_eq!(catalog.systems().len(), 1);
        assert_eq!(catalog.tasks().len(), 1);
    }

    #[test]
    fn duplicate_system_id_rejected() {
        let err = Catalog::new(
            vec![system("solar", "Solar"), system("solar", "Solar Again")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateId { kind: "system", .. }
        ));
    }

    #[test]
    fn empty_task_title_rejected() {
        let err = Catalog::new(Vec::new(), vec![task("t1", "", "solar")]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingField {
                kind: "task",
                field: "title",
                ..
            }
        ));
    }

    #[test]
    fn dangling_system_reference_degrades_to_raw_id() {
        let catalog = Catalog::new(vec![system("solar", "Solar")], Vec::new()).unwrap();
        assert_eq!(catalog.system_label("solar"), "Solar");
        assert_eq!(catalog.system_label("no-such-system"), "no-such-system");
    }
}
