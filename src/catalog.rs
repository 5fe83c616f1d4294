//! In-memory catalog of named relations.

pub mod literal;

pub use literal::{parse_table_literal, LiteralError};

use crate::expression::Registry;
use crate::relation::Relation;
use crate::row;
use indexmap::IndexMap;

/// Name → relation registry. Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: IndexMap<String, Relation>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a relation under its own name, replacing any previous one
    pub fn register(&mut self, relation: Relation) -> &Relation {
        let name = relation.name().to_string();
        log::debug!("registering {} ({} rows)", name, relation.len());

        let index = self.tables.insert_full(name, relation).0;
        &self.tables[index]
    }

    /// Parse a `create <name> { ... }` literal and register the table
    pub fn create_table(&mut self, literal: &str) -> Result<&Relation, LiteralError> {
        let relation = parse_table_literal(literal)?;
        Ok(self.register(relation))
    }

    pub fn get(&self, name: &str) -> Option<&Relation> {
        self.tables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Registry for Catalog {
    fn lookup(&self, name: &str) -> Option<&Relation> {
        self.get(name)
    }
}

/// Catalog preloaded with the Student, Student2 and Enrollment tables
pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.register(Relation::with_rows(
        "Student",
        vec![
            row!["name" => "John", "age" => 18, "gpa" => 3.5],
            row!["name" => "Jane", "age" => 19, "gpa" => 3.8],
            row!["name" => "Bob", "age" => 20, "gpa" => 3.2],
            row!["name" => "Alice", "age" => 18, "gpa" => 3.9],
            row!["name" => "Joe", "age" => 19, "gpa" => 3.7],
        ],
    ));

    catalog.register(Relation::with_rows(
        "Student2",
        vec![
            row!["name" => "John", "age" => 18, "gpa" => 3.5],
            row!["name" => "Jane", "age" => 21, "gpa" => 3.4],
            row!["name" => "Bob", "age" => 20, "gpa" => 3.2],
            row!["name" => "Eve", "age" => 22, "gpa" => 3.9],
            row!["name" => "Chris", "age" => 19, "gpa" => 3.1],
        ],
    ));

    catalog.register(Relation::with_rows(
        "Enrollment",
        vec![
            row!["name" => "John", "course" => "Math101"],
            row!["name" => "Jane", "course" => "History202"],
            row!["name" => "Alice", "course" => "English105"],
            row!["name" => "Bill", "course" => "Math101"],
            row!["name" => "Joe", "course" => "Physics101"],
        ],
    ));

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = demo_catalog();
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["Student", "Student2", "Enrollment"]
        );
        assert_eq!(catalog.get("Student").map(Relation::len), Some(5));
        assert!(catalog.lookup("Teacher").is_none());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut catalog = demo_catalog();
        catalog.register(Relation::new("Student"));

        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("Student").is_some_and(Relation::is_empty));
        // Replacement keeps the original position
        assert_eq!(catalog.names().next(), Some("Student"));
    }

    #[test]
    fn test_create_table() -> Result<(), LiteralError> {
        let mut catalog = Catalog::new();
        let created = catalog.create_table("create Course {\nid, title\n1, Algebra\n}")?;
        assert_eq!(created.name(), "Course");
        assert!(catalog.contains("Course"));
        Ok(())
    }
}
