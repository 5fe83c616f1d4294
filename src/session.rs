//! Session handling for the interactive shell and script runner.

use crate::catalog::Catalog;
use crate::expression::{Evaluator, ExpressionError};
use crate::relation::Relation;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

pub const EXIT_COMMAND: &str = "exit";
const CREATE_PREFIX: &str = "create ";
const PRINT_ALL_COMMAND: &str = "print_all";
const PRINT_COMMAND: &str = "print";

/// Outcome of one shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// A table was created and registered
    Created(Relation),
    /// `print(name)`
    Table(Relation),
    /// `print_all`
    Tables(Vec<Relation>),
    /// An evaluated expression
    Relation(Relation),
    Exit,
}

/// Owns the catalog and dispatches shell commands.
pub struct Session {
    catalog: Catalog,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes a single complete command.
    pub fn execute(&mut self, command: &str) -> Result<QueryResult> {
        let command = command.trim();
        log::debug!("executing command: {}", command);

        if command == EXIT_COMMAND {
            return Ok(QueryResult::Exit);
        }

        if command.starts_with(CREATE_PREFIX) {
            let relation = self.catalog.create_table(command)?;
            return Ok(QueryResult::Created(relation.clone()));
        }

        if command.starts_with(PRINT_ALL_COMMAND) {
            return Ok(QueryResult::Tables(self.catalog.relations().cloned().collect()));
        }

        if command.starts_with(PRINT_COMMAND) {
            let name = print_target(command)
                .with_context(|| format!("Usage: {}(<table_name>)", PRINT_COMMAND))?;
            let relation = self
                .catalog
                .get(name)
                .ok_or_else(|| ExpressionError::UnresolvedLeaf(name.to_string()))?;
            return Ok(QueryResult::Table(relation.clone()));
        }

        let relation = Evaluator::new(&self.catalog).execute(command)?;
        Ok(QueryResult::Relation(relation))
    }

    /// Runs commands line by line, writing results and diagnostics to `out`.
    ///
    /// A failing command is reported and the run continues. Returns `true`
    /// when an `exit` command stopped the run.
    pub fn run_lines<'a, W: Write>(
        &mut self,
        lines: impl IntoIterator<Item = &'a str>,
        out: &mut W,
    ) -> Result<bool> {
        let mut buffer = String::new();

        for line in lines {
            if buffer.is_empty() && line.trim().is_empty() {
                continue;
            }
            if !buffer.is_empty() {
                buffer.push('\n');
            }
            buffer.push_str(line);

            if needs_more_input(&buffer) {
                continue;
            }

            let command = std::mem::take(&mut buffer);
            if self.report(&command, out)? {
                return Ok(true);
            }
        }

        if !buffer.is_empty() {
            writeln!(out, "Error: unterminated create command")?;
        }

        Ok(false)
    }

    /// Runs a script file. See [`Session::run_lines`].
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<bool> {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        self.run_lines(script.lines(), out)
    }

    /// Executes a command and writes its result or error. Returns `true` on exit.
    pub fn report<W: Write>(&mut self, command: &str, out: &mut W) -> Result<bool> {
        match self.execute(command) {
            Ok(QueryResult::Exit) => return Ok(true),
            Ok(QueryResult::Tables(relations)) => {
                writeln!(out, "Table Count: {}", relations.len())?;
                for relation in relations {
                    writeln!(out, "{}", relation)?;
                }
            }
            Ok(QueryResult::Created(relation))
            | Ok(QueryResult::Table(relation))
            | Ok(QueryResult::Relation(relation)) => writeln!(out, "{}", relation)?,
            Err(e) => {
                log::warn!("command failed: {:#}", e);
                writeln!(out, "Error: {:#}", e)?;
            }
        }
        Ok(false)
    }
}

/// Whether `buffer` is a `create` command still waiting for its closing brace
pub fn needs_more_input(buffer: &str) -> bool {
    buffer.trim_start().starts_with(CREATE_PREFIX) && !buffer.trim_end().ends_with('}')
}

/// The table name in `print(name)`
fn print_target(command: &str) -> Option<&str> {
    let inner = command
        .strip_prefix(PRINT_COMMAND)?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .trim();

    (!inner.is_empty()).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    #[test]
    fn test_print_target() {
        assert_eq!(print_target("print(Student)"), Some("Student"));
        assert_eq!(print_target("print ( Student )"), Some("Student"));
        assert_eq!(print_target("print()"), None);
        assert_eq!(print_target("print Student"), None);
    }

    #[test]
    fn test_needs_more_input() {
        assert!(needs_more_input("create T {"));
        assert!(needs_more_input("create T {\na, b"));
        assert!(!needs_more_input("create T {\na, b\n}"));
        assert!(!needs_more_input("(Student)x(Enrollment)"));
    }

    #[test]
    fn test_execute_commands() -> Result<()> {
        let mut session = Session::new(demo_catalog());

        assert_eq!(session.execute("exit")?, QueryResult::Exit);

        match session.execute("print(Enrollment)")? {
            QueryResult::Table(relation) => assert_eq!(relation.len(), 5),
            other => panic!("Expected table, got {:?}", other),
        }

        match session.execute("print_all")? {
            QueryResult::Tables(relations) => assert_eq!(relations.len(), 3),
            other => panic!("Expected tables, got {:?}", other),
        }

        match session.execute("(Student)select[age>18]")? {
            QueryResult::Relation(relation) => assert_eq!(relation.len(), 3),
            other => panic!("Expected relation, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_create_then_query() -> Result<()> {
        let mut session = Session::new(Catalog::new());
        session.execute("create Course {\nid, title\n1, Algebra\n2, Geometry\n}")?;

        assert!(session.catalog().contains("Course"));
        match session.execute("(Course)select[id>=2]")? {
            QueryResult::Relation(relation) => assert_eq!(relation.len(), 1),
            other => panic!("Expected relation, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_print_unknown_table() {
        let mut session = Session::new(demo_catalog());
        let err = session.execute("print(Teacher)").unwrap_err();
        assert_eq!(err.to_string(), "Unknown relation: Teacher");
    }

    #[test]
    fn test_run_lines_reports_and_continues() -> Result<()> {
        let mut session = Session::new(demo_catalog());
        let mut out = Vec::new();

        let exited = session.run_lines(
            [
                "(Student)U(Enrollment)",
                "create Course {",
                "id, title",
                "1, Algebra",
                "}",
                "(Course)project[title]",
                "exit",
                "print(Student)",
            ],
            &mut out,
        )?;

        let output = String::from_utf8(out)?;
        assert!(exited);
        assert!(output.contains("Error: Relations Student and Enrollment are not compatible for union"));
        assert!(output.contains("Table: Course_projected"));
        assert!(output.contains("Algebra"));
        // Nothing runs after exit
        assert!(!output.contains("Table: Student\n"));
        Ok(())
    }
}
