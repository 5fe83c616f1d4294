//! relalg - interactive relational algebra shell

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use relalg::catalog::{demo_catalog, Catalog};
use relalg::session::{needs_more_input, Session, EXIT_COMMAND};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// relalg - evaluate relational algebra expressions over in-memory tables
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run the commands in this file and exit
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Start with an empty catalog instead of the demo tables
    #[arg(long)]
    no_demo: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Prompt shown before each command
    #[arg(short, long, default_value = "relalg> ")]
    prompt: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let catalog = if args.no_demo {
        Catalog::new()
    } else {
        demo_catalog()
    };
    log::info!("catalog loaded with {} tables", catalog.len());

    let mut session = Session::new(catalog);

    if let Some(script) = &args.script {
        let mut stdout = io::stdout().lock();
        session
            .run_file(script, &mut stdout)
            .with_context(|| format!("Failed to run {}", script.display()))?;
        return Ok(());
    }

    print_banner();
    interactive(&mut session, &args.prompt)
}

/// Read-eval-print loop with line editing and history
fn interactive(session: &mut Session, prompt: &str) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;
    let mut stdout = io::stdout();
    let mut command = String::new();

    loop {
        let current_prompt = if command.is_empty() { prompt } else { "" };

        match editor.readline(current_prompt) {
            Ok(line) => {
                if command.is_empty() && line.trim().is_empty() {
                    continue;
                }
                if !command.is_empty() {
                    command.push('\n');
                }
                command.push_str(&line);

                // create commands span lines until the closing brace
                if needs_more_input(&command) {
                    continue;
                }

                warn_on_error(editor.add_history_entry(command.as_str()), "record history");
                let finished = std::mem::take(&mut command);
                if session.report(&finished, &mut stdout)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err).context("Failed to read command"),
        }
    }

    Ok(())
}

/// Log a failure that should not end the session
fn warn_on_error<T, E: fmt::Display>(result: Result<T, E>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("failed to {}: {}", action, err);
            None
        }
    }
}

fn print_banner() {
    println!("Relational algebra shell. Type '{}' to quit.", EXIT_COMMAND);
    println!();
    println!("Unary:");
    println!("  (Student)project[name,age]           projection");
    println!("  (Enrollment)select[name=John]        selection");
    println!("Set:");
    println!("  (Student)U(Student2)                 union");
    println!("  (Student)&(Student2)                 intersection");
    println!("  (Student)-(Student2)                 difference");
    println!("Binary:");
    println!("  (Student)x(Enrollment)               cartesian product");
    println!("  (Student)join[name=name](Enrollment)   inner join");
    println!("  (Student)-join[name=name](Enrollment)  left join");
    println!("  (Student)join-[name=name](Enrollment)  right join");
    println!("  (Student)-join-[name=name](Enrollment) full join");
    println!("Other:");
    println!("  create <table_name> {{               new table: a header line, then rows,");
    println!("  <column>, <column>                   ended by a line closing with '}}'");
    println!("  <value>, <value>");
    println!("  }}");
    println!("  print(<table_name>), print_all");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_on_error_keeps_going() {
        assert_eq!(warn_on_error(Ok::<_, String>(true), "record history"), Some(true));
        assert_eq!(
            warn_on_error(Err::<bool, _>("history file is read-only"), "record history"),
            None
        );
    }
}
