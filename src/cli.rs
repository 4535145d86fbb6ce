//! Command-line presentation layer.
//!
//! Each command works against a work type file. Commands that change the
//! department load the file, apply the change, and save it back only if the
//! change succeeded. Output goes to any [`Write`] sink so the commands can be
//! driven from tests as well as from `main`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::department::Department;
use crate::input::{check_name, strategy_from_input};
use crate::models::{PayKind, WorkType};
use crate::storage::{load_department, load_into, save_department};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "salary-department", author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Work type file (overrides data_file from the settings)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Returns the data file to use: `--data` if given, else the configured one.
    pub fn data_file(&self, config: &AppConfig) -> PathBuf {
        self.data.clone().unwrap_or_else(|| config.data_file.clone())
    }
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List work types ordered by name
    List {
        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Add a work type
    Add {
        /// Work type name
        name: String,
        /// Base rate, e.g. 2500 or 2500,50
        #[arg(long)]
        rate: String,
        /// Bonus percent; omit for flat pay
        #[arg(long)]
        bonus: Option<String>,
    },
    /// Replace a work type, optionally renaming it
    Update {
        /// Current name
        old_name: String,
        /// New name (may equal the current one)
        new_name: String,
        /// Base rate
        #[arg(long)]
        rate: String,
        /// Bonus percent; omit for flat pay
        #[arg(long)]
        bonus: Option<String>,
    },
    /// Remove a work type
    Remove {
        /// Work type name
        name: String,
    },
    /// Show a single work type
    Show {
        /// Work type name
        name: String,
    },
    /// Print the average pay
    Average,
    /// Replace the data file contents with another file, all or nothing
    Import {
        /// File to read
        file: PathBuf,
    },
    /// Write the department to another file
    Export {
        /// File to write
        file: PathBuf,
    },
}

/// One row of `list --json` output.
#[derive(Serialize)]
struct ListRow<'a> {
    name: &'a str,
    kind: PayKind,
    base_rate: Decimal,
    bonus_percent: Decimal,
    pay: Decimal,
}

impl<'a> From<&'a WorkType> for ListRow<'a> {
    fn from(work: &'a WorkType) -> Self {
        let strategy = work.strategy();
        Self {
            name: work.name(),
            kind: strategy.kind(),
            base_rate: strategy.base_rate(),
            bonus_percent: strategy.bonus_percent(),
            pay: work.pay(),
        }
    }
}

/// Loads the data file, or starts empty if it does not exist yet.
fn open_department(path: &Path) -> Result<Department> {
    if !path.exists() {
        info!(path = %path.display(), "No work type file yet, starting empty");
        return Ok(Department::new());
    }
    Ok(load_department(path)?)
}

/// Runs one command against `data_file`, writing user-facing text to `out`.
///
/// # Errors
///
/// Any validation, format or I/O failure is returned; in that case the
/// data file has not been written.
pub fn run<W: Write>(
    command: Command,
    data_file: &Path,
    config: &AppConfig,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List { json } => {
            let department = open_department(data_file)?;
            let works = department.sorted_by_name();
            if json {
                let rows: Vec<ListRow<'_>> = works.iter().map(ListRow::from).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else if works.is_empty() {
                writeln!(out, "No work types added.")?;
            } else {
                for work in &works {
                    writeln!(out, "{}", work)?;
                }
            }
        }
        Command::Add { name, rate, bonus } => {
            check_name(&name)?;
            let mut department = open_department(data_file)?;
            let strategy = strategy_from_input(&rate, bonus.as_deref())?;
            department.add(&name, strategy)?;
            save_department(&department, data_file)?;
            writeln!(out, "Added '{}'.", name.trim())?;
        }
        Command::Update {
            old_name,
            new_name,
            rate,
            bonus,
        } => {
            check_name(&new_name)?;
            let mut department = open_department(data_file)?;
            let strategy = strategy_from_input(&rate, bonus.as_deref())?;
            department.update(&old_name, &new_name, strategy)?;
            save_department(&department, data_file)?;
            writeln!(out, "Updated '{}'.", new_name.trim())?;
        }
        Command::Remove { name } => {
            let mut department = open_department(data_file)?;
            department.remove(&name);
            save_department(&department, data_file)?;
            writeln!(out, "Removed '{}'.", name.trim())?;
        }
        Command::Show { name } => {
            let department = open_department(data_file)?;
            match department.find(&name) {
                Some(work) => writeln!(out, "{}", work)?,
                None => writeln!(out, "Work type '{}' not found.", name.trim())?,
            }
        }
        Command::Average => {
            let department = open_department(data_file)?;
            let average = department
                .average_pay()?
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            writeln!(out, "Average pay: {:.2} {}", average, config.currency)?;
        }
        Command::Import { file } => {
            // Import replaces the current contents; the old data file is not read.
            let mut department = Department::new();
            let count = load_into(&mut department, &file)
                .with_context(|| format!("could not import '{}'", file.display()))?;
            save_department(&department, data_file)?;
            writeln!(out, "Imported {} work types.", count)?;
        }
        Command::Export { file } => {
            let department = open_department(data_file)?;
            save_department(&department, &file)?;
            writeln!(
                out,
                "Saved {} work types to {}.",
                department.len(),
                file.display()
            )?;
        }
    }
    Ok(())
}
