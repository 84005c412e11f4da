use crate::areas::repository::Repository;
use crate::artifacts::outcome::{Outcome, StoreError};
use crate::commands::script::{self, Command};
use colored::Colorize;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use tracing::debug;

/// A repository of text objects plus the writer outcomes are printed to
pub struct Session {
    repository: Repository<String>,
    writer: RefCell<Box<dyn Write>>,
}

impl Session {
    pub fn new(repository: Repository<String>, writer: Box<dyn Write>) -> Self {
        Session {
            repository,
            writer: RefCell::new(writer),
        }
    }

    pub fn repository(&self) -> &Repository<String> {
        &self.repository
    }

    pub(crate) fn repository_mut(&mut self) -> &mut Repository<String> {
        &mut self.repository
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Run one command
    ///
    /// A refused operation comes back as an error wrapping its [`StoreError`].
    pub fn execute(&mut self, command: &Command) -> anyhow::Result<()> {
        match command {
            Command::Add { name, value } => self.add(name, value),
            Command::Commit { message } => self.commit(message),
            Command::Remove { name } => self.remove(name),
            Command::CheckoutHash { hash } => self.checkout(hash),
            Command::BranchList => self.branch_list(),
            Command::BranchCreate { name } => self.branch_create(name),
            Command::BranchCheckout { name } => self.branch_checkout(name),
            Command::BranchRemove { name } => self.branch_remove(name),
            Command::Log => self.log(),
            Command::Head => self.head(),
            Command::Get { name } => self.get(name),
        }
    }

    /// Parse and run a whole script
    ///
    /// Parse errors abort before anything runs. Without `keep_going` the first
    /// refused operation aborts the run; with it, refusals are printed to
    /// stderr and counted.
    ///
    /// # Returns
    ///
    /// Number of refused operations
    pub fn run_script(&mut self, script: &str, keep_going: bool) -> anyhow::Result<usize> {
        let lines = script::parse_script(script)?;
        let mut failures = 0;

        for line in &lines {
            debug!(line = line.number, command = %line.text, "executing");

            let Err(err) = self.execute(&line.command) else {
                continue;
            };

            let refused = err.downcast_ref::<StoreError>().is_some();
            if !keep_going || !refused {
                return Err(err.context(format!("line {}: {}", line.number, line.text)));
            }

            failures += 1;
            eprintln!("{} {}", "error:".red().bold(), err.to_string().red());
        }

        self.writer().flush()?;
        Ok(failures)
    }

    /// Print the outcome message on success, hand back the payload
    pub(crate) fn report<T>(&self, outcome: Outcome<T>) -> anyhow::Result<T> {
        let message = outcome.message().to_string();
        let payload = outcome.into_result()?;
        writeln!(self.writer(), "{message}")?;

        Ok(payload)
    }
}
