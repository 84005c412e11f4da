use crate::commands::session::Session;
use std::io::Write;

impl Session {
    /// Print the newest commit's id, message and how many objects it tracks
    pub fn head(&mut self) -> anyhow::Result<()> {
        let commit = self.repository().head().into_result()?;

        writeln!(self.writer(), "{} {}", commit.id(), commit.message())?;
        writeln!(self.writer(), "\t{} objects tracked", commit.objects().len())?;

        Ok(())
    }

    /// Print the committed value of `name`
    pub fn get(&mut self, name: &str) -> anyhow::Result<()> {
        let value = self.repository().get(name).into_result()?;
        writeln!(self.writer(), "{value}")?;

        Ok(())
    }
}
