use crate::commands::session::Session;
use std::io::Write;

impl Session {
    /// Move the current branch back to the commit with `hash`
    ///
    /// Later commits on the branch are discarded; the new head is printed the
    /// way a detached checkout announces it.
    pub fn checkout(&mut self, hash: &str) -> anyhow::Result<()> {
        let outcome = self.repository_mut().checkout(hash);
        let commit = self.report(outcome)?;

        writeln!(
            self.writer(),
            "{} {}",
            commit.id().to_short_id(),
            commit.message()
        )?;

        Ok(())
    }
}
