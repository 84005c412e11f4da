use crate::commands::session::Session;
use std::io::Write;

impl Session {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let outcome = self.repository_mut().commit(message.trim());
        let summary = outcome.message().to_string();
        let commit = outcome.into_result()?;

        let branch = self.repository().branch_manager().current_branch().name();
        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch,
            commit.id().to_short_id(),
            summary
        )?;

        Ok(())
    }
}
