use crate::commands::session::Session;

impl Session {
    pub fn remove(&mut self, name: &str) -> anyhow::Result<()> {
        let outcome = self.repository_mut().remove(name);
        self.report(outcome)?;

        Ok(())
    }
}
