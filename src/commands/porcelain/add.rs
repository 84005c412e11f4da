use crate::commands::session::Session;

impl Session {
    pub fn add(&mut self, name: &str, value: &str) -> anyhow::Result<()> {
        let outcome = self.repository_mut().add(name, value.to_string());
        self.report(outcome)?;

        Ok(())
    }
}
