use crate::commands::session::Session;

impl Session {
    pub fn branch_list(&mut self) -> anyhow::Result<()> {
        let outcome = self.repository().branch_manager().list();
        self.report(outcome)
    }

    pub fn branch_create(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let outcome = self
            .repository_mut()
            .branch()
            .create(branch_name)
            .map(|_| ());
        self.report(outcome)
    }

    pub fn branch_checkout(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let outcome = self
            .repository_mut()
            .branch()
            .checkout(branch_name)
            .map(|_| ());
        self.report(outcome)
    }

    pub fn branch_remove(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let outcome = self.repository_mut().branch().remove(branch_name);
        self.report(outcome)?;

        Ok(())
    }
}
