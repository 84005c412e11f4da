use crate::commands::session::Session;

impl Session {
    pub fn log(&mut self) -> anyhow::Result<()> {
        let outcome = self.repository().log();
        self.report(outcome)
    }
}
