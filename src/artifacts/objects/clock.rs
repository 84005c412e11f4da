use anyhow::Context;
use chrono::{DateTime, FixedOffset};

/// Source of commit timestamps
///
/// `System` reads the local clock on every commit. `Fixed` pins every commit to
/// the same instant, which makes commit ids reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::System => chrono::Local::now().fixed_offset(),
            Clock::Fixed(timestamp) => *timestamp,
        }
    }

    /// Parse a fixed clock from RFC 2822 or `%Y-%m-%d %H:%M:%S %z`
    pub fn parse_fixed(date: &str) -> anyhow::Result<Self> {
        let timestamp = DateTime::parse_from_rfc2822(date)
            .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
            .with_context(|| format!("invalid commit date: {date}"))?;

        Ok(Clock::Fixed(timestamp))
    }
}
