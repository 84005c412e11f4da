pub mod branch_name;
pub mod history;

/// Branch every repository starts on
pub const DEFAULT_BRANCH: &str = "master";
