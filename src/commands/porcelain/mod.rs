//! Porcelain commands (user-facing store operations)
//!
//! Each command runs one repository operation and prints its outcome.
//!
//! ## Commands
//!
//! - `add`: Stage an object
//! - `commit`: Record the staged changes
//! - `remove`: Stage the removal of an object
//! - `checkout`: Move the current branch back to an earlier commit
//! - `branch`: Create, switch, remove or list branches
//! - `log`: Show the current branch's history
//! - `show`: Show the newest commit or a committed object

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod log;
pub mod remove;
pub mod show;
