//! Object store data structures
//!
//! This module contains the value types the store is built from:
//!
//! - `branch`: Branch names and the ordered commit history of a branch
//! - `objects`: Commits, their snapshots and content identifiers
//! - `outcome`: The uniform outcome returned by every store operation

pub mod branch;
pub mod objects;
pub mod outcome;
