//! Core repository components
//!
//! This module contains the stateful building blocks of the store:
//!
//! - `staging`: Pending additions and removals not yet captured by a commit
//! - `branch_manager`: Branch collection, current branch and staging area
//! - `repository`: Facade over the branch manager

pub mod branch_manager;
pub mod repository;
pub(crate) mod staging;
