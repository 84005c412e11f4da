mod create_duplicate_branch;
mod list_branches;
