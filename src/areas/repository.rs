use crate::areas::branch_manager::BranchManager;
use crate::artifacts::objects::clock::Clock;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::Outcome;
use std::sync::Arc;

/// In-memory object store
///
/// Thin facade over the [`BranchManager`]; branch-level operations (create,
/// switch, remove, list) are reached through [`Repository::branch`].
#[derive(Debug, Clone)]
pub struct Repository<V> {
    branch_manager: BranchManager<V>,
}

impl<V: Clone> Repository<V> {
    pub fn new() -> Self {
        Repository {
            branch_manager: BranchManager::new(),
        }
    }

    /// Build a repository and run `configure` against it before returning it
    ///
    /// ```
    /// use objstore::areas::repository::Repository;
    ///
    /// let repository = Repository::<&str>::init(Some(|repository: &mut Repository<&str>| {
    ///     repository.add("readme", "hello");
    ///     repository.commit("initial");
    /// }));
    ///
    /// assert_eq!(repository.get("readme").into_payload(), Some("hello"));
    /// ```
    pub fn init<F>(configure: Option<F>) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut repository = Self::new();
        if let Some(configure) = configure {
            configure(&mut repository);
        }

        repository
    }

    pub fn set_clock(&mut self, clock: Clock) {
        self.branch_manager.set_clock(clock);
    }

    pub fn add(&mut self, name: &str, object: V) -> Outcome<V> {
        self.branch_manager.add(name, object)
    }

    pub fn commit(&mut self, message: &str) -> Outcome<Arc<Commit<V>>> {
        self.branch_manager.commit(message)
    }

    pub fn remove(&mut self, name: &str) -> Outcome<V> {
        self.branch_manager.remove_file(name)
    }

    /// Move the current branch back to the commit with `hash`
    pub fn checkout(&mut self, hash: &str) -> Outcome<Arc<Commit<V>>> {
        self.branch_manager.checkout_hash(hash)
    }

    pub fn branch(&mut self) -> &mut BranchManager<V> {
        &mut self.branch_manager
    }

    pub fn branch_manager(&self) -> &BranchManager<V> {
        &self.branch_manager
    }

    pub fn log(&self) -> Outcome<()> {
        self.branch_manager.log()
    }

    pub fn head(&self) -> Outcome<Arc<Commit<V>>> {
        self.branch_manager.head()
    }

    pub fn get(&self, name: &str) -> Outcome<V> {
        self.branch_manager.get(name)
    }
}

impl<V: Clone> Default for Repository<V> {
    fn default() -> Self {
        Self::new()
    }
}
