//! Task Store
//!
//! In-memory mirror of the server's task collection. Replaced wholesale
//! after every successful load; never patched in place.

use crate::models::{Category, Task};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Swap in a freshly fetched list, returning the old one.
    pub fn replace(&mut self, tasks: Vec<Task>) -> Vec<Task> {
        std::mem::replace(&mut self.tasks, tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in `category`, in store (server) order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.category == category)
    }

    pub fn count_of(&self, category: Category) -> usize {
        self.in_category(category).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::task;

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = TaskStore::new(vec![task(1, "a", Category::Todo), task(2, "b", Category::Done)]);
        let old = store.replace(vec![task(3, "c", Category::QuickList)]);

        assert_eq!(old.len(), 2);
        assert_eq!(store.tasks(), &[task(3, "c", Category::QuickList)]);
    }

    #[test]
    fn test_in_category_keeps_store_order() {
        let store = TaskStore::new(vec![
            task(9, "later", Category::Todo),
            task(2, "other", Category::Done),
            task(4, "earlier", Category::Todo),
        ]);
        let ids: Vec<_> = store.in_category(Category::Todo).map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 4]);
        assert_eq!(store.count_of(Category::Todo), 2);
        assert_eq!(store.count_of(Category::InProgress), 0);
    }
}
